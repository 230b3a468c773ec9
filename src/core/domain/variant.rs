//! BuildVariant type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationError};

/// A named build configuration profile.
///
/// Only [`BuildVariant::Release`] is ever paired with a release signing
/// identity; everything else signs with the toolchain's default key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildVariant {
    Debug,
    Profile,
    Release,
    /// A product flavor or custom build type, e.g. `staging`.
    Custom(String),
}

impl BuildVariant {
    /// Whether this variant needs the release signing identity.
    pub fn is_release(&self) -> bool {
        matches!(self, BuildVariant::Release)
    }

    /// Lower-case name as used on the command line.
    pub fn as_str(&self) -> &str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Profile => "profile",
            BuildVariant::Release => "release",
            BuildVariant::Custom(name) => name,
        }
    }
}

impl FromStr for BuildVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if name.is_empty() {
            return Err(ValidationError::InvalidVariant(s.to_string()).into());
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidVariant(s.to_string()).into());
        }

        Ok(match name.to_ascii_lowercase().as_str() {
            "debug" => BuildVariant::Debug,
            "profile" => BuildVariant::Profile,
            "release" => BuildVariant::Release,
            _ => BuildVariant::Custom(name.to_string()),
        })
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
