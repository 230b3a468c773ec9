//! SigningSecrets type.
//!
//! The raw contents of a `key.properties` file, before validation.

use std::collections::BTreeMap;
use std::fmt;
#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::SIGNING_KEYS;
use crate::core::properties;
use crate::error::{Result, SecretsError, ValidationError};

/// Key/value pairs loaded from a secrets file.
///
/// An empty value means "no secrets", which is the normal state on a
/// developer machine without a release key.
#[derive(Clone, Default)]
pub struct SigningSecrets {
    entries: BTreeMap<String, Zeroizing<String>>,
    path: Option<PathBuf>,
}

impl SigningSecrets {
    /// No secrets at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from in-memory pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Zeroizing::new(v.into())))
            .collect();

        Self {
            entries,
            path: None,
        }
    }

    /// Load a secrets file.
    ///
    /// A missing file yields empty secrets. Anything else that stops the
    /// file from being read or parsed is an error.
    ///
    /// # Errors
    ///
    /// Returns `SecretsError::Unreadable` on I/O or UTF-8 failure and
    /// `SecretsError::Malformed` on the first bad line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading signing secrets");

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => Zeroizing::new(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no secrets file, using default signing");
                return Ok(Self::empty());
            }
            Err(source) => {
                return Err(SecretsError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        };

        let pairs = properties::parse(&contents).map_err(|e| SecretsError::Malformed {
            path: path.to_path_buf(),
            line: e.line,
            reason: e.reason,
        })?;

        let mut secrets = Self::from_pairs(pairs);
        secrets.path = Some(path.to_path_buf());

        debug!(entries = secrets.len(), "signing secrets loaded");
        Ok(secrets)
    }

    /// Write the secrets to `path` with owner-only permissions.
    ///
    /// Recognized keys come first in canonical order, then any others.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a key or value cannot be represented in
    /// the properties format, or an I/O error if the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.validate_writable()?;

        let generated = format!(
            "generated by relsign {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        let header = [
            "Release signing secrets. Keep this file out of version control.",
            generated.as_str(),
        ];
        let content = Zeroizing::new(properties::render(&header, self.ordered()));

        debug!(path = %path.display(), entries = self.len(), "writing signing secrets");

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, content.as_bytes())?;
        }

        Ok(())
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Get a value by key, treating an empty string as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), Zeroizing::new(value.into()));
    }

    /// Recognized keys that are absent or empty, in canonical order.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        SIGNING_KEYS
            .into_iter()
            .filter(|k| self.get_non_empty(k).is_none())
            .collect()
    }

    /// Key names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the secrets were loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn ordered(&self) -> impl Iterator<Item = (&str, &str)> {
        let known = SIGNING_KEYS
            .into_iter()
            .filter_map(|k| self.entries.get_key_value(k));
        let extra = self
            .entries
            .iter()
            .filter(|(k, _)| !SIGNING_KEYS.iter().any(|known| *known == k.as_str()));

        known
            .chain(extra)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn validate_writable(&self) -> Result<()> {
        for (key, value) in &self.entries {
            let bad_key = if key.trim().is_empty() {
                Some("cannot be empty")
            } else if key.trim() != key {
                Some("cannot have surrounding whitespace")
            } else if key.contains('=') {
                Some("cannot contain '='")
            } else if key.contains(['\n', '\r']) {
                Some("cannot span multiple lines")
            } else if key.trim_start().starts_with(['#', '!']) {
                Some("cannot start with a comment marker")
            } else {
                None
            };

            if let Some(reason) = bad_key {
                return Err(ValidationError::InvalidKey {
                    key: key.clone(),
                    reason: reason.to_string(),
                }
                .into());
            }

            if value.contains(['\n', '\r']) {
                return Err(ValidationError::MultilineValue(key.clone()).into());
            }

            // The reader drops whitespace after '='.
            if value.starts_with(char::is_whitespace) {
                return Err(ValidationError::LeadingWhitespace(key.clone()).into());
            }
        }

        Ok(())
    }
}

impl PartialEq for SigningSecrets {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for SigningSecrets {}

impl fmt::Debug for SigningSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecrets")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .field("path", &self.path)
            .finish()
    }
}
