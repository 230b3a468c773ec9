//! Configuration file management.
//!
//! Handles reading and validating the optional `.relsign.toml` file at the
//! project root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.relsign.toml`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Signing settings
    #[serde(default)]
    pub signing: SigningSettings,
}

/// The `[signing]` section.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SigningSettings {
    /// Secrets file, relative to the project root. Defaults to `key.properties`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets_file: Option<PathBuf>,
    /// Directory that relative `storeFile` values are resolved against.
    /// Defaults to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_base: Option<PathBuf>,
    /// Fail release builds that have no secrets instead of falling back to
    /// default signing.
    #[serde(default)]
    pub strict_release: bool,
}

impl Config {
    /// Path to the configuration file under `root`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load `.relsign.toml` from `root`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        debug!(path = %path.display(), "loading config");

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            strict_release = config.signing.strict_release,
            "config loaded"
        );

        Ok(config)
    }

    /// Validate the configuration contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for empty paths.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.signing.secrets_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "signing.secrets_file",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }

        if let Some(path) = &self.signing.store_base {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "signing.store_base",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Ensure `.gitignore` under `root` lists `entry`.
///
/// Returns `true` if the file was changed.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(root: &Path, entry: &str) -> Result<bool> {
    let gitignore = root.join(constants::GITIGNORE_FILE);

    let existing = match std::fs::read_to_string(&gitignore) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    if is_ignored(&existing, entry) {
        return Ok(false);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(entry);
    updated.push('\n');

    std::fs::write(&gitignore, updated)?;
    debug!(entry, "added to .gitignore");

    Ok(true)
}

/// Whether `.gitignore` under `root` has a line for `entry`.
pub fn is_gitignored(root: &Path, entry: &str) -> bool {
    std::fs::read_to_string(root.join(constants::GITIGNORE_FILE))
        .map(|contents| is_ignored(&contents, entry))
        .unwrap_or(false)
}

fn is_ignored(gitignore: &str, entry: &str) -> bool {
    let bare = entry.trim_start_matches('/');
    gitignore
        .lines()
        .map(str::trim)
        .any(|l| l == entry || l.trim_start_matches('/') == bare)
}
