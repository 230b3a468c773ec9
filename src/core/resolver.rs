//! Signing-credential resolution.
//!
//! Decides, for one build variant, whether the packaging step signs with the
//! release identity from the secrets file or with the toolchain default.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::constants::{self, KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD};
use crate::core::domain::{BuildVariant, SigningIdentity, SigningSecrets};
use crate::error::{ConfigError, Result, SigningError};

/// Resolves signing identities for one project.
///
/// All locations are explicit: the project root, the secrets file and the
/// directory that relative keystore paths are resolved against.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    secrets_path: PathBuf,
    store_base: PathBuf,
    strict_release: bool,
}

impl Resolver {
    /// Resolver with default settings for `root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRoot` if `root` cannot be made absolute.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = absolute(root.as_ref())?;

        Ok(Self {
            secrets_path: root.join(constants::SECRETS_FILE),
            store_base: root.clone(),
            root,
            strict_release: false,
        })
    }

    /// Resolver for `root` with settings from its `.relsign.toml`.
    ///
    /// # Errors
    ///
    /// Returns error if the root is invalid or the config cannot be loaded.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let resolver = Self::new(root)?;
        let config = Config::load(&resolver.root)?;
        Ok(resolver.with_config(&config))
    }

    /// Apply settings from a loaded config.
    pub fn with_config(mut self, config: &Config) -> Self {
        if let Some(path) = &config.signing.secrets_file {
            self = self.with_secrets_file(path);
        }
        if let Some(dir) = &config.signing.store_base {
            self = self.with_store_base(dir);
        }
        self.strict(config.signing.strict_release)
    }

    /// Use a different secrets file, relative to the project root.
    pub fn with_secrets_file(mut self, path: impl AsRef<Path>) -> Self {
        self.secrets_path = normalize(&self.root.join(path));
        self
    }

    /// Resolve relative `storeFile` values against `dir` (relative to the
    /// project root) instead of the root itself.
    pub fn with_store_base(mut self, dir: impl AsRef<Path>) -> Self {
        self.store_base = normalize(&self.root.join(dir));
        self
    }

    /// Make a release build without secrets an error.
    pub fn strict(mut self, strict_release: bool) -> Self {
        self.strict_release = strict_release;
        self
    }

    /// Absolute project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the configured secrets file.
    pub fn secrets_path(&self) -> &Path {
        &self.secrets_path
    }

    /// Absolute directory relative keystore paths resolve against.
    pub fn store_base(&self) -> &Path {
        &self.store_base
    }

    /// Whether a release build without secrets is an error.
    pub fn is_strict(&self) -> bool {
        self.strict_release
    }

    /// Load the secrets file at `path`, relative to the project root.
    ///
    /// A missing file yields empty secrets.
    ///
    /// # Errors
    ///
    /// Returns `SecretsError` if the file exists but cannot be read or parsed.
    pub fn load_secrets(&self, path: impl AsRef<Path>) -> Result<SigningSecrets> {
        SigningSecrets::load(normalize(&self.root.join(path)))
    }

    /// Pick the signing identity for `variant`.
    ///
    /// `Ok(None)` means "use the default signing identity".
    ///
    /// # Errors
    ///
    /// Returns `SigningError::IncompleteSigningConfig` for a release build
    /// whose secrets lack a required key, and
    /// `SigningError::MissingReleaseSecrets` for a release build without
    /// secrets when the resolver is strict.
    pub fn resolve_identity(
        &self,
        secrets: &SigningSecrets,
        variant: &BuildVariant,
    ) -> Result<Option<SigningIdentity>> {
        if !variant.is_release() {
            debug!(%variant, "not a release build, using default signing");
            return Ok(None);
        }

        if secrets.is_empty() {
            let path = secrets.path().unwrap_or(self.secrets_path.as_path());
            if self.strict_release {
                return Err(SigningError::MissingReleaseSecrets {
                    path: path.to_path_buf(),
                }
                .into());
            }

            warn!(
                path = %path.display(),
                "release build has no signing secrets, falling back to default signing"
            );
            return Ok(None);
        }

        let (store_file, store_password, key_alias, key_password) = match (
            secrets.get_non_empty(STORE_FILE),
            secrets.get_non_empty(STORE_PASSWORD),
            secrets.get_non_empty(KEY_ALIAS),
            secrets.get_non_empty(KEY_PASSWORD),
        ) {
            (Some(f), Some(sp), Some(a), Some(kp)) => (f, sp, a, kp),
            _ => {
                return Err(SigningError::IncompleteSigningConfig {
                    missing: secrets.missing_keys(),
                }
                .into())
            }
        };

        let store_path = normalize(&self.store_base.join(store_file));
        debug!(
            store = %store_path.display(),
            alias = key_alias,
            "resolved release signing identity"
        );

        Ok(Some(SigningIdentity::new(
            store_path,
            store_password,
            key_alias,
            key_password,
        )))
    }

    /// Load the configured secrets file and pick the identity for `variant`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`load_secrets`](Self::load_secrets) or
    /// [`resolve_identity`](Self::resolve_identity).
    pub fn resolve(&self, variant: &BuildVariant) -> Result<Option<SigningIdentity>> {
        let secrets = SigningSecrets::load(&self.secrets_path)?;
        self.resolve_identity(&secrets, variant)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path).map_err(|source| ConfigError::InvalidRoot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize(&abs))
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }

    out
}
