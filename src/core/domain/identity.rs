//! SigningIdentity type.
//!
//! A validated keystore reference plus the passwords that unlock it.

use std::fmt;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

/// Everything the packaging step needs to sign a release artifact.
///
/// Built once per build from [`SigningSecrets`](super::SigningSecrets) and
/// never modified afterwards. Passwords are wiped from memory on drop and
/// never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    store_path: PathBuf,
    store_password: Zeroizing<String>,
    key_alias: String,
    key_password: Zeroizing<String>,
}

impl SigningIdentity {
    /// Create an identity. `store_path` should already be absolute.
    pub fn new(
        store_path: PathBuf,
        store_password: impl Into<String>,
        key_alias: impl Into<String>,
        key_password: impl Into<String>,
    ) -> Self {
        Self {
            store_path,
            store_password: Zeroizing::new(store_password.into()),
            key_alias: key_alias.into(),
            key_password: Zeroizing::new(key_password.into()),
        }
    }

    /// Absolute path of the keystore file.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    pub fn key_password(&self) -> &str {
        &self.key_password
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("store_path", &self.store_path)
            .field("store_password", &"<redacted>")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .finish()
    }
}
