//! Constants used throughout relsign.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name (.relsign.toml).
pub const CONFIG_FILE: &str = ".relsign.toml";

/// Default secrets file, relative to the project root.
pub const SECRETS_FILE: &str = "key.properties";

/// Gitignore file consulted by `check` and updated by `init`.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "RELSIGN_LOG";

/// Keystore path key.
pub const STORE_FILE: &str = "storeFile";

/// Keystore password key.
pub const STORE_PASSWORD: &str = "storePassword";

/// Key alias key.
pub const KEY_ALIAS: &str = "keyAlias";

/// Key password key.
pub const KEY_PASSWORD: &str = "keyPassword";

/// Recognized secrets keys, in the order errors and written files list them.
pub const SIGNING_KEYS: [&str; 4] = [STORE_FILE, STORE_PASSWORD, KEY_ALIAS, KEY_PASSWORD];
