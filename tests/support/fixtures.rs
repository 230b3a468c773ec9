//! Test fixtures and constants.

/// A complete secrets file.
pub const FULL_SECRETS: &str = "\
# release signing
storeFile=upload-keystore.jks
storePassword=store-pass-123
keyAlias=upload
keyPassword=key-pass-456
";

/// A secrets file without `keyPassword`.
pub const MISSING_KEY_PASSWORD: &str = "\
storeFile=upload-keystore.jks
storePassword=store-pass-123
keyAlias=upload
";

/// A secrets file with a line that is not `key=value`.
pub const MALFORMED_SECRETS: &str = "\
storeFile=upload-keystore.jks
storePassword store-pass-123
";
