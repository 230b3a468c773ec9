//! Tests for `relsign init`.

use crate::support::*;

#[test]
fn test_init_writes_resolvable_secrets() {
    let t = Test::new();

    let output = t.init("keys/upload.jks", "upload", "sp", "kp");
    assert_success(&output);
    assert_stdout_contains(&output, "wrote");

    let json = t.resolve_json("release");
    assert_eq!(json["identity"]["keyAlias"], "upload");
    assert_eq!(json["identity"]["storePassword"], "sp");
    assert_eq!(json["identity"]["keyPassword"], "kp");
}

#[test]
fn test_init_adds_gitignore_entry() {
    let t = Test::new();
    t.write(".gitignore", "build/");

    assert_success(&t.init("upload.jks", "upload", "sp", "kp"));

    assert_eq!(t.read(".gitignore"), "build/\nkey.properties\n");
}

#[test]
fn test_init_writes_comment_header() {
    let t = Test::new();

    assert_success(&t.init("upload.jks", "upload", "sp", "kp"));

    let contents = t.read("key.properties");
    assert!(contents.starts_with("# "));
    assert!(contents.contains("storeFile=upload.jks\n"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let t = Test::with_secrets(FULL_SECRETS);

    let output = t.init("other.jks", "other", "sp", "kp");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(t.read("key.properties"), FULL_SECRETS);
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::with_secrets(FULL_SECRETS);

    let output = t
        .cmd()
        .args([
            "init",
            "--force",
            "--store-file",
            "other.jks",
            "--key-alias",
            "other",
            "--store-password",
            "sp",
            "--key-password",
            "kp",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let json = t.resolve_json("release");
    assert_eq!(json["identity"]["keyAlias"], "other");
}

#[test]
fn test_init_non_interactive_requires_values() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "--store-file", "upload.jks"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "non-interactive");
    assert!(!t.path("key.properties").exists());
}

#[test]
fn test_init_passwords_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("RELSIGN_STORE_PASSWORD", "env-sp")
        .env("RELSIGN_KEY_PASSWORD", "env-kp")
        .args(["init", "--store-file", "upload.jks", "--key-alias", "upload"])
        .output()
        .unwrap();
    assert_success(&output);

    let json = t.resolve_json("release");
    assert_eq!(json["identity"]["storePassword"], "env-sp");
}

#[test]
fn test_init_rejects_multiline_password() {
    let t = Test::new();

    let output = t.init("upload.jks", "upload", "line1\nline2", "kp");
    assert_failure(&output);
    assert!(!t.path("key.properties").exists());
}

#[test]
fn test_init_rejects_password_with_leading_whitespace() {
    let t = Test::new();

    let output = t.init("upload.jks", "upload", " sp", "kp");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot start with whitespace");
    assert!(!t.path("key.properties").exists());
}

#[test]
fn test_init_keeps_trailing_whitespace_in_password() {
    let t = Test::new();

    assert_success(&t.init("upload.jks", "upload", "sp ", "kp"));

    let json = t.resolve_json("release");
    assert_eq!(json["identity"]["storePassword"], "sp ");
}

#[test]
fn test_init_custom_secrets_path() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--secrets",
            "android/key.properties",
            "init",
            "--store-file",
            "upload.jks",
            "--key-alias",
            "upload",
            "--store-password",
            "sp",
            "--key-password",
            "kp",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.path("android/key.properties").exists());
    assert!(t.read(".gitignore").contains("android/key.properties"));
}
