//! Tests for `relsign check`.

use crate::support::*;

#[test]
fn test_check_without_secrets_succeeds() {
    let t = Test::new();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "not found");
}

#[test]
fn test_check_strict_without_secrets_fails() {
    let t = Test::new();
    t.write(".relsign.toml", "[signing]\nstrict_release = true\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "no signing secrets found");
    assert!(!stdout(&output).contains("default signing"));
}

#[test]
fn test_check_full_secrets_with_keystore() {
    let t = Test::with_secrets(FULL_SECRETS);
    t.write("upload-keystore.jks", "not really a keystore");
    t.write(".gitignore", "key.properties\n");

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "✓ storeFile");
    assert_stdout_contains(&output, "✓ keyPassword");
    assert_stdout_contains(&output, "release builds sign with upload");
    assert!(!stderr(&output).contains("not listed in .gitignore"));
}

#[test]
fn test_check_warns_on_missing_keystore() {
    let t = Test::with_secrets(FULL_SECRETS);

    let output = t.check();
    assert_success(&output);
    assert_stderr_contains(&output, "keystore not found");
}

#[test]
fn test_check_warns_when_not_gitignored() {
    let t = Test::with_secrets(FULL_SECRETS);

    let output = t.check();
    assert_success(&output);
    assert_stderr_contains(&output, "key.properties is not listed in .gitignore");
}

#[test]
fn test_check_incomplete_fails_and_marks_missing() {
    let t = Test::with_secrets(MISSING_KEY_PASSWORD);

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "✗ keyPassword");
    assert_stderr_contains(&output, "missing keyPassword");
}

#[test]
fn test_check_reports_unrecognized_keys() {
    let t = Test::with_secrets(&format!("{}flavor=prod\n", FULL_SECRETS));

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "flavor");
}

#[test]
fn test_check_malformed_fails_with_line() {
    let t = Test::with_secrets(MALFORMED_SECRETS);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "key.properties:2");
}
