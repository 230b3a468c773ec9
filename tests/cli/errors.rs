//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "relsign");
}

#[test]
fn test_invalid_variant_fails() {
    let t = Test::new();

    let output = t.resolve("not a variant");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown build variant");
}

#[test]
fn test_malformed_secrets_fail_every_variant() {
    let t = Test::with_secrets(MALFORMED_SECRETS);

    for variant in ["debug", "release"] {
        let output = t.resolve(variant);
        assert_failure(&output);
        assert_stderr_contains(&output, "malformed");
    }
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.write(".relsign.toml", "this is not toml {");

    let output = t.resolve("debug");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_exit_code_is_one() {
    let t = Test::with_secrets(MISSING_KEY_PASSWORD);

    t.cmd()
        .args(["resolve", "release"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "relsign");
}

#[test]
fn test_completions_fish_uses_binary_name() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "complete -c relsign");
}

#[test]
fn test_completions_unknown_shell_fails() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "relsign");
}
