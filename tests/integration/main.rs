//! Integration tests for the `wallet-locale` CLI and library.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use std::{path::Path, sync::Arc};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wallet_locale::i18n::{
    DirBundleSource, FixedPreference, LocaleResolver, StaticEnvironment, UnresolvedPlaceholder,
};

/// Helper to create a command for the wallet-locale binary.
///
/// Runs inside `home` with an empty XDG config dir and no `WALLET_LOCALE*`
/// variables, so only flags and files written by the test apply.
fn wallet_locale_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wallet-locale"));
    cmd.current_dir(home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("WALLET_LOCALE_UI", "en")
        .env_remove("WALLET_LOCALE")
        .env_remove("WALLET_LOCALE_DEFAULT")
        .env_remove("WALLET_LOCALE_SOURCE_DIR")
        .env_remove("WALLET_LOCALE_SOURCE_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Command with `--source-dir` pointing at a fresh extension fixture.
fn with_extension() -> (TempDir, Command) {
    let ext = common::extension_dir();
    let mut cmd = wallet_locale_cmd(ext.path());
    cmd.arg("--source-dir").arg(ext.path());
    (ext, cmd)
}

/// Test that the CLI shows help.
#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wallet-locale"))
        .stdout(predicate::str::contains("resolve"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path()).arg("unknown-command").assert().failure().code(2);
}

#[test]
fn test_resolve_target_message() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "de", "resolve", "greet", "Ann"])
        .assert()
        .success()
        .stdout("Hallo Ann\n");
}

#[test]
fn test_resolve_falls_back_to_default_locale() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "de", "resolve", "onlyEnglish"])
        .assert()
        .success()
        .stdout("Only in English\n");
}

#[test]
fn test_resolve_positional_arguments() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "de", "resolve", "sendAmount", "1.5", "ETH"])
        .assert()
        .success()
        .stdout("1.5 ETH senden\n");
}

#[test]
fn test_resolve_uses_host_locale_without_preference() {
    let (_ext, mut cmd) = with_extension();
    cmd.env("WALLET_LOCALE_UI", "de_DE.UTF-8")
        .args(["resolve", "appName"])
        .assert()
        .success()
        .stdout("Geldbörse\n");
}

#[test]
fn test_resolve_ignores_c_locale() {
    let (_ext, mut cmd) = with_extension();
    let output = cmd
        .env_remove("WALLET_LOCALE_UI")
        .env_remove("LC_ALL")
        .env("LANG", "C.UTF-8")
        .args(["-o", "json", "resolve", "appName"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["locale"], "en");
    assert_eq!(json["text"], "Wallet");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("unavailable"));
}

#[test]
fn test_resolve_region_served_by_language_bundle() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "de-AT", "resolve", "greet", "Ann"])
        .assert()
        .success()
        .stdout("Hallo Ann\n");
}

#[test]
fn test_resolve_missing_key() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["resolve", "noSuchKey"])
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("noSuchKey"));
}

#[test]
fn test_resolve_json_output() {
    let (_ext, mut cmd) = with_extension();
    let output = cmd
        .args(["--locale", "de", "-o", "json", "resolve", "greet", "Ann"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["key"], "greet");
    assert_eq!(json["locale"], "de");
    assert_eq!(json["found"], true);
    assert_eq!(json["text"], "Hallo Ann");
}

#[test]
fn test_resolve_unavailable_bundles_warns() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path())
        .arg("--source-dir")
        .arg(home.path())
        .args(["--locale", "fr", "resolve", "appName"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("fr"));
}

#[test]
fn test_resolve_without_source() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path()).args(["resolve", "appName"]).assert().failure().code(2);
}

#[test]
fn test_source_flags_conflict() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path())
        .args(["--source-dir", ".", "--source-url", "https://example.com/", "symbols"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_verify_reports_issues() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "de", "verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onlyEnglish"))
        .stdout(predicate::str::contains("sendAmount"))
        .stderr(predicate::str::contains("3/4"));
}

#[test]
fn test_verify_strict_fails() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "de", "verify", "--strict"]).assert().failure().code(6);
}

#[test]
fn test_verify_strict_clean() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "en", "verify", "--strict"]).assert().success();
}

#[test]
fn test_verify_json_output() {
    let (_ext, mut cmd) = with_extension();
    let output = cmd.args(["--locale", "de", "-o", "json", "verify"]).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["translated"], 3);
    assert_eq!(json["missing"], serde_json::json!(["onlyEnglish"]));
    assert_eq!(json["placeholder_mismatches"][0]["key"], "sendAmount");
}

#[test]
fn test_symbols_json() {
    let (_ext, mut cmd) = with_extension();
    let output = cmd.args(["--locale", "de", "-o", "json", "symbols"]).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["locale"], "de");
    assert_eq!(json["numbers"]["decimal"], ",");
    assert_eq!(json["numbers"]["group"], ".");
    assert_eq!(json["direction"], "ltr");
}

#[test]
fn test_symbols_table_for_unmapped_locale() {
    let (_ext, mut cmd) = with_extension();
    cmd.args(["--locale", "sw", "symbols"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal"))
        .stderr(predicate::str::contains("baseline"));
}

#[test]
fn test_user_config_file() {
    let ext = common::extension_dir();
    let config_dir = ext.path().join("config").join("wallet-locale");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        format!("locale: de\nsource:\n  dir: {}\n", ext.path().display()),
    )
    .unwrap();

    wallet_locale_cmd(ext.path())
        .args(["resolve", "greet", "Ann"])
        .assert()
        .success()
        .stdout("Hallo Ann\n");
}

#[test]
fn test_project_config_overrides_user_config() {
    let ext = common::extension_dir();
    let config_dir = ext.path().join("config").join("wallet-locale");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), "locale: de\n").unwrap();
    std::fs::write(ext.path().join(".wallet-locale.yaml"), "locale: en\nsource:\n  dir: .\n")
        .unwrap();

    wallet_locale_cmd(ext.path())
        .args(["resolve", "greet", "Ann"])
        .assert()
        .success()
        .stdout("Hi Ann\n");
}

#[test]
fn test_project_config_restores_default_policy() {
    let ext = common::extension_dir();
    let config_dir = ext.path().join("config").join("wallet-locale");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        "default_locale: de\nunresolved_placeholder: empty\n",
    )
    .unwrap();
    std::fs::write(
        ext.path().join(".wallet-locale.yaml"),
        "default_locale: en\nunresolved_placeholder: keep\nsource:\n  dir: .\n",
    )
    .unwrap();

    wallet_locale_cmd(ext.path())
        .args(["resolve", "greet"])
        .assert()
        .success()
        .stdout("Hi {name}\n");
}

#[test]
fn test_env_overrides_config() {
    let (_ext, mut cmd) = with_extension();
    cmd.env("WALLET_LOCALE", "de")
        .args(["resolve", "appName"])
        .assert()
        .success()
        .stdout("Geldbörse\n");
}

#[test]
fn test_config_json() {
    let (_ext, mut cmd) = with_extension();
    let output = cmd.args(["--locale", "de", "-o", "json", "config"]).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["locale"], "de");
    assert_eq!(json["default_locale"], "en");
    assert_eq!(json["unresolved_placeholder"], "keep");
}

#[test]
fn test_completion_bash() {
    let home = TempDir::new().unwrap();
    wallet_locale_cmd(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wallet-locale"));
}

// ============================================================================
// Library
// ============================================================================

fn dir_resolver(root: &Path, saved: Option<&str>, policy: UnresolvedPlaceholder) -> LocaleResolver {
    LocaleResolver::builder()
        .source(Arc::new(DirBundleSource::new(root)))
        .preferences(Arc::new(FixedPreference::from_option(saved.map(String::from))))
        .environment(Arc::new(StaticEnvironment::new("en", "en")))
        .policy(policy)
        .build()
}

#[tokio::test]
async fn test_dir_resolver_roundtrip() {
    let ext = common::extension_dir();
    let resolver = dir_resolver(ext.path(), Some("de"), UnresolvedPlaceholder::Keep);

    let summary = resolver.load().await;
    assert_eq!(summary.target_locale, "de");
    assert_eq!(summary.fallback_locale, "en");
    assert_eq!(summary.target_messages, Some(3));
    assert_eq!(summary.fallback_messages, Some(4));

    assert_eq!(resolver.resolve("appName"), "Geldbörse");
    assert_eq!(resolver.resolve("onlyEnglish"), "Only in English");
    assert_eq!(resolver.resolve_with("greet", "Ann"), "Hallo Ann");
    assert_eq!(resolver.resolve("missing"), "");
    assert_eq!(resolver.number_symbols().decimal, ",");
}

#[tokio::test]
async fn test_dir_resolver_placeholder_policy() {
    let ext = common::extension_dir();

    let keep = dir_resolver(ext.path(), None, UnresolvedPlaceholder::Keep);
    keep.load().await;
    assert_eq!(keep.resolve("greet"), "Hi {name}");

    let empty = dir_resolver(ext.path(), None, UnresolvedPlaceholder::Empty);
    empty.load().await;
    assert_eq!(empty.resolve("greet"), "Hi ");
}

#[tokio::test]
async fn test_dir_resolver_corrupt_target() {
    let ext = common::extension_dir();
    common::write_bundle(ext.path(), "fr", "{ not json");
    let resolver = dir_resolver(ext.path(), Some("fr"), UnresolvedPlaceholder::Keep);

    let summary = resolver.load().await;
    assert_eq!(summary.target_messages, None);
    assert_eq!(resolver.resolve("appName"), "Wallet");
    assert_eq!(resolver.formatting_metadata().locale, "fr");
}
