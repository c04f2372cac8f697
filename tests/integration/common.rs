//! Common test utilities.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// English bundle used as the fallback in most tests.
pub const EN_MESSAGES: &str = r#"{
  "appName": { "message": "Wallet", "description": "Extension name" },
  "greet": {
    "message": "Hi {name}",
    "placeholders": { "name": { "content": "$1", "example": "Ann" } }
  },
  "sendAmount": {
    "message": "Send {amount} {token}",
    "placeholders": {
      "amount": { "content": "$1" },
      "token": { "content": "$2" }
    }
  },
  "onlyEnglish": { "message": "Only in English" }
}"#;

/// German bundle; lacks `onlyEnglish` and renames a placeholder.
pub const DE_MESSAGES: &str = r#"{
  "appName": { "message": "Geldbörse" },
  "greet": {
    "message": "Hallo {name}",
    "placeholders": { "name": { "content": "$1" } }
  },
  "sendAmount": {
    "message": "{betrag} {token} senden",
    "placeholders": {
      "betrag": { "content": "$1" },
      "token": { "content": "$2" }
    }
  }
}"#;

/// Write `messages.json` for `locale` under `<root>/_locales`.
pub fn write_bundle(root: &Path, locale_dir: &str, json: &str) {
    let dir = root.join("_locales").join(locale_dir);
    std::fs::create_dir_all(&dir).expect("Failed to create locale dir");
    std::fs::write(dir.join("messages.json"), json).expect("Failed to write bundle");
}

/// Create an extension root with English and German bundles.
pub fn extension_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_bundle(temp_dir.path(), "en", EN_MESSAGES);
    write_bundle(temp_dir.path(), "de", DE_MESSAGES);
    temp_dir
}
