//! Locale code normalization and detection.

use unic_langid::LanguageIdentifier;

/// Locale used when nothing else is configured or detected.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variable with an explicit UI locale override.
pub const UI_LOCALE_ENV: &str = "WALLET_LOCALE_UI";

/// Detect the host UI locale from environment variables.
///
/// Checks in order:
/// 1. `WALLET_LOCALE_UI` - explicit override
/// 2. `LC_ALL` - POSIX locale override
/// 3. `LANG` - default POSIX locale
///
/// Returns `None` when no usable locale is set.
pub fn detect_locale() -> Option<String> {
    [UI_LOCALE_ENV, "LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| host_locale(&value))
}

/// Normalize an environment locale value, rejecting the `C`/`POSIX`
/// locales (with or without an encoding, e.g. `C.UTF-8`) and anything
/// that is not a language identifier.
pub fn host_locale(value: &str) -> Option<String> {
    let locale = normalize_locale(value);
    if locale.eq_ignore_ascii_case("C")
        || locale.eq_ignore_ascii_case("POSIX")
        || !is_valid_locale(&locale)
    {
        return None;
    }
    Some(locale)
}

/// Normalize a locale string to BCP 47 format.
///
/// Examples:
/// - "en_US.UTF-8" -> "en-US"
/// - "zh_cn" -> "zh-CN"
/// - "en" -> "en"
pub fn normalize_locale(locale: &str) -> String {
    // Drop encoding (".UTF-8") and modifier ("@euro") suffixes
    let locale = locale.split(['.', '@']).next().unwrap_or(locale).trim();

    match locale.parse::<LanguageIdentifier>() {
        Ok(id) => id.to_string(),
        Err(_) => locale.replace('_', "-"),
    }
}

/// Directory name of a locale inside an extension `_locales` tree.
///
/// The extension layout separates language and region with an underscore:
/// "pt-BR" -> "pt_BR".
pub fn bundle_dir_name(locale: &str) -> String {
    normalize_locale(locale).replace('-', "_")
}

/// Language subtag of a locale ("pt-BR" -> "pt").
pub fn language_of(locale: &str) -> String {
    let normalized = normalize_locale(locale);
    match normalized.parse::<LanguageIdentifier>() {
        Ok(id) => id.language.as_str().to_string(),
        Err(_) => normalized.split('-').next().unwrap_or_default().to_lowercase(),
    }
}

/// Returns `true` if the string parses as a language identifier.
pub fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty() && normalize_locale(locale).parse::<LanguageIdentifier>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en_US.UTF-8"), "en-US");
        assert_eq!(normalize_locale("en_US"), "en-US");
        assert_eq!(normalize_locale("en-US"), "en-US");
        assert_eq!(normalize_locale("en"), "en");
        assert_eq!(normalize_locale("de_DE.UTF-8"), "de-DE");
        assert_eq!(normalize_locale("zh_cn"), "zh-CN");
        assert_eq!(normalize_locale("fr_FR@euro"), "fr-FR");
    }

    #[test]
    fn test_host_locale() {
        assert_eq!(host_locale("de_DE.UTF-8").as_deref(), Some("de-DE"));
        assert_eq!(host_locale("ja"), Some("ja".to_string()));
        assert_eq!(host_locale("C.UTF-8"), None);
        assert_eq!(host_locale("C"), None);
        assert_eq!(host_locale("POSIX"), None);
        assert_eq!(host_locale(""), None);
        assert_eq!(host_locale("not a locale"), None);
    }

    #[test]
    fn test_bundle_dir_name() {
        assert_eq!(bundle_dir_name("pt-BR"), "pt_BR");
        assert_eq!(bundle_dir_name("zh_CN"), "zh_CN");
        assert_eq!(bundle_dir_name("en"), "en");
    }

    #[test]
    fn test_language_of() {
        assert_eq!(language_of("pt-BR"), "pt");
        assert_eq!(language_of("en_US.UTF-8"), "en");
        assert_eq!(language_of("ja"), "ja");
    }

    #[test]
    fn test_is_valid_locale() {
        assert!(is_valid_locale("en-US"));
        assert!(is_valid_locale("zh_TW"));
        assert!(!is_valid_locale(""));
        assert!(!is_valid_locale("not a locale"));
    }
}
