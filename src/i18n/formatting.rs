//! Locale formatting metadata: date patterns, number symbols, text direction.
//!
//! The table is plain data handed to the resolver at construction. A built-in
//! table carries CLDR-derived values for the locales the wallet ships; a JSON
//! file with the same shape can replace it.

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use super::locales::{DEFAULT_LOCALE, language_of, normalize_locale};
use crate::error::{Error, Result};

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Date and time formatting data (CLDR patterns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateLocale {
    /// Short date pattern, e.g. `M/d/yy`.
    pub short_date: String,
    /// Medium date pattern, e.g. `MMM d, y`.
    pub medium_date: String,
    /// Long date pattern, e.g. `MMMM d, y`.
    pub long_date: String,
    /// Short time pattern, e.g. `h:mm a`.
    pub short_time: String,
    /// First day of the week, 0 = Sunday.
    pub week_starts_on: u8,
    /// Whether the locale defaults to a 12-hour clock.
    pub hour12: bool,
}

/// Numbering-system symbols (CLDR `symbols-numberSystem-*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSymbols {
    /// Decimal separator.
    pub decimal: String,
    /// Grouping separator.
    pub group: String,
    /// Percent sign.
    pub percent_sign: String,
    /// Plus sign.
    pub plus_sign: String,
    /// Minus sign.
    pub minus_sign: String,
    /// Exponent marker.
    pub exponential: String,
    /// Per-mille sign.
    pub per_mille: String,
    /// Infinity.
    pub infinity: String,
    /// Not-a-number.
    pub nan: String,
    /// Time separator.
    pub time_separator: String,
}

impl NumberSymbols {
    /// Latin-digit symbols with the given decimal and grouping separators.
    pub fn latn(decimal: &str, group: &str) -> Self {
        Self {
            decimal: decimal.to_string(),
            group: group.to_string(),
            percent_sign: "%".to_string(),
            plus_sign: "+".to_string(),
            minus_sign: "-".to_string(),
            exponential: "E".to_string(),
            per_mille: "‰".to_string(),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
            time_separator: ":".to_string(),
        }
    }
}

/// Everything locale-dependent the UI needs to format dates and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingMetadata {
    /// Locale code this entry describes. Filled from the table key when omitted.
    #[serde(default)]
    pub locale: String,
    /// Date formatting data.
    pub date: DateLocale,
    /// Number symbols.
    pub numbers: NumberSymbols,
    /// Writing direction.
    #[serde(default)]
    pub direction: Direction,
}

/// Locale code -> formatting metadata, with a baseline for unmapped locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    baseline: String,
    locales: HashMap<String, FormattingMetadata>,
}

#[derive(Deserialize)]
struct TableFile {
    #[serde(default = "default_baseline")]
    baseline: String,
    locales: HashMap<String, FormattingMetadata>,
}

fn default_baseline() -> String {
    DEFAULT_LOCALE.to_string()
}

impl LocaleTable {
    /// Build a table. The baseline locale must have an entry.
    pub fn new(
        baseline: &str,
        entries: impl IntoIterator<Item = (String, FormattingMetadata)>,
    ) -> Result<Self> {
        let locales: HashMap<String, FormattingMetadata> = entries
            .into_iter()
            .map(|(code, mut metadata)| {
                let code = normalize_locale(&code);
                if metadata.locale.is_empty() {
                    metadata.locale.clone_from(&code);
                }
                (code, metadata)
            })
            .collect();

        let baseline = normalize_locale(baseline);
        if !locales.contains_key(&baseline) {
            return Err(Error::config(format!(
                "Formatting table has no entry for baseline locale '{baseline}'"
            )));
        }

        Ok(Self { baseline, locales })
    }

    /// Parse a table from JSON: `{ "baseline": "en", "locales": { ... } }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::new(&file.baseline, file.locales)
    }

    /// Load a table from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read formatting table {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Baseline locale code.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Known locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Find the entry for `locale`: exact match, then language only.
    pub fn lookup(&self, locale: &str) -> Option<&FormattingMetadata> {
        let normalized = normalize_locale(locale);
        self.locales
            .get(&normalized)
            .or_else(|| self.locales.get(&language_of(&normalized)))
    }

    /// Entry for `locale`, or the baseline entry when unmapped.
    pub fn resolve(&self, locale: &str) -> &FormattingMetadata {
        match self.lookup(locale) {
            Some(metadata) => metadata,
            None => self.baseline_metadata(),
        }
    }

    /// The baseline entry.
    pub fn baseline_metadata(&self) -> &FormattingMetadata {
        // `new` guarantees the baseline key exists
        &self.locales[&self.baseline]
    }

    /// CLDR-derived table for the locales the wallet ships, baseline `en`.
    #[rustfmt::skip]
    pub fn builtin() -> Self {
        let entries = [
            ltr("en", NumberSymbols::latn(".", ","), date("M/d/yy", "MMM d, y", "MMMM d, y", "h:mm a", 0, true)),
            ltr("de", NumberSymbols::latn(",", "."), date("dd.MM.yy", "dd.MM.y", "d. MMMM y", "HH:mm", 1, false)),
            ltr("es", NumberSymbols::latn(",", "."), date("d/M/yy", "d MMM y", "d 'de' MMMM 'de' y", "H:mm", 1, false)),
            ltr("fr", NumberSymbols::latn(",", "\u{202f}"), date("dd/MM/y", "d MMM y", "d MMMM y", "HH:mm", 1, false)),
            ltr("it", NumberSymbols::latn(",", "."), date("dd/MM/yy", "d MMM y", "d MMMM y", "HH:mm", 1, false)),
            ltr("ja", NumberSymbols::latn(".", ","), date("y/MM/dd", "y/MM/dd", "y年M月d日", "H:mm", 0, false)),
            ltr("ko", NumberSymbols::latn(".", ","), date("yy. M. d.", "y. M. d.", "y년 M월 d일", "a h:mm", 0, true)),
            ltr("pt-BR", NumberSymbols::latn(",", "."), date("dd/MM/y", "d 'de' MMM 'de' y", "d 'de' MMMM 'de' y", "HH:mm", 0, false)),
            ltr("ru", NumberSymbols::latn(",", "\u{a0}"), date("dd.MM.y", "d MMM y 'г'.", "d MMMM y 'г'.", "HH:mm", 1, false)),
            ltr("tr", NumberSymbols::latn(",", "."), date("d.MM.y", "d MMM y", "d MMMM y", "HH:mm", 1, false)),
            ltr("vi", NumberSymbols::latn(",", "."), date("dd/MM/y", "d MMM, y", "d MMMM, y", "HH:mm", 1, false)),
            ltr("zh-CN", NumberSymbols::latn(".", ","), date("y/M/d", "y年M月d日", "y年M月d日", "HH:mm", 1, false)),
            ltr("zh-TW", NumberSymbols::latn(".", ","), date("y/M/d", "y年M月d日", "y年M月d日", "ah:mm", 0, true)),
            ltr("hi", NumberSymbols::latn(".", ","), date("d/M/yy", "d MMM y", "d MMMM y", "h:mm a", 0, true)),
            ltr("id", indonesian_symbols(), date("dd/MM/yy", "d MMM y", "d MMMM y", "HH.mm", 0, false)),
            ltr("tl", NumberSymbols::latn(".", ","), date("M/d/yy", "MMM d, y", "MMMM d, y", "h:mm a", 0, true)),
            (
                "ar".to_string(),
                FormattingMetadata {
                    locale: "ar".to_string(),
                    date: date("d\u{200f}/M\u{200f}/y", "dd\u{200f}/MM\u{200f}/y", "d MMMM y", "h:mm a", 6, true),
                    numbers: arabic_symbols(),
                    direction: Direction::Rtl,
                },
            ),
        ];

        Self {
            baseline: DEFAULT_LOCALE.to_string(),
            locales: entries.into_iter().collect(),
        }
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ltr(code: &str, numbers: NumberSymbols, date: DateLocale) -> (String, FormattingMetadata) {
    (
        code.to_string(),
        FormattingMetadata { locale: code.to_string(), date, numbers, direction: Direction::Ltr },
    )
}

fn date(
    short_date: &str,
    medium_date: &str,
    long_date: &str,
    short_time: &str,
    week_starts_on: u8,
    hour12: bool,
) -> DateLocale {
    DateLocale {
        short_date: short_date.to_string(),
        medium_date: medium_date.to_string(),
        long_date: long_date.to_string(),
        short_time: short_time.to_string(),
        week_starts_on,
        hour12,
    }
}

fn indonesian_symbols() -> NumberSymbols {
    NumberSymbols { time_separator: ".".to_string(), ..NumberSymbols::latn(",", ".") }
}

fn arabic_symbols() -> NumberSymbols {
    NumberSymbols {
        decimal: "٫".to_string(),
        group: "٬".to_string(),
        percent_sign: "٪\u{61c}".to_string(),
        plus_sign: "\u{61c}+".to_string(),
        minus_sign: "\u{61c}-".to_string(),
        exponential: "أس".to_string(),
        per_mille: "؉".to_string(),
        infinity: "∞".to_string(),
        nan: "ليس رقمًا".to_string(),
        time_separator: ":".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_exact_and_language_lookup() {
        let table = LocaleTable::builtin();
        assert_eq!(table.resolve("de").numbers.decimal, ",");
        assert_eq!(table.resolve("de_AT.UTF-8").locale, "de");
        assert_eq!(table.resolve("pt_BR").locale, "pt-BR");
        assert_eq!(table.resolve("zh-TW").date.short_time, "ah:mm");
    }

    #[test]
    fn test_unmapped_locale_uses_baseline() {
        let table = LocaleTable::builtin();
        assert!(table.lookup("sw").is_none());
        assert_eq!(table.resolve("sw").locale, "en");
        assert_eq!(table.resolve("sw").numbers, NumberSymbols::latn(".", ","));
    }

    #[test]
    fn test_rtl_direction() {
        let table = LocaleTable::builtin();
        assert_eq!(table.resolve("ar").direction, Direction::Rtl);
        assert_eq!(table.resolve("en").direction, Direction::Ltr);
    }

    #[test]
    fn test_table_from_json() {
        let json = r#"{
            "baseline": "xx",
            "locales": {
                "xx": {
                    "date": {
                        "shortDate": "d/M", "mediumDate": "d MMM", "longDate": "d MMMM",
                        "shortTime": "HH:mm", "weekStartsOn": 1, "hour12": false
                    },
                    "numbers": {
                        "decimal": "!", "group": "~", "percentSign": "%", "plusSign": "+",
                        "minusSign": "-", "exponential": "E", "perMille": "‰",
                        "infinity": "∞", "nan": "NaN", "timeSeparator": ":"
                    }
                }
            }
        }"#;

        let table = LocaleTable::from_json(json).unwrap();
        assert_eq!(table.baseline(), "xx");
        assert_eq!(table.resolve("en").numbers.decimal, "!");
        assert_eq!(table.resolve("en").locale, "xx");
    }

    #[test]
    fn test_missing_baseline_rejected() {
        let err = LocaleTable::new("en", Vec::new()).unwrap_err();
        assert!(err.to_string().contains("baseline"));
    }
}
