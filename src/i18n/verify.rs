//! Coverage check of a target bundle against the fallback bundle.

use serde::Serialize;

use super::{bundle::LocaleMessages, template};

/// A message whose placeholder names differ between bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    /// Message key.
    pub key: String,
    /// Placeholder names declared in the fallback bundle.
    pub expected: Vec<String>,
    /// Placeholder names declared in the target bundle.
    pub found: Vec<String>,
}

/// Result of comparing two bundles. All key lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Messages in the fallback bundle.
    pub total: usize,
    /// Fallback messages that the target also has.
    pub translated: usize,
    /// Keys in the fallback bundle but not the target.
    pub missing: Vec<String>,
    /// Keys only in the target bundle.
    pub extra: Vec<String>,
    /// Keys whose placeholder names disagree.
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
    /// Target keys whose template does not parse.
    pub malformed: Vec<String>,
}

impl CoverageReport {
    /// Share of fallback messages present in the target, in percent.
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.translated as f64 * 100.0 / self.total as f64
    }

    /// No missing, mismatched, or malformed messages.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
            && self.placeholder_mismatches.is_empty()
            && self.malformed.is_empty()
    }
}

/// Compare `target` against `fallback`.
pub fn compare(target: &LocaleMessages, fallback: &LocaleMessages) -> CoverageReport {
    let mut report = CoverageReport { total: fallback.len(), ..CoverageReport::default() };

    for (key, expected) in fallback.iter() {
        let Some(found) = target.get(key) else {
            report.missing.push(key.to_string());
            continue;
        };
        report.translated += 1;

        let expected_names: Vec<String> = expected.placeholders.keys().cloned().collect();
        let found_names: Vec<String> = found.placeholders.keys().cloned().collect();
        if expected_names != found_names {
            report.placeholder_mismatches.push(PlaceholderMismatch {
                key: key.to_string(),
                expected: expected_names,
                found: found_names,
            });
        }
    }

    for (key, message) in target.iter() {
        if !fallback.contains(key) {
            report.extra.push(key.to_string());
        }
        if message.has_placeholders() && template::parse(&message.message).is_err() {
            report.malformed.push(key.to_string());
        }
    }

    report.missing.sort_unstable();
    report.extra.sort_unstable();
    report.malformed.sort_unstable();
    report.placeholder_mismatches.sort_unstable_by(|a, b| a.key.cmp(&b.key));
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::bundle::RawBundle;

    fn bundle(json: &str) -> LocaleMessages {
        serde_json::from_str::<RawBundle>(json).unwrap().into()
    }

    #[test]
    fn test_compare_reports_differences() {
        let fallback = bundle(
            r#"{
                "a": { "message": "A" },
                "b": { "message": "B" },
                "greet": { "message": "Hi {name}", "placeholders": { "name": { "content": "$1" } } }
            }"#,
        );
        let target = bundle(
            r#"{
                "a": { "message": "Ä" },
                "z": { "message": "Z" },
                "greet": { "message": "Hallo {nom", "placeholders": { "nom": { "content": "$1" } } }
            }"#,
        );

        let report = compare(&target, &fallback);
        assert_eq!(report.total, 3);
        assert_eq!(report.translated, 2);
        assert_eq!(report.missing, vec!["b"]);
        assert_eq!(report.extra, vec!["z"]);
        assert_eq!(report.malformed, vec!["greet"]);
        assert_eq!(report.placeholder_mismatches.len(), 1);
        assert_eq!(report.placeholder_mismatches[0].expected, vec!["name"]);
        assert_eq!(report.placeholder_mismatches[0].found, vec!["nom"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_identical_bundles_are_clean() {
        let json = r#"{ "a": { "message": "A" } }"#;
        let report = compare(&bundle(json), &bundle(json));
        assert!(report.is_clean());
        assert!((report.coverage_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_fallback_is_full_coverage() {
        let report = compare(&bundle("{}"), &bundle("{}"));
        assert!((report.coverage_percent() - 100.0).abs() < f64::EPSILON);
    }
}
