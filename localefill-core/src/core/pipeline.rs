//! The fill pipeline: diff a target catalog against the reference and fill
//! in every missing key with a glossary translation or a review marker.

use crate::core::flatten::{flatten, unflatten, SEPARATOR};
use crate::core::translate::{needs_review, translate_value};
use crate::{glossary, Catalog, LocalefillError, Result};
use serde::Serialize;

/// Summary of one target catalog's fill run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    /// Target language code.
    pub language: String,
    /// Reference keys that were absent from the target.
    pub missing_keys: usize,
    /// Keys written into the target (always equals `missing_keys`).
    pub added: usize,
    /// Added keys whose value came from the glossary rather than a marker.
    pub translated: usize,
    /// Review markers in the whole updated catalog, pre-existing included.
    pub needs_review: usize,
}

/// Fills every reference key missing from `target` and returns the updated
/// catalog together with a [`FillReport`].
///
/// Missing keys are found by flat-key set difference and processed in the
/// reference catalog's iteration order. Each one is filled with
/// [`translate_value`] applied to the reference leaf.
///
/// # Errors
///
/// Returns [`LocalefillError::UnsupportedLanguage`] if the glossary has no
/// phrase table for `language`.
pub fn fill_missing(
    reference: &Catalog,
    target: &Catalog,
    language: &str,
) -> Result<(Catalog, FillReport)> {
    if !glossary::supports(language) {
        return Err(LocalefillError::UnsupportedLanguage(language.to_string()));
    }

    let reference_flat = flatten(reference, SEPARATOR);
    let mut target_flat = flatten(target, SEPARATOR);

    let missing: Vec<&String> = reference_flat
        .keys()
        .filter(|key| !target_flat.contains_key(*key))
        .collect();
    let missing_keys = missing.len();
    log::info!("{language}: {missing_keys} missing keys");

    let mut translated = 0;
    for key in missing {
        let filled = translate_value(&reference_flat[key], language);
        if !needs_review(&filled) {
            translated += 1;
        } else {
            log::debug!("{language}: {key} needs manual review");
        }
        target_flat.insert(key.clone(), filled);
    }

    let needs_review_count = target_flat.values().filter(|v| needs_review(v)).count();
    log::info!(
        "{language}: added {missing_keys} entries ({translated} translated, {needs_review_count} marked for review)"
    );

    let report = FillReport {
        language: language.to_string(),
        missing_keys,
        added: missing_keys,
        translated,
        needs_review: needs_review_count,
    };
    Ok((unflatten(&target_flat, SEPARATOR), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: serde_json::Value) -> Catalog {
        Catalog::try_from(value).unwrap()
    }

    #[test]
    fn test_fills_missing_key_with_review_marker() {
        let reference = catalog(json!({"a": {"b": "Mentés", "c": "Szia"}}));
        let target = catalog(json!({"a": {"b": "Save"}}));

        let (filled, report) = fill_missing(&reference, &target, "en").unwrap();

        assert_eq!(filled, catalog(json!({"a": {"b": "Save", "c": "[TODO: Szia]"}})));
        assert_eq!(report.missing_keys, 1);
        assert_eq!(report.added, 1);
        assert_eq!(report.translated, 0);
        assert_eq!(report.needs_review, 1);
    }

    #[test]
    fn test_fills_missing_key_from_glossary() {
        let reference = catalog(json!({"actions": {"save": "Mentés", "back": "Vissza"}}));
        let target = catalog(json!({"actions": {"save": "Speichern"}}));

        let (filled, report) = fill_missing(&reference, &target, "de").unwrap();

        assert_eq!(
            filled,
            catalog(json!({"actions": {"save": "Speichern", "back": "Zurück"}}))
        );
        assert_eq!(report.missing_keys, 1);
        assert_eq!(report.translated, 1);
        assert_eq!(report.needs_review, 0);
    }

    #[test]
    fn test_complete_target_is_untouched() {
        let reference = catalog(json!({"a": "Mentés"}));
        let target = catalog(json!({"a": "Save"}));

        let (filled, report) = fill_missing(&reference, &target, "en").unwrap();

        assert_eq!(filled, target);
        assert_eq!(report.missing_keys, 0);
        assert_eq!(report.added, 0);
    }

    #[test]
    fn test_existing_value_is_never_overwritten() {
        // Target already has the key with a different shape of value.
        let reference = catalog(json!({"count": "Összeg"}));
        let target = catalog(json!({"count": "Total"}));

        let (filled, _) = fill_missing(&reference, &target, "en").unwrap();
        assert_eq!(filled.root()["count"], json!("Total"));
    }

    #[test]
    fn test_pre_existing_markers_are_counted() {
        let reference = catalog(json!({"a": "Szia", "b": "Hosszabb szöveg"}));
        let target = catalog(json!({"a": "[TODO: Szia]"}));

        let (_, report) = fill_missing(&reference, &target, "en").unwrap();

        assert_eq!(report.missing_keys, 1);
        assert_eq!(report.needs_review, 2);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let reference = catalog(json!({"a": {"b": "Mentés", "c": "Szia"}}));
        let target = catalog(json!({"a": {"b": "Save"}}));

        let (_, report) = fill_missing(&reference, &target, "en").unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"language\":\"en\""));
        assert!(json.contains("\"missingKeys\":1"));
        assert!(json.contains("\"added\":1"));
        assert!(json.contains("\"translated\":0"));
        assert!(json.contains("\"needsReview\":1"));
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        let reference = catalog(json!({"a": "Szia"}));
        let target = catalog(json!({}));

        let result = fill_missing(&reference, &target, "fr");
        assert!(matches!(result, Err(LocalefillError::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_missing_keys_follow_reference_order() {
        let reference = catalog(json!({"z": "Mentés", "m": "Vissza", "a": "Tovább"}));
        let target = catalog(json!({}));

        let (filled, report) = fill_missing(&reference, &target, "en").unwrap();

        assert_eq!(report.added, 3);
        let keys: Vec<&str> = filled.root().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "m", "a"]);
    }

    #[test]
    fn test_non_string_reference_leaves_pass_through() {
        let reference = catalog(json!({"limits": {"max": 5}}));
        let target = catalog(json!({}));

        let (filled, report) = fill_missing(&reference, &target, "en").unwrap();

        assert_eq!(filled, catalog(json!({"limits": {"max": 5}})));
        assert_eq!(report.translated, 1);
        assert_eq!(report.needs_review, 0);
    }
}
