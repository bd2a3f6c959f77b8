//! Field normalization — folds the raw list shapes produced by different form
//! versions into one canonical `Vec<String>`.
//!
//! Stored skill/hobby/language data arrives in three historical shapes: a plain
//! string array, an array of objects carrying a `<kind>_name` field, or a single
//! object wrapping the real list under a collection key. Shape detection runs in
//! that fixed priority order and the first match wins. Anything unrecognized
//! normalizes to an empty list — renderers never see a shape error.

use serde_json::Value;

/// Which list-valued category is being normalized. The kind decides the field
/// names probed on object-shaped input; the conversion rules are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Skill,
    Hobby,
    Language,
}

impl ListKind {
    /// Name field carried by object-shaped items, e.g. `{"skill_name": "Go"}`.
    pub fn name_field(self) -> &'static str {
        match self {
            ListKind::Skill => "skill_name",
            ListKind::Hobby => "hobby_name",
            ListKind::Language => "language_name",
        }
    }

    /// Collection key probed on the single-object wrapper shape,
    /// e.g. `{"skills": "Go, Rust"}`.
    pub fn wrapper_field(self) -> &'static str {
        match self {
            ListKind::Skill => "skills",
            ListKind::Hobby => "hobbies",
            ListKind::Language => "languages",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shape detection
// ────────────────────────────────────────────────────────────────────────────

/// The three accepted raw shapes, in detection priority order.
#[derive(Debug)]
enum RawListShape<'a> {
    /// `["Go", "Rust"]`
    Strings(&'a [Value]),
    /// `[{"skill_name": "Go"}, {"skill_name": "Rust"}]`
    Named(&'a [Value]),
    /// `{"skills": ...}` where the payload is a nested array or a string.
    Wrapper(&'a Value),
}

fn classify(raw: &Value, kind: ListKind) -> Option<RawListShape<'_>> {
    match raw {
        Value::Array(items) => {
            if items.iter().all(Value::is_string) {
                Some(RawListShape::Strings(items))
            } else if items
                .iter()
                .any(|item| item.get(kind.name_field()).map_or(false, Value::is_string))
            {
                Some(RawListShape::Named(items))
            } else {
                None
            }
        }
        Value::Object(map) => map.get(kind.wrapper_field()).map(RawListShape::Wrapper),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Conversion
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes one raw category value into a clean list of names.
///
/// Total over arbitrary JSON: preserves source order, trims whitespace, drops
/// empty entries and items that do not fit the detected shape. Unrecognized
/// input yields an empty vec rather than an error.
pub fn normalize_list(raw: &Value, kind: ListKind) -> Vec<String> {
    match classify(raw, kind) {
        Some(RawListShape::Strings(items)) => collect_strings(items.iter()),
        Some(RawListShape::Named(items)) => {
            collect_strings(items.iter().filter_map(|item| item.get(kind.name_field())))
        }
        Some(RawListShape::Wrapper(payload)) => unwrap_payload(payload),
        None => Vec::new(),
    }
}

/// Convenience over an optional stored value; absent means empty.
pub fn normalize_opt(raw: Option<&Value>, kind: ListKind) -> Vec<String> {
    raw.map(|value| normalize_list(value, kind)).unwrap_or_default()
}

fn collect_strings<'a>(items: impl Iterator<Item = &'a Value>) -> Vec<String> {
    items
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Wrapper payloads are either a nested array of names or a single string.
/// A string starting with `[` is treated as embedded JSON; anything else is
/// split on commas. A string that looks like JSON but fails to parse yields
/// an empty list, not the comma-split fallback.
fn unwrap_payload(payload: &Value) -> Vec<String> {
    match payload {
        Value::Array(items) => collect_strings(items.iter()),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.starts_with('[') {
                serde_json::from_str::<Vec<String>>(trimmed)
                    .map(|names| {
                        names
                            .iter()
                            .map(|name| name.trim())
                            .filter(|name| !name.is_empty())
                            .map(ToString::to_string)
                            .collect()
                    })
                    .unwrap_or_default()
            } else {
                trimmed
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(ToString::to_string)
                    .collect()
            }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_array() {
        let raw = json!(["Go", "Rust", "SQL"]);
        assert_eq!(
            normalize_list(&raw, ListKind::Skill),
            vec!["Go", "Rust", "SQL"]
        );
    }

    #[test]
    fn test_named_object_array_preserves_order() {
        let raw = json!([{ "skill_name": "Go" }, { "skill_name": "Rust" }]);
        assert_eq!(
            normalize_list(&raw, ListKind::Skill),
            vec!["Go", "Rust"],
            "object items must map to their names in source order"
        );
    }

    #[test]
    fn test_wrapper_with_nested_array() {
        let raw = json!({ "skills": ["Go", "Rust"] });
        assert_eq!(normalize_list(&raw, ListKind::Skill), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_wrapper_with_csv_string() {
        let raw = json!({ "hobbies": "chess,  hiking , photography" });
        assert_eq!(
            normalize_list(&raw, ListKind::Hobby),
            vec!["chess", "hiking", "photography"],
            "comma-separated wrapper strings are split and trimmed"
        );
    }

    #[test]
    fn test_wrapper_with_embedded_json_string() {
        let raw = json!({ "skills": "[\"Go\", \"Rust\"]" });
        assert_eq!(normalize_list(&raw, ListKind::Skill), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_three_shapes_agree() {
        let plain = json!(["Go", "Rust"]);
        let named = json!([{ "skill_name": "Go" }, { "skill_name": "Rust" }]);
        let wrapped = json!({ "skills": ["Go", "Rust"] });
        let expected = vec!["Go".to_string(), "Rust".to_string()];
        assert_eq!(normalize_list(&plain, ListKind::Skill), expected);
        assert_eq!(normalize_list(&named, ListKind::Skill), expected);
        assert_eq!(
            normalize_list(&wrapped, ListKind::Skill),
            expected,
            "every accepted shape must produce the same canonical list"
        );
    }

    #[test]
    fn test_string_array_wins_over_named_check() {
        // All-string arrays never consult the name field.
        let raw = json!(["skill_name", "Go"]);
        assert_eq!(
            normalize_list(&raw, ListKind::Skill),
            vec!["skill_name", "Go"]
        );
    }

    #[test]
    fn test_malformed_json_wrapper_string_is_empty() {
        let raw = json!({ "skills": "[\"Go\", " });
        assert!(
            normalize_list(&raw, ListKind::Skill).is_empty(),
            "broken embedded JSON must degrade to empty, not to a comma split"
        );
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        for raw in [
            json!(42),
            json!("Go, Rust"),
            json!(null),
            json!({ "unrelated": ["Go"] }),
            json!([{ "label": "Go" }]),
        ] {
            assert!(
                normalize_list(&raw, ListKind::Skill).is_empty(),
                "shape {raw} must normalize to empty"
            );
        }
    }

    #[test]
    fn test_named_array_skips_items_without_name() {
        let raw = json!([
            { "skill_name": "Go" },
            { "years": 3 },
            { "skill_name": "  " },
            { "skill_name": "Rust" }
        ]);
        assert_eq!(
            normalize_list(&raw, ListKind::Skill),
            vec!["Go", "Rust"],
            "items missing a usable name are dropped, the rest survive"
        );
    }

    #[test]
    fn test_kind_selects_probe_fields() {
        let hobbies = json!([{ "hobby_name": "chess" }]);
        assert_eq!(normalize_list(&hobbies, ListKind::Hobby), vec!["chess"]);
        assert!(
            normalize_list(&hobbies, ListKind::Skill).is_empty(),
            "a hobby-shaped payload is not a skill list"
        );
        let languages = json!({ "languages": "English, French" });
        assert_eq!(
            normalize_list(&languages, ListKind::Language),
            vec!["English", "French"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(normalize_list(&json!([]), ListKind::Skill).is_empty());
        assert!(normalize_list(&json!({ "skills": "" }), ListKind::Skill).is_empty());
        assert!(normalize_opt(None, ListKind::Skill).is_empty());
    }

    #[test]
    fn test_whitespace_entries_dropped_every_shape() {
        let plain = json!(["  ", "Go", ""]);
        assert_eq!(normalize_list(&plain, ListKind::Skill), vec!["Go"]);
        let wrapped = json!({ "skills": " , Go , " });
        assert_eq!(normalize_list(&wrapped, ListKind::Skill), vec!["Go"]);
    }
}
