use serde_json::Value;

/// Sentinel substituted for any missing, null, or untraversable field.
pub const FALLBACK: &str = "N/A";

/// Path from a record to one display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// Direct key lookup.
    Key(&'static str),
    /// First element of a list-valued key.
    First(&'static str),
    /// All elements of a list-valued key, joined with ", ".
    Join(&'static str),
}

/// Resolve a field path against a record.
///
/// Returns `fallback` when the key is absent, the value is null, or the
/// path cannot be traversed (e.g. indexing an empty list). Absent fields
/// are the common case with this API, so this never fails.
pub fn extract(record: &Value, path: FieldPath, fallback: &str) -> String {
    match path {
        FieldPath::Key(key) => scalar(record.get(key), fallback),
        FieldPath::First(key) => match record.get(key).and_then(Value::as_array) {
            Some(items) => scalar(items.first(), fallback),
            None => fallback.to_string(),
        },
        FieldPath::Join(key) => match record.get(key).and_then(Value::as_array) {
            Some(items) if !items.is_empty() => items
                .iter()
                .map(|item| scalar(Some(item), fallback))
                .collect::<Vec<_>>()
                .join(", "),
            _ => fallback.to_string(),
        },
    }
}

/// Render a scalar JSON value for display. Strings are rendered bare,
/// numbers and booleans via their JSON text. Containers have no scalar
/// rendering and count as absent.
fn scalar(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => {
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_present_string() {
        let record = json!({"name": "a16z"});
        assert_eq!(extract(&record, FieldPath::Key("name"), FALLBACK), "a16z");
    }

    #[test]
    fn test_extract_present_number() {
        let record = json!({"tier": 1, "retailRoi": 2.5});
        assert_eq!(extract(&record, FieldPath::Key("tier"), FALLBACK), "1");
        assert_eq!(extract(&record, FieldPath::Key("retailRoi"), FALLBACK), "2.5");
    }

    #[test]
    fn test_extract_missing_key_yields_fallback() {
        let record = json!({"name": "a16z"});
        assert_eq!(extract(&record, FieldPath::Key("tier"), FALLBACK), "N/A");
    }

    #[test]
    fn test_extract_null_yields_fallback() {
        let record = json!({"jurisdiction": null});
        assert_eq!(
            extract(&record, FieldPath::Key("jurisdiction"), FALLBACK),
            "N/A"
        );
    }

    #[test]
    fn test_extract_container_yields_fallback() {
        let record = json!({"links": [{"type": "web"}], "meta": {"a": 1}});
        assert_eq!(extract(&record, FieldPath::Key("links"), FALLBACK), "N/A");
        assert_eq!(extract(&record, FieldPath::Key("meta"), FALLBACK), "N/A");
    }

    #[test]
    fn test_extract_first_of_list() {
        let record = json!({"type": ["Seed", "Series A"]});
        assert_eq!(extract(&record, FieldPath::First("type"), FALLBACK), "Seed");
    }

    #[test]
    fn test_extract_first_of_empty_list_yields_fallback() {
        let record = json!({"type": []});
        assert_eq!(extract(&record, FieldPath::First("type"), FALLBACK), "N/A");
    }

    #[test]
    fn test_extract_first_of_missing_list_yields_fallback() {
        let record = json!({});
        assert_eq!(extract(&record, FieldPath::First("type"), FALLBACK), "N/A");
    }

    #[test]
    fn test_extract_join_list() {
        let record = json!({"jobs": ["Partner", "Founder"]});
        assert_eq!(
            extract(&record, FieldPath::Join("jobs"), FALLBACK),
            "Partner, Founder"
        );
    }

    #[test]
    fn test_extract_join_empty_or_missing_yields_fallback() {
        assert_eq!(
            extract(&json!({"jobs": []}), FieldPath::Join("jobs"), FALLBACK),
            "N/A"
        );
        assert_eq!(extract(&json!({}), FieldPath::Join("jobs"), FALLBACK), "N/A");
    }

    #[test]
    fn test_extract_on_non_object_record() {
        // Malformed records degrade to fallback, never panic.
        assert_eq!(extract(&json!(42), FieldPath::Key("id"), FALLBACK), "N/A");
        assert_eq!(extract(&json!(null), FieldPath::First("type"), FALLBACK), "N/A");
    }
}
