//! JSON-LD structured data validation.

use serde_json::Value;

/// Checks that structured data is present and syntactically valid JSON.
///
/// Strings must parse as JSON; objects and arrays are accepted as they are
/// already parsed. `null`, `false`, `0` and the empty string count as absent.
/// Schema.org conformance is not checked.
pub fn validate_json_ld(data: Option<&Value>) -> bool {
    match data {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty() && serde_json::from_str::<Value>(s).is_ok(),
        Some(value) => serde_json::to_string(value).is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_is_invalid() {
        assert!(!validate_json_ld(None));
        assert!(!validate_json_ld(Some(&Value::Null)));
        assert!(!validate_json_ld(Some(&json!(""))));
        assert!(!validate_json_ld(Some(&json!(false))));
        assert!(!validate_json_ld(Some(&json!(0))));
    }

    #[test]
    fn test_object_is_valid() {
        let data = json!({ "@context": "https://schema.org", "@type": "Article", "headline": "Hi" });
        assert!(validate_json_ld(Some(&data)));
    }

    #[test]
    fn test_empty_object_is_valid() {
        assert!(validate_json_ld(Some(&json!({}))));
    }

    #[test]
    fn test_json_string() {
        assert!(validate_json_ld(Some(&json!(r#"{"@type":"BlogPosting"}"#))));
        assert!(!validate_json_ld(Some(&json!(r#"{"@type":"BlogPosting""#))));
        assert!(!validate_json_ld(Some(&json!("not json at all"))));
    }
}
