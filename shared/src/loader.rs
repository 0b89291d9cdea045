use serde_json::Value;

use crate::creator::Creator;
use crate::error::LoadError;

pub const DEFAULT_DATA_PATH: &str = "./data/creators.json";

/// Request URL for the creators document, with an optional `ts` cache-buster.
pub fn data_url(path: &str, cache_bust: Option<u64>) -> String {
    match cache_bust {
        Some(ts) => {
            let separator = if path.contains('?') { '&' } else { '?' };
            format!("{path}{separator}ts={ts}")
        }
        None => path.to_string(),
    }
}

/// Decodes a fetched body into creator records.
///
/// The top level must be a JSON array. Entries are decoded leniently and are
/// returned in document order.
pub fn parse_creators(body: &str) -> Result<Vec<Creator>, LoadError> {
    let document: Value =
        serde_json::from_str(body).map_err(|error| LoadError::Parse(error.to_string()))?;
    match document {
        Value::Array(entries) => Ok(entries.iter().map(Creator::from_value).collect()),
        other => Err(LoadError::Shape {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_cache_buster() {
        assert_eq!(data_url("./data/creators.json", None), "./data/creators.json");
        assert_eq!(
            data_url("./data/creators.json", Some(1700000000000)),
            "./data/creators.json?ts=1700000000000"
        );
        assert_eq!(data_url("creators.json?v=2", Some(5)), "creators.json?v=2&ts=5");
    }

    #[test]
    fn test_parse_array_keeps_document_order() {
        let creators = parse_creators(
            r#"[
                {"name": "Aiko", "kana": "あいこ", "base": "Tokyo", "tags": ["design"], "order": 2},
                {"name": "Ben", "kana": "べん", "base": "Osaka", "tags": ["dev"], "order": 1}
            ]"#,
        )
        .unwrap();
        let names: Vec<&str> = creators.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Aiko", "Ben"]);
        assert_eq!(creators[1].order, Some(1));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert_eq!(parse_creators("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_non_array_is_shape_error() {
        assert_eq!(
            parse_creators(r#"{"creators": []}"#),
            Err(LoadError::Shape { found: "object" })
        );
        assert_eq!(parse_creators("null"), Err(LoadError::Shape { found: "null" }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_creators("<html>404</html>"), Err(LoadError::Parse(_))));
    }
}
