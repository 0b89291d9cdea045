use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// Rank given to records without a manual `order`, placing them after every ranked record.
pub const UNRANKED: i64 = 999_999;

// ===== CREATOR RECORD =====

/// One creator entry from `creators.json`.
///
/// Decoding never fails: missing fields, `null` and values of the wrong JSON
/// type all become the empty value. `notionUrl` is read as a legacy alias of
/// `url`; when both are present `url` wins.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Value")]
pub struct Creator {
    pub name: String,
    pub kana: String,
    pub base: String,
    pub role: Vec<String>,
    pub tags: Vec<String>,
    pub order: Option<i64>,
    pub updated: Option<String>,
    pub thumb: String,
    pub url: String,
}

impl From<Value> for Creator {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl Creator {
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        let text = |key: &str| fields.get(key).map(lenient_string).unwrap_or_default();
        let list = |key: &str| fields.get(key).map(lenient_list).unwrap_or_default();

        let url = match text("url") {
            url if url.is_empty() => text("notionUrl"),
            url => url,
        };
        let updated = Some(text("updated")).filter(|updated| !updated.is_empty());

        Self {
            name: text("name"),
            kana: text("kana"),
            base: text("base"),
            role: list("role"),
            tags: list("tags"),
            order: fields.get("order").and_then(lenient_rank),
            updated,
            thumb: text("thumb"),
            url,
        }
    }

    /// Name shown on the card, or `placeholder` when the record has none.
    pub fn display_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.name.is_empty() {
            placeholder
        } else {
            &self.name
        }
    }

    /// Sort key: `kana`, falling back to `name`.
    pub fn phonetic_key(&self) -> &str {
        if self.kana.is_empty() {
            &self.name
        } else {
            &self.kana
        }
    }

    pub fn rank(&self) -> i64 {
        self.order.unwrap_or(UNRANKED)
    }

    /// Outbound link, `#` when the record has none.
    pub fn link(&self) -> &str {
        if self.url.is_empty() { "#" } else { &self.url }
    }

    /// Milliseconds since the Unix epoch; missing or unreadable timestamps count as the epoch.
    pub fn updated_millis(&self) -> i64 {
        self.updated
            .as_deref()
            .and_then(parse_timestamp_millis)
            .unwrap_or(0)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|r| r == role)
    }
}

// ===== LENIENT FIELD DECODING =====

fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn lenient_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(lenient_string)
            .filter(|item| !item.is_empty())
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn lenient_rank(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ===== TIMESTAMPS =====

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses RFC 3339 first, then `YYYY-MM-DD` (or `YYYY/MM/DD`) with an optional
/// `HH:MM[:SS]` clock and an optional `Z`/`±HH:MM` offset. Timestamps without
/// an offset are read as UTC.
pub fn parse_timestamp_millis(input: &str) -> Option<i64> {
    let input = input.trim();
    if let Ok(moment) = DateTime::parse_from_rfc3339(input) {
        return Some(moment.timestamp_millis());
    }

    let mut normalized = input.replace('/', "-");
    if let Some(utc) = normalized.strip_suffix(['Z', 'z']) {
        normalized = format!("{utc}+00:00");
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|moment| moment.timestamp_millis())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
                .map(|moment| moment.and_utc().timestamp_millis())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|moment| moment.and_utc().timestamp_millis())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_become_empty_values() {
        let creator = Creator::from_value(&json!({}));
        assert_eq!(creator, Creator::default());
        assert_eq!(creator.display_name("noname"), "noname");
        assert_eq!(creator.link(), "#");
        assert_eq!(creator.rank(), UNRANKED);
        assert_eq!(creator.updated_millis(), 0);
    }

    #[test]
    fn test_wrong_types_are_absorbed() {
        let creator = Creator::from_value(&json!({
            "name": null,
            "base": 42,
            "tags": "solo",
            "role": [null, "director", 7],
            "order": "3",
            "thumb": {"src": "x.png"},
        }));
        assert_eq!(creator.name, "");
        assert_eq!(creator.base, "42");
        assert_eq!(creator.tags, vec!["solo"]);
        assert_eq!(creator.role, vec!["director", "7"]);
        assert_eq!(creator.order, Some(3));
        assert_eq!(creator.thumb, "");
    }

    #[test]
    fn test_non_object_entry_is_an_empty_record() {
        assert_eq!(Creator::from_value(&json!(12)), Creator::default());
    }

    #[test]
    fn test_notion_url_is_a_legacy_alias() {
        let legacy = Creator::from_value(&json!({"notionUrl": "https://notion.so/a"}));
        assert_eq!(legacy.link(), "https://notion.so/a");

        let both = Creator::from_value(&json!({
            "url": "https://example.com/b",
            "notionUrl": "https://notion.so/b",
        }));
        assert_eq!(both.link(), "https://example.com/b");
    }

    #[test]
    fn test_phonetic_key_falls_back_to_name() {
        let with_kana = Creator::from_value(&json!({"name": "Aiko", "kana": "あいこ"}));
        let without_kana = Creator::from_value(&json!({"name": "Ben", "kana": ""}));
        assert_eq!(with_kana.phonetic_key(), "あいこ");
        assert_eq!(without_kana.phonetic_key(), "Ben");
    }

    #[test]
    fn test_integral_float_order_is_accepted() {
        let creator = Creator::from_value(&json!({"order": 2.0}));
        assert_eq!(creator.order, Some(2));
        let fractional = Creator::from_value(&json!({"order": 2.5}));
        assert_eq!(fractional.order, None);
    }

    #[test]
    fn test_deserialize_goes_through_lenient_path() {
        let creator: Creator =
            serde_json::from_str(r#"{"name":"Aiko","tags":null,"notionUrl":"n"}"#).unwrap();
        assert_eq!(creator.name, "Aiko");
        assert!(creator.tags.is_empty());
        assert_eq!(creator.url, "n");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert_eq!(parse_timestamp_millis("1970-01-01"), Some(0));
        assert_eq!(parse_timestamp_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp_millis("2000-03-01T00:00:00Z"), Some(951_868_800_000));
        assert_eq!(
            parse_timestamp_millis("2000-03-01T09:00:00+09:00"),
            Some(951_868_800_000)
        );
        assert_eq!(parse_timestamp_millis("2000/03/01 00:00"), Some(951_868_800_000));
        assert_eq!(parse_timestamp_millis("1970-01-01T00:00:01.5Z"), Some(1_500));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp_millis(""), None);
        assert_eq!(parse_timestamp_millis("yesterday"), None);
        assert_eq!(parse_timestamp_millis("2024-13-01"), None);
        assert_eq!(parse_timestamp_millis("2024-01-01T25:00"), None);
        assert_eq!(parse_timestamp_millis("2024-02-31"), None);
        assert_eq!(parse_timestamp_millis("99999999999999999-01-01"), None);
        assert_eq!(parse_timestamp_millis("2024-01-01T10:00+あ1"), None);
    }

    #[test]
    fn test_parse_timestamp_short_forms() {
        assert_eq!(parse_timestamp_millis("2000-03-01T09:00+09:00"), Some(951_868_800_000));
        assert_eq!(parse_timestamp_millis("2000-03-01 00:00Z"), Some(951_868_800_000));
        assert_eq!(parse_timestamp_millis("2000-03-01T00:00"), Some(951_868_800_000));
        assert_eq!(parse_timestamp_millis("2000/03/01"), Some(951_868_800_000));
        assert_eq!(parse_timestamp_millis("  2024-02-29  "), Some(1_709_164_800_000));
    }

    #[test]
    fn test_malformed_updated_sorts_as_epoch() {
        let creator = Creator::from_value(&json!({"updated": "2024-01-01T10:00+あ1"}));
        assert_eq!(creator.updated_millis(), 0);
        let impossible = Creator::from_value(&json!({"updated": "2024-02-31"}));
        assert_eq!(impossible.updated_millis(), 0);
    }
}
