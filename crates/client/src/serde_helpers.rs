//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Normalize string-typed booleans from search results into `bool`.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - The REST listing endpoints return native JSON booleans; the export endpoint
//!   returns every field as a string (`"1"`, `"0"`, `"true"`, `"false"`).
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - These helpers must not log or print secrets; errors should be generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    U64(u64),
    String(String),
}

pub fn usize_from_string_or_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => usize::try_from(v).map_err(D::Error::custom),
        U64OrString::I64(v) => usize::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.trim().parse::<usize>().map_err(D::Error::custom),
    }
}

/// Parse a Splunk boolean spelled as a JSON bool, `0`/`1`, or a case-insensitive
/// `"true"`/`"false"`/`"1"`/`"0"` string. `null` reads as `false`.
pub fn bool_from_string_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<BoolOrString>::deserialize(deserializer)?;
    match value {
        None => Ok(false),
        Some(BoolOrString::Bool(b)) => Ok(b),
        Some(BoolOrString::U64(0)) => Ok(false),
        Some(BoolOrString::U64(1)) => Ok(true),
        Some(BoolOrString::U64(n)) => Err(D::Error::custom(format!(
            "invalid boolean value: {n}"
        ))),
        Some(BoolOrString::String(s)) => parse_bool_str(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid boolean value: {s:?}"))),
    }
}

fn parse_bool_str(s: &str) -> Option<bool> {
    let s = s.trim();
    if s == "1" || s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s == "0" || s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Read a string that Splunk may send as `null`; `null` becomes the empty string.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(default, deserialize_with = "bool_from_string_or_bool")]
        value: bool,
    }

    fn flag(json: &str) -> Result<bool, serde_json::Error> {
        serde_json::from_str::<Flag>(json).map(|f| f.value)
    }

    #[test]
    fn test_usize_from_string_or_number_accepts_number_and_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "usize_from_string_or_number")]
            value: usize,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": 3 }"#).unwrap();
        assert_eq!(parsed.value, 3);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "42" }"#).unwrap();
        assert_eq!(parsed.value, 42);

        assert!(serde_json::from_str::<Wrapper>(r#"{ "value": "many" }"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{ "value": -1 }"#).is_err());
    }

    #[test]
    fn test_bool_accepts_native_booleans() {
        assert!(flag(r#"{ "value": true }"#).unwrap());
        assert!(!flag(r#"{ "value": false }"#).unwrap());
    }

    #[test]
    fn test_bool_accepts_string_forms_case_insensitively() {
        assert!(flag(r#"{ "value": "1" }"#).unwrap());
        assert!(!flag(r#"{ "value": "0" }"#).unwrap());
        assert!(flag(r#"{ "value": "TRUE" }"#).unwrap());
        assert!(flag(r#"{ "value": "True" }"#).unwrap());
        assert!(!flag(r#"{ "value": "False" }"#).unwrap());
        assert!(flag(r#"{ "value": 1 }"#).unwrap());
    }

    #[test]
    fn test_bool_missing_or_null_is_false() {
        assert!(!flag(r#"{}"#).unwrap());
        assert!(!flag(r#"{ "value": null }"#).unwrap());
    }

    #[test]
    fn test_bool_rejects_garbage() {
        assert!(flag(r#"{ "value": "yes" }"#).is_err());
        assert!(flag(r#"{ "value": 2 }"#).is_err());
        assert!(flag(r#"{ "value": "" }"#).is_err());
    }

    #[test]
    fn test_string_or_null() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "string_or_null")]
            value: String,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(parsed.value, "");
        let parsed: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, "");
        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "x" }"#).unwrap();
        assert_eq!(parsed.value, "x");
    }
}
