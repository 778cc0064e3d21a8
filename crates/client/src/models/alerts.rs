//! Alert models for the emulated alert listing.
//!
//! An alert is a saved search with at least one alert action. Rows come from
//! the export endpoint, where every field is a string.

use serde::{Deserialize, Serialize};

/// A saved search that has non-empty `actions`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Alert {
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub search: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub alert_type: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub actions: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    pub disabled: bool,
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_export_result() {
        let json = r#"{
            "title": "BT_Alert - Okta MFA bypass",
            "search": "`okta_logs` outcome.result=FAILURE",
            "alert_type": "number of events",
            "actions": "email,webhook",
            "disabled": "0",
            "description": "Fires on MFA bypass attempts"
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.title, "BT_Alert - Okta MFA bypass");
        assert_eq!(alert.actions, "email,webhook");
        assert!(!alert.disabled);
    }

    #[test]
    fn test_missing_fields_default() {
        let alert: Alert = serde_json::from_str(r#"{"title": "t", "disabled": "1"}"#).unwrap();
        assert_eq!(alert.description, "");
        assert!(alert.disabled);
    }

    #[test]
    fn test_invalid_disabled_is_error() {
        let result = serde_json::from_str::<Alert>(r#"{"title": "t", "disabled": "maybe"}"#);
        assert!(result.is_err());
    }
}
