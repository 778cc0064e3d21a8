//! Saved search models for the Splunk saved search API.

use serde::{Deserialize, Serialize};

/// Saved search information from `/services/saved/searches`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SavedSearch {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub search: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub description: String,
    /// Comma-separated alert action names; empty when the search has no actions.
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub actions: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    pub disabled: bool,
}
