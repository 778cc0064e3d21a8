//! Index models for the Splunk index listing API.

use serde::{Deserialize, Serialize};

/// Index information from `/services/data/indexes`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Index {
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    pub disabled: bool,
}
