//! Fired alert models.
//!
//! # What this module handles:
//! - The audit-log row shape (`_time`, `ss_name`) shared by both fired-alert sources
//! - The native `/services/alerts/fired_alerts` entry content
//!
//! # What this module does NOT handle:
//! - Choosing the source (see [`crate::endpoints::FiredAlertQuery`])

use serde::{Deserialize, Serialize};

/// One fired alert: when it fired and which saved search fired it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FiredAlert {
    #[serde(
        rename = "_time",
        default,
        deserialize_with = "crate::serde_helpers::string_or_null"
    )]
    pub time: String,
    #[serde(
        rename = "ss_name",
        default,
        deserialize_with = "crate::serde_helpers::string_or_null"
    )]
    pub search_name: String,
}

/// Entry content of `/services/alerts/fired_alerts`.
///
/// The entry name is the name of the saved search that fired.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NativeFiredAlert {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub trigger_time_rendered: Option<String>,
}

impl From<NativeFiredAlert> for FiredAlert {
    fn from(native: NativeFiredAlert) -> Self {
        Self {
            time: native.trigger_time_rendered.unwrap_or_default(),
            search_name: native.name,
        }
    }
}
