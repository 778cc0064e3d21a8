//! Search macro models for Splunk REST API.
//!
//! Responsibilities:
//! - Define the macro shape returned by `/services/data/macros`.
//!
//! Non-responsibilities:
//! - Does not handle HTTP requests (see endpoints module).
//! - Does not resolve macro references inside searches (see [`crate::resolver`]).

use serde::{Deserialize, Serialize};

/// A search macro definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Macro {
    /// Macro name (e.g., "my_macro" or "my_macro(2)" for parameterized)
    #[serde(default)]
    pub name: String,
    /// The SPL snippet or eval expression
    #[serde(default, deserialize_with = "crate::serde_helpers::string_or_null")]
    pub definition: String,
    /// Whether the macro is disabled
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    pub disabled: bool,
}
