//! Row types for the streaming export endpoint.
//!
//! `/services/search/jobs/export?output_mode=json` answers with a sequence of
//! concatenated JSON objects (no enclosing array). Each object is one of:
//! - a data row: `{"preview": .., "offset": .., "result": {..}}`
//! - a messages row: `{"messages": [{"type": "ERROR", "text": ".."}]}`
//! - a bare end marker: `{"preview": false, "lastrow": true}`
//!
//! Anything else is rejected so that a malformed stream surfaces as a decode error.

use serde::{Deserialize, Deserializer};

use super::common::SplunkMessage;

/// A data row carrying one result object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow<T> {
    /// True for intermediate results a running search emits before it completes.
    pub preview: bool,
    pub result: T,
}

/// One decoded export row.
#[derive(Debug, Clone)]
pub enum ExportRow<T> {
    Data(ResultRow<T>),
    Messages(Vec<SplunkMessage>),
    EndMarker,
}

#[derive(Deserialize)]
struct RawExportRow<T> {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    preview: bool,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    lastrow: bool,
    result: Option<T>,
    messages: Option<Vec<SplunkMessage>>,
}

impl<'de, T> Deserialize<'de> for ExportRow<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawExportRow::<T>::deserialize(deserializer)?;
        match (raw.result, raw.messages) {
            (Some(result), _) => Ok(ExportRow::Data(ResultRow {
                preview: raw.preview,
                result,
            })),
            (None, Some(messages)) => Ok(ExportRow::Messages(messages)),
            (None, None) if raw.lastrow => Ok(ExportRow::EndMarker),
            (None, None) => Err(serde::de::Error::custom(
                "export row has neither `result` nor `messages`",
            )),
        }
    }
}

/// Result object of a `| stats count` query.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct CountResult {
    #[serde(deserialize_with = "crate::serde_helpers::usize_from_string_or_number")]
    pub count: usize,
}
