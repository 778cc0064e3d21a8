//! Common types shared across catalog models.
//!
//! This module contains the listing envelope, the page contract every fetch
//! returns, and Splunk's message types. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "FATAL")]
    Fatal,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "DEBUG")]
    Debug,
    /// Unknown or unrecognized message type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl MessageType {
    /// True for message types that describe a failed or partial search.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Fatal | Self::Error)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "FATAL"),
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Native listing envelope returned by `/services/...` collection endpoints.
///
/// `paging` is required: a body without it is not a listing response.
/// An empty collection may omit `entry` altogether.
#[derive(Debug, Deserialize, Clone)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub entry: Vec<Entry<T>>,
    pub paging: Paging,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Entry<T> {
    pub name: String,
    pub content: T,
}

/// Server-side paging block of a listing response.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    #[serde(deserialize_with = "crate::serde_helpers::usize_from_string_or_number")]
    pub total: usize,
    #[serde(
        rename = "perPage",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub per_page: usize,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub offset: usize,
}

/// One page of a catalog listing.
///
/// `total` is always the size of the full matching set, never the page size.
/// `count` is the effective (clamped) page size that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub offset: usize,
    pub total: usize,
}

impl<T> PageResult<T> {
    /// Slice a fully-materialized result set into a page.
    ///
    /// Returns `rows[min(offset,total) .. min(offset+count,total)]`; an offset
    /// past the end yields an empty page, not an error.
    pub fn from_full_scan(rows: Vec<T>, count: usize, offset: usize) -> Self {
        let total = rows.len();
        let start = offset.min(total);
        let end = offset.saturating_add(count).min(total);
        let items = rows.into_iter().skip(start).take(end - start).collect();
        Self {
            items,
            count,
            offset,
            total,
        }
    }

    /// A page with no items (used when the server need not be asked for rows).
    pub fn empty(count: usize, offset: usize, total: usize) -> Self {
        Self {
            items: Vec::new(),
            count,
            offset,
            total,
        }
    }

    /// True when another page exists after this one at the given page size.
    pub fn has_more(&self, page_size: usize) -> bool {
        !self.items.is_empty() && self.offset.saturating_add(page_size) < self.total
    }
}

/// A single message from Splunk (usually in error responses).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub text: String,
}

impl fmt::Display for SplunkMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message_type, self.text)
    }
}

/// A collection of messages from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Render every message as `TYPE: text`, joined with `; `.
    pub fn joined(&self) -> String {
        self.messages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
