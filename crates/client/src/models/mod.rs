//! Data models for Splunk catalog responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod alerts;
pub mod common;
pub mod export;
pub mod fired_alerts;
pub mod indexes;
pub mod macros;
pub mod saved_searches;

pub use alerts::Alert;
pub use common::{
    Entry, ListResponse, MessageType, PageResult, Paging, SplunkMessage, SplunkMessages,
};
pub use export::{CountResult, ExportRow, ResultRow};
pub use fired_alerts::{FiredAlert, NativeFiredAlert};
pub use indexes::Index;
pub use macros::Macro;
pub use saved_searches::SavedSearch;
