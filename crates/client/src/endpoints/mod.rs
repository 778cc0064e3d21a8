//! REST API endpoint implementations.
//!
//! Every function here is a stateless call over a shared `reqwest::Client`;
//! [`crate::SplunkClient`] wraps them with its base URL, token and timeout.

mod alerts;
mod export;
mod fired_alerts;
mod indexes;
mod listing;
mod macros;
mod request;
mod saved_searches;

pub use alerts::list_alerts;
pub use export::{export_count, export_results, open_export};
pub use fired_alerts::{FiredAlertQuery, list_fired_alerts};
pub use indexes::list_indexes;
pub use macros::list_macros;
pub use request::send_request;
pub use saved_searches::list_saved_searches;
