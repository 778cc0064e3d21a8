//! Centralized constants for the Splunk catalog workspace.
//!
//! This module contains default values and policy limits used across crates
//! to avoid magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Listing Pagination Policy
// =============================================================================

/// Default page size for catalog listings when the caller omits `count`.
pub const DEFAULT_LIST_COUNT: usize = 10;

/// Hard upper bound on `count` for catalog listings.
pub const MAX_LIST_COUNT: usize = 100;

/// Default page size for the audit-log fired alerts listing.
pub const DEFAULT_FIRED_ALERTS_COUNT: usize = 100;

/// Hard upper bound on `count` for the audit-log fired alerts listing.
///
/// Higher than [`MAX_LIST_COUNT`] because the export endpoint returns the
/// whole window in a single response anyway.
pub const MAX_FIRED_ALERTS_EXPORT_COUNT: usize = 500;

/// Default saved-search name pattern for fired alerts.
pub const DEFAULT_FIRED_ALERTS_SS_NAME: &str = "*";

/// Default look-back window for fired alerts.
pub const DEFAULT_FIRED_ALERTS_EARLIEST: &str = "-24h";

// =============================================================================
// Cross-Reference Resolver Defaults
// =============================================================================

/// Page size used when the resolver drains alerts and macros.
pub const RESOLVER_PAGE_SIZE: usize = 100;

/// Title tag that identifies the alerts the resolver scans.
pub const DEFAULT_ALERT_CATEGORY: &str = "BT_Alert";
