//! Fixed SPL query templates for the export endpoint.
//!
//! Responsibilities:
//! - Build the handful of search strings this crate runs (alert scan, fired
//!   alert count and page, count wrapper).
//! - Escape caller-supplied values embedded in SPL string literals.
//!
//! Does NOT handle:
//! - Arbitrary user-authored SPL; every query here is a fixed template.
//!
//! Invariants:
//! - Values placed inside `"..."` literals always pass through [`escape_string_literal`].
//! - Values placed outside literals (time modifiers) are validated, never escaped.

use crate::error::{ClientError, Result};

/// Escape `\` and `"` so a value can sit inside an SPL double-quoted literal.
pub fn escape_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '\\' || ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Full scan of saved searches that carry at least one alert action.
///
/// A non-blank `title_filter` narrows the scan to titles containing it
/// (case-insensitive).
pub fn alerts_query(title_filter: Option<&str>) -> String {
    let mut spl = String::from(r#"| rest /services/saved/searches | search actions!="" "#);
    if let Some(title) = title_filter.map(str::trim).filter(|t| !t.is_empty()) {
        spl.push_str(&format!(
            r#"| where like(lower(title), "%{}%") "#,
            escape_string_literal(&title.to_lowercase())
        ));
    }
    spl.push_str("| table title search alert_type actions disabled description");
    spl
}

/// Base audit-log search for alert firings of `ss_name` since `earliest`.
///
/// `ss_name` may contain `*` wildcards; `earliest` must be a Splunk time
/// modifier such as `-24h`, `-7d@d` or `0`.
pub fn fired_alerts_base(ss_name: &str, earliest: &str) -> Result<String> {
    let earliest = validate_time_modifier(earliest)?;
    Ok(format!(
        r#"search index=_audit action=alert_fired ss_name="{}" earliest={}"#,
        escape_string_literal(ss_name),
        earliest
    ))
}

/// Append a count-only aggregation to a base search.
pub fn count_query(base: &str) -> String {
    format!("{base} | stats count")
}

/// Page window over fired alerts: the first `head` rows, of which the last `tail` are kept.
pub fn fired_alerts_page_query(base: &str, head: usize, tail: usize) -> String {
    format!("{base} | table _time ss_name | head {head} | tail {tail}")
}

fn validate_time_modifier(earliest: &str) -> Result<&str> {
    let earliest = earliest.trim();
    if earliest.is_empty() {
        return Err(ClientError::MissingArgument("earliest"));
    }
    let valid = earliest
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '@' | ':' | '/' | '.'));
    if !valid {
        return Err(ClientError::InvalidArgument {
            name: "earliest",
            message: format!("not a time modifier: {earliest:?}"),
        });
    }
    Ok(earliest)
}
