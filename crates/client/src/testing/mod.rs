//! Testing utilities for Splunk catalog client tests.
//!
//! This module provides helper functions for loading test fixtures and
//! building export-stream bodies. Available when running tests or when the
//! `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use splunk_catalog_client::testing::{load_fixture, export_body};
//!
//! let listing = load_fixture("indexes/list_indexes.json");
//! let body = export_body(&load_fixture("export/alerts_rows.json"));
//! ```

use std::path::Path;

use serde_json::{Value, json};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "indexes/list_indexes.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Render a JSON array of rows the way the export endpoint streams them:
/// one compact object per line, no enclosing array.
///
/// # Panics
/// If `rows` is not a JSON array.
pub fn export_body(rows: &Value) -> String {
    rows.as_array()
        .expect("export fixture must be an array of rows")
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final export rows for `n` alerts titled `<prefix> <i>`.
pub fn alert_rows(prefix: &str, n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "preview": false,
                    "offset": i,
                    "result": {
                        "title": format!("{prefix} {i}"),
                        "search": format!("index=main sourcetype=app_{i}"),
                        "alert_type": "number of events",
                        "actions": "email",
                        "disabled": "0",
                        "description": ""
                    }
                })
            })
            .collect(),
    )
}

/// A native listing envelope of `n` entries named `<prefix><i>` starting at
/// `offset`, reporting `total`.
pub fn listing_body(prefix: &str, n: usize, offset: usize, total: usize) -> Value {
    let entry: Vec<Value> = (offset..offset + n)
        .map(|i| json!({"name": format!("{prefix}{i}"), "content": {"disabled": false}}))
        .collect();
    json!({
        "entry": entry,
        "paging": {"total": total, "perPage": n, "offset": offset}
    })
}
