//! Keyword resolution across alerts and the macros they reference.
//!
//! Responsibilities:
//! - Page through every alert in a category and every search macro.
//! - Match alerts whose title, description or search mention a keyword,
//!   including searches that only mention it through a macro definition.
//! - Render the human-readable summary of the matches.
//!
//! Does NOT handle:
//! - Expanding macros recursively; only macros named directly in an alert's
//!   search are consulted.
//!
//! Invariants:
//! - Matching is case-insensitive; macro lookup keys are verbatim names.
//! - Any failed fetch aborts the resolution; partial matches are never returned.
//! - Cancellation is checked before every page request.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::future::Future;

use splunk_catalog_config::constants::RESOLVER_PAGE_SIZE;
use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};
use crate::models::{Alert, Macro, PageResult};

/// Alerts matching a keyword, with the rendered summary.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Normalized (trimmed, lower-cased) keyword that was matched.
    pub keyword: String,
    /// Category tag the alerts were restricted to.
    pub category: String,
    /// Matching alerts in scan order.
    pub alerts: Vec<Alert>,
}

impl Resolution {
    /// One-line title, e.g. `BT_Alert alerts referencing 'okta'`.
    pub fn title(&self) -> String {
        format!("{} alerts referencing '{}'", self.category, self.keyword)
    }

    /// `Found <n> <tag> alerts referencing '<keyword>':` followed by one
    /// `- <title>` line per match.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Found {} {} alerts referencing '{}':\n",
            self.alerts.len(),
            self.category,
            self.keyword
        );
        for alert in &self.alerts {
            let _ = writeln!(out, "- {}", alert.title);
        }
        out
    }
}

/// Macro name to definition, keyed by verbatim macro name.
#[derive(Debug, Default, Clone)]
pub struct MacroTable {
    definitions: HashMap<String, String>,
}

impl MacroTable {
    /// Build the table; a later macro with the same name replaces an earlier one.
    pub fn from_macros(macros: impl IntoIterator<Item = Macro>) -> Self {
        let definitions = macros
            .into_iter()
            .map(|m| (m.name, m.definition))
            .collect();
        Self { definitions }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definition for a macro reference as written inside backticks.
    ///
    /// `name(a, b)` falls back to `name(2)`, the key Splunk stores
    /// parameterized macros under.
    pub fn definition(&self, reference: &str) -> Option<&str> {
        if let Some(def) = self.definitions.get(reference) {
            return Some(def);
        }
        let (name, argc) = split_macro_call(reference)?;
        self.definitions
            .get(&format!("{name}({argc})"))
            .map(String::as_str)
    }
}

/// Candidate macro references in a search: the text between every two
/// consecutive backticks, taken verbatim.
///
/// Spans are not paired, so a stray backtick in a quoted string or comment
/// does not hide the macros after it. Spans that are not macro names simply
/// miss in the table. A trailing backtick without a partner does not start a
/// reference.
pub fn macro_references(search: &str) -> Vec<&str> {
    let segments: Vec<&str> = search.split('`').collect();
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .filter(|(i, s)| *i > 0 && *i < last && !s.is_empty())
        .map(|(_, s)| *s)
        .collect()
}

/// Split `name(a, "b,c")` into `("name", 2)`. Commas inside double quotes do
/// not separate arguments. Returns `None` for anything that is not a call.
fn split_macro_call(reference: &str) -> Option<(&str, usize)> {
    let open = reference.find('(')?;
    let inner = reference.strip_suffix(')')?.get(open + 1..)?;
    let name = reference[..open].trim();
    if name.is_empty() || inner.trim().is_empty() {
        return None;
    }

    let mut argc = 1;
    let mut in_quotes = false;
    let mut escaped = false;
    for ch in inner.chars() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => argc += 1,
            _ => {}
        }
    }
    Some((name, argc))
}

/// True when `alert` mentions `keyword` (already lower-cased) directly or
/// through a referenced macro. Checks run in order: title, description,
/// search, macro definitions.
pub fn alert_matches(alert: &Alert, keyword: &str, macros: &MacroTable) -> bool {
    let mentions = |text: &str| text.to_lowercase().contains(keyword);

    if mentions(&alert.title) || mentions(&alert.description) || mentions(&alert.search) {
        return true;
    }

    macro_references(&alert.search)
        .into_iter()
        .filter_map(|reference| macros.definition(reference))
        .any(mentions)
}

/// Find every alert tagged `category` that references `keyword`.
///
/// Pages alerts (filtered by `category`) and then macros, 100 at a time,
/// until each listing is exhausted.
pub async fn resolve_alerts_by_keyword(
    client: &SplunkClient,
    category: &str,
    keyword: &str,
    cancel: &CancellationToken,
) -> Result<Resolution> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(ClientError::MissingArgument("keyword"));
    }

    let alerts = fetch_all(cancel, move |offset| {
        client.list_alerts(RESOLVER_PAGE_SIZE, offset, Some(category), cancel)
    })
    .await?;
    let macros = fetch_all(cancel, move |offset| {
        client.list_macros(RESOLVER_PAGE_SIZE, offset, cancel)
    })
    .await?;
    let macros = MacroTable::from_macros(macros);
    debug!(
        alerts = alerts.len(),
        macros = macros.len(),
        category,
        "Loaded alerts and macros for keyword resolution"
    );

    let matches = alerts
        .into_iter()
        .filter(|alert| alert_matches(alert, &keyword, &macros))
        .collect();

    Ok(Resolution {
        keyword,
        category: category.to_string(),
        alerts: matches,
    })
}

/// Read every page of a listing, `RESOLVER_PAGE_SIZE` rows at a time.
async fn fetch_all<T, F, Fut>(cancel: &CancellationToken, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<PageResult<T>>>,
{
    let mut all = Vec::new();
    let mut offset = 0;
    loop {
        cancel.check()?;
        let page = fetch_page(offset).await?;
        let more = page.has_more(RESOLVER_PAGE_SIZE);
        all.extend(page.items);
        if !more {
            return Ok(all);
        }
        offset += RESOLVER_PAGE_SIZE;
    }
}
