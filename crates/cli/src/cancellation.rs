//! CLI cancellation helpers.
//!
//! Responsibilities:
//! - Cancel the shared token when the user presses Ctrl+C.
//! - Centralize the cancellation message and the SIGINT exit code (130).
//!
//! Does NOT handle:
//! - Deciding when to check for cancellation; the client checks the token
//!   around every request.
//!
//! Invariants:
//! - Once cancelled, the token remains cancelled for the rest of the process.

use splunk_catalog_client::CancellationToken;

/// Standard Unix exit code for SIGINT: 128 + 2.
pub const SIGINT_EXIT_CODE: u8 = 130;

/// Spawn a task that cancels `cancel` on the first Ctrl+C.
pub fn cancel_on_ctrl_c(cancel: &CancellationToken) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel.cancel();
    });
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
