//! Incremental decoder for the export endpoint's row stream.
//!
//! Responsibilities:
//! - Turn a chunked byte stream of concatenated JSON objects into typed
//!   [`ExportRow`]s, one at a time, without buffering the whole body.
//! - Fold rows into the two shapes callers need: a list of final results, or
//!   the last final value of a `| stats count` query.
//!
//! Does NOT handle:
//! - Sending the request or checking the status (see `endpoints::export`).
//!
//! Invariants:
//! - A malformed or truncated object is a hard decode error; nothing decoded
//!   before it is returned to the caller.
//! - Messages rows never become data; `ERROR`/`FATAL` messages are logged at `warn`.

use bytes::{Buf, BytesMut};
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::models::{CountResult, ExportRow, SplunkMessage};

/// Pull-based decoder over a byte stream of concatenated JSON rows.
pub struct RowDecoder<S> {
    stream: S,
    buf: BytesMut,
    finished: bool,
}

impl<S> RowDecoder<S>
where
    S: Stream<Item = Result<bytes::Bytes>> + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            buf: BytesMut::new(),
            finished: false,
        }
    }

    /// Decode the next row, or `None` once the stream has ended cleanly.
    pub async fn next_row<T>(&mut self) -> Result<Option<ExportRow<T>>>
    where
        T: DeserializeOwned,
    {
        loop {
            let leading_ws = self
                .buf
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();
            self.buf.advance(leading_ws);

            if !self.buf.is_empty() {
                let mut rows =
                    serde_json::Deserializer::from_slice(&self.buf).into_iter::<ExportRow<T>>();
                match rows.next() {
                    Some(Ok(row)) => {
                        let used = rows.byte_offset();
                        self.buf.advance(used);
                        return Ok(Some(row));
                    }
                    Some(Err(err)) if err.is_eof() && !self.finished => {}
                    Some(Err(err)) => {
                        return Err(ClientError::InvalidResponse(format!(
                            "failed to decode export row: {err}"
                        )));
                    }
                    None => self.buf.clear(),
                }
            } else if self.finished {
                return Ok(None);
            }

            match self.stream.next().await {
                Some(chunk) => self.buf.extend_from_slice(&chunk?),
                None => self.finished = true,
            }
        }
    }

    /// Drain the stream, keeping the result of every final data row in order.
    ///
    /// Preview rows are intermediate snapshots of results that are repeated by
    /// the final rows, so they are dropped.
    pub async fn collect_results<T>(mut self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut results = Vec::new();
        let mut previews = 0usize;
        while let Some(row) = self.next_row::<T>().await? {
            match row {
                ExportRow::Data(row) if row.preview => previews += 1,
                ExportRow::Data(row) => results.push(row.result),
                ExportRow::Messages(messages) => log_messages(&messages),
                ExportRow::EndMarker => {}
            }
        }
        if previews > 0 {
            debug!(previews, "Dropped preview rows from export stream");
        }
        Ok(results)
    }

    /// Drain a `| stats count` stream and return the last non-preview count.
    ///
    /// A stream carrying only preview rows yields `0`.
    pub async fn last_final_count(mut self) -> Result<usize> {
        let mut count = 0usize;
        while let Some(row) = self.next_row::<CountResult>().await? {
            match row {
                ExportRow::Data(row) if row.preview => {}
                ExportRow::Data(row) => count = row.result.count,
                ExportRow::Messages(messages) => log_messages(&messages),
                ExportRow::EndMarker => {}
            }
        }
        Ok(count)
    }
}

fn log_messages(messages: &[SplunkMessage]) {
    for message in messages {
        if message.message_type.is_error() {
            warn!(message = %message, "Splunk reported an error in export stream");
        } else {
            debug!(message = %message, "Splunk export stream message");
        }
    }
}
