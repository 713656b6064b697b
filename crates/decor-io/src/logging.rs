//! Timed, logged reads over any [`InputStream`].
//!
//! [`LoggingInput`] forwards every operation to the source it wraps. Ranged
//! reads are additionally timed and reported to a [`LogSink`] as
//!
//! ```text
//! Read {bytes} byte(s) from {source} in {millis}ms.
//! ```
//!
//! where `millis` is the elapsed wall-clock time truncated to whole
//! milliseconds. The single-byte and whole-buffer reads go through the ranged
//! read, so they are reported too. `skip`, `available`, `close`, `mark`,
//! `reset` and `mark_supported` are forwarded with no record.
//!
//! Bytes are neither buffered nor altered, and errors from the source are
//! returned as-is with no record emitted.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::StreamResult;
use crate::sink::{LogSink, TracingSink};
use crate::traits::InputStream;

/// Running totals over every ranged read a [`LoggingInput`] performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadStats {
    /// Number of ranged reads that returned successfully.
    pub reads: u64,
    /// Bytes transferred across those reads.
    pub bytes: u64,
    /// Time spent inside the wrapped source's reads.
    pub elapsed: Duration,
}

/// Decorator that logs the size and duration of every read.
///
/// There is no thread-safety guarantee: the decorator is the sole caller of
/// the wrapped source and takes `&mut self` for every read.
pub struct LoggingInput<S> {
    origin: S,
    source: String,
    sink: Arc<dyn LogSink>,
    stats: ReadStats,
}

impl<S: InputStream> LoggingInput<S> {
    /// Wrap `origin`, reporting reads to a default [`TracingSink`].
    pub fn new(origin: S, source: impl Into<String>) -> Self {
        Self::with_sink(origin, source, Arc::new(TracingSink::default()))
    }

    /// Wrap `origin`, reporting reads to a shared `sink`.
    pub fn with_sink(origin: S, source: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            origin,
            source: source.into(),
            sink,
            stats: ReadStats::default(),
        }
    }

    /// Label naming where the data comes from.
    pub fn source_label(&self) -> &str {
        &self.source
    }

    /// Totals accumulated so far.
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// Borrow the wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.origin
    }

    /// Mutably borrow the wrapped source. Reads made through it are not logged.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.origin
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.origin
    }
}

impl<S: InputStream> InputStream for LoggingInput<S> {
    fn read_range(&mut self, buf: &mut [u8], offset: usize, len: usize) -> StreamResult<usize> {
        let start = Instant::now();
        let bytes = self.origin.read_range(buf, offset, len)?;
        let end = Instant::now();
        let elapsed = end.duration_since(start);

        self.stats.reads += 1;
        self.stats.bytes += bytes as u64;
        self.stats.elapsed += elapsed;

        self.sink.info(&read_message(bytes, &self.source, elapsed));
        Ok(bytes)
    }

    fn skip(&mut self, n: u64) -> StreamResult<u64> {
        self.origin.skip(n)
    }

    fn available(&self) -> StreamResult<usize> {
        self.origin.available()
    }

    fn close(&mut self) -> StreamResult<()> {
        self.origin.close()
    }

    fn mark(&mut self, limit: usize) {
        self.origin.mark(limit)
    }

    fn reset(&mut self) -> StreamResult<()> {
        self.origin.reset()
    }

    fn mark_supported(&self) -> bool {
        self.origin.mark_supported()
    }
}

impl<S: fmt::Debug> fmt::Debug for LoggingInput<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingInput")
            .field("origin", &self.origin)
            .field("source", &self.source)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

fn read_message(bytes: usize, source: &str, elapsed: Duration) -> String {
    format!(
        "Read {bytes} byte(s) from {source} in {}ms.",
        elapsed.as_millis()
    )
}
