//! Byte-source decorators for Decor.
//!
//! Every source implements the [`InputStream`] capability: ranged reads,
//! skip, available, close, and mark/reset. Decorators implement the same
//! trait over another source, so they compose and nest freely.
//!
//! # Sources
//!
//! - [`BytesInput`] -- in-memory bytes with mark/reset
//! - [`ReaderInput`] -- any [`std::io::Read`], including files
//!
//! # Decorators and adapters
//!
//! - [`LoggingInput`] -- times each read and reports it to a [`LogSink`]
//! - [`StdReader`] -- exposes any source as [`std::io::Read`]
//!
//! # Sinks
//!
//! - [`TracingSink`] -- emits `tracing` events (the default)
//! - [`MemorySink`] -- keeps messages for inspection
//!
//! Sinks are shared through `Arc<dyn LogSink>` and are never closed by a
//! decorator.

pub mod bytes;
pub mod config;
pub mod error;
pub mod logging;
pub mod reader;
pub mod sink;
pub mod traits;

pub use bytes::BytesInput;
pub use config::{LogLevel, SinkConfig};
pub use error::{StreamError, StreamResult};
pub use logging::{LoggingInput, ReadStats};
pub use reader::{ReaderInput, StdReader};
pub use sink::{LogSink, MemorySink, TracingSink, READ_TARGET};
pub use traits::InputStream;
