//! Destinations for read records.
//!
//! A sink is shared: decorators hold an `Arc<dyn LogSink>` and never close or
//! otherwise manage it. Thread-safety of a sink is the sink's own business;
//! the provided ones are `Send + Sync`.

use std::sync::{Mutex, PoisonError};

use crate::config::{LogLevel, SinkConfig};

/// Target of every record emitted by [`TracingSink`].
pub const READ_TARGET: &str = "decor_io::read";

/// Accepts formatted informational messages.
pub trait LogSink: Send + Sync {
    /// Record one message.
    fn info(&self, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn info(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to `tracing` as events on [`READ_TARGET`].
#[derive(Clone, Debug, Default)]
pub struct TracingSink {
    config: SinkConfig,
}

impl TracingSink {
    /// Sink emitting at the configured level.
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SinkConfig {
        &self.config
    }
}

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        match self.config.level {
            LogLevel::Trace => tracing::trace!(target: READ_TARGET, "{message}"),
            LogLevel::Debug => tracing::debug!(target: READ_TARGET, "{message}"),
            LogLevel::Info => tracing::info!(target: READ_TARGET, "{message}"),
            LogLevel::Warn => tracing::warn!(target: READ_TARGET, "{message}"),
            LogLevel::Error => tracing::error!(target: READ_TARGET, "{message}"),
        }
    }
}

/// Keeps every message in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
