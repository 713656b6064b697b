use serde::{Deserialize, Serialize};

/// Severity at which [`TracingSink`](crate::TracingSink) emits read records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Configuration for the default tracing-backed log sink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Level of every emitted read record.
    pub level: LogLevel,
}

impl SinkConfig {
    /// Configuration emitting at `level`.
    pub fn with_level(level: LogLevel) -> Self {
        Self { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info() {
        assert_eq!(SinkConfig::default().level, LogLevel::Info);
    }

    #[test]
    fn level_uses_lowercase_names() {
        let json = serde_json::to_string(&SinkConfig::with_level(LogLevel::Warn)).unwrap();
        assert_eq!(json, r#"{"level":"warn"}"#);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: SinkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SinkConfig::default());
    }

    #[test]
    fn unknown_level_rejected() {
        assert!(serde_json::from_str::<SinkConfig>(r#"{"level":"loud"}"#).is_err());
    }

    #[test]
    fn converts_to_tracing_level() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }
}
