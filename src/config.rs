//! src/config.rs
//! Construction-time configuration for a logger instance.

use serde_json::Value;

use super::levels::Level;
use super::registry::LevelRef;
use super::sink::OutputOverrides;

/// Configuration record consumed by [`Logger::new`](crate::Logger::new).
///
/// Every field is optional: the default configuration yields a logger at the
/// `info` level with no custom presets and the default console sinks.
///
/// Presets are kept in insertion order; when two entries bind different names
/// to the same value, the later entry wins the reverse (value-to-name)
/// mapping, and a repeated name keeps its last value.
///
/// # Examples
///
/// ```
/// use levelgate::{Level, Logger, LoggerConfig};
///
/// let logger = Logger::new(
///     LoggerConfig::new()
///         .level("production")
///         .preset("ops", 1 | 2 | 8),
/// );
/// assert_eq!(logger.level(), 7);
/// assert!(logger.should_log(Level::Warn));
/// assert!(!logger.should_log(Level::Debug));
/// ```
#[derive(Debug, Default)]
pub struct LoggerConfig {
    pub(crate) level: Option<LevelRef>,
    pub(crate) presets: Vec<(String, u32)>,
    pub(crate) outputs: OutputOverrides,
}

impl LoggerConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration starting from a prebuilt override set, such
    /// as the one produced by the tracing bridge's `tracing_overrides`.
    #[must_use]
    pub fn with_outputs(outputs: OutputOverrides) -> Self {
        Self {
            outputs,
            ..Self::default()
        }
    }

    /// Sets the initial level: a [`Level`] tag, a name or numeric string, a
    /// preset name, or a raw mask value. Unresolvable input falls back to
    /// the `info` bit at construction time.
    #[must_use]
    pub fn level(mut self, level: impl Into<LevelRef>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Registers a named preset, or overrides `production`/`development`.
    #[must_use]
    pub fn preset(mut self, name: impl Into<String>, value: u32) -> Self {
        self.presets.push((name.into(), value));
        self
    }

    /// Binds an output sink to a severity, replacing its default.
    #[must_use]
    pub fn output<F>(mut self, level: Level, sink: F) -> Self
    where
        F: Fn(&[Value]) + 'static,
    {
        self.outputs.set(level, sink);
        self
    }
}
