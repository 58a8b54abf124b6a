//! src/tracing_bridge.rs
//! Output bindings that forward realized arguments into the tracing crate.
//!
//! Level gating still happens in [`Logger`](crate::Logger); these bindings
//! only cover the emission side, mapping each base severity onto the closest
//! tracing level. `fatal` and `error` both emit at `ERROR` since tracing has
//! no level above it, and the three chattiest severities collapse onto
//! `TRACE`.
//!
//! # Usage
//!
//! ```
//! use levelgate::{Logger, LoggerConfig, log_args};
//! use levelgate::tracing_bridge::tracing_overrides;
//!
//! let logger = Logger::new(
//!     LoggerConfig::with_outputs(tracing_overrides()).level("development"),
//! );
//! logger.warn(log_args!["disk nearly full"]);
//! ```

use crate::levels::Level;
use crate::sink::{OutputOverrides, render_line};

/// Builds a full override set that forwards every severity into `tracing`
/// events with target `"levelgate"`.
#[must_use]
pub fn tracing_overrides() -> OutputOverrides {
    let mut overrides = OutputOverrides::new();
    overrides.set(Level::Fatal, |args| {
        tracing::error!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Error, |args| {
        tracing::error!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Warn, |args| {
        tracing::warn!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Info, |args| {
        tracing::info!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Debug, |args| {
        tracing::debug!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Verbose, |args| {
        tracing::trace!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Trace, |args| {
        tracing::trace!(target: "levelgate", "{}", render_line(args));
    });
    overrides.set(Level::Silly, |args| {
        tracing::trace!(target: "levelgate", "{}", render_line(args));
    });
    overrides
}
