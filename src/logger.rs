//! src/logger.rs
//! The level-gated logger: evaluation gate, mask mutation, introspection.

use std::cell::Cell;
use std::fmt;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::args::LogArg;
use super::config::LoggerConfig;
use super::levels::Level;
use super::registry::{LevelRef, LevelRegistry};
use super::sink::OutputBindings;

/// A level-gated lazy logger.
///
/// The logger owns a level registry, a mutable level mask, and a total
/// severity-to-sink binding table, all fixed at construction except the mask.
/// Every call first tests the requested level against the mask; only on a
/// pass are lazy arguments realized and handed to the bound sink. A failed
/// gate is a no-op: no thunk runs, no allocation for the argument list is
/// inspected, no sink is consulted.
///
/// The mask lives in a [`Cell`], so the whole call surface takes `&self`.
/// The logger assumes single-threaded use; it is deliberately neither `Send`
/// nor `Sync`.
///
/// # Examples
///
/// ```
/// use levelgate::{Level, Logger, LoggerConfig, log_args};
///
/// let logger = Logger::new(LoggerConfig::new().level("error"));
///
/// // Disabled level: the thunk is never invoked.
/// logger.info(log_args!["starting", levelgate::LogArg::lazy(|| unreachable!())]);
///
/// logger.enable_level(Level::Info);
/// assert!(logger.should_log("info"));
/// ```
pub struct Logger {
    registry: LevelRegistry,
    mask: Cell<u32>,
    outputs: OutputBindings,
}

impl Logger {
    /// Builds a logger from a configuration record.
    ///
    /// An unresolvable initial level falls back to the `info` bit; a missing
    /// one defaults to `info` outright.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let registry = LevelRegistry::new(&config.presets);
        let initial = config.level.unwrap_or(LevelRef::Tag(Level::Info));
        let mask = registry.resolve(&initial, Level::Info.bit());
        Self {
            registry,
            mask: Cell::new(mask),
            outputs: OutputBindings::from_overrides(config.outputs),
        }
    }

    /// The current raw level mask.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.mask.get()
    }

    /// Replaces the level mask.
    ///
    /// Accepts the same polymorphic reference as every other operation;
    /// unresolvable input falls back to the `info` bit rather than failing.
    pub fn set_level(&self, level: impl Into<LevelRef>) {
        self.mask
            .set(self.registry.resolve(&level.into(), Level::Info.bit()));
    }

    /// Sets the referenced level's bits in the mask.
    ///
    /// Unresolvable input resolves to `0`, leaving the mask unchanged.
    pub fn enable_level(&self, level: impl Into<LevelRef>) {
        let bits = self.registry.resolve(&level.into(), 0);
        self.mask.set(self.mask.get() | bits);
    }

    /// Clears the referenced level's bits from the mask.
    ///
    /// Unresolvable input resolves to `0`, leaving the mask unchanged.
    pub fn disable_level(&self, level: impl Into<LevelRef>) {
        let bits = self.registry.resolve(&level.into(), 0);
        self.mask.set(self.mask.get() & !bits);
    }

    /// The base severities currently enabled, in fixed declaration order.
    ///
    /// Presets and custom names never appear here, even when their value is
    /// a single set bit.
    #[must_use]
    pub fn enabled_levels(&self) -> Vec<Level> {
        let mask = self.mask.get();
        Level::ALL
            .into_iter()
            .filter(|level| level.enabled_in(mask))
            .collect()
    }

    /// Whether a call at the referenced level would currently emit.
    ///
    /// A mask of `0` short-circuits to `false` before any resolution, and
    /// unresolvable input resolves to `0`, so garbage never passes the gate
    /// and never raises.
    #[must_use]
    pub fn should_log(&self, level: impl Into<LevelRef>) -> bool {
        let mask = self.mask.get();
        if mask == 0 {
            return false;
        }
        mask & self.registry.resolve(&level.into(), 0) != 0
    }

    /// Emits a call at an arbitrary level reference.
    ///
    /// The severity methods ([`fatal`](Self::fatal) through
    /// [`silly`](Self::silly)) all forward here. The gate runs first: when it
    /// fails, the arguments are dropped without any thunk being invoked. On a
    /// pass, arguments are realized in order, then the call dispatches to the
    /// sink bound to the resolved base severity. A level that resolves to a
    /// preset name or an unmapped numeric value has no sink and the call is
    /// dropped after realization — there is no fallback sink.
    pub fn emit<I>(&self, level: impl Into<LevelRef>, args: I)
    where
        I: IntoIterator<Item = LogArg>,
    {
        let level = level.into();
        let mask = self.mask.get();
        if mask == 0 {
            return;
        }
        let resolved = self.registry.resolve(&level, 0);
        if mask & resolved == 0 {
            return;
        }

        let realized: Vec<Value> = args.into_iter().map(LogArg::realize).collect();

        let tag = match &level {
            LevelRef::Tag(tag) => Some(*tag),
            // A known name dispatches by that name, even if a preset shadows
            // its value; unknown names fall through to the reverse map like
            // raw numeric levels.
            LevelRef::Name(name) if self.registry.contains(name) => Level::from_name(name),
            LevelRef::Name(_) | LevelRef::Value(_) => self
                .registry
                .name_of(resolved)
                .and_then(Level::from_name),
        };
        if let Some(tag) = tag {
            self.outputs.get(tag)(&realized);
        }
    }

    /// Emits at `fatal`.
    pub fn fatal<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Fatal, args);
    }

    /// Emits at `error`.
    pub fn error<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Error, args);
    }

    /// Emits at `warn`.
    pub fn warn<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Warn, args);
    }

    /// Emits at `info`.
    pub fn info<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Info, args);
    }

    /// Emits at `debug`.
    pub fn debug<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Debug, args);
    }

    /// Emits at `verbose`.
    pub fn verbose<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Verbose, args);
    }

    /// Emits at `trace`.
    pub fn trace<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Trace, args);
    }

    /// Emits at `silly`.
    pub fn silly<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Silly, args);
    }

    /// The default call form; identical to [`info`](Self::info).
    pub fn log<I: IntoIterator<Item = LogArg>>(&self, args: I) {
        self.emit(Level::Info, args);
    }

    /// The full name-to-value table, presets included.
    #[must_use]
    pub fn levels(&self) -> FxHashMap<String, u32> {
        self.registry.name_table()
    }

    /// The value-to-name reverse table.
    #[must_use]
    pub fn level_names(&self) -> &FxHashMap<u32, String> {
        self.registry.reverse_table()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mask", &self.mask.get())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
