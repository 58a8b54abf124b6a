//! src/sink.rs
//! Output bindings: one sink per severity, total by construction.

use std::fmt;
use std::io::{self, Write};

use serde_json::Value;

use super::levels::Level;

/// An output sink: receives the fully-realized arguments of one log call.
///
/// Sinks produce a side effect and nothing else; whatever they forward into
/// is outside this crate's responsibility.
pub type OutputFn = Box<dyn Fn(&[Value])>;

/// Renders realized arguments as a single space-separated line.
///
/// Strings render bare (no surrounding quotes); every other value renders in
/// its JSON form. Default sinks and the tracing bridge share this helper, and
/// custom sinks may reuse it.
#[must_use]
pub fn render_line(args: &[Value]) -> String {
    let mut line = String::new();
    for (index, value) in args.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        match value {
            Value::String(text) => line.push_str(text),
            other => line.push_str(&other.to_string()),
        }
    }
    line
}

fn error_sink() -> OutputFn {
    // I/O failures on a diagnostic channel are swallowed; a log call must
    // never surface an error to the caller.
    Box::new(|args| {
        let _ = writeln!(io::stderr().lock(), "{}", render_line(args));
    })
}

fn warn_sink() -> OutputFn {
    Box::new(|args| {
        let _ = writeln!(io::stderr().lock(), "{}", render_line(args));
    })
}

fn general_sink() -> OutputFn {
    Box::new(|args| {
        let _ = writeln!(io::stdout().lock(), "{}", render_line(args));
    })
}

/// Caller-supplied sink replacements, one optional slot per severity.
///
/// Any slot left empty falls back to the default sink for that severity's
/// class: fatal and error to the stderr error sink, warn to the stderr warn
/// sink, and the remaining five to the stdout general sink.
#[derive(Default)]
pub struct OutputOverrides {
    fatal: Option<OutputFn>,
    error: Option<OutputFn>,
    warn: Option<OutputFn>,
    info: Option<OutputFn>,
    debug: Option<OutputFn>,
    verbose: Option<OutputFn>,
    trace: Option<OutputFn>,
    silly: Option<OutputFn>,
}

impl OutputOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sink for a severity.
    pub fn set<F>(&mut self, level: Level, sink: F)
    where
        F: Fn(&[Value]) + 'static,
    {
        let sink: OutputFn = Box::new(sink);
        match level {
            Level::Fatal => self.fatal = Some(sink),
            Level::Error => self.error = Some(sink),
            Level::Warn => self.warn = Some(sink),
            Level::Info => self.info = Some(sink),
            Level::Debug => self.debug = Some(sink),
            Level::Verbose => self.verbose = Some(sink),
            Level::Trace => self.trace = Some(sink),
            Level::Silly => self.silly = Some(sink),
        }
    }
}

impl fmt::Debug for OutputOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<&'static str> = Level::ALL
            .iter()
            .filter(|level| match level {
                Level::Fatal => self.fatal.is_some(),
                Level::Error => self.error.is_some(),
                Level::Warn => self.warn.is_some(),
                Level::Info => self.info.is_some(),
                Level::Debug => self.debug.is_some(),
                Level::Verbose => self.verbose.is_some(),
                Level::Trace => self.trace.is_some(),
                Level::Silly => self.silly.is_some(),
            })
            .map(|level| level.name())
            .collect();
        f.debug_struct("OutputOverrides").field("set", &set).finish()
    }
}

/// The complete severity-to-sink mapping for one logger instance.
///
/// Unlike the override set, this mapping is total: every severity has a sink
/// once construction finishes, so dispatch is a plain lookup with no fallback
/// path.
pub struct OutputBindings {
    fatal: OutputFn,
    error: OutputFn,
    warn: OutputFn,
    info: OutputFn,
    debug: OutputFn,
    verbose: OutputFn,
    trace: OutputFn,
    silly: OutputFn,
}

impl OutputBindings {
    /// Builds the total mapping, filling unset slots with class defaults.
    #[must_use]
    pub fn from_overrides(overrides: OutputOverrides) -> Self {
        Self {
            fatal: overrides.fatal.unwrap_or_else(error_sink),
            error: overrides.error.unwrap_or_else(error_sink),
            warn: overrides.warn.unwrap_or_else(warn_sink),
            info: overrides.info.unwrap_or_else(general_sink),
            debug: overrides.debug.unwrap_or_else(general_sink),
            verbose: overrides.verbose.unwrap_or_else(general_sink),
            trace: overrides.trace.unwrap_or_else(general_sink),
            silly: overrides.silly.unwrap_or_else(general_sink),
        }
    }

    /// The sink bound to a severity.
    #[must_use]
    pub fn get(&self, level: Level) -> &OutputFn {
        match level {
            Level::Fatal => &self.fatal,
            Level::Error => &self.error,
            Level::Warn => &self.warn,
            Level::Info => &self.info,
            Level::Debug => &self.debug,
            Level::Verbose => &self.verbose,
            Level::Trace => &self.trace,
            Level::Silly => &self.silly,
        }
    }
}

impl Default for OutputBindings {
    fn default() -> Self {
        Self::from_overrides(OutputOverrides::default())
    }
}

impl fmt::Debug for OutputBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputBindings").finish_non_exhaustive()
    }
}
