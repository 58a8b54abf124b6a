//! src/levels.rs
//! Severity tags, their bit values, and the named mask presets.

/// A base log severity, bound to a unique power-of-two bit value.
///
/// Declaration order is significant: enumeration helpers such as
/// [`Logger::enabled_levels`](crate::Logger::enabled_levels) always report
/// severities in this order, regardless of mask contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Unrecoverable failures.
    Fatal,
    /// Errors the application keeps running through.
    Error,
    /// Suspicious but non-fatal conditions.
    Warn,
    /// General informational output.
    Info,
    /// Diagnostic output for development.
    Debug,
    /// Chatty diagnostic output.
    Verbose,
    /// Fine-grained execution traces.
    Trace,
    /// Everything, however trivial.
    Silly,
}

impl Level {
    /// All base severities in fixed declaration order.
    pub const ALL: [Self; 8] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Verbose,
        Self::Trace,
        Self::Silly,
    ];

    /// The severity's bit value within a level mask.
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::Fatal => 1,
            Self::Error => 2,
            Self::Warn => 4,
            Self::Info => 8,
            Self::Debug => 16,
            Self::Verbose => 32,
            Self::Trace => 64,
            Self::Silly => 128,
        }
    }

    /// The severity's canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
            Self::Trace => "trace",
            Self::Silly => "silly",
        }
    }

    /// Looks up a severity by its canonical name (case-sensitive).
    ///
    /// Preset names such as `"production"` are not severities and return
    /// `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fatal" => Some(Self::Fatal),
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "verbose" => Some(Self::Verbose),
            "trace" => Some(Self::Trace),
            "silly" => Some(Self::Silly),
            _ => None,
        }
    }

    /// Looks up a severity by its exact bit value.
    ///
    /// Combined masks (for example `7`) are not single severities and return
    /// `None`.
    #[must_use]
    pub const fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            1 => Some(Self::Fatal),
            2 => Some(Self::Error),
            4 => Some(Self::Warn),
            8 => Some(Self::Info),
            16 => Some(Self::Debug),
            32 => Some(Self::Verbose),
            64 => Some(Self::Trace),
            128 => Some(Self::Silly),
            _ => None,
        }
    }

    /// Returns `true` if this severity's bit is set in `mask`.
    #[must_use]
    pub const fn enabled_in(self, mask: u32) -> bool {
        mask & self.bit() != 0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named mask values combining zero or more severities.
pub mod mask {
    use super::Level;

    /// No severity enabled; every log call is a no-op.
    pub const NONE: u32 = 0;

    /// All eight base severities.
    pub const ALL: u32 = Level::Fatal.bit()
        | Level::Error.bit()
        | Level::Warn.bit()
        | Level::Info.bit()
        | Level::Debug.bit()
        | Level::Verbose.bit()
        | Level::Trace.bit()
        | Level::Silly.bit();

    /// Default production preset: fatal, error, and warn.
    pub const PRODUCTION: u32 = Level::Fatal.bit() | Level::Error.bit() | Level::Warn.bit();

    /// Default development preset: production plus info and debug.
    pub const DEVELOPMENT: u32 = PRODUCTION | Level::Info.bit() | Level::Debug.bit();
}
