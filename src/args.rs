//! src/args.rs
//! Log call arguments: eager values and deferred thunks.

use std::fmt;

use serde_json::Value;

/// Boxed thunk storage. Errors are carried as rendered strings so a single
/// realized representation covers every caller-supplied error type.
type Thunk = Box<dyn FnOnce() -> Result<Value, String>>;

/// One argument of a log call.
///
/// An argument is either an already-materialized [`Value`] or a thunk that
/// produces one. Thunks are only invoked once the owning severity has passed
/// the level gate, so an argument that is expensive to compute costs nothing
/// while its level is disabled.
///
/// # Examples
///
/// ```
/// use levelgate::LogArg;
/// use serde_json::json;
///
/// let eager = LogArg::from("transfer complete");
/// let deferred = LogArg::lazy(|| json!({ "files": 812, "bytes": 104_857_600 }));
/// assert_eq!(eager.realize(), "transfer complete");
/// assert_eq!(deferred.realize()["files"], 812);
/// ```
pub enum LogArg {
    /// An eager value, passed through to the output binding unchanged.
    Value(Value),
    /// A deferred value, computed only when the call is actually emitted.
    Lazy(Thunk),
}

impl LogArg {
    /// Wraps an infallible thunk.
    pub fn lazy<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Value + 'static,
    {
        Self::Lazy(Box::new(move || Ok(thunk())))
    }

    /// Wraps a fallible thunk.
    ///
    /// If the thunk returns an error once invoked, the argument's position in
    /// the output is filled with a diagnostic string carrying the error's
    /// message; the call itself and its sibling arguments are unaffected.
    pub fn try_lazy<F, E>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<Value, E> + 'static,
        E: fmt::Display,
    {
        Self::Lazy(Box::new(move || thunk().map_err(|e| e.to_string())))
    }

    /// Materializes the argument.
    ///
    /// Eager values pass through unchanged. Thunks are invoked; a failing
    /// thunk never propagates — its error message is substituted inline.
    #[must_use]
    pub fn realize(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Lazy(thunk) => thunk().unwrap_or_else(|message| {
                Value::String(format!(
                    "[Error evaluating log argument function: {message}]"
                ))
            }),
        }
    }
}

impl fmt::Debug for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for LogArg {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i32> for LogArg {
    fn from(value: i32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for LogArg {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u32> for LogArg {
    fn from(value: u32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u64> for LogArg {
    fn from(value: u64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for LogArg {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}
