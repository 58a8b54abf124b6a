//! src/macros.rs
//! Convenience macros for building log argument lists.

/// Builds a `Vec<LogArg>` from mixed expressions.
///
/// Each element is converted through `LogArg::from`, so plain values,
/// `serde_json::Value`s, and already-constructed [`LogArg`](crate::LogArg)s
/// (such as thunks) can be mixed freely.
///
/// # Example
/// ```
/// use levelgate::{LogArg, Logger, log_args};
/// use serde_json::json;
///
/// let logger = Logger::default();
/// logger.info(log_args![
///     "requests served:",
///     1024u32,
///     LogArg::lazy(|| json!({ "p99_ms": 17 })),
/// ]);
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::LogArg::from($arg)),*]
    };
}

#[cfg(test)]
mod tests {
    use crate::LogArg;
    use serde_json::json;

    #[test]
    fn builds_mixed_argument_lists() {
        let args = log_args!["a", 1u32, true, json!(null)];
        let realized: Vec<_> = args.into_iter().map(LogArg::realize).collect();
        assert_eq!(realized, vec![json!("a"), json!(1), json!(true), json!(null)]);
    }

    #[test]
    fn accepts_prebuilt_args_and_trailing_comma() {
        let args = log_args![LogArg::lazy(|| json!("thunked")), "tail",];
        let realized: Vec<_> = args.into_iter().map(LogArg::realize).collect();
        assert_eq!(realized, vec![json!("thunked"), json!("tail")]);
    }

    #[test]
    fn empty_invocation_yields_empty_list() {
        let args: Vec<LogArg> = log_args![];
        assert!(args.is_empty());
    }
}
