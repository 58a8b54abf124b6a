//! src/global.rs
//! Thread-local default logger instance.

use std::cell::RefCell;

use super::config::LoggerConfig;
use super::logger::Logger;

thread_local! {
    static DEFAULT: RefCell<Logger> = RefCell::new(Logger::default());
}

/// Replaces the current thread's default logger.
pub fn init(config: LoggerConfig) {
    DEFAULT.with(|logger| {
        *logger.borrow_mut() = Logger::new(config);
    });
}

/// Runs `f` against the current thread's default logger.
///
/// The default instance is constructed lazily with the default configuration
/// and lives for the thread's lifetime; there is no teardown.
pub fn with<R>(f: impl FnOnce(&Logger) -> R) -> R {
    DEFAULT.with(|logger| f(&logger.borrow()))
}
