//! Integration tests for output binding dispatch.
//!
//! These tests verify that each severity method reaches exactly its own
//! bound sink, that the default call form targets info, and the end-to-end
//! scenario of a custom error sink with a deferred expensive argument.

use levelgate::{Level, LogArg, Logger, LoggerConfig, global, log_args};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Captured = Rc<RefCell<Vec<(Level, Vec<Value>)>>>;

/// Builds a logger with every severity bound to one shared capture buffer,
/// tagged by severity.
fn fully_captured(level: &str) -> (Logger, Captured) {
    let seen: Captured = Rc::new(RefCell::new(Vec::new()));
    let mut config = LoggerConfig::new().level(level);
    for severity in Level::ALL {
        let witness = Rc::clone(&seen);
        config = config.output(severity, move |args: &[Value]| {
            witness.borrow_mut().push((severity, args.to_vec()));
        });
    }
    (Logger::new(config), seen)
}

// ============================================================================
// Per-Severity Routing Tests
// ============================================================================

/// Verifies each severity method routes to its own binding.
#[test]
fn each_severity_method_hits_its_own_sink() {
    let (logger, seen) = fully_captured("all");

    logger.fatal(log_args!["f"]);
    logger.error(log_args!["e"]);
    logger.warn(log_args!["w"]);
    logger.info(log_args!["i"]);
    logger.debug(log_args!["d"]);
    logger.verbose(log_args!["v"]);
    logger.trace(log_args!["t"]);
    logger.silly(log_args!["s"]);

    let seen = seen.borrow();
    let routed: Vec<(Level, &Value)> = seen.iter().map(|(l, a)| (*l, &a[0])).collect();
    assert_eq!(
        routed,
        vec![
            (Level::Fatal, &json!("f")),
            (Level::Error, &json!("e")),
            (Level::Warn, &json!("w")),
            (Level::Info, &json!("i")),
            (Level::Debug, &json!("d")),
            (Level::Verbose, &json!("v")),
            (Level::Trace, &json!("t")),
            (Level::Silly, &json!("s")),
        ]
    );
}

/// Verifies the default call form behaves exactly like info.
#[test]
fn default_call_form_targets_info() {
    let (logger, seen) = fully_captured("all");
    logger.log(log_args!["default"]);
    assert_eq!(
        *seen.borrow(),
        vec![(Level::Info, vec![json!("default")])]
    );
}

/// Verifies gated-off severities reach no sink at all.
#[test]
fn disabled_severities_reach_no_sink() {
    let (logger, seen) = fully_captured("production");
    logger.info(log_args!["quiet"]);
    logger.debug(log_args!["quiet"]);
    logger.silly(log_args!["quiet"]);
    assert!(seen.borrow().is_empty());

    logger.warn(log_args!["loud"]);
    assert_eq!(seen.borrow().len(), 1);
}

/// Verifies numeric and name references route to the same binding.
#[test]
fn numeric_reference_routes_like_the_name() {
    let (logger, seen) = fully_captured("all");
    logger.emit(2u32, log_args!["by value"]);
    logger.emit("error", log_args!["by name"]);
    assert_eq!(
        *seen.borrow(),
        vec![
            (Level::Error, vec![json!("by value")]),
            (Level::Error, vec![json!("by name")]),
        ]
    );
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Verifies the error-capture scenario: one call, one thunk invocation, one
/// sink invocation, exact argument list.
#[test]
fn error_sink_scenario_with_expensive_argument() {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let capture_witness = Rc::clone(&captured);
    let logger = Logger::new(LoggerConfig::new().level("error").output(
        Level::Error,
        move |args: &[Value]| {
            capture_witness.borrow_mut().push(args.to_vec());
        },
    ));

    let expensive_calls = Rc::new(Cell::new(0u32));
    let call_witness = Rc::clone(&expensive_calls);
    logger.error(log_args![
        "Error message:",
        LogArg::lazy(move || {
            call_witness.set(call_witness.get() + 1);
            json!("expensive")
        }),
    ]);

    assert_eq!(expensive_calls.get(), 1);
    assert_eq!(
        *captured.borrow(),
        vec![vec![json!("Error message:"), json!("expensive")]]
    );
}

/// Verifies the thread default instance gates and mutates like any other.
#[test]
fn global_default_instance_round_trip() {
    global::init(LoggerConfig::new().level("error"));
    assert!(global::with(|logger| logger.should_log(Level::Error)));
    assert!(!global::with(|logger| logger.should_log(Level::Info)));

    global::with(|logger| logger.enable_level(Level::Info));
    assert!(global::with(|logger| logger.should_log(Level::Info)));
    assert_eq!(global::with(Logger::level), 10);

    // Disabled level on the default instance: thunk must not run.
    global::with(|logger| {
        logger.debug(log_args![LogArg::lazy(|| unreachable!("gated off"))]);
    });
}
