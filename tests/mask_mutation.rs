//! Integration tests for mask mutation and enumeration.
//!
//! These tests verify enable/disable bit arithmetic, the fixed enumeration
//! order of enabled severities, and the polymorphic level-assignment forms.

use levelgate::{Level, Logger, LoggerConfig};

// ============================================================================
// Enable / Disable Tests
// ============================================================================

/// Verifies enabling individual levels ORs their bits together.
#[test]
fn enable_accumulates_bits() {
    let logger = Logger::new(LoggerConfig::new().level("none"));
    logger.enable_level("warn");
    logger.enable_level("error");
    assert_eq!(logger.level(), 6);
}

/// Verifies disabling a level clears exactly its bit.
#[test]
fn disable_clears_one_bit() {
    let logger = Logger::new(LoggerConfig::new().level("production"));
    logger.disable_level("error");
    assert_eq!(logger.level(), 5);
}

/// Verifies enabling an already-enabled level is idempotent.
#[test]
fn enable_is_idempotent() {
    let logger = Logger::new(LoggerConfig::new().level(Level::Info));
    logger.enable_level(Level::Info);
    assert_eq!(logger.level(), 8);
}

/// Verifies disabling an absent level leaves the mask unchanged.
#[test]
fn disable_of_absent_bit_is_a_no_op() {
    let logger = Logger::new(LoggerConfig::new().level("production"));
    logger.disable_level(Level::Silly);
    assert_eq!(logger.level(), 7);
}

/// Verifies unresolvable references make enable/disable inert, not fatal.
#[test]
fn unresolvable_mutation_is_a_no_op() {
    let logger = Logger::new(LoggerConfig::new().level("production"));
    logger.enable_level("bogus");
    assert_eq!(logger.level(), 7);
    logger.disable_level("bogus");
    assert_eq!(logger.level(), 7);
}

/// Verifies enabling a preset name sets all of its member bits.
#[test]
fn enable_accepts_preset_names() {
    let logger = Logger::new(LoggerConfig::new().level("none"));
    logger.enable_level("development");
    assert_eq!(logger.level(), 31);
}

// ============================================================================
// Enumeration Tests
// ============================================================================

/// Verifies enabled severities are reported in fixed declaration order.
#[test]
fn enabled_levels_follow_declaration_order() {
    let logger = Logger::new(LoggerConfig::new().level("production"));
    assert_eq!(
        logger.enabled_levels(),
        vec![Level::Fatal, Level::Error, Level::Warn]
    );
}

/// Verifies enumeration order ignores the order bits were enabled in.
#[test]
fn enumeration_order_is_independent_of_mutation_order() {
    let logger = Logger::new(LoggerConfig::new().level("none"));
    logger.enable_level(Level::Silly);
    logger.enable_level(Level::Fatal);
    logger.enable_level(Level::Debug);
    assert_eq!(
        logger.enabled_levels(),
        vec![Level::Fatal, Level::Debug, Level::Silly]
    );
}

/// Verifies presets never appear in the enumeration, only base names.
#[test]
fn enumeration_never_contains_preset_names() {
    let logger = Logger::new(LoggerConfig::new().level("production"));
    let names: Vec<&str> = logger.enabled_levels().iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["fatal", "error", "warn"]);
    assert!(!names.contains(&"production"));
}

/// Verifies the empty mask enumerates to nothing.
#[test]
fn empty_mask_enumerates_empty() {
    let logger = Logger::new(LoggerConfig::new().level("none"));
    assert!(logger.enabled_levels().is_empty());
}

// ============================================================================
// Mask Assignment Tests
// ============================================================================

/// Verifies name, numeric-string, and fallback assignment round-trips.
#[test]
fn set_level_round_trips_each_reference_form() {
    let logger = Logger::default();

    logger.set_level("debug");
    assert_eq!(logger.level(), 16);

    logger.set_level("16");
    assert_eq!(logger.level(), 16);

    logger.set_level("bogus");
    assert_eq!(logger.level(), 8);

    logger.set_level(Level::Trace);
    assert_eq!(logger.level(), 64);

    logger.set_level(255u32);
    assert_eq!(logger.level(), 255);
}

/// Verifies assigning a raw value outside the base bits is accepted as-is.
#[test]
fn set_level_accepts_foreign_bits() {
    let logger = Logger::default();
    logger.set_level(512u32);
    assert_eq!(logger.level(), 512);
    assert!(logger.should_log(512u32));
    assert!(!logger.should_log(Level::Info));
}
