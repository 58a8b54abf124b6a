#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levelgate` is a minimal logging façade that gates argument evaluation
//! behind a bitwise level mask. Each of the eight base severities (`fatal`,
//! `error`, `warn`, `info`, `debug`, `verbose`, `trace`, `silly`) owns one
//! bit of the mask, so arbitrary subsets can be enabled, disabled, and
//! combined into named presets. Log call arguments may be thunks
//! ([`LogArg::lazy`]); a thunk is invoked only once its severity has passed
//! the gate, so disabled levels cost nothing beyond a bit test.
//!
//! # Design
//!
//! A [`Logger`] owns three pieces of state: an immutable level registry
//! (base names plus caller presets, with a value-to-name reverse map), the
//! mutable level mask, and a total severity-to-sink binding table fixed at
//! construction. Level references are polymorphic ([`LevelRef`]): a
//! [`Level`] tag, a name, a numeric string, or a raw mask value all work at
//! every call site. Sinks are plain callables receiving the realized
//! argument values; the defaults write space-separated lines to stderr
//! (fatal/error/warn) and stdout (the rest).
//!
//! # Invariants
//!
//! - The eight severity bits are pairwise distinct powers of two; their OR
//!   is [`mask::ALL`] (255), and `none` is 0.
//! - A failed gate evaluates nothing: no thunk runs, no sink is consulted.
//! - A passing call realizes arguments in their original order and count,
//!   and an argument list of zero still dispatches.
//! - Only the eight base severities have sinks; a call resolving to a
//!   preset name or unmapped numeric value is dropped silently.
//!
//! # Errors
//!
//! No operation in this crate fails or panics. Unresolvable level
//! references degrade to a fallback value (`0` for gating and bit
//! mutation, the `info` bit for mask assignment), and a failing thunk is
//! replaced in-position by a diagnostic string — logging is never the
//! cause of a caller-visible failure.
//!
//! # Examples
//!
//! Gate an expensive computation behind the `debug` bit:
//!
//! ```
//! use levelgate::{Level, LogArg, Logger, LoggerConfig, log_args};
//! use serde_json::{Value, json};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let capture = Rc::clone(&seen);
//! let logger = Logger::new(
//!     LoggerConfig::new()
//!         .level("production")
//!         .output(Level::Debug, move |args: &[Value]| {
//!             capture.borrow_mut().push(args.to_vec());
//!         }),
//! );
//!
//! // Disabled: the thunk never runs.
//! logger.debug(log_args!["delta:", LogArg::lazy(|| unreachable!())]);
//! assert!(seen.borrow().is_empty());
//!
//! logger.enable_level(Level::Debug);
//! logger.debug(log_args!["delta:", LogArg::lazy(|| json!(42))]);
//! assert_eq!(*seen.borrow(), vec![vec![json!("delta:"), json!(42)]]);
//! ```
//!
//! A failing thunk is recovered inline and never reaches the caller:
//!
//! ```
//! use levelgate::{LogArg, Logger, LoggerConfig};
//! use serde_json::Value;
//!
//! let logger = Logger::new(LoggerConfig::new().level("all"));
//! logger.error(vec![
//!     LogArg::from("a"),
//!     LogArg::try_lazy(|| Err::<Value, _>("boom")),
//!     LogArg::from("b"),
//! ]);
//! // stderr now carries: a [Error evaluating log argument function: boom] b
//! ```
//!
//! # See also
//!
//! - [`global`] for the per-thread default instance.
//! - The `tracing` feature for output bindings that forward into the
//!   tracing ecosystem.

mod args;
mod config;
pub mod global;
mod levels;
mod logger;
mod macros;
mod registry;
mod sink;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use args::LogArg;
pub use config::LoggerConfig;
pub use levels::{Level, mask};
pub use logger::Logger;
pub use registry::{LevelRef, LevelRegistry};
pub use sink::{OutputBindings, OutputFn, OutputOverrides, render_line};
