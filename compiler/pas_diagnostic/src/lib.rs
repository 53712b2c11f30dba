//! Diagnostic system for the Pascal set front end.
//!
//! Every phase reports through a [`DiagnosticSink`]. Reporting never
//! interrupts the reporter: the lexer, parser and evaluator each substitute a
//! documented default and continue. Diagnostics carry:
//! - an [`ErrorCode`] for searchability
//! - a message (what went wrong)
//! - a primary span (where it went wrong)
//! - optional secondary labels and notes

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{
    flagged, redefined_identifier, undefined_identifier, unexpected_token, Diagnostic,
    DiagnosticSink, Label,
};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
