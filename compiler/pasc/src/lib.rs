//! Command-line driver for the Pascal set front end.
//!
//! `pasc check` parses `const`, `type` and `var` sections and lists what
//! they declare. `pasc eval` additionally evaluates expressions against
//! those declarations. Diagnostics from every phase are collected in a
//! `DiagnosticQueue` per source and rendered to stderr.

mod error;
pub mod options;
mod session;
mod tracing_setup;

pub use error::DriverError;
pub use options::{parse_args, Binding, Command, Options, USAGE};
pub use session::{run, Report};
pub use tracing_setup::init_tracing;
