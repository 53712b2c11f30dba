//! Host-level driver failures.
//!
//! Problems in the Pascal source are diagnostics, not errors; these cover
//! everything that stops the driver before or around compilation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`{0}` expects a value")]
    MissingValue(&'static str),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid binding `{0}`; expected `name=expression`")]
    InvalidBinding(String),

    #[error("`{0}` is not a declared variable")]
    NotAVariable(String),

    #[error("cannot read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

impl DriverError {
    /// Whether the error is a command-line mistake worth a usage hint.
    pub fn is_usage(&self) -> bool {
        !matches!(self, DriverError::Read { .. } | DriverError::Write(_))
    }
}
