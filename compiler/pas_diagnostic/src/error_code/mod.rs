//! Error codes for all front-end and runtime diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1002`) with the first digit
//! indicating the phase that reports it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Declaration (symbol and type) errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing `of`
    E1002,
    /// Missing `[`
    E1003,
    /// Missing `]`
    E1004,
    /// Invalid type
    E1005,
    /// Missing `..`
    E1006,
    /// Missing `)`
    E1007,
    /// Missing `;`
    E1008,
    /// Missing `=`
    E1009,
    /// Missing `:`
    E1010,
    /// Missing identifier
    E1011,
    /// Missing constant
    E1012,
    /// Expected expression
    E1013,
    /// Nesting too deep
    E1014,

    // Declaration Errors (E2xxx)
    /// Undefined identifier
    E2001,
    /// Redefined identifier
    E2002,
    /// Incompatible types
    E2003,
    /// Subrange minimum exceeds maximum
    E2004,
    /// Identifier does not name a type
    E2005,

    // Runtime / Eval Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Recursion limit exceeded
    E6031,
    /// Set literal exceeds element budget
    E6070,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9002,
}

impl ErrorCode {
    #[cfg(test)]
    pub(crate) const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        // Declaration
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        // Runtime / Eval
        ErrorCode::E6001,
        ErrorCode::E6031,
        ErrorCode::E6070,
        // Internal
        ErrorCode::E9002,
    ];

    /// Get the error code as a string (e.g., "E1002").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6031 => "E6031",
            ErrorCode::E6070 => "E6070",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Default message used when a component flags this code without
    /// composing its own.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "invalid number",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "missing `of`",
            ErrorCode::E1003 => "missing `[`",
            ErrorCode::E1004 => "missing `]`",
            ErrorCode::E1005 => "invalid type",
            ErrorCode::E1006 => "missing `..`",
            ErrorCode::E1007 => "missing `)`",
            ErrorCode::E1008 => "missing `;`",
            ErrorCode::E1009 => "missing `=`",
            ErrorCode::E1010 => "missing `:`",
            ErrorCode::E1011 => "missing identifier",
            ErrorCode::E1012 => "missing constant",
            ErrorCode::E1013 => "expected expression",
            ErrorCode::E1014 => "nesting too deep",
            ErrorCode::E2001 => "undefined identifier",
            ErrorCode::E2002 => "redefined identifier",
            ErrorCode::E2003 => "incompatible types",
            ErrorCode::E2004 => "minimum value exceeds maximum",
            ErrorCode::E2005 => "not a type identifier",
            ErrorCode::E6001 => "division by zero",
            ErrorCode::E6031 => "maximum recursion depth exceeded",
            ErrorCode::E6070 => "set literal has too many elements",
            ErrorCode::E9002 => "too many errors",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
