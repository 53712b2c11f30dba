//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`decl`]: `const`, `type` and `var` sections
//! - [`expr`]: expressions, including set literals
//! - [`ty`]: type specifications (simple, array and set types)
//!
//! Every production returns a value even after an error. Missing tokens are
//! flagged at the current token, and recovery skips to a synchronization set
//! chosen by the caller.

mod decl;
mod expr;
mod ty;
