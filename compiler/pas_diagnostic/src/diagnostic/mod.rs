//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], plus the [`DiagnosticSink`] trait
//! through which every phase reports errors. Every diagnostic is an error;
//! none of them stops the phase that reports it.

use std::fmt;

use pas_ir::Span;

use crate::ErrorCode;

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source location to highlight.
    pub span: Span,
    /// The label text explaining this location.
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with the context needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled spans showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// The component that flagged the error (e.g. `"set type parser"`).
    pub component: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            component: None,
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Record which component flagged the error.
    pub fn with_component(mut self, component: &'static str) -> Self {
        self.component = Some(component);
        self
    }

    /// Get the primary span (first primary label's span).
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// Receiver for flagged errors.
///
/// Reporting never fails and never interrupts the caller: the flagging
/// component substitutes its documented default and carries on.
pub trait DiagnosticSink {
    /// Report a fully built diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);

    /// Report `code` at `span` with the code's default message.
    fn flag(&mut self, span: Span, code: ErrorCode, component: &'static str) {
        self.emit(flagged(span, code, component));
    }
}

/// Collecting sink, handy for tests and for callers that post-process.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Build the diagnostic [`DiagnosticSink::flag`] reports.
pub fn flagged(span: Span, code: ErrorCode, component: &'static str) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(code.description())
        .with_label(span, code.description())
        .with_component(component)
}

/// Create an "unexpected token" diagnostic.
pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!(
            "unexpected token: expected {expected}, found {found}"
        ))
        .with_label(span, format!("expected {expected}"))
}

/// Create an "undefined identifier" diagnostic.
pub fn undefined_identifier(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("undefined identifier `{name}`"))
        .with_label(span, "not declared")
}

/// Create a "redefined identifier" diagnostic pointing at both definitions.
pub fn redefined_identifier(span: Span, previous: Span, name: &str) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("`{name}` is already defined"))
        .with_label(span, "redefined here");
    if previous == Span::DUMMY {
        diag.with_note(format!("`{name}` is predefined"))
    } else {
        diag.with_secondary_label(previous, "previous definition here")
    }
}
