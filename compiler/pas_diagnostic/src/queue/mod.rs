//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of an error repeated at the same span
//! - Position-ordered flushing

use pas_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, DiagnosticSink, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error whose code and span repeat the previous error.
    ///
    /// Recovery can flag the same token twice; distinct positions are
    /// always kept.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queued diagnostic with metadata for sorting and deduplication.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Line number (1-based) for sorting.
    line: u32,
    /// Column number (1-based) for sorting within a line.
    column: u32,
}

/// Source text the queue resolves positions against.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct QueueSource {
    text: String,
    lines: LineOffsetTable,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// The queue is the [`DiagnosticSink`] used by the driver: every phase
/// reports into it, and the driver flushes it once at the end.
///
/// ```text
/// let mut queue = DiagnosticQueue::new().with_source(source);
/// let tokens = lex(source, &interner, &mut queue);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    /// Errors dropped because the limit was reached.
    suppressed: usize,
    /// Last (span, code) pair, for dedup.
    last_error: Option<(Option<Span>, ErrorCode)>,
    source: Option<QueueSource>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Resolve diagnostic positions against `source`.
    ///
    /// Without a source, diagnostics are ordered by byte offset.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(QueueSource {
            text: source.to_owned(),
            lines: LineOffsetTable::build(source),
        });
        self
    }

    /// Add a diagnostic at an explicit position.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        if self.limit_reached() {
            self.suppressed += 1;
            return false;
        }

        let key = (diag.primary_span(), diag.code);
        if self.config.deduplicate && self.last_error == Some(key) {
            return false;
        }
        self.last_error = Some(key);
        self.error_count += 1;

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    fn position_of(&self, diag: &Diagnostic) -> (u32, u32) {
        let Some(span) = diag.primary_span() else {
            return (1, 1);
        };
        match &self.source {
            Some(source) => source.lines.offset_to_line_col(&source.text, span.start),
            None => (1, span.start.saturating_add(1)),
        }
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors dropped after the limit was reached.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Sort diagnostics by position and return them.
    ///
    /// If errors were dropped by the limit, a trailing "too many errors"
    /// diagnostic is appended. Clears the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| (d.line, d.column));

        let last_span = self
            .diagnostics
            .last()
            .and_then(|d| d.diagnostic.primary_span())
            .unwrap_or(Span::DUMMY);
        let mut result: Vec<Diagnostic> = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        if self.suppressed > 0 {
            result.push(too_many_errors(self.config.error_limit, self.suppressed, last_span));
        }

        self.error_count = 0;
        self.suppressed = 0;
        self.last_error = None;

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let (line, column) = self.position_of(&diagnostic);
        self.add(diagnostic, line, column);
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, suppressed: usize, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!(
            "error limit of {limit} reached; {suppressed} more not shown"
        ))
        .with_label(span, "error limit reached here")
        .with_note("use --error-limit to increase the limit")
}
