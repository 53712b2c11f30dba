//! Terminal Emitter
//!
//! Renders `error[CODE]: message`, one `-->` line per label and the
//! quoted source line under the primary label when a source is attached.
//! ANSI colors are optional.

use std::io::Write;

use pas_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// File the rendered spans refer to.
struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render label positions as `path:line:col` within `source`.
    ///
    /// Without a source, labels show raw byte ranges.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, source: &str) -> Self {
        self.source = Some(SourceFile {
            path: path.into(),
            text: source.to_owned(),
            lines: LineOffsetTable::build(source),
        });
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn location(&self, span: Span) -> String {
        match &self.source {
            Some(file) => {
                let (line, col) = file.lines.offset_to_line_col(&file.text, span.start);
                format!("{}:{line}:{col}", file.path)
            }
            None => format!("{span:?}"),
        }
    }

    /// Quote the line holding `span.start` and underline the span on it.
    ///
    /// A span running past the end of its line is underlined to the line end.
    fn write_snippet(&mut self, span: Span) {
        let Some(file) = &self.source else {
            return;
        };
        let (line, col) = file.lines.offset_to_line_col(&file.text, span.start);
        let text = file.lines.line_text(&file.text, line).to_owned();

        let lead: String = text
            .chars()
            .take(col as usize - 1)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let remaining = text.chars().count().saturating_sub(lead.chars().count());
        let width = file
            .text
            .get(span.start as usize..span.end as usize)
            .map_or(1, |covered| covered.chars().count())
            .min(remaining)
            .max(1);

        let gutter = line.to_string();
        let blank = " ".repeat(gutter.len());
        let _ = writeln!(self.writer, " {blank} |");
        let _ = writeln!(self.writer, " {gutter} | {text}");
        let _ = write!(self.writer, " {blank} | {lead}");
        self.write_colored(&"^".repeat(width), colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let location = self.location(label.span);
            let _ = write!(self.writer, "  {marker} {location}: ");

            let color = if label.is_primary {
                colors::ERROR
            } else {
                colors::SECONDARY
            };
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            if label.is_primary {
                self.write_snippet(label.span);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let noun = if error_count == 1 { "error" } else { "errors" };
        let _ = writeln!(self.writer, ": {error_count} {noun} reported");
    }
}
