//! One driver run: read, parse, evaluate, report.

use std::fs;
use std::io::Write;

use pas_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use pas_diagnostic::DiagnosticQueue;
use pas_eval::{Environment, Interpreter, Value};
use pas_ir::{ConstValue, ExprId, Span, StringInterner, Symbol, SymbolKind, TypeArena};
use pas_parse::{Parser, Unit};
use tracing::{debug, debug_span};

use crate::{Command, DriverError, Options};

/// Totals across every source the run reported on.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Report {
    pub errors: usize,
}

impl Report {
    pub fn is_success(self) -> bool {
        self.errors == 0
    }
}

/// Execute `options`, writing results to `out` and diagnostics to `err`.
///
/// `is_tty` feeds `--color=auto`.
pub fn run(
    options: &Options,
    out: &mut dyn Write,
    err: &mut dyn Write,
    is_tty: bool,
) -> Result<Report, DriverError> {
    let mut session = Session {
        options,
        interner: StringInterner::new(),
        err,
        is_tty,
        report: Report::default(),
    };

    let (label, source) = match &options.path {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|source| DriverError::Read {
                path: path.clone(),
                source,
            })?;
            (path.display().to_string(), source)
        }
        None => ("<declarations>".to_owned(), String::new()),
    };

    let unit = session.parse_declarations(&label, &source);
    match options.command {
        Command::Check => write_declarations(out, &unit, &session.interner)?,
        Command::Eval => session.evaluate_all(out, unit)?,
    }

    let report = session.report;
    if report.errors > 0 {
        let mut emitter = session.emitter();
        emitter.emit_summary(report.errors);
        emitter.flush();
    }
    Ok(report)
}

struct Session<'a> {
    options: &'a Options,
    interner: StringInterner,
    err: &'a mut dyn Write,
    is_tty: bool,
    report: Report,
}

impl<'a> Session<'a> {
    fn emitter(&mut self) -> TerminalEmitter<&mut (dyn Write + 'a)> {
        TerminalEmitter::with_color_mode(&mut *self.err, self.options.color, self.is_tty)
    }

    fn queue(&self, source: &str) -> DiagnosticQueue {
        DiagnosticQueue::with_config(self.options.diagnostics.clone()).with_source(source)
    }

    /// Render everything in `queue` against `source`.
    fn report(&mut self, queue: &mut DiagnosticQueue, label: &str, source: &str) {
        let diagnostics = queue.flush();
        if diagnostics.is_empty() {
            return;
        }
        self.report.errors += diagnostics.len();
        let mut emitter = self.emitter().with_source(label, source);
        emitter.emit_all(&diagnostics);
        emitter.flush();
    }

    fn parse_declarations(&mut self, label: &str, source: &str) -> Unit {
        let _span = debug_span!("declarations", source = label).entered();
        let mut queue = self.queue(source);
        let tokens = pas_lexer::lex(source, &self.interner, &mut queue);
        let mut parser = Parser::new(&tokens, &self.interner, &mut queue)
            .with_config(self.options.parser);
        parser.parse_declarations();
        let unit = parser.into_unit();
        self.report(&mut queue, label, source);
        unit
    }

    /// Parse `source` as one expression and evaluate it in `env`.
    fn evaluate_source(
        &mut self,
        label: &str,
        source: &str,
        unit: Unit,
        env: &Environment,
    ) -> (Unit, Value) {
        let mut queue = self.queue(source);
        let tokens = pas_lexer::lex(source, &self.interner, &mut queue);
        let mut parser = Parser::new(&tokens, &self.interner, &mut queue)
            .resume(unit)
            .with_config(self.options.parser);
        let root: ExprId = parser.parse_whole_expression();
        let unit = parser.into_unit();

        let value = Interpreter::new(&unit.exprs, env, &mut queue)
            .with_config(self.options.eval)
            .evaluate(root);
        self.report(&mut queue, label, source);
        (unit, value)
    }

    fn evaluate_all(&mut self, out: &mut dyn Write, mut unit: Unit) -> Result<(), DriverError> {
        let options = self.options;
        let mut env = Environment::from_symbols(&unit.symbols, &unit.types, &self.interner);

        for binding in &options.bindings {
            let _span = debug_span!("let", name = %binding.name).entered();
            let name = self.interner.intern(&binding.name);
            if !matches!(
                unit.symbols.lookup(name).map(|s| s.kind),
                Some(SymbolKind::Variable(_))
            ) {
                return Err(DriverError::NotAVariable(binding.name.clone()));
            }
            let label = format!("--let {}", binding.name);
            let (next, value) = self.evaluate_source(&label, &binding.expr, unit, &env);
            unit = next;
            debug!(ty = value.type_name(), "bound");
            env.bind(name, value);
        }

        for (i, expr) in options.expressions.iter().enumerate() {
            let _span = debug_span!("eval", index = i).entered();
            let label = format!("<expr {}>", i + 1);
            let (next, value) = self.evaluate_source(&label, expr, unit, &env);
            unit = next;
            writeln!(out, "{} = {}", expr.trim(), value.display(&self.interner))?;
        }
        Ok(())
    }
}

/// List user declarations in source order, one per line.
fn write_declarations(
    out: &mut dyn Write,
    unit: &Unit,
    interner: &StringInterner,
) -> Result<(), DriverError> {
    for symbol in unit.symbols.iter().filter(|s| s.span != Span::DUMMY) {
        writeln!(out, "{}", describe_symbol(symbol, &unit.types, interner))?;
    }
    Ok(())
}

fn describe_symbol(symbol: &Symbol, types: &TypeArena, interner: &StringInterner) -> String {
    let name = interner.lookup(symbol.name);
    match symbol.kind {
        SymbolKind::Constant { value, ty } => format!(
            "const {name} = {} : {}",
            describe_constant(value, interner),
            types.describe(ty, interner)
        ),
        SymbolKind::Type(ty) => format!("type {name} = {}", types.describe(ty, interner)),
        SymbolKind::Variable(ty) => format!("var {name} : {}", types.describe(ty, interner)),
    }
}

fn describe_constant(value: ConstValue, interner: &StringInterner) -> String {
    match value {
        ConstValue::Integer(n) | ConstValue::Enum(n) => n.to_string(),
        ConstValue::Real(x) => format!("{x:?}"),
        ConstValue::Char(c) => format!("'{c}'"),
        ConstValue::Str(text) => format!("'{}'", interner.lookup(text)),
        ConstValue::Boolean(b) => b.to_string(),
    }
}
