//! Command-line parsing.
//!
//! ```text
//! pasc check <file> [options]
//! pasc eval [<file>] -e <expr> [-e <expr> ...] [--let name=expr ...] [options]
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use pas_diagnostic::emitter::ColorMode;
use pas_diagnostic::DiagnosticConfig;
use pas_eval::EvalConfig;
use pas_parse::ParserConfig;

use crate::DriverError;

pub const USAGE: &str = "\
Usage:
  pasc check <file>                 Parse declarations and list them
  pasc eval [<file>] -e <expr>      Evaluate expressions against declarations

Options:
  -e, --expr <expr>      Expression to evaluate (repeatable)
  --let <name>=<expr>    Bind a declared variable before evaluating (repeatable)
  --error-limit=<n>      Stop reporting after n errors (0 = unlimited)
  --max-depth=<n>        Evaluation nesting limit
  --max-set=<n>          Largest set a literal may build
  --max-nesting=<n>      Parser nesting limit for types and expressions
  --color=<mode>         auto, always or never
  --trace-tree           Render RUST_LOG tracing output as a tree";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Check,
    Eval,
}

/// `--let name=expr`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Binding {
    pub name: String,
    pub expr: String,
}

#[derive(Clone, Debug)]
pub struct Options {
    pub command: Command,
    pub path: Option<PathBuf>,
    pub expressions: Vec<String>,
    pub bindings: Vec<Binding>,
    pub diagnostics: DiagnosticConfig,
    pub parser: ParserConfig,
    pub eval: EvalConfig,
    pub color: ColorMode,
    pub trace_tree: bool,
}

impl Options {
    fn new(command: Command) -> Self {
        Options {
            command,
            path: None,
            expressions: Vec::new(),
            bindings: Vec::new(),
            diagnostics: DiagnosticConfig::default(),
            parser: ParserConfig::default(),
            eval: EvalConfig::default(),
            color: ColorMode::Auto,
            trace_tree: false,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Options, DriverError> {
    let mut args = args.iter().map(AsRef::as_ref);
    let command = match args.next() {
        Some("check") => Command::Check,
        Some("eval") => Command::Eval,
        Some(other) => return Err(DriverError::UnknownCommand(other.to_owned())),
        None => return Err(DriverError::MissingCommand),
    };

    let mut options = Options::new(command);
    while let Some(arg) = args.next() {
        match arg {
            "-e" | "--expr" => {
                let expr = args.next().ok_or(DriverError::MissingValue("--expr"))?;
                options.expressions.push(expr.to_owned());
            }
            "--let" => {
                let binding = args.next().ok_or(DriverError::MissingValue("--let"))?;
                options.bindings.push(parse_binding(binding)?);
            }
            "--trace-tree" => options.trace_tree = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--error-limit=") {
                    options.diagnostics.error_limit = parse_number("--error-limit", value)?;
                } else if let Some(value) = arg.strip_prefix("--max-depth=") {
                    options.eval.max_depth = parse_number("--max-depth", value)?;
                } else if let Some(value) = arg.strip_prefix("--max-set=") {
                    options.eval.max_set_elements = parse_number("--max-set", value)?;
                } else if let Some(value) = arg.strip_prefix("--max-nesting=") {
                    let depth = parse_number("--max-nesting", value)?;
                    options.parser.max_type_depth = depth;
                    options.parser.max_expr_depth = depth;
                } else if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = parse_color(value)?;
                } else if arg.starts_with('-') {
                    return Err(DriverError::UnknownOption(arg.to_owned()));
                } else if options.path.is_none() {
                    options.path = Some(PathBuf::from(arg));
                } else {
                    return Err(DriverError::UnexpectedArgument(arg.to_owned()));
                }
            }
        }
    }

    match options.command {
        Command::Check if options.path.is_none() => Err(DriverError::MissingArgument("file")),
        Command::Eval if options.expressions.is_empty() => {
            Err(DriverError::MissingArgument("expression (`-e <expr>`)"))
        }
        _ => Ok(options),
    }
}

fn parse_number<T: FromStr>(flag: &'static str, value: &str) -> Result<T, DriverError> {
    value.parse().map_err(|_| DriverError::InvalidValue {
        flag,
        value: value.to_owned(),
    })
}

fn parse_color(value: &str) -> Result<ColorMode, DriverError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(DriverError::InvalidValue {
            flag: "--color",
            value: value.to_owned(),
        }),
    }
}

fn parse_binding(text: &str) -> Result<Binding, DriverError> {
    let Some((name, expr)) = text.split_once('=') else {
        return Err(DriverError::InvalidBinding(text.to_owned()));
    };
    let name = name.trim();
    if name.is_empty() || expr.trim().is_empty() {
        return Err(DriverError::InvalidBinding(text.to_owned()));
    }
    Ok(Binding {
        name: name.to_owned(),
        expr: expr.to_owned(),
    })
}
