//! Pascal set front end CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use pasc::{init_tracing, parse_args, run, USAGE};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    init_tracing(options.trace_tree);

    let is_tty = io::stderr().is_terminal();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    match run(&options, &mut stdout, &mut stderr, is_tty) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_usage() {
                eprintln!();
                eprintln!("{USAGE}");
            }
            ExitCode::from(2)
        }
    }
}
