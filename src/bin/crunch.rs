//! Crunch command line calculator
//!
//! Calculates each expression given as argument, or each line of stdin when
//! there are none.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use crunch::{calculate, format_rpn, parse};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "crunch", version, about = "Calculate infix mathematical expressions")]
struct Cli {
    /// Expressions to calculate. Read from stdin, one per line, if empty.
    /// Put `--` before an expression starting with `-`
    expressions: Vec<String>,

    /// Print the reverse polish notation of each expression
    #[arg(long)]
    rpn: bool,

    /// Number of decimal places in results
    #[arg(long, value_name = "N")]
    precision: Option<usize>,
}

impl Cli {
    /// Print the outcome of one expression, returns `false` if it failed
    fn show(&self, expression: &str, out: &mut impl Write) -> io::Result<bool> {
        // blank input has no result
        if expression.trim().is_empty() {
            return Ok(true);
        }

        if self.rpn {
            match parse(expression) {
                Ok(rpn) => writeln!(out, "rpn: {}", format_rpn(&rpn))?,
                Err(err) => writeln!(out, "rpn: {}", err)?,
            }
        }

        match calculate(expression) {
            Ok(value) => {
                match self.precision {
                    Some(precision) => writeln!(out, "{:.*}", precision, value)?,
                    None => writeln!(out, "{}", value)?,
                }
                Ok(true)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(false)
            }
        }
    }
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut success = true;

    if cli.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            success &= cli.show(&line?, &mut out)?;
        }
    } else {
        for expression in &cli.expressions {
            success &= cli.show(expression, &mut out)?;
        }
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
