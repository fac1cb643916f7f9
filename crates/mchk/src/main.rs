//! mchk - analyzer CLI for a miniature C-like language fragment
//!
//! Usage: mchk [OPTIONS] [input]
//!
//! With an input file the selected analyses run once over its contents.
//! Without one, an interactive loop reads an analysis mode and a line of
//! source per request.

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use mchk_analyzer::DiagnosticReporter;
use mchk_analyzer::driver::{self, Analysis, Outcome};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Which analyses to run in file mode
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Mode {
    /// Lexical scan only: print the token sequence
    Lex,
    /// Syntax check only
    Syntax,
    /// Semantic check only
    Sema,
    /// All three, in pipeline order
    #[default]
    All,
}

impl Mode {
    fn analyses(self) -> &'static [Analysis] {
        match self {
            Mode::Lex => &[Analysis::Lexical],
            Mode::Syntax => &[Analysis::Syntax],
            Mode::Sema => &[Analysis::Semantics],
            Mode::All => &Analysis::ALL,
        }
    }
}

#[derive(ClapParser, Debug)]
#[command(name = "mchk")]
#[command(version)]
#[command(about = "Lexical, syntax, and semantic analyzer for a miniature C-like language", long_about = None)]
struct Args {
    /// Input source file; omit to run interactively
    input: Option<PathBuf>,

    /// Analyses to run on the input file
    #[arg(short, long, value_enum, default_value = "all")]
    mode: Mode,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let result = match &args.input {
        Some(path) => run_file(path, &args),
        None => run_interactive(),
    };

    match result {
        Ok(clean) => {
            if !clean {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Run the selected analyses over a file; returns false when any analysis
/// detected errors.
fn run_file(path: &Path, args: &Args) -> anyhow::Result<bool> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path.display().to_string();

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let mut clean = true;
    for &analysis in args.mode.analyses() {
        if args.verbose {
            eprintln!("Running {} analysis on {}...", analysis, filename);
        }
        clean &= run_one(analysis, &source, &reporter, file_id);
    }
    Ok(clean)
}

/// Run one analysis and print its outcome; returns false when it detected
/// errors.
fn run_one(
    analysis: Analysis,
    source: &str,
    reporter: &DiagnosticReporter,
    file_id: usize,
) -> bool {
    match driver::run(analysis, source) {
        Outcome::Tokens(tokens) => {
            print!("{}", driver::format_tokens(&tokens));
            true
        }
        Outcome::Checked(report) => {
            reporter.report(file_id, &report);
            if report.ok() {
                println!("{} analysis completed without errors.", analysis);
            } else {
                println!("{} analysis detected errors.", analysis);
            }
            report.ok()
        }
    }
}

/// Interactive loop: one analysis per request
fn run_interactive() -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("analysis mode (lex/syntax/sema/quit): ");
        io::stdout().flush()?;
        let Some(choice) = lines.next() else { break };
        let choice = choice?;
        let choice = choice.trim();

        if choice.is_empty() {
            continue;
        }
        if choice == "quit" || choice == "exit" {
            println!("Leaving.");
            break;
        }

        let analysis = match choice.parse::<Analysis>() {
            Ok(analysis) => analysis,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        print!("source to analyze: ");
        io::stdout().flush()?;
        let Some(source) = lines.next() else { break };
        let source = source?;

        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("<input>", source.clone());
        run_one(analysis, &source, &reporter, file_id);
        println!();
    }

    Ok(true)
}
