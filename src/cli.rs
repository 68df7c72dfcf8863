//! CLI module - Command-line interface definitions and handlers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::backends;
use crate::core::reader::read_input;
use crate::core::render::{ExportFormat, RenderConfig, Renderer};

/// wdc - a minimalist word counter with readability scoring and export.
#[derive(Parser, Debug)]
#[command(name = "wdc")]
#[command(
    author,
    version,
    about,
    long_about = r#"wdc computes text statistics: word, character, sentence and paragraph
counts, a word-frequency table and a Flesch Reading Ease score.

Counting runs on an accelerated parallel backend when one is available and
silently falls back to a serial implementation otherwise; both produce
identical results for every input. Use `wdc doctor` to see which backend
is active.

Output formats:
- txt (default): banner-framed plain-text report
- json: metadata envelope plus the full statistics object
- csv: category,metric,value rows (summary + word frequency)
- md: Markdown report
- html: self-contained HTML report

Examples:
    wdc count draft.txt
    wdc count draft.txt --format json --pretty
    cat draft.txt | wdc count
    wdc export draft.txt --out stats.csv
    wdc doctor
"#
)]
pub struct Cli {
    /// Output format (txt/json/csv/html/md).
    #[arg(
        long,
        global = true,
        value_name = "FORMAT",
        env = "WDC_FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- txt (default)\n\
- json\n\
- csv\n\
- html\n\
- md (markdown)\n\n\
For `export` without --format, the format is inferred from the output file\n\
extension instead."
    )]
    pub format: Option<String>,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Reduce non-essential output. Statistics are still printed to stdout;\n\
progress notes on stderr are suppressed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics on stderr, including which counting\n\
backend handled the request."
    )]
    pub verbose: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON output with indentation for human readability.\n\
Exports written with `export` are always pretty. Has no effect on the\n\
other formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count words and print statistics to stdout.
    #[command(
        long_about = "Analyze the input text and print its statistics in the selected format.\n\n\
Reads PATH when given, stdin otherwise. Empty input is valid and yields a\n\
zero-valued result.\n\n\
Examples:\n\
  wdc count draft.txt\n\
  wdc count draft.txt --format md\n\
  cat draft.txt | wdc count --format json --pretty\n"
    )]
    Count {
        /// Input file (stdin when omitted).
        path: Option<PathBuf>,
    },

    /// Count words and write the statistics to a file.
    #[command(
        long_about = "Analyze the input text and write its statistics to FILE.\n\n\
The export format comes from --format when given, otherwise it is inferred\n\
from the FILE extension (.json/.csv/.html/.md/.txt). JSON exports are\n\
always pretty-printed.\n\n\
Examples:\n\
  wdc export draft.txt --out stats.json\n\
  wdc export draft.txt --out report.html\n\
  cat draft.txt | wdc export --out stats.csv\n"
    )]
    Export {
        /// Input file (stdin when omitted).
        path: Option<PathBuf>,

        /// Output file to write.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },

    /// Report which counting backend is active.
    #[command(
        long_about = "Show backend diagnostics: whether the accelerated (parallel) counting\n\
path is available, which backend is bound for this process, and the worker\n\
thread count. Informational only; selection happens automatically at\n\
startup.\n"
    )]
    Doctor,
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Count { path } => run_count(path.as_deref(), &cli),
        Commands::Export { path, out } => run_export(path.as_deref(), out, &cli),
        Commands::Doctor => run_doctor(&cli),
    }
}

fn parse_format(cli: &Cli) -> Result<Option<ExportFormat>> {
    match cli.format.as_deref() {
        Some(s) => Ok(Some(s.parse::<ExportFormat>()?)),
        None => Ok(None),
    }
}

fn run_count(path: Option<&Path>, cli: &Cli) -> Result<()> {
    let format = parse_format(cli)?.unwrap_or_default();

    let bytes = read_input(path)?;
    let stats = backends::analyze_bytes(&bytes)?;

    if cli.verbose && !cli.quiet {
        eprintln!("backend: {}", backends::active().name());
    }

    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
    println!("{}", renderer.render(&stats));
    Ok(())
}

fn run_export(path: Option<&Path>, out: &Path, cli: &Cli) -> Result<()> {
    // explicit --format wins; otherwise infer from the output extension
    let format = match parse_format(cli)? {
        Some(format) => format,
        None => ExportFormat::from_path(out).unwrap_or_default(),
    };

    let bytes = read_input(path)?;
    let stats = backends::analyze_bytes(&bytes)?;

    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, true));
    let output = renderer.render(&stats);

    std::fs::write(out, output).with_context(|| format!("failed to write {}", out.display()))?;

    if !cli.quiet {
        eprintln!("exported {} statistics to {}", format, out.display());
    }
    Ok(())
}

fn run_doctor(cli: &Cli) -> Result<()> {
    let color = !cli.no_color;

    for status in backends::doctor::check_backends() {
        println!("{}", status.render_line(color));
    }

    if cli.verbose {
        if let Ok(choice) = std::env::var(backends::BACKEND_ENV) {
            eprintln!("{} override set: {}", backends::BACKEND_ENV, choice);
        }
    }
    Ok(())
}
