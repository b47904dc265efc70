//! `blife`: run bounded Game of Life simulations from the command line.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`, so it never
//! mixes with numeral output on stdout.

#![forbid(unsafe_code)]

mod commands;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use blife_codec::Format;
use blife_core::CellPos;
use blife_patterns::Soup;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::CliError;

#[derive(Parser, Debug)]
#[command(name = "blife", version, about = "Conway's Game of Life on a bounded grid")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a numeral-encoded input: `W H G`, seed pairs, then a 0 row.
    Run {
        /// Input file; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Numerals used by the input.
        #[arg(long, default_value_t = Format::Decimal)]
        input_format: Format,
        /// Numerals used for the output.
        #[arg(long, default_value_t = Format::Decimal)]
        output_format: Format,
    },
    /// Run a pattern from the built-in library.
    Pattern {
        /// Pattern name, see `blife list`.
        name: String,
        /// Grid width in cells, border included.
        #[arg(long, default_value_t = 20)]
        width: usize,
        /// Grid height in cells, border included.
        #[arg(long, default_value_t = 20)]
        height: usize,
        /// Generation target; 0 runs until overflow.
        #[arg(long, default_value_t = 0)]
        generations: u64,
        /// Top-left corner as `ROW,COL`; centred when omitted.
        #[arg(long, value_parser = parse_pos)]
        at: Option<CellPos>,
    },
    /// Run a deterministic random soup.
    Soup {
        /// Grid width in cells, border included.
        #[arg(long, default_value_t = 32)]
        width: usize,
        /// Grid height in cells, border included.
        #[arg(long, default_value_t = 32)]
        height: usize,
        /// Probability of each interior cell starting alive.
        #[arg(long, default_value_t = Soup::DEFAULT_DENSITY)]
        density: f64,
        /// RNG seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Generation target; 0 runs until overflow.
        #[arg(long, default_value_t = 0)]
        generations: u64,
    },
    /// List the built-in patterns.
    List,
}

fn parse_pos(s: &str) -> Result<CellPos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok(CellPos::new(row, col))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch(cmd: Commands) -> Result<(), CliError> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match cmd {
        Commands::Run {
            input,
            input_format,
            output_format,
        } => {
            let reader: Box<dyn Read> = match input {
                Some(path) => Box::new(BufReader::new(File::open(path)?)),
                None => Box::new(io::stdin().lock()),
            };
            commands::run_numeral(reader, out, &input_format, &output_format)
        }
        Commands::Pattern {
            name,
            width,
            height,
            generations,
            at,
        } => commands::run_pattern(out, &name, width, height, generations, at),
        Commands::Soup {
            width,
            height,
            density,
            seed,
            generations,
        } => commands::run_soup(out, width, height, density, seed, generations),
        Commands::List => commands::list(out),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match dispatch(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("blife: {e}");
            ExitCode::FAILURE
        }
    }
}
