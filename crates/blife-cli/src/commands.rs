//! Subcommand bodies, generic over their output sink.

use std::error::Error;
use std::fmt;
use std::io::{self, Read, Write};

use blife_codec::{write_output, CodecError, NumeralFormat, RunInput};
use blife_core::CellPos;
use blife_engine::{simulate, RunResult, SimConfig, SimError, Target};
use blife_grid::GridBuffer;
use blife_patterns::{Pattern, Soup, SoupError, LIBRARY};
use tracing::info;

// ── CliError ─────────────────────────────────────────────────────

/// Anything a subcommand can fail with.
#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The numeral input was malformed.
    Codec(CodecError),
    /// The run was rejected.
    Sim(SimError),
    /// The soup parameters were invalid.
    Soup(SoupError),
    /// No library pattern has this name.
    UnknownPattern(String),
    /// The pattern does not fit inside the grid's border.
    PatternTooLarge {
        /// Pattern name.
        name: &'static str,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Codec(e) => write!(f, "{e}"),
            Self::Sim(e) => write!(f, "{e}"),
            Self::Soup(e) => write!(f, "{e}"),
            Self::UnknownPattern(name) => {
                write!(f, "unknown pattern {name:?}; try `blife list`")
            }
            Self::PatternTooLarge {
                name,
                width,
                height,
            } => write!(f, "{name} does not fit inside a {width}x{height} grid"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Codec(e) => Some(e),
            Self::Sim(e) => Some(e),
            Self::Soup(e) => Some(e),
            Self::UnknownPattern(_) | Self::PatternTooLarge { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CodecError> for CliError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

impl From<SimError> for CliError {
    fn from(e: SimError) -> Self {
        Self::Sim(e)
    }
}

impl From<SoupError> for CliError {
    fn from(e: SoupError) -> Self {
        Self::Soup(e)
    }
}

// ── Commands ─────────────────────────────────────────────────────

/// `blife run`: numeral input in, numeral output out.
pub fn run_numeral<R, W, I, O>(
    reader: R,
    writer: W,
    input_format: &I,
    output_format: &O,
) -> Result<(), CliError>
where
    R: Read,
    W: Write,
    I: NumeralFormat + ?Sized,
    O: NumeralFormat + ?Sized,
{
    let input = RunInput::read(reader, input_format)?;
    let result = simulate(input.to_config())?;
    info!(
        generation = result.generation.0,
        termination = %result.termination,
        "numeral run finished"
    );
    write_output(writer, &result.live_cells, result.generation, output_format)?;
    Ok(())
}

/// `blife pattern`: place a library pattern and run it.
pub fn run_pattern<W: Write>(
    writer: W,
    name: &str,
    width: usize,
    height: usize,
    generations: u64,
    at: Option<CellPos>,
) -> Result<(), CliError> {
    let pattern = Pattern::find(name).ok_or_else(|| CliError::UnknownPattern(name.to_string()))?;
    let origin = match at {
        Some(origin) => origin,
        None => centred(pattern, width, height)?,
    };
    let config =
        SimConfig::new(width, height, Target::from_count(generations)).with_seed(pattern.place(origin));
    report(writer, &simulate(config)?)
}

/// `blife soup`: fill the interior at random and run it.
pub fn run_soup<W: Write>(
    writer: W,
    width: usize,
    height: usize,
    density: f64,
    seed: u64,
    generations: u64,
) -> Result<(), CliError> {
    let soup = Soup::new(density, seed)?;
    let config =
        SimConfig::new(width, height, Target::from_count(generations)).with_seed(soup.cells(width, height));
    report(writer, &simulate(config)?)
}

/// `blife list`: one pattern per line.
pub fn list<W: Write>(mut writer: W) -> Result<(), CliError> {
    for pattern in LIBRARY {
        let (rows, cols) = pattern.extent();
        writeln!(
            writer,
            "{:<12} {rows:>2}x{cols:<2} {}",
            pattern.name, pattern.summary
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Top-left corner that centres `pattern` in the interior.
fn centred(pattern: &'static Pattern, width: usize, height: usize) -> Result<CellPos, CliError> {
    let (rows, cols) = pattern.extent();
    let too_large = CliError::PatternTooLarge {
        name: pattern.name,
        width,
        height,
    };
    let (Some(free_rows), Some(free_cols)) = (
        height.checked_sub(rows + 2),
        width.checked_sub(cols + 2),
    ) else {
        return Err(too_large);
    };
    Ok(CellPos::new(1 + free_rows / 2, 1 + free_cols / 2))
}

/// Final grid as ASCII art, then a one-line summary.
///
/// The summary depends only on the run's cells, so identical runs print
/// identical reports. Step timing goes to the log.
fn report<W: Write>(mut writer: W, result: &RunResult) -> Result<(), CliError> {
    let m = &result.metrics;
    info!(
        steps = m.steps,
        mean_step_us = m.mean_step_us(),
        slowest_step_us = m.slowest_step_us,
        "step timing"
    );
    writer.write_all(render(&result.grid).as_bytes())?;
    writeln!(
        writer,
        "generation {}: {}; population {} (start {}, peak {}), {} births, {} deaths",
        result.generation,
        result.termination,
        result.live_cells.len(),
        m.initial_population,
        m.peak_population,
        m.births,
        m.deaths,
    )?;
    writer.flush()?;
    Ok(())
}

/// `#` for the border, `O` for live cells, `.` for dead interior cells.
fn render(grid: &GridBuffer) -> String {
    let (width, height) = grid.dims();
    let mut out = String::with_capacity((width + 1) * height);
    for row in 0..height {
        for (col, &alive) in grid.row(row).iter().enumerate() {
            out.push(if grid.is_border(CellPos::new(row, col)) {
                '#'
            } else if alive {
                'O'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
