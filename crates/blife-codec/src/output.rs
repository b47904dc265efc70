//! Run-result output.

use std::io::Write;

use blife_core::{CellPos, Generation};

use crate::error::CodecError;
use crate::numeral::NumeralFormat;

/// Write each live cell's row and column, then the generation count, one
/// numeral per line.
///
/// Cells are written in the order given; [`RunResult::live_cells`] is
/// already row-major.
///
/// [`RunResult::live_cells`]: blife_engine::RunResult::live_cells
pub fn write_output<W, F>(
    mut writer: W,
    live_cells: &[CellPos],
    generation: Generation,
    format: &F,
) -> Result<(), CodecError>
where
    W: Write,
    F: NumeralFormat + ?Sized,
{
    for pos in live_cells {
        write_numeral(&mut writer, pos.row as u64, format)?;
        write_numeral(&mut writer, pos.col as u64, format)?;
    }
    write_numeral(&mut writer, generation.0, format)?;
    writer.flush()?;
    Ok(())
}

fn write_numeral<W, F>(writer: &mut W, value: u64, format: &F) -> Result<(), CodecError>
where
    W: Write,
    F: NumeralFormat + ?Sized,
{
    writeln!(writer, "{}", format.encode(value)?)?;
    Ok(())
}
