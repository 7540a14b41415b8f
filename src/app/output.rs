//! Build result emitter.
//!
//! Writes the executor's result as compact single-line JSON.

use serde::Serialize;
use std::io::Write;

use crate::domain::AppError;

/// Write `result` to `writer` as one line of JSON.
///
/// # Errors
/// Returns an error if JSON serialization fails, before anything is written,
/// or if the writer fails.
pub fn write_result<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    result: &T,
) -> Result<(), AppError> {
    let json = serde_json::to_string(result).map_err(AppError::Serialization)?;

    debug_assert!(!json.contains('\n'), "result JSON must be single-line");

    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
