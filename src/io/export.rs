//! Export predictions to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts, so prices are written as plain numbers (two decimals, no
//! thousands grouping; grouped digits would fight the comma delimiter).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{DAY_COLUMN, PredictedPrice};
use crate::error::{AppError, ErrorKind};

/// Write predictions to a CSV file, one `(Day, Predicted Price (VND))` row each.
pub fn write_predictions_csv(path: &Path, predictions: &[PredictedPrice]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "{DAY_COLUMN},Predicted Price (VND)")
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write export CSV header: {e}")))?;

    for p in predictions {
        writeln!(file, "{},{:.2}", p.day, p.price)
            .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
