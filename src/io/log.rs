//! Append-only prediction log.
//!
//! Each run appends one timestamped row per prediction, so the log accumulates
//! a history across runs. The header is written only when the file is new.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::domain::{DAY_COLUMN, PredictedPrice};
use crate::error::{AppError, ErrorKind};

/// Append predictions to a CSV log, stamping each row with the local time.
pub fn append_predictions_log(path: &Path, predictions: &[PredictedPrice]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            AppError::new(
                ErrorKind::Io,
                format!("Failed to open prediction log '{}': {e}", path.display()),
            )
        })?;

    let is_new = file
        .metadata()
        .map(|m| m.len() == 0)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to stat prediction log: {e}")))?;

    if is_new {
        writeln!(file, "Timestamp,{DAY_COLUMN},Predicted Price (VND)").map_err(|e| {
            AppError::new(ErrorKind::Io, format!("Failed to write prediction log header: {e}"))
        })?;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    for p in predictions {
        writeln!(file, "{timestamp},{},{:.2}", p.day, p.price).map_err(|e| {
            AppError::new(ErrorKind::Io, format!("Failed to write prediction log row: {e}"))
        })?;
    }

    Ok(())
}
