//! CSV ingest and validation.
//!
//! This module is the sole gate into the typed [`Dataset`]: a spreadsheet
//! either passes every check and comes out fully typed, or is rejected with a
//! specific reason and nothing comes out at all.
//!
//! Checks, in order:
//!
//! 1. the input parses as CSV at all (`Parse`)
//! 2. the required columns exist under their canonical names (`Schema`)
//! 3. every cell of both columns is present across the whole dataset
//!    (`MissingData`)
//!
//! Design goals:
//! - **Strict schema**: `Day` / `Price (VND)` are part of the external
//!   contract with spreadsheet producers and are matched case-sensitively.
//! - **All-or-nothing**: one blank cell rejects the dataset. Downstream code
//!   never sees a partially-valid table.
//! - **Separation of concerns**: no fitting logic here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{DAY_COLUMN, Dataset, PRICE_COLUMN, PriceRecord};
use crate::error::{AppError, ErrorKind};

/// Load and validate a dataset from a CSV file.
pub fn load_dataset_csv(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to open CSV '{}': {e}", path.display()),
        )
    })?;
    parse_dataset(file, &path.display().to_string())
}

/// Validate a raw tabular structure into a [`Dataset`].
///
/// `source` is a label carried through for reporting (file path, "upload", ...).
pub fn parse_dataset<R: Read>(reader: R, source: &str) -> Result<Dataset, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(ErrorKind::Parse, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let (day_idx, price_idx) = resolve_columns(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // 1-based data rows, matching how people count spreadsheet rows below
        // the header.
        let row = idx + 1;

        let record = result.map_err(|e| {
            AppError::new(ErrorKind::Parse, format!("CSV parse error in row {row}: {e}"))
        })?;

        let day = parse_cell(&record, day_idx, DAY_COLUMN, row)?;
        let price = parse_cell(&record, price_idx, PRICE_COLUMN, row)?;

        let day = day.parse::<i64>().map_err(|_| {
            AppError::new(
                ErrorKind::Parse,
                format!("Invalid `{DAY_COLUMN}` value '{day}' in row {row}: expected an integer."),
            )
        })?;
        let price = price
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                AppError::new(
                    ErrorKind::Parse,
                    format!(
                        "Invalid `{PRICE_COLUMN}` value '{price}' in row {row}: expected a finite number."
                    ),
                )
            })?;

        records.push(PriceRecord { day, price });
    }

    Dataset::new(records, source)
}

/// Resolve the required column indexes, case-sensitively.
fn resolve_columns(headers: &StringRecord) -> Result<(usize, usize), AppError> {
    let mut day_idx = None;
    let mut price_idx = None;

    for (idx, name) in headers.iter().enumerate() {
        match clean_header(name) {
            n if n == DAY_COLUMN => day_idx = Some(idx),
            n if n == PRICE_COLUMN => price_idx = Some(idx),
            _ => {}
        }
    }

    match (day_idx, price_idx) {
        (Some(d), Some(p)) => Ok((d, p)),
        (day, price) => {
            let mut missing = Vec::new();
            if day.is_none() {
                missing.push(format!("`{DAY_COLUMN}`"));
            }
            if price.is_none() {
                missing.push(format!("`{PRICE_COLUMN}`"));
            }
            Err(AppError::new(
                ErrorKind::Schema,
                format!("Missing required column(s): {}.", missing.join(", ")),
            ))
        }
    }
}

fn clean_header(name: &str) -> &str {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿Day"). If we don't strip it, schema validation will
    // incorrectly report a missing column.
    name.trim().trim_start_matches('\u{feff}')
}

fn parse_cell<'a>(
    record: &'a StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> Result<&'a str, AppError> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::new(
                ErrorKind::MissingData,
                format!("Missing `{column}` value in row {row}."),
            )
        })
}
