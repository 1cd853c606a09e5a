//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - constructed by any front-end (CLI, HTTP responder) that feeds the pipeline
//!
//! Schema validation is the sole gate into [`Dataset`]: downstream code only
//! ever sees fully-populated, typed records, so "missing column" and "blank
//! cell" failures cannot occur past ingest.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Canonical column name for the independent variable.
///
/// Part of the external contract with spreadsheet producers; case-sensitive,
/// never renamed silently.
pub const DAY_COLUMN: &str = "Day";

/// Canonical column name for the dependent variable.
pub const PRICE_COLUMN: &str = "Price (VND)";

/// One observed (day, price) pair.
///
/// Both fields are mandatory; a record with either one absent never makes it
/// past ingest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub day: i64,
    /// Observed price in VND.
    pub price: f64,
}

/// A validated, ordered sequence of price observations.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<PriceRecord>,
    /// Where the data came from (file path, "sample", ...), for reporting.
    source: String,
}

impl Dataset {
    /// Build a dataset from records that are already fully populated.
    ///
    /// Returns `MissingData` for an empty sequence; there is nothing to fit.
    pub fn new(records: Vec<PriceRecord>, source: impl Into<String>) -> Result<Self, AppError> {
        if records.is_empty() {
            return Err(AppError::new(
                ErrorKind::MissingData,
                "Dataset contains no records.",
            ));
        }
        Ok(Self {
            records,
            source: source.into(),
        })
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Summary stats for reporting.
    pub fn stats(&self) -> DatasetStats {
        let mut day_min = i64::MAX;
        let mut day_max = i64::MIN;
        let mut price_min = f64::INFINITY;
        let mut price_max = f64::NEG_INFINITY;

        for r in &self.records {
            day_min = day_min.min(r.day);
            day_max = day_max.max(r.day);
            price_min = price_min.min(r.price);
            price_max = price_max.max(r.price);
        }

        DatasetStats {
            n_records: self.records.len(),
            day_min,
            day_max,
            price_min,
            price_max,
        }
    }
}

/// Summary stats about the records actually used for fitting.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_records: usize,
    pub day_min: i64,
    pub day_max: i64,
    pub price_min: f64,
    pub price_max: f64,
}

/// Fitted line parameters.
///
/// Immutable once fit; scoped to a single run and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    /// Price change per day.
    pub slope: f64,
    /// Price at day 0.
    pub intercept: f64,
    /// Number of observations the fit was computed over.
    pub n: usize,
}

impl FittedModel {
    /// Evaluate the line at a single day (unconstrained extrapolation).
    pub fn price_at(&self, day: i64) -> f64 {
        self.slope * day as f64 + self.intercept
    }
}

/// Ordered days to predict, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    days: Vec<i64>,
}

impl PredictionRequest {
    /// Parse a comma-separated list of integer days.
    ///
    /// Duplicates and days far outside the training range are allowed; an
    /// empty list or any malformed token is rejected before any fit happens.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let mut days = Vec::new();
        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(AppError::new(
                    ErrorKind::InvalidInput,
                    "Prediction days must be a non-empty comma-separated list of integers.",
                ));
            }
            let day = token.parse::<i64>().map_err(|_| {
                AppError::new(
                    ErrorKind::InvalidInput,
                    format!("Invalid day '{token}': expected an integer."),
                )
            })?;
            days.push(day);
        }
        if days.is_empty() {
            return Err(AppError::new(
                ErrorKind::InvalidInput,
                "Prediction days must be a non-empty comma-separated list of integers.",
            ));
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[i64] {
        &self.days
    }
}

/// One predicted (day, price) pair, in request order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPrice {
    pub day: i64,
    pub price: f64,
}

/// Where the training data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Built-in demo table.
    Sample,
    /// A specific CSV file.
    CsvFile(PathBuf),
    /// The most-recently-modified CSV file in this directory.
    DataDir(PathBuf),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus the optional `FORECAST_DATA_DIR`
/// environment default); nothing here is ambient process state.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub source: DataSource,
    /// Raw comma-separated days string, parsed by the pipeline.
    pub days: String,
    /// Write predictions to this CSV file.
    pub export: Option<PathBuf>,
    /// Append timestamped predictions to this CSV log.
    pub log: Option<PathBuf>,
    /// Print the JSON map instead of the console table.
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_request_parses_spaced_list() {
        let req = PredictionRequest::parse("6, 7 ,8").unwrap();
        assert_eq!(req.days(), &[6, 7, 8]);
    }

    #[test]
    fn prediction_request_rejects_non_integer_token() {
        let err = PredictionRequest::parse("6, seven, 8").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn prediction_request_rejects_empty_input() {
        for raw in ["", "  ", "6,,8"] {
            let err = PredictionRequest::parse(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input: {raw:?}");
        }
    }

    #[test]
    fn dataset_rejects_empty_records() {
        let err = Dataset::new(Vec::new(), "test").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingData);
    }

    #[test]
    fn fitted_model_extrapolates_linearly() {
        let model = FittedModel {
            slope: 10_000.0,
            intercept: 90_000.0,
            n: 5,
        };
        assert!((model.price_at(6) - 150_000.0).abs() < 1e-9);
        assert!((model.price_at(-1) - 80_000.0).abs() < 1e-9);
    }
}
