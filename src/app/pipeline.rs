//! Shared "forecast pipeline" logic used by every front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! parse request -> load dataset -> validate -> fit -> predict
//!
//! The CLI (and any future HTTP responder) can then focus on presentation.

use crate::data::demo_dataset;
use crate::domain::{DataSource, Dataset, FittedModel, ForecastConfig, PredictedPrice, PredictionRequest};
use crate::error::AppError;
use crate::io::{load_dataset_csv, newest_csv};

/// All computed outputs of a single forecast run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub model: FittedModel,
    pub predictions: Vec<PredictedPrice>,
}

/// Execute the full forecast pipeline and return the computed outputs.
pub fn run_forecast(config: &ForecastConfig) -> Result<RunOutput, AppError> {
    // Reject malformed day lists before touching data or fitting anything.
    let request = PredictionRequest::parse(&config.days)?;

    let dataset = load_dataset(&config.source)?;
    let model = crate::fit::fit(&dataset)?;
    let predictions = crate::fit::predict(&model, &request);

    Ok(RunOutput {
        dataset,
        model,
        predictions,
    })
}

/// Load and validate the dataset named by the configured source.
pub fn load_dataset(source: &DataSource) -> Result<Dataset, AppError> {
    match source {
        DataSource::Sample => Ok(demo_dataset()),
        DataSource::CsvFile(path) => load_dataset_csv(path),
        DataSource::DataDir(dir) => {
            let path = newest_csv(dir)?;
            load_dataset_csv(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_config(days: &str) -> ForecastConfig {
        ForecastConfig {
            source: DataSource::Sample,
            days: days.to_string(),
            export: None,
            log: None,
            json: false,
        }
    }

    #[test]
    fn run_forecast_on_sample_data() {
        let run = run_forecast(&sample_config("6,7,8")).unwrap();

        assert_eq!(run.dataset.len(), 5);
        assert!((run.model.slope - 10_000.0).abs() < 1e-6);
        assert!((run.model.intercept - 90_000.0).abs() < 1e-6);

        let prices: Vec<f64> = run.predictions.iter().map(|p| p.price).collect();
        assert_eq!(run.predictions.len(), 3);
        assert!((prices[0] - 150_000.0).abs() < 1e-6);
        assert!((prices[1] - 160_000.0).abs() < 1e-6);
        assert!((prices[2] - 170_000.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_days_fail_before_any_fit() {
        let err = run_forecast(&sample_config("6, seven, 8")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_csv_file_is_io_error() {
        let config = ForecastConfig {
            source: DataSource::CsvFile("definitely/not/here.csv".into()),
            days: "6".to_string(),
            export: None,
            log: None,
            json: false,
        };
        let err = run_forecast(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
