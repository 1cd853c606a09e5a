//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the data source (flags, then environment, then demo data)
//! - runs the validate/fit/predict pipeline
//! - prints reports
//! - writes optional exports and the prediction log

use clap::Parser;

use crate::cli::{Command, PredictArgs};
use crate::domain::{DataSource, ForecastConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `forecast` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `forecast` (and `forecast -d 9,10`) to behave like
    // `forecast predict ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Fit(args) => handle_fit(args),
    }
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = forecast_config_from_args(&args);
    let run = pipeline::run_forecast(&config)?;

    if config.json {
        println!("{}", crate::report::predictions_json(&run.predictions));
    } else {
        println!(
            "{}",
            crate::report::format_run_summary(&run.dataset, &run.model)
        );
        println!("{}", crate::report::format_predictions(&run.predictions));
    }

    // Optional persistence.
    if let Some(path) = &config.export {
        crate::io::write_predictions_csv(path, &run.predictions)?;
    }
    if let Some(path) = &config.log {
        crate::io::append_predictions_log(path, &run.predictions)?;
    }

    Ok(())
}

fn handle_fit(args: PredictArgs) -> Result<(), AppError> {
    let config = forecast_config_from_args(&args);
    let dataset = pipeline::load_dataset(&config.source)?;
    let model = crate::fit::fit(&dataset)?;

    println!("{}", crate::report::format_run_summary(&dataset, &model));
    Ok(())
}

pub fn forecast_config_from_args(args: &PredictArgs) -> ForecastConfig {
    ForecastConfig {
        source: resolve_source(args),
        days: args.days.clone(),
        export: args.export.clone(),
        log: args.log.clone(),
        json: args.json,
    }
}

/// Resolve the data source: explicit flags win, then `FORECAST_DATA_DIR`
/// from the environment (or a `.env` file), then the built-in demo dataset.
fn resolve_source(args: &PredictArgs) -> DataSource {
    if let Some(path) = &args.csv {
        return DataSource::CsvFile(path.clone());
    }
    if let Some(dir) = &args.data_dir {
        return DataSource::DataDir(dir.clone());
    }

    dotenvy::dotenv().ok();
    match std::env::var("FORECAST_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => DataSource::DataDir(dir.into()),
        _ => DataSource::Sample,
    }
}

/// Rewrite argv so `forecast` defaults to `forecast predict`.
///
/// Rules:
/// - `forecast`                      -> `forecast predict`
/// - `forecast -d 9,10 ...`          -> `forecast predict -d 9,10 ...`
/// - `forecast --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("predict".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "predict" | "fit");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "predict flags".
    if arg1.starts_with('-') {
        argv.insert(1, "predict".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_predict() {
        assert_eq!(rewrite_args(args(&["forecast"])), args(&["forecast", "predict"]));
    }

    #[test]
    fn leading_flag_defaults_to_predict() {
        assert_eq!(
            rewrite_args(args(&["forecast", "-d", "9,10"])),
            args(&["forecast", "predict", "-d", "9,10"])
        );
    }

    #[test]
    fn explicit_subcommand_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["forecast", "fit", "--csv", "x.csv"])),
            args(&["forecast", "fit", "--csv", "x.csv"])
        );
        assert_eq!(rewrite_args(args(&["forecast", "--help"])), args(&["forecast", "--help"]));
    }
}
