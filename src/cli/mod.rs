//! Command-line parsing for the price forecaster.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Price forecaster (day → price OLS)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a line from the dataset and print predicted prices for the
    /// requested days (optionally exporting/logging them).
    Predict(PredictArgs),
    /// Fit only: print dataset stats and the fitted slope/intercept.
    Fit(PredictArgs),
}

/// Common options for predicting and fitting.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Fit from this CSV file (columns: `Day`, `Price (VND)`).
    #[arg(long, value_name = "CSV", conflicts_with = "data_dir")]
    pub csv: Option<PathBuf>,

    /// Fit from the most-recently-modified CSV file in this directory.
    ///
    /// Defaults to `FORECAST_DATA_DIR` from the environment (or `.env`) when
    /// neither `--csv` nor `--data-dir` is given; falls back to the built-in
    /// demo dataset if that is unset.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Days to predict, as a comma-separated list of integers.
    #[arg(short = 'd', long, default_value = "6,7,8")]
    pub days: String,

    /// Write predictions to this CSV file.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Append timestamped predictions to this CSV log.
    #[arg(long, value_name = "CSV")]
    pub log: Option<PathBuf>,

    /// Print predictions as a JSON object instead of the console report.
    #[arg(long)]
    pub json: bool,
}
