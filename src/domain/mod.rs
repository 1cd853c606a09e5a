//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated observation records (`PriceRecord`, `Dataset`)
//! - fit outputs (`FittedModel`, `PredictedPrice`)
//! - run configuration (`ForecastConfig`, `DataSource`)

pub mod types;

pub use types::*;
