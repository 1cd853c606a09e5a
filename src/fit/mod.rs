//! Fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit the day → price line from a validated dataset
//! - evaluate the fitted line at requested days

pub mod fitter;

pub use fitter::*;
