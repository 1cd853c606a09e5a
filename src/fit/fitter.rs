//! Fit a price line and evaluate it.
//!
//! Given a validated [`Dataset`] we:
//!
//! - extract (day, price) arrays once
//! - solve the closed-form OLS problem for slope/intercept
//! - evaluate the line at caller-supplied days
//!
//! OLS is singular when every observation shares one day value, so the fit
//! requires at least two distinct days. A single point could be given a
//! zero-slope "fit", but that would silently pretend to forecast; we reject
//! it instead.

use crate::domain::{Dataset, FittedModel, PredictedPrice, PredictionRequest};
use crate::error::{AppError, ErrorKind};
use crate::math::fit_line;

/// Fit the day → price line by ordinary least squares.
pub fn fit(dataset: &Dataset) -> Result<FittedModel, AppError> {
    let records = dataset.records();

    // Records usually arrive in day order from real spreadsheets, but don't
    // rely on it: count distinct values, not runs.
    let mut days_sorted: Vec<i64> = records.iter().map(|r| r.day).collect();
    days_sorted.sort_unstable();
    days_sorted.dedup();
    if days_sorted.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            format!(
                "Need at least two distinct day values to fit a line; got {}.",
                days_sorted.len()
            ),
        ));
    }

    let xs: Vec<f64> = records.iter().map(|r| r.day as f64).collect();
    let ys: Vec<f64> = records.iter().map(|r| r.price).collect();

    let line = fit_line(&xs, &ys).ok_or_else(|| {
        AppError::new(
            ErrorKind::InsufficientData,
            "Day values have zero variance; the least-squares fit is undefined.",
        )
    })?;

    Ok(FittedModel {
        slope: line.slope,
        intercept: line.intercept,
        n: records.len(),
    })
}

/// Evaluate the fitted line at each requested day, in request order.
///
/// Duplicates and days far outside the training range are evaluated as-is;
/// the model extrapolates without restriction.
pub fn predict(model: &FittedModel, request: &PredictionRequest) -> Vec<PredictedPrice> {
    request
        .days()
        .iter()
        .map(|&day| PredictedPrice {
            day,
            price: model.price_at(day),
        })
        .collect()
}
