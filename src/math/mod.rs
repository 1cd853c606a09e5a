//! Mathematical utilities: closed-form simple linear regression.

pub mod ols;

pub use ols::*;
