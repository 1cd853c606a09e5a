//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - newest-file discovery in a data directory (`discover`)
//! - prediction exports (`export`)
//! - append-only prediction log (`log`)

pub mod discover;
pub mod export;
pub mod ingest;
pub mod log;

pub use discover::*;
pub use export::*;
pub use ingest::*;
pub use log::*;
