//! Reporting utilities: formatted terminal output and the JSON prediction map.

pub mod format;

pub use format::*;
