//! Built-in demonstration dataset.
//!
//! Five days of prices on an exact line (10,000 VND/day, starting at
//! 100,000 VND). Useful for trying the tool without a spreadsheet and as a
//! known-answer fixture in tests: the fit must return slope 10,000 and
//! intercept 90,000.

use crate::domain::{Dataset, PriceRecord};

/// The demo day/price table.
pub fn demo_dataset() -> Dataset {
    let records = vec![
        PriceRecord {
            day: 1,
            price: 100_000.0,
        },
        PriceRecord {
            day: 2,
            price: 110_000.0,
        },
        PriceRecord {
            day: 3,
            price: 120_000.0,
        },
        PriceRecord {
            day: 4,
            price: 130_000.0,
        },
        PriceRecord {
            day: 5,
            price: 140_000.0,
        },
    ];

    // Non-empty by construction; the error arm is unreachable.
    Dataset::new(records, "sample").expect("demo dataset is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_shape() {
        let dataset = demo_dataset();
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.source(), "sample");

        let stats = dataset.stats();
        assert_eq!(stats.day_min, 1);
        assert_eq!(stats.day_max, 5);
        assert!((stats.price_min - 100_000.0).abs() < 1e-9);
        assert!((stats.price_max - 140_000.0).abs() < 1e-9);
    }
}
