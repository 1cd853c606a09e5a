//! Formatting: VND price rendering, run summary, prediction table, JSON map.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use serde_json::Value;

use crate::domain::{Dataset, FittedModel, PredictedPrice};

/// Render a price with thousands separators and two decimals: `150,000.00`.
pub fn format_vnd(price: f64) -> String {
    let rendered = format!("{:.2}", price.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    // `-0.00` reads as a signed zero; drop the sign once rounding has
    // collapsed the value.
    let negative = price < 0.0 && !(grouped == "0" && frac_part == "00");
    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Render a price with its currency label: `150,000.00 VND`.
pub fn format_vnd_label(price: f64) -> String {
    format!("{} VND", format_vnd(price))
}

/// Format the full run summary (dataset stats + fitted line).
pub fn format_run_summary(dataset: &Dataset, model: &FittedModel) -> String {
    let stats = dataset.stats();
    let mut out = String::new();

    out.push_str("=== forecast - Price Prediction (OLS) ===\n");
    out.push_str(&format!("Data: {}\n", dataset.source()));
    out.push_str(&format!(
        "Records: n={} | day=[{}, {}] | price=[{}, {}]\n",
        stats.n_records,
        stats.day_min,
        stats.day_max,
        format_vnd(stats.price_min),
        format_vnd(stats.price_max),
    ));

    out.push_str("\nFitted line:\n");
    out.push_str(&format!("- slope    : {} VND/day\n", format_vnd(model.slope)));
    out.push_str(&format!("- intercept: {}\n", format_vnd_label(model.intercept)));
    out.push('\n');

    out
}

/// Format the prediction table.
pub fn format_predictions(predictions: &[PredictedPrice]) -> String {
    let mut out = String::new();

    out.push_str("Predictions:\n");
    out.push_str(&format!("{:<6} {:>20}\n", "Day", "Predicted Price"));
    out.push_str(&format!("{:-<6} {:-<20}\n", "", ""));
    for p in predictions {
        out.push_str(&format!("{:<6} {:>20}\n", p.day, format_vnd_label(p.price)));
    }

    out
}

/// Build the JSON object an HTTP responder would return:
/// `{"Day 6": "150,000.00 VND", ...}`, in request order.
pub fn predictions_json(predictions: &[PredictedPrice]) -> Value {
    let mut map = serde_json::Map::new();
    for p in predictions {
        map.insert(
            format!("Day {}", p.day),
            Value::String(format_vnd_label(p.price)),
        );
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceRecord;

    #[test]
    fn format_vnd_groups_thousands() {
        assert_eq!(format_vnd(150_000.0), "150,000.00");
        assert_eq!(format_vnd(1_234_567.891), "1,234,567.89");
        assert_eq!(format_vnd(999.5), "999.50");
        assert_eq!(format_vnd(0.0), "0.00");
    }

    #[test]
    fn format_vnd_handles_negatives_and_signed_zero() {
        assert_eq!(format_vnd(-80_000.0), "-80,000.00");
        assert_eq!(format_vnd(-0.001), "0.00");
    }

    #[test]
    fn format_vnd_label_suffixes_currency() {
        assert_eq!(format_vnd_label(150_000.0), "150,000.00 VND");
    }

    #[test]
    fn predictions_json_maps_days_in_order() {
        let predictions = vec![
            PredictedPrice {
                day: 6,
                price: 150_000.0,
            },
            PredictedPrice {
                day: 7,
                price: 160_000.0,
            },
        ];

        let json = predictions_json(&predictions);
        assert_eq!(json["Day 6"], "150,000.00 VND");
        assert_eq!(json["Day 7"], "160,000.00 VND");

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Day 6", "Day 7"]);
    }

    #[test]
    fn run_summary_includes_stats_and_line() {
        let dataset = Dataset::new(
            vec![
                PriceRecord {
                    day: 1,
                    price: 100_000.0,
                },
                PriceRecord {
                    day: 2,
                    price: 110_000.0,
                },
            ],
            "test.csv",
        )
        .unwrap();
        let model = FittedModel {
            slope: 10_000.0,
            intercept: 90_000.0,
            n: 2,
        };

        let summary = format_run_summary(&dataset, &model);
        assert!(summary.contains("test.csv"));
        assert!(summary.contains("n=2"));
        assert!(summary.contains("10,000.00 VND/day"));
        assert!(summary.contains("90,000.00 VND"));
    }

    #[test]
    fn prediction_table_lists_each_day() {
        let predictions = vec![PredictedPrice {
            day: 8,
            price: 170_000.0,
        }];
        let table = format_predictions(&predictions);
        assert!(table.contains("Predictions:"));
        assert!(table.contains('8'));
        assert!(table.contains("170,000.00 VND"));
    }
}
