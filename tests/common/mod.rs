//! Shared test fixtures for the sales-lab integration tests.
//!
//! Provides `sample_dataset()`, a small hand-written table whose totals are
//! easy to verify by eye.

#![allow(dead_code)]

use chrono::NaiveDate;
use sales_lab::{Dataset, SaleRecord};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Six records over two months, three categories and two regions.
///
/// | date       | category    | region  | sales | qty |
/// |------------|-------------|---------|-------|-----|
/// | 2024-01-05 | Books       | Moscow  | 1000  | 4   |
/// | 2024-01-05 | Electronics | Moscow  | 9000  | 3   |
/// | 2024-01-20 | Books       | Kazan   | 2000  | 8   |
/// | 2024-02-01 | Clothing    | Kazan   | 4000  | 10  |
/// | 2024-02-14 | Electronics | Kazan   | 6000  | 2   |
/// | 2024-02-14 | Books       | Moscow  | 3000  | 1   |
pub fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        SaleRecord::new(date(2024, 1, 5), "Books", "Moscow", 1000, 4),
        SaleRecord::new(date(2024, 1, 5), "Electronics", "Moscow", 9000, 3),
        SaleRecord::new(date(2024, 1, 20), "Books", "Kazan", 2000, 8),
        SaleRecord::new(date(2024, 2, 1), "Clothing", "Kazan", 4000, 10),
        SaleRecord::new(date(2024, 2, 14), "Electronics", "Kazan", 6000, 2),
        SaleRecord::new(date(2024, 2, 14), "Books", "Moscow", 3000, 1),
    ])
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
