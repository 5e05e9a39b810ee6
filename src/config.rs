use std::ops::Range;

use chrono::NaiveDate;

pub const DEFAULT_COUNT: usize = 300;
pub const DEFAULT_SEED: u64 = 42;

/// Length of the date window records are drawn from.
pub const DEFAULT_DAYS: u32 = 100;

pub const SALES_RANGE: Range<i64> = 1_000..10_000;
pub const QUANTITY_RANGE: Range<u32> = 1..50;

// Noisy time-series variant
pub const TS_DEFAULT_DAYS: u32 = 60;
pub const TS_SALES_RANGE: Range<i64> = 5_000..30_000;
pub const TS_NOISE_STD_DEV: f64 = 2_000.0;
pub const TS_QUANTITY_RANGE: Range<u32> = 10..100;
pub const TS_RATING_RANGE: Range<f64> = 3.5..5.0;

// Presentation
pub const PREVIEW_ROWS: usize = 10;
pub const HISTOGRAM_BINS: usize = 30;
pub const ROLLING_WINDOW: usize = 7;
pub const CURRENCY_SYMBOL: &str = "₽";

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

pub fn default_categories() -> Vec<String> {
    ["Electronics", "Clothing", "Groceries", "Books"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_regions() -> Vec<String> {
    ["Moscow", "Saint Petersburg", "Yekaterinburg"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_time_series_categories() -> Vec<String> {
    ["Smartphones", "Laptops", "Tablets", "Accessories"]
        .into_iter()
        .map(String::from)
        .collect()
}
