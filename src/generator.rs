//! Seeded synthetic sales data generation.
//!
//! Every generator owns its parameters and creates a fresh
//! [`StdRng`](rand::rngs::StdRng) from the seed on each call, so the same
//! parameters always reproduce the same rows.

use std::fmt;
use std::ops::Range;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Deserialize;

use crate::config;
use crate::error::{Result, SalesError};
use crate::models::{Dataset, SaleRecord, TimeSeries, TimeSeriesRecord};

// ---------------------------------------------------------------------------
// GeneratorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and validating a [`DatasetGenerator`].
///
/// Defaults reproduce the classic demo table: 300 rows, seed 42, 100 days
/// from 2024-01-01, four categories and three regions.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    count: usize,
    seed: u64,
    start_date: NaiveDate,
    days: u32,
    categories: Vec<String>,
    regions: Vec<String>,
    sales_range: Range<i64>,
    quantity_range: Range<u32>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            count: config::DEFAULT_COUNT,
            seed: config::DEFAULT_SEED,
            start_date: config::default_start_date(),
            days: config::DEFAULT_DAYS,
            categories: config::default_categories(),
            regions: config::default_regions(),
            sales_range: config::SALES_RANGE,
            quantity_range: config::QUANTITY_RANGE,
        }
    }
}

impl GeneratorBuilder {
    /// Number of records to generate. Must be positive.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// First day of the date window.
    pub fn start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = start;
        self
    }

    /// Number of consecutive days in the date window.
    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Half-open range sales amounts are drawn from.
    pub fn sales_range(mut self, range: Range<i64>) -> Self {
        self.sales_range = range;
        self
    }

    /// Half-open range quantities are drawn from. The lower bound must be at
    /// least 1 so that average price is always defined.
    pub fn quantity_range(mut self, range: Range<u32>) -> Self {
        self.quantity_range = range;
        self
    }

    /// Validate the configuration and build the generator.
    pub fn build(self) -> Result<DatasetGenerator> {
        if self.count == 0 {
            return Err(SalesError::InvalidArgument(
                "count must be a positive integer".into(),
            ));
        }
        if self.days == 0 {
            return Err(SalesError::InvalidArgument(
                "date window must span at least one day".into(),
            ));
        }
        if self
            .start_date
            .checked_add_days(Days::new(u64::from(self.days - 1)))
            .is_none()
        {
            return Err(SalesError::InvalidArgument(format!(
                "date window of {} days starting {} overflows the calendar",
                self.days, self.start_date
            )));
        }
        if self.categories.is_empty() {
            return Err(SalesError::InvalidArgument(
                "category set must not be empty".into(),
            ));
        }
        if self.regions.is_empty() {
            return Err(SalesError::InvalidArgument(
                "region set must not be empty".into(),
            ));
        }
        if self.sales_range.is_empty() {
            return Err(SalesError::InvalidArgument(format!(
                "sales range {:?} is empty",
                self.sales_range
            )));
        }
        if self.quantity_range.is_empty() || self.quantity_range.start == 0 {
            return Err(SalesError::InvalidArgument(format!(
                "quantity range {:?} must be non-empty and exclude zero",
                self.quantity_range
            )));
        }

        Ok(DatasetGenerator { params: self })
    }
}

// ---------------------------------------------------------------------------
// DatasetGenerator
// ---------------------------------------------------------------------------

/// A validated generator for the regional sales table.
///
/// Created via [`DatasetGenerator::builder()`]. Generation itself cannot
/// fail; all argument checks happen in [`GeneratorBuilder::build`].
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    params: GeneratorBuilder,
}

impl DatasetGenerator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    pub fn count(&self) -> usize {
        self.params.count
    }

    pub fn seed(&self) -> u64 {
        self.params.seed
    }

    pub fn categories(&self) -> &[String] {
        &self.params.categories
    }

    pub fn regions(&self) -> &[String] {
        &self.params.regions
    }

    pub fn sales_range(&self) -> Range<i64> {
        self.params.sales_range.clone()
    }

    pub fn quantity_range(&self) -> Range<u32> {
        self.params.quantity_range.clone()
    }

    /// Inclusive first and last day of the date window.
    pub fn date_window(&self) -> (NaiveDate, NaiveDate) {
        let start = self.params.start_date;
        let end = start
            .checked_add_days(Days::new(u64::from(self.params.days - 1)))
            .unwrap_or(start);
        (start, end)
    }

    /// Draw `count` independent records.
    ///
    /// Per record the draws happen in a fixed order (date, category, region,
    /// sales, quantity), which is what makes a seed reproducible.
    pub fn generate(&self) -> Dataset {
        let p = &self.params;
        let mut rng = StdRng::seed_from_u64(p.seed);
        let mut records = Vec::with_capacity(p.count);

        for _ in 0..p.count {
            let offset = rng.gen_range(0..p.days);
            let date = p
                .start_date
                .checked_add_days(Days::new(u64::from(offset)))
                .unwrap_or(p.start_date);
            let category = pick(&p.categories, &mut rng);
            let region = pick(&p.regions, &mut rng);
            let sales_amount = rng.gen_range(p.sales_range.clone());
            let quantity = rng.gen_range(p.quantity_range.clone());

            records.push(SaleRecord::new(date, category, region, sales_amount, quantity));
        }

        tracing::debug!(count = p.count, seed = p.seed, "generated sales dataset");
        Dataset::generated(records, p.seed)
    }
}

/// Uniform pick from a non-empty label set.
fn pick(labels: &[String], rng: &mut StdRng) -> String {
    labels.choose(rng).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// GenerationParams: untyped (count, seed) input
// ---------------------------------------------------------------------------

/// An integer argument as an untyped caller may send it: a JSON number or a
/// numeric string such as `"300"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawInt {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawInt {
    /// The integer value. Finite floats truncate toward zero, strings are
    /// parsed after trimming. `None` when the value is not a number.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            RawInt::Int(n) => Some(*n),
            RawInt::Float(f) if f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
                Some(f.trunc() as i64)
            }
            RawInt::Float(_) => None,
            RawInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for RawInt {
    fn from(n: i64) -> Self {
        RawInt::Int(n)
    }
}

impl fmt::Display for RawInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInt::Int(n) => write!(f, "{n}"),
            RawInt::Float(x) => write!(f, "{x}"),
            RawInt::Text(s) => write!(f, "{s:?}"),
        }
    }
}

fn default_num_records() -> RawInt {
    RawInt::Int(config::DEFAULT_COUNT as i64)
}

fn default_seed() -> RawInt {
    RawInt::Int(config::DEFAULT_SEED as i64)
}

/// Raw generation arguments as they arrive from an untyped caller such as a
/// JSON request body. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_num_records")]
    pub num_records: RawInt,
    #[serde(default = "default_seed")]
    pub seed: RawInt,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_records: default_num_records(),
            seed: default_seed(),
        }
    }
}

impl GenerationParams {
    /// Check the raw values and turn them into a builder.
    ///
    /// Returns [`SalesError::InvalidArgument`] for a count that is not a
    /// positive integer or a seed that is not a non-negative integer.
    pub fn into_builder(self) -> Result<GeneratorBuilder> {
        let count = self
            .num_records
            .to_i64()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|&c| c > 0)
            .ok_or_else(|| {
                SalesError::InvalidArgument(format!(
                    "num_records must be a positive integer, got {}",
                    self.num_records
                ))
            })?;
        let seed = self
            .seed
            .to_i64()
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| {
                SalesError::InvalidArgument(format!(
                    "malformed seed {}: must be a non-negative integer",
                    self.seed
                ))
            })?;
        Ok(DatasetGenerator::builder().count(count).seed(seed))
    }
}

// ---------------------------------------------------------------------------
// Free-standing entry points
// ---------------------------------------------------------------------------

/// Generate `count` regional sales records from `seed` with default parameters.
pub fn generate(count: usize, seed: u64) -> Result<Dataset> {
    Ok(DatasetGenerator::builder()
        .count(count)
        .seed(seed)
        .build()?
        .generate())
}

/// Generate the noisy per-category daily series.
///
/// Produces one record per `(category, day)` pair over `days` days starting
/// 2024-01-01, categories in the given order. Sales are a uniform integer
/// draw plus zero-mean Gaussian noise, so individual values can fall outside
/// the nominal range.
pub fn generate_time_series(days: u32, categories: &[String], seed: u64) -> Result<TimeSeries> {
    if days == 0 {
        return Err(SalesError::InvalidArgument(
            "days must be a positive integer".into(),
        ));
    }
    if categories.is_empty() {
        return Err(SalesError::InvalidArgument(
            "category set must not be empty".into(),
        ));
    }

    let start = config::default_start_date();
    if start
        .checked_add_days(Days::new(u64::from(days - 1)))
        .is_none()
    {
        return Err(SalesError::InvalidArgument(format!(
            "time series of {days} days starting {start} overflows the calendar"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(categories.len() * days as usize);

    for category in categories {
        for date in start.iter_days().take(days as usize) {
            let base = rng.gen_range(config::TS_SALES_RANGE) as f64;
            let noise: f64 = rng.sample(StandardNormal);
            let quantity = rng.gen_range(config::TS_QUANTITY_RANGE);
            let rating = rng.gen_range(config::TS_RATING_RANGE);

            records.push(TimeSeriesRecord {
                date,
                category: category.clone(),
                sales_amount: base + noise * config::TS_NOISE_STD_DEV,
                quantity,
                rating,
            });
        }
    }

    tracing::debug!(days, categories = categories.len(), seed, "generated time series");
    Ok(TimeSeries::generated(records, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_zero_count() {
        let err = DatasetGenerator::builder().count(0).build().unwrap_err();
        assert!(matches!(err, SalesError::InvalidArgument(_)));
    }

    #[test]
    fn builder_rejects_quantity_range_starting_at_zero() {
        let err = DatasetGenerator::builder()
            .quantity_range(0..5)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("exclude zero"));
    }

    #[test]
    fn builder_rejects_empty_label_sets() {
        assert!(DatasetGenerator::builder()
            .categories(Vec::<String>::new())
            .build()
            .is_err());
        assert!(DatasetGenerator::builder()
            .regions(Vec::<String>::new())
            .build()
            .is_err());
    }

    #[test]
    fn date_window_is_inclusive() {
        let generator = DatasetGenerator::builder().build().unwrap();
        let (start, end) = generator.date_window();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
    }

    #[test]
    fn params_default_when_fields_missing() {
        let params: GenerationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn params_reject_negative_seed() {
        let params = GenerationParams {
            num_records: RawInt::Int(10),
            seed: RawInt::Int(-1),
        };
        let err = params.into_builder().unwrap_err();
        assert!(err.to_string().contains("malformed seed"));
    }

    #[test]
    fn params_reject_non_positive_count() {
        for n in [0, -5] {
            let params = GenerationParams {
                num_records: RawInt::Int(n),
                seed: RawInt::Int(1),
            };
            assert!(matches!(
                params.into_builder(),
                Err(SalesError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn params_accept_numeric_strings() {
        let params: GenerationParams =
            serde_json::from_str(r#"{"num_records": "300", "seed": " 7 "}"#).unwrap();
        let generator = params.into_builder().unwrap().build().unwrap();
        assert_eq!(generator.count(), 300);
        assert_eq!(generator.seed(), 7);
    }

    #[test]
    fn params_non_numeric_seed_is_invalid_argument() {
        let params: GenerationParams =
            serde_json::from_str(r#"{"num_records": 10, "seed": "abc"}"#).unwrap();
        match params.into_builder() {
            Err(SalesError::InvalidArgument(msg)) => {
                assert!(msg.contains("malformed seed"));
                assert!(msg.contains("abc"));
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn time_series_rejects_calendar_overflow() {
        let categories = config::default_time_series_categories();
        let err = generate_time_series(u32::MAX, &categories, 1).unwrap_err();
        assert!(err.to_string().contains("overflows the calendar"));
    }
}
