//! Synthetic sales data for Rust.
//!
//! Generates a reproducible table of sales records from a seed, summarizes
//! it (totals, per-category and per-region rollups, date range), and derives
//! the pivot tables and series that chart front-ends draw from.
//!
//! # Quick start
//!
//! ```
//! use sales_lab::{generate, summarize};
//!
//! let dataset = generate(300, 42).unwrap();
//! let summary = summarize(dataset.records());
//! assert_eq!(summary.total_records, 300);
//!
//! // Same seed, same rows
//! assert_eq!(dataset, generate(300, 42).unwrap());
//!
//! // Series for a bar chart
//! let bars = dataset.charts().sales_by_category();
//! assert!(!bars.is_empty());
//! ```
//!
//! For custom date windows, label sets or value ranges use
//! [`DatasetGenerator::builder()`].

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod generator;
pub mod models;
pub mod queries;
pub mod summary;

pub use error::{Result, SalesError};
pub use generator::{
    generate, generate_time_series, DatasetGenerator, GenerationParams, GeneratorBuilder, RawInt,
};
pub use models::{
    Dataset, DateRange, GroupStats, SaleRecord, SalesFact, Summary, TimeSeries, TimeSeriesRecord,
};
pub use queries::{ChartKind, ChartQuery, PivotQuery};
pub use summary::summarize;
