use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GroupStats — Rollup for one category or region
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub sales_sum: f64,
    pub quantity_sum: u64,
    pub record_count: usize,
}

// ---------------------------------------------------------------------------
// DateRange — Inclusive min/max date
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// ---------------------------------------------------------------------------
// Summary — Aggregate view over a dataset
// ---------------------------------------------------------------------------

/// Derived, read-only statistics over a set of records.
///
/// Built by [`summarize`](crate::summary::summarize). Means are kept at full
/// precision; rounding is left to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_records: usize,
    pub total_sales: f64,
    pub avg_sales: f64,
    pub total_quantity: u64,
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    pub date_range: Option<DateRange>,
    pub per_category: BTreeMap<String, GroupStats>,
    pub per_region: BTreeMap<String, GroupStats>,
}
