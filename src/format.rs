//! Presentation helpers: preview rows and human-readable statistics.
//!
//! Rounding happens only here. [`Summary`] keeps full precision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{Dataset, GroupStats, SaleRecord, Summary};

/// Round to the nearest integer (ties to even) and group digits with commas:
/// `1234567.4` becomes `"1,234,567"`.
pub fn thousands(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped amount followed by the currency symbol, e.g. `"12,500 ₽"`.
pub fn currency(value: f64) -> String {
    format!("{} {}", thousands(value), config::CURRENCY_SYMBOL)
}

// ---------------------------------------------------------------------------
// PreviewRow
// ---------------------------------------------------------------------------

/// A record with its numeric columns rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub date: String,
    pub category: String,
    pub region: String,
    pub sales_amount: String,
    pub quantity: u32,
    pub average_price: String,
}

impl From<&SaleRecord> for PreviewRow {
    fn from(r: &SaleRecord) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            category: r.category.clone(),
            region: r.region.clone(),
            sales_amount: thousands(r.sales_amount as f64),
            quantity: r.quantity,
            average_price: format!("{:.2}", r.average_price),
        }
    }
}

/// The first `n` rows, formatted.
pub fn preview(dataset: &Dataset, n: usize) -> Vec<PreviewRow> {
    dataset.head(n).iter().map(PreviewRow::from).collect()
}

/// Every row, formatted.
pub fn table(dataset: &Dataset) -> Vec<PreviewRow> {
    dataset.iter().map(PreviewRow::from).collect()
}

// ---------------------------------------------------------------------------
// DetailedStatistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStatistics {
    pub total_records: usize,
    pub total_sales: String,
    pub average_check: String,
    pub total_quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    pub sales: String,
    pub quantity: u64,
    pub records: usize,
}

/// Display-ready report built from a [`Summary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedStatistics {
    pub overall: OverallStatistics,
    pub by_category: BTreeMap<String, GroupStatistics>,
    pub by_region: BTreeMap<String, GroupStatistics>,
}

impl From<&Summary> for DetailedStatistics {
    fn from(summary: &Summary) -> Self {
        let groups = |map: &BTreeMap<String, GroupStats>| -> BTreeMap<String, GroupStatistics> {
            map.iter()
                .map(|(name, g)| {
                    (
                        name.clone(),
                        GroupStatistics {
                            sales: currency(g.sales_sum),
                            quantity: g.quantity_sum,
                            records: g.record_count,
                        },
                    )
                })
                .collect()
        };

        Self {
            overall: OverallStatistics {
                total_records: summary.total_records,
                total_sales: currency(summary.total_sales),
                average_check: currency(summary.avg_sales),
                total_quantity: summary.total_quantity,
            },
            by_category: groups(&summary.per_category),
            by_region: groups(&summary.per_region),
        }
    }
}

/// Default-length preview, as shown right after generation.
pub fn default_preview(dataset: &Dataset) -> Vec<PreviewRow> {
    preview(dataset, config::PREVIEW_ROWS)
}
