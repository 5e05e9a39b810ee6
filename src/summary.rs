//! Aggregate statistics over generated records.

use std::collections::BTreeMap;

use crate::models::{DateRange, GroupStats, SalesFact, Summary};

/// Compute a [`Summary`] over `records` in a single pass.
///
/// Works for any record kind implementing [`SalesFact`]. Records without a
/// region contribute to every total except the per-region rollup. An empty
/// slice yields zero totals, empty label lists and no date range.
pub fn summarize<F: SalesFact>(records: &[F]) -> Summary {
    let mut total_sales = 0.0_f64;
    let mut total_quantity = 0_u64;
    let mut date_range: Option<DateRange> = None;
    let mut per_category: BTreeMap<String, GroupStats> = BTreeMap::new();
    let mut per_region: BTreeMap<String, GroupStats> = BTreeMap::new();

    for record in records {
        let sales = record.sales();
        let quantity = u64::from(record.quantity());
        total_sales += sales;
        total_quantity += quantity;

        let date = record.date();
        date_range = Some(match date_range {
            None => DateRange {
                start: date,
                end: date,
            },
            Some(range) => DateRange {
                start: range.start.min(date),
                end: range.end.max(date),
            },
        });

        accumulate(
            per_category.entry(record.category().to_string()).or_default(),
            sales,
            quantity,
        );
        if let Some(region) = record.region() {
            accumulate(
                per_region.entry(region.to_string()).or_default(),
                sales,
                quantity,
            );
        }
    }

    let total_records = records.len();
    let avg_sales = if total_records == 0 {
        0.0
    } else {
        total_sales / total_records as f64
    };

    tracing::debug!(
        total_records,
        categories = per_category.len(),
        regions = per_region.len(),
        "summarized records"
    );

    Summary {
        total_records,
        total_sales,
        avg_sales,
        total_quantity,
        categories: per_category.keys().cloned().collect(),
        regions: per_region.keys().cloned().collect(),
        date_range,
        per_category,
        per_region,
    }
}

fn accumulate(stats: &mut GroupStats, sales: f64, quantity: u64) {
    stats.sales_sum += sales;
    stats.quantity_sum += quantity;
    stats.record_count += 1;
}
