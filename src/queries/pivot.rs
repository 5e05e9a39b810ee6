//! Pivot tables and grouped aggregations over the regional sales table.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::SaleRecord;

// ---------------------------------------------------------------------------
// Dimension / Measure / Aggregation
// ---------------------------------------------------------------------------

/// Column a pivot groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Date,
    /// Calendar month, keyed as `YYYY-MM`.
    Month,
    Category,
    Region,
}

impl Dimension {
    pub fn key(&self, record: &SaleRecord) -> String {
        match self {
            Dimension::Date => record.date.format("%Y-%m-%d").to_string(),
            Dimension::Month => record.date.format("%Y-%m").to_string(),
            Dimension::Category => record.category.clone(),
            Dimension::Region => record.region.clone(),
        }
    }
}

/// Numeric column a pivot aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Sales,
    Quantity,
    AveragePrice,
}

impl Measure {
    pub fn value(&self, record: &SaleRecord) -> f64 {
        match self {
            Measure::Sales => record.sales_amount as f64,
            Measure::Quantity => f64::from(record.quantity),
            Measure::AveragePrice => record.average_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Sum,
    Mean,
    Count,
    Min,
    Max,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Aggregation::Sum => "sum",
            Aggregation::Mean => "mean",
            Aggregation::Count => "count",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
        };
        f.write_str(name)
    }
}

/// Running state for one cell.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Accumulator {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    fn finish(&self, agg: Aggregation) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        match agg {
            Aggregation::Sum => self.sum,
            Aggregation::Mean => self.sum / self.count as f64,
            Aggregation::Count => self.count as f64,
            Aggregation::Min => self.min,
            Aggregation::Max => self.max,
        }
    }
}

// ---------------------------------------------------------------------------
// PivotTable
// ---------------------------------------------------------------------------

/// A dense two-dimensional aggregate with sorted row and column labels.
///
/// Cells with no contributing records hold `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotTable {
    pub measure: Measure,
    pub aggregation: Aggregation,
    pub index: Vec<String>,
    pub columns: Vec<String>,
    /// Row-major, `values[row][col]`.
    pub values: Vec<Vec<f64>>,
}

impl PivotTable {
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.index.iter().position(|l| l == row)?;
        let c = self.columns.iter().position(|l| l == col)?;
        Some(self.values[r][c])
    }

    pub fn row_totals(&self) -> Vec<f64> {
        self.values.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn column_totals(&self) -> Vec<f64> {
        (0..self.columns.len())
            .map(|c| self.values.iter().map(|row| row[c]).sum())
            .collect()
    }

    /// Mean over every cell, used to pick label contrast on heatmaps.
    pub fn grand_mean(&self) -> f64 {
        let cells = self.index.len() * self.columns.len();
        if cells == 0 {
            return 0.0;
        }
        self.values.iter().flatten().sum::<f64>() / cells as f64
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PivotQuery
// ---------------------------------------------------------------------------

/// Query interface for pivots, borrowing the records of a dataset.
pub struct PivotQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> PivotQuery<'a> {
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Aggregate `measure` over an `index` x `columns` grid.
    pub fn table(
        &self,
        measure: Measure,
        index: Dimension,
        columns: Dimension,
        aggregation: Aggregation,
    ) -> PivotTable {
        let mut cells: BTreeMap<(String, String), Accumulator> = BTreeMap::new();
        let mut rows = BTreeSet::new();
        let mut cols = BTreeSet::new();

        for record in self.records {
            let r = index.key(record);
            let c = columns.key(record);
            rows.insert(r.clone());
            cols.insert(c.clone());
            cells.entry((r, c)).or_default().push(measure.value(record));
        }

        let index: Vec<String> = rows.into_iter().collect();
        let columns: Vec<String> = cols.into_iter().collect();
        let values = index
            .iter()
            .map(|r| {
                columns
                    .iter()
                    .map(|c| {
                        cells
                            .get(&(r.clone(), c.clone()))
                            .map(|acc| acc.finish(aggregation))
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        PivotTable {
            measure,
            aggregation,
            index,
            columns,
            values,
        }
    }

    /// One-dimensional group-by, sorted by label.
    pub fn group(
        &self,
        measure: Measure,
        by: Dimension,
        aggregation: Aggregation,
    ) -> Vec<(String, f64)> {
        let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
        for record in self.records {
            groups
                .entry(by.key(record))
                .or_default()
                .push(measure.value(record));
        }
        groups
            .into_iter()
            .map(|(k, acc)| (k, acc.finish(aggregation)))
            .collect()
    }

    /// Raw measure values per group, sorted by label.
    pub fn values_by(&self, measure: Measure, by: Dimension) -> BTreeMap<String, Vec<f64>> {
        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for record in self.records {
            groups
                .entry(by.key(record))
                .or_default()
                .push(measure.value(record));
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(day: u32, cat: &str, region: &str, sales: i64, qty: u32) -> SaleRecord {
        SaleRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            cat,
            region,
            sales,
            qty,
        )
    }

    #[test]
    fn missing_cells_are_zero_filled() {
        let rows = vec![rec(1, "Books", "Moscow", 100, 1), rec(2, "Clothing", "Yekaterinburg", 50, 2)];
        let table = PivotQuery::new(&rows).table(
            Measure::Sales,
            Dimension::Category,
            Dimension::Region,
            Aggregation::Sum,
        );
        assert_eq!(table.index, vec!["Books", "Clothing"]);
        assert_eq!(table.columns, vec!["Moscow", "Yekaterinburg"]);
        assert_eq!(table.get("Books", "Yekaterinburg"), Some(0.0));
        assert_eq!(table.get("Clothing", "Yekaterinburg"), Some(50.0));
        assert_eq!(table.get("Groceries", "Moscow"), None);
    }

    #[test]
    fn month_dimension_groups_by_calendar_month() {
        let rows = vec![
            rec(1, "Books", "Moscow", 100, 4),
            rec(31, "Books", "Moscow", 300, 2),
        ];
        let groups = PivotQuery::new(&rows).group(Measure::Quantity, Dimension::Month, Aggregation::Mean);
        assert_eq!(groups, vec![("2024-01".to_string(), 3.0)]);
    }
}
