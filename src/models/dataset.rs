use serde::{Deserialize, Serialize};

use crate::models::{SaleRecord, Summary, TimeSeriesRecord};
use crate::queries::{ChartQuery, PivotQuery};

// ---------------------------------------------------------------------------
// Dataset — Regional sales table
// ---------------------------------------------------------------------------

/// A generated table of [`SaleRecord`]s.
///
/// Treated as an immutable snapshot once built: consumers borrow it and
/// derive summaries or chart series, they never edit rows in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<SaleRecord>,
    seed: Option<u64>,
}

impl Dataset {
    /// Wrap records that were not produced by the generator (imports, fixtures).
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Self { records, seed: None }
    }

    pub(crate) fn generated(records: Vec<SaleRecord>, seed: u64) -> Self {
        Self {
            records,
            seed: Some(seed),
        }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Seed the dataset was generated from, if it came from the generator.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaleRecord> {
        self.records.iter()
    }

    /// First `n` rows, or the whole table if shorter.
    pub fn head(&self, n: usize) -> &[SaleRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn into_records(self) -> Vec<SaleRecord> {
        self.records
    }

    /// Compute a fresh [`Summary`] over every record.
    pub fn summary(&self) -> Summary {
        crate::summary::summarize(&self.records)
    }

    /// Access the pivot-table interface.
    pub fn pivot(&self) -> PivotQuery<'_> {
        PivotQuery::new(&self.records)
    }

    /// Access the chart-series interface.
    pub fn charts(&self) -> ChartQuery<'_> {
        ChartQuery::new(self)
    }
}

impl AsRef<[SaleRecord]> for Dataset {
    fn as_ref(&self) -> &[SaleRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SaleRecord;
    type IntoIter = std::slice::Iter<'a, SaleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// TimeSeries — Noisy per-category daily series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    records: Vec<TimeSeriesRecord>,
    seed: Option<u64>,
}

impl TimeSeries {
    pub fn from_records(records: Vec<TimeSeriesRecord>) -> Self {
        Self { records, seed: None }
    }

    pub(crate) fn generated(records: Vec<TimeSeriesRecord>, seed: u64) -> Self {
        Self {
            records,
            seed: Some(seed),
        }
    }

    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> Summary {
        crate::summary::summarize(&self.records)
    }

    /// Observations for a single category in date order.
    pub fn category(&self, name: &str) -> Vec<&TimeSeriesRecord> {
        let mut rows: Vec<&TimeSeriesRecord> =
            self.records.iter().filter(|r| r.category == name).collect();
        rows.sort_by_key(|r| r.date);
        rows
    }
}
