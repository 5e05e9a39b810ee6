//! Descriptive statistics used by the chart queries.
//!
//! Quantiles use linear interpolation between closest ranks, the same
//! convention as most dataframe libraries, so box plots line up with what a
//! reader would compute by hand.

use serde::{Deserialize, Serialize};

use crate::models::SaleRecord;

/// Linear-interpolated quantile of an already sorted slice.
///
/// `q` is clamped to `[0, 1]`. Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// BoxStats
// ---------------------------------------------------------------------------

/// Five-number summary plus Tukey whiskers and outliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub iqr: f64,
    /// Smallest value within `q1 - 1.5 * iqr`.
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * iqr`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Returns `None` when `values` is empty. NaNs are ignored.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let lower_whisker = sorted.iter().copied().find(|&v| v >= low_fence).unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            mean: mean(&sorted)?,
            iqr,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `bins + 1` edges; bin `i` covers `[edges[i], edges[i + 1])`, the last
    /// bin is closed on the right.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Equal-width histogram over `[min, max]` of the finite values.
///
/// When every value is equal the range is widened by 0.5 on each side so
/// the data lands in the middle bin. Empty input (or `bins == 0`) gives an
/// empty histogram.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Histogram {
            edges: Vec::new(),
            counts: Vec::new(),
        };
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}

/// Trailing moving average. Positions before the window fills are `None`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    for (i, v) in values.iter().enumerate() {
        sum += v;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out.push(Some(sum / window as f64));
        } else {
            out.push(None);
        }
    }
    out
}

/// Pearson correlation coefficient.
///
/// `None` when the inputs differ in length, hold fewer than two points, or
/// either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some(cov / (vx.sqrt() * vy.sqrt()))
}

// ---------------------------------------------------------------------------
// CorrelationMatrix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major; undefined coefficients are `None`.
    pub values: Vec<Vec<Option<f64>>>,
}

/// Pairwise correlation of sales amount, quantity and average price.
pub fn correlation_matrix(records: &[SaleRecord]) -> CorrelationMatrix {
    let columns: [(&str, Vec<f64>); 3] = [
        ("sales_amount", records.iter().map(|r| r.sales_amount as f64).collect()),
        ("quantity", records.iter().map(|r| f64::from(r.quantity)).collect()),
        ("average_price", records.iter().map(|r| r.average_price).collect()),
    ];

    let values = columns
        .iter()
        .map(|(_, a)| {
            columns
                .iter()
                .map(|(_, b)| pearson(a, b))
                .collect()
        })
        .collect();

    CorrelationMatrix {
        labels: columns.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_ranks() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.5), Some(2.5));
        assert_eq!(quantile(&v, 0.25), Some(1.75));
        assert_eq!(quantile(&v, 0.0), Some(1.0));
        assert_eq!(quantile(&v, 1.0), Some(4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn box_stats_flags_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = BoxStats::from_values(&values).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.upper_whisker, 5.0);
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.count, 6);
    }

    #[test]
    fn box_stats_empty_is_none() {
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let h = histogram(&values, 10);
        assert_eq!(h.edges.len(), 11);
        assert_eq!(h.counts.iter().sum::<usize>(), 100);
        assert!(h.counts.iter().all(|&c| c == 10));
    }

    #[test]
    fn histogram_constant_values() {
        let h = histogram(&[7.0, 7.0, 7.0], 3);
        assert_eq!(h.counts, vec![0, 3, 0]);
    }

    #[test]
    fn rolling_mean_waits_for_full_window() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out, vec![None, None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn pearson_perfect_and_degenerate() {
        let xs = [1.0, 2.0, 3.0];
        let r = pearson(&xs, &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        let r = pearson(&xs, &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&xs, &[5.0, 5.0, 5.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
    }
}
