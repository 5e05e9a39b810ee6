//! Chart-ready series for each supported chart style.
//!
//! Nothing here draws anything. Each builder assembles the aggregated
//! series a renderer needs for one chart style and returns them as a JSON
//! object keyed by panel name.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config;
use crate::error::SalesError;
use crate::models::Dataset;
use crate::queries::pivot::{Aggregation, Dimension, Measure, PivotQuery};
use crate::queries::stats::{self, BoxStats};

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Histogram,
    Scatter,
    Box,
    Heatmap,
    Area,
    Violin,
    Pivot,
}

impl ChartKind {
    pub const ALL: [ChartKind; 10] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Histogram,
        ChartKind::Scatter,
        ChartKind::Box,
        ChartKind::Heatmap,
        ChartKind::Area,
        ChartKind::Violin,
        ChartKind::Pivot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Histogram => "histogram",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Area => "area",
            ChartKind::Violin => "violin",
            ChartKind::Pivot => "pivot",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = SalesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| SalesError::NotFound(format!("Unknown chart type: {s}")))
    }
}

// ---------------------------------------------------------------------------
// Series helpers
// ---------------------------------------------------------------------------

/// A labelled value, the unit of every bar/pie/line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub label: String,
    pub value: f64,
    pub percent: f64,
}

fn points(pairs: Vec<(String, f64)>) -> Vec<Point> {
    pairs
        .into_iter()
        .map(|(label, value)| Point { label, value })
        .collect()
}

fn shares(pairs: Vec<(String, f64)>) -> Vec<Share> {
    let total: f64 = pairs.iter().map(|(_, v)| v).sum();
    pairs
        .into_iter()
        .map(|(label, value)| Share {
            percent: if total == 0.0 { 0.0 } else { value / total * 100.0 },
            label,
            value,
        })
        .collect()
}

fn box_stats_by(groups: BTreeMap<String, Vec<f64>>) -> BTreeMap<String, Option<BoxStats>> {
    groups
        .into_iter()
        .map(|(k, v)| {
            let stats = BoxStats::from_values(&v);
            (k, stats)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ChartQuery
// ---------------------------------------------------------------------------

/// Query interface producing chart series from a borrowed [`Dataset`].
pub struct ChartQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> ChartQuery<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    fn pivot(&self) -> PivotQuery<'a> {
        PivotQuery::new(self.dataset.records())
    }

    /// Build every panel for `kind`.
    pub fn build(&self, kind: ChartKind) -> Value {
        let panels = match kind {
            ChartKind::Line => self.line(),
            ChartKind::Bar => self.bar(),
            ChartKind::Pie => self.pie(),
            ChartKind::Histogram => self.histogram(),
            ChartKind::Scatter => self.scatter(),
            ChartKind::Box => self.box_plot(),
            ChartKind::Heatmap => self.heatmap(),
            ChartKind::Area => self.area(),
            ChartKind::Violin => self.violin(),
            ChartKind::Pivot => self.pivot_composite(),
        };
        json!({
            "kind": kind,
            "record_count": self.dataset.len(),
            "panels": panels,
        })
    }

    /// Total sales per day in date order.
    pub fn daily_sales(&self) -> Vec<Point> {
        points(self.pivot().group(Measure::Sales, Dimension::Date, Aggregation::Sum))
    }

    /// Total sales per category, largest first.
    pub fn sales_by_category(&self) -> Vec<Point> {
        let mut pairs = self
            .pivot()
            .group(Measure::Sales, Dimension::Category, Aggregation::Sum);
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        points(pairs)
    }

    /// Total sales per region, smallest first.
    pub fn sales_by_region(&self) -> Vec<Point> {
        let mut pairs = self
            .pivot()
            .group(Measure::Sales, Dimension::Region, Aggregation::Sum);
        pairs.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        points(pairs)
    }

    fn line(&self) -> Value {
        let daily = self.daily_sales();
        let values: Vec<f64> = daily.iter().map(|p| p.value).collect();
        let rolling: Vec<Value> = daily
            .iter()
            .zip(stats::rolling_mean(&values, config::ROLLING_WINDOW))
            .map(|(p, v)| json!({ "label": p.label, "value": v }))
            .collect();

        let by_category = self.pivot().table(
            Measure::Sales,
            Dimension::Category,
            Dimension::Date,
            Aggregation::Sum,
        );

        json!({
            "daily_total": daily,
            "daily_by_category": by_category,
            "rolling_mean": {
                "window": config::ROLLING_WINDOW,
                "series": rolling,
            },
        })
    }

    fn bar(&self) -> Value {
        let pivot = self.pivot();
        json!({
            "by_category": self.sales_by_category(),
            "category_by_region": pivot.table(
                Measure::Sales, Dimension::Category, Dimension::Region, Aggregation::Sum,
            ),
            "by_region": self.sales_by_region(),
            "region_by_category_stacked": pivot.table(
                Measure::Sales, Dimension::Region, Dimension::Category, Aggregation::Sum,
            ),
        })
    }

    fn pie(&self) -> Value {
        let pivot = self.pivot();
        json!({
            "region_share": shares(pivot.group(Measure::Sales, Dimension::Region, Aggregation::Sum)),
            "category_share": shares(pivot.group(Measure::Sales, Dimension::Category, Aggregation::Sum)),
        })
    }

    fn histogram(&self) -> Value {
        let records = self.dataset.records();
        let prices: Vec<f64> = records.iter().map(|r| r.average_price).collect();
        let sales: Vec<f64> = records.iter().map(|r| r.sales_amount as f64).collect();
        json!({
            "average_price": stats::histogram(&prices, config::HISTOGRAM_BINS),
            "sales_amount": stats::histogram(&sales, config::HISTOGRAM_BINS),
            "average_price_mean": stats::mean(&prices),
        })
    }

    fn scatter(&self) -> Value {
        let points: Vec<Value> = self
            .dataset
            .iter()
            .map(|r| {
                json!({
                    "quantity": r.quantity,
                    "sales_amount": r.sales_amount,
                    "average_price": r.average_price,
                    "category": r.category,
                })
            })
            .collect();
        let xs: Vec<f64> = self.dataset.iter().map(|r| f64::from(r.quantity)).collect();
        let ys: Vec<f64> = self.dataset.iter().map(|r| r.sales_amount as f64).collect();
        json!({
            "points": points,
            "correlation": stats::pearson(&xs, &ys),
        })
    }

    fn box_plot(&self) -> Value {
        let pivot = self.pivot();
        json!({
            "average_price_by_category": box_stats_by(
                pivot.values_by(Measure::AveragePrice, Dimension::Category),
            ),
            "sales_by_region": box_stats_by(pivot.values_by(Measure::Sales, Dimension::Region)),
            "sales_by_category": box_stats_by(pivot.values_by(Measure::Sales, Dimension::Category)),
        })
    }

    fn heatmap(&self) -> Value {
        let pivot = self.pivot();
        let sales = pivot.table(
            Measure::Sales,
            Dimension::Category,
            Dimension::Region,
            Aggregation::Sum,
        );
        let quantity = pivot.table(
            Measure::Quantity,
            Dimension::Category,
            Dimension::Region,
            Aggregation::Mean,
        );
        let price = pivot.table(
            Measure::AveragePrice,
            Dimension::Category,
            Dimension::Region,
            Aggregation::Mean,
        );
        json!({
            "sales_sum": { "grand_mean": sales.grand_mean(), "table": sales },
            "quantity_mean": { "grand_mean": quantity.grand_mean(), "table": quantity },
            "average_price_mean": { "grand_mean": price.grand_mean(), "table": price },
            "correlation": stats::correlation_matrix(self.dataset.records()),
        })
    }

    fn area(&self) -> Value {
        let stacked = self.pivot().table(
            Measure::Sales,
            Dimension::Date,
            Dimension::Category,
            Aggregation::Sum,
        );
        let mut running = 0.0;
        let cumulative: Vec<Point> = self
            .daily_sales()
            .into_iter()
            .map(|p| {
                running += p.value;
                Point {
                    label: p.label,
                    value: running,
                }
            })
            .collect();
        json!({
            "stacked_by_category": stacked,
            "cumulative_total": cumulative,
            "category_totals": self.sales_by_category(),
        })
    }

    fn violin(&self) -> Value {
        let pivot = self.pivot();
        let distribution = |groups: BTreeMap<String, Vec<f64>>| -> Value {
            let map: serde_json::Map<String, Value> = groups
                .into_iter()
                .map(|(k, values)| {
                    let stats = BoxStats::from_values(&values);
                    (k, json!({ "values": values, "stats": stats }))
                })
                .collect();
            Value::Object(map)
        };
        json!({
            "sales_by_category": distribution(pivot.values_by(Measure::Sales, Dimension::Category)),
            "sales_by_region": distribution(pivot.values_by(Measure::Sales, Dimension::Region)),
        })
    }

    fn pivot_composite(&self) -> Value {
        let pivot = self.pivot();
        let sales_sum = pivot.group(Measure::Sales, Dimension::Category, Aggregation::Sum);
        let sales_mean = pivot.group(Measure::Sales, Dimension::Category, Aggregation::Mean);
        let quantity_sum = pivot.group(Measure::Quantity, Dimension::Category, Aggregation::Sum);
        let multi: Vec<Value> = sales_sum
            .iter()
            .zip(&sales_mean)
            .zip(&quantity_sum)
            .map(|(((label, sum), (_, mean)), (_, qty))| {
                json!({
                    "category": label,
                    "sales_sum": sum,
                    "sales_mean": (mean * 100.0).round() / 100.0,
                    "quantity_sum": qty,
                })
            })
            .collect();

        json!({
            "category_by_region": pivot.table(
                Measure::Sales, Dimension::Category, Dimension::Region, Aggregation::Sum,
            ),
            "region_by_category": pivot.table(
                Measure::Sales, Dimension::Region, Dimension::Category, Aggregation::Sum,
            ),
            "quantity_mean": pivot.table(
                Measure::Quantity, Dimension::Category, Dimension::Region, Aggregation::Mean,
            ),
            "category_metrics": multi,
            "monthly_by_category": pivot.table(
                Measure::Sales, Dimension::Month, Dimension::Category, Aggregation::Sum,
            ),
        })
    }
}
