//! Derived views over a [`Dataset`](crate::models::Dataset).
//!
//! Each query struct borrows the records it reads and returns plain data
//! (pivot tables, statistics, or JSON chart series). Nothing is cached.

pub mod charts;
pub mod pivot;
pub mod stats;

pub use charts::{ChartKind, ChartQuery, Point, Share};
pub use pivot::{Aggregation, Dimension, Measure, PivotQuery, PivotTable};
pub use stats::{BoxStats, CorrelationMatrix, Histogram};
