use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SalesFact — Read view shared by every record kind
// ---------------------------------------------------------------------------

/// Columns every generated row exposes, whichever variant produced it.
///
/// The summarizer and the chart queries are written against this trait so
/// they accept both the regional dataset and the noisy time series.
pub trait SalesFact {
    fn date(&self) -> NaiveDate;
    fn category(&self) -> &str;
    /// `None` for variants generated without a region column.
    fn region(&self) -> Option<&str>;
    fn sales(&self) -> f64;
    fn quantity(&self) -> u32;
}

// ---------------------------------------------------------------------------
// SaleRecord — One row of the regional dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub category: String,
    pub region: String,
    pub sales_amount: i64,
    pub quantity: u32,
    pub average_price: f64,
}

impl SaleRecord {
    /// Build a record, deriving `average_price` from sales and quantity.
    ///
    /// A zero quantity yields an average price of `0.0`; the generator never
    /// produces one.
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        region: impl Into<String>,
        sales_amount: i64,
        quantity: u32,
    ) -> Self {
        let average_price = if quantity == 0 {
            0.0
        } else {
            sales_amount as f64 / f64::from(quantity)
        };
        Self {
            date,
            category: category.into(),
            region: region.into(),
            sales_amount,
            quantity,
            average_price,
        }
    }
}

impl SalesFact for SaleRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }

    fn sales(&self) -> f64 {
        self.sales_amount as f64
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

// ---------------------------------------------------------------------------
// TimeSeriesRecord — One (category, day) observation of the noisy variant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub date: NaiveDate,
    pub category: String,
    pub sales_amount: f64,
    pub quantity: u32,
    pub rating: f64,
}

impl SalesFact for TimeSeriesRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn region(&self) -> Option<&str> {
        None
    }

    fn sales(&self) -> f64 {
        self.sales_amount
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
