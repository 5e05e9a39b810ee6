//! Presentation formatting tests: preview rows and detailed statistics.

mod common;

use sales_lab::format::{self, DetailedStatistics};
use sales_lab::generate;

#[test]
fn preview_formats_first_rows() {
    let rows = format::preview(&common::sample_dataset(), 2);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-05");
    assert_eq!(rows[0].sales_amount, "1,000");
    assert_eq!(rows[0].average_price, "250.00");
    assert_eq!(rows[1].sales_amount, "9,000");
    assert_eq!(rows[1].average_price, "3000.00");
}

#[test]
fn preview_longer_than_dataset_returns_everything() {
    let rows = format::preview(&common::sample_dataset(), 100);
    assert_eq!(rows.len(), 6);
}

#[test]
fn default_preview_is_ten_rows() {
    let dataset = generate(300, 42).unwrap();
    assert_eq!(format::default_preview(&dataset).len(), 10);
    assert_eq!(format::table(&dataset).len(), 300);
}

#[test]
fn detailed_statistics_formats_currency() {
    let summary = common::sample_dataset().summary();
    let stats = DetailedStatistics::from(&summary);

    assert_eq!(stats.overall.total_records, 6);
    assert_eq!(stats.overall.total_sales, "25,000 ₽");
    assert_eq!(stats.overall.average_check, "4,167 ₽");
    assert_eq!(stats.overall.total_quantity, 28);

    let electronics = &stats.by_category["Electronics"];
    assert_eq!(electronics.sales, "15,000 ₽");
    assert_eq!(electronics.quantity, 5);
    assert_eq!(electronics.records, 2);

    assert_eq!(stats.by_region["Moscow"].sales, "13,000 ₽");
}
