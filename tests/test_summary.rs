//! Summary integration tests: totals, rollups, date range, empty input.

mod common;

use sales_lab::{generate, summarize, Dataset, SaleRecord, TimeSeries};

// ---------------------------------------------------------------------------
// Fixture totals
// ---------------------------------------------------------------------------

#[test]
fn sample_totals_are_exact() {
    let summary = common::sample_dataset().summary();
    assert_eq!(summary.total_records, 6);
    assert_eq!(summary.total_sales, 25_000.0);
    assert!(common::approx_eq(summary.avg_sales, 25_000.0 / 6.0));
    assert_eq!(summary.total_quantity, 28);
}

#[test]
fn sample_labels_are_sorted_and_distinct() {
    let summary = common::sample_dataset().summary();
    assert_eq!(summary.categories, vec!["Books", "Clothing", "Electronics"]);
    assert_eq!(summary.regions, vec!["Kazan", "Moscow"]);
}

#[test]
fn sample_rollups_per_category_and_region() {
    let summary = common::sample_dataset().summary();

    let books = summary.per_category["Books"];
    assert_eq!(books.sales_sum, 6000.0);
    assert_eq!(books.quantity_sum, 13);
    assert_eq!(books.record_count, 3);

    let kazan = summary.per_region["Kazan"];
    assert_eq!(kazan.sales_sum, 12_000.0);
    assert_eq!(kazan.quantity_sum, 20);
    assert_eq!(kazan.record_count, 3);
}

#[test]
fn sample_date_range_spans_min_and_max() {
    let range = common::sample_dataset().summary().date_range.unwrap();
    assert_eq!(range.start, common::date(2024, 1, 5));
    assert_eq!(range.end, common::date(2024, 2, 14));
}

// ---------------------------------------------------------------------------
// Consistency on generated data
// ---------------------------------------------------------------------------

#[test]
fn rollups_add_up_to_totals() {
    for seed in [1, 42, 1000] {
        let summary = generate(500, seed).unwrap().summary();

        let by_cat: f64 = summary.per_category.values().map(|g| g.sales_sum).sum();
        let by_region: f64 = summary.per_region.values().map(|g| g.sales_sum).sum();
        assert!(common::approx_eq(by_cat, summary.total_sales));
        assert!(common::approx_eq(by_region, summary.total_sales));

        let count: usize = summary.per_category.values().map(|g| g.record_count).sum();
        assert_eq!(count, summary.total_records);

        let qty: u64 = summary.per_region.values().map(|g| g.quantity_sum).sum();
        assert_eq!(qty, summary.total_quantity);
    }
}

#[test]
fn ten_records_seed_one_scenario() {
    let dataset = generate(10, 1).unwrap();
    let summary = summarize(dataset.records());

    assert_eq!(summary.total_records, 10);

    let exact: i64 = dataset.iter().map(|r| r.sales_amount).sum();
    assert_eq!(summary.total_sales, exact as f64);

    let min = dataset.iter().map(|r| r.date).min().unwrap();
    let max = dataset.iter().map(|r| r.date).max().unwrap();
    let range = summary.date_range.unwrap();
    assert_eq!(range.start, min);
    assert_eq!(range.end, max);
}

#[test]
fn summary_is_recomputed_not_cached() {
    let dataset = generate(50, 8).unwrap();
    assert_eq!(dataset.summary(), dataset.summary());
}

#[test]
fn time_series_summary_has_no_regions() {
    let cats = vec!["Laptops".to_string(), "Tablets".to_string()];
    let ts: TimeSeries = sales_lab::generate_time_series(10, &cats, 3).unwrap();
    let summary = ts.summary();
    assert_eq!(summary.total_records, 20);
    assert!(summary.regions.is_empty());
    assert_eq!(summary.categories, cats);
}

// ---------------------------------------------------------------------------
// Empty input
// ---------------------------------------------------------------------------

#[test]
fn empty_dataset_summarizes_to_zero() {
    let summary = Dataset::default().summary();
    assert_eq!(summary.total_records, 0);
    assert_eq!(summary.total_sales, 0.0);
    assert_eq!(summary.avg_sales, 0.0);
    assert_eq!(summary.total_quantity, 0);
    assert!(summary.categories.is_empty());
    assert!(summary.regions.is_empty());
    assert!(summary.per_category.is_empty());
    assert!(summary.per_region.is_empty());
    assert!(summary.date_range.is_none());

    let empty: Vec<SaleRecord> = Vec::new();
    assert_eq!(summarize(&empty), summary);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn summary_serializes_expected_fields() {
    let value = serde_json::to_value(common::sample_dataset().summary()).unwrap();
    assert_eq!(value["total_records"], 6);
    assert_eq!(value["total_sales"], 25_000.0);
    assert_eq!(value["date_range"]["start"], "2024-01-05");
    assert_eq!(value["date_range"]["end"], "2024-02-14");
    assert_eq!(value["categories"][0], "Books");
    assert_eq!(value["per_category"]["Clothing"]["sales_sum"], 4000.0);
    assert_eq!(value["per_category"]["Clothing"]["quantity_sum"], 10);
    assert_eq!(value["per_region"]["Moscow"]["record_count"], 3);
}
