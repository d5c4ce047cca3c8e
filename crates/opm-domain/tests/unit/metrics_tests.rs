//! Unit tests for the metrics summary request body

use opm_domain::value_objects::{MetricType, SummaryReportItem, is_known_metric};
use serde_json::json;

#[test]
fn test_container_metrics() {
    assert_eq!(MetricType::for_metric("RESPONSE_TIME_AVG"), MetricType::Container);
    assert_eq!(MetricType::for_metric("LATENCY_STD"), MetricType::Container);
}

#[test]
fn test_hit_metrics() {
    for id in [
        "RESPONSE_TIME_PERCENTILE_90",
        "RESPONSE_TIME_PERCENTILE_95",
        "HITS_TOTAL",
        "ERRORS_TOTAL",
        "ERRORS_PERCENT",
        "THROUGHPUT_RATE",
        "HITS_RATE",
    ] {
        assert_eq!(MetricType::for_metric(id), MetricType::Hit, "{id} should be HIT");
        assert!(is_known_metric(id));
    }
}

#[test]
fn test_unknown_metric_defaults_to_hit() {
    assert_eq!(MetricType::for_metric("UNKNOWN_ID"), MetricType::Hit);
    assert_eq!(MetricType::for_metric("response_time_avg"), MetricType::Hit);
    assert!(!is_known_metric("UNKNOWN_ID"));
}

#[test]
fn test_summary_preserves_order_and_bench_result() {
    let item = SummaryReportItem::for_bench_result(
        "bench-1",
        &["RESPONSE_TIME_AVG", "HITS_TOTAL", "UNKNOWN_ID"],
    );

    let types: Vec<&str> = item.metrics.iter().map(|m| m.metric_type.as_str()).collect();
    assert_eq!(types, vec!["CONTAINER", "HIT", "HIT"]);

    let ids: Vec<&str> = item.metrics.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["RESPONSE_TIME_AVG", "HITS_TOTAL", "UNKNOWN_ID"]);

    assert!(item.metrics.iter().all(|m| m.bench_result_id == "bench-1"));
}

#[test]
fn test_summary_wire_format() {
    let item = SummaryReportItem::for_bench_result("bench-1", &["LATENCY_STD".to_string()]);
    let value = serde_json::to_value(&item).expect("summary serializes");

    assert_eq!(
        value,
        json!({
            "@type": "SummaryReportItem",
            "metrics": [{
                "id": "LATENCY_STD",
                "type": "CONTAINER",
                "filters": [],
                "benchResultId": "bench-1",
                "configs": []
            }],
            "id": "",
            "name": "Statistics summary"
        })
    );
}

#[test]
fn test_summary_with_no_metrics_is_still_well_formed() {
    let item = SummaryReportItem::for_bench_result::<&str>("bench-1", &[]);
    assert!(item.metrics.is_empty());
    assert_eq!(item.item_type(), "SummaryReportItem");
}
