//! Domain constants
//!
//! Fixed values of the OctoPerf metrics summary request.

/// `@type` discriminator of the summary report item
pub const SUMMARY_REPORT_ITEM_TYPE: &str = "SummaryReportItem";

/// Display name sent with every summary report item
pub const SUMMARY_REPORT_ITEM_NAME: &str = "Statistics summary";

/// Metric ids served from the container level of a bench result
pub const CONTAINER_METRIC_IDS: &[&str] = &["RESPONSE_TIME_AVG", "LATENCY_STD"];

/// Metric ids served from the hit level of a bench result
pub const HIT_METRIC_IDS: &[&str] = &[
    "RESPONSE_TIME_PERCENTILE_90",
    "RESPONSE_TIME_PERCENTILE_95",
    "HITS_TOTAL",
    "ERRORS_TOTAL",
    "ERRORS_PERCENT",
    "THROUGHPUT_RATE",
    "HITS_RATE",
];
