//! Metric summary value objects
//!
//! Builds the body of `POST /analysis/metrics/summary`. Metric ids are opaque
//! to this server; the only thing derived from them is the metric level.

use serde::Serialize;
use serde_json::Value;

use crate::constants::{
    CONTAINER_METRIC_IDS, HIT_METRIC_IDS, SUMMARY_REPORT_ITEM_NAME, SUMMARY_REPORT_ITEM_TYPE,
};

/// Level at which OctoPerf aggregates a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    /// Aggregated per container (virtual user action group)
    Container,
    /// Aggregated per hit
    Hit,
}

impl MetricType {
    /// Look up the level of a metric id
    ///
    /// Unrecognized ids fall back to [`MetricType::Hit`]; the remote API is
    /// left to reject them.
    pub fn for_metric(metric_id: &str) -> Self {
        if CONTAINER_METRIC_IDS.contains(&metric_id) {
            Self::Container
        } else {
            Self::Hit
        }
    }

    /// Wire name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "CONTAINER",
            Self::Hit => "HIT",
        }
    }
}

/// Whether a metric id appears in the static lookup table
pub fn is_known_metric(metric_id: &str) -> bool {
    CONTAINER_METRIC_IDS.contains(&metric_id) || HIT_METRIC_IDS.contains(&metric_id)
}

/// One requested metric of a summary report item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDescriptor {
    /// Metric id as supplied by the caller
    pub id: String,
    /// Level derived from the id
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    /// Always empty
    pub filters: Vec<Value>,
    /// Bench result the metric is computed on
    pub bench_result_id: String,
    /// Always empty
    pub configs: Vec<Value>,
}

impl MetricDescriptor {
    /// Describe `metric_id` on `bench_result_id`
    pub fn new(metric_id: &str, bench_result_id: &str) -> Self {
        Self {
            id: metric_id.to_string(),
            metric_type: MetricType::for_metric(metric_id),
            filters: Vec::new(),
            bench_result_id: bench_result_id.to_string(),
            configs: Vec::new(),
        }
    }
}

/// Request body of the metrics summary endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReportItem {
    #[serde(rename = "@type")]
    item_type: &'static str,
    /// Requested metrics, in caller order
    pub metrics: Vec<MetricDescriptor>,
    /// Always empty: the item is not persisted
    pub id: String,
    /// Display name
    pub name: String,
}

impl SummaryReportItem {
    /// Build the summary request for `metric_ids` on one bench result
    pub fn for_bench_result<S: AsRef<str>>(bench_result_id: &str, metric_ids: &[S]) -> Self {
        let metrics = metric_ids
            .iter()
            .map(|metric_id| {
                let metric_id = metric_id.as_ref();
                if !is_known_metric(metric_id) {
                    tracing::warn!(
                        metric_id = metric_id,
                        "Unknown metric id, defaulting to HIT level"
                    );
                }
                MetricDescriptor::new(metric_id, bench_result_id)
            })
            .collect();

        Self {
            item_type: SUMMARY_REPORT_ITEM_TYPE,
            metrics,
            id: String::new(),
            name: SUMMARY_REPORT_ITEM_NAME.to_string(),
        }
    }

    /// The `@type` discriminator
    pub fn item_type(&self) -> &'static str {
        self.item_type
    }
}
