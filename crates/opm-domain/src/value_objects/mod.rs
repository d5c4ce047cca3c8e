//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SummaryReportItem`] | Body of the metrics summary request |
//! | [`MetricDescriptor`] | One requested metric inside a summary |
//! | [`MetricType`] | Aggregation level looked up from a metric id |
//! | [`ResponseEnvelope`] | Success payload returned to the MCP caller |

/// Tool response envelope
pub mod envelope;
/// Metric summary request body
pub mod metrics;

pub use envelope::{
    ResponseEnvelope, STATUS_METRICS_RETRIEVED, STATUS_REPORT_RETRIEVED, STATUS_RETRIEVED,
    STATUS_TEST_STARTED,
};
pub use metrics::{MetricDescriptor, MetricType, SummaryReportItem, is_known_metric};
