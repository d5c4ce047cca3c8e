//! OctoPerf API Client
//!
//! Implements the [`OctoPerfApi`] port with `reqwest`. Each method issues
//! exactly one request, raced against the caller's cancellation token.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use opm_domain::error::{Error, Result};
use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::SummaryReportItem;

use crate::constants::{CONTENT_TYPE_JSON, ERROR_MSG_MISSING_API_KEY, USER_AGENT};
use crate::http::HttpResponseUtils;

/// OctoPerf REST API client
///
/// Immutable after construction; share it behind an `Arc`.
///
/// ## Example
///
/// ```rust,no_run
/// use opm_providers::OctoPerfClient;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = OctoPerfClient::new(Some("api-key"), "https://api.octoperf.com")?;
///     assert_eq!(client.base_url().as_str(), "https://api.octoperf.com/");
///     Ok(())
/// }
/// ```
pub struct OctoPerfClient {
    base_url: Url,
    api_key: String,
    http_client: Client,
}

impl OctoPerfClient {
    /// Create a client with its own connection pool
    ///
    /// # Errors
    /// [`Error::Configuration`] when the API key is missing or blank, the base
    /// URL is not an absolute URL, or the HTTP client cannot be built.
    pub fn new(api_key: Option<&str>, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::config_with_source("Failed to build HTTP client", e))?;
        Self::with_http_client(api_key, base_url, http_client)
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_http_client(
        api_key: Option<&str>,
        base_url: &str,
        http_client: Client,
    ) -> Result<Self> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config(ERROR_MSG_MISSING_API_KEY))?
            .to_string();

        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            Error::config_with_source(format!("Invalid OctoPerf base URL: {base_url}"), e)
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "OctoPerf base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            base_url,
            api_key,
            http_client,
        })
    }

    /// Base URL all routes are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a route; every segment is percent-encoded on its own
    ///
    /// `.` and `..` are rejected: URL path resolution drops them, which would
    /// silently address a different resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(Error::validation(vec![format!(
                "identifier '{segment}' cannot be used as a path segment"
            )]));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::config(format!(
                    "OctoPerf base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Prepare an authenticated request for `segments`
    fn request(&self, method: Method, segments: &[&str]) -> Result<(RequestBuilder, String)> {
        let url = self.endpoint(segments)?;
        let route = url.path().to_string();
        let builder = self
            .http_client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, CONTENT_TYPE_JSON);
        Ok((builder, route))
    }

    /// Send one request, aborting it if `ct` fires first
    async fn execute(
        &self,
        ct: &CancellationToken,
        request: RequestBuilder,
        route: &str,
    ) -> Result<String> {
        debug!(route = route, "Sending OctoPerf API request");

        let exchange = async {
            let response = request.send().await.map_err(|e| {
                Error::transport_with_source(format!("request to {route} failed: {e}"), e)
            })?;
            HttpResponseUtils::check_and_read(response, route).await
        };

        tokio::select! {
            biased;
            _ = ct.cancelled() => {
                warn!(route = route, "OctoPerf API request cancelled by caller");
                Err(Error::cancelled())
            }
            outcome = exchange => outcome,
        }
    }

    async fn get(&self, ct: &CancellationToken, segments: &[&str]) -> Result<String> {
        let (request, route) = self.request(Method::GET, segments)?;
        self.execute(ct, request, &route).await
    }
}

#[async_trait]
impl OctoPerfApi for OctoPerfClient {
    async fn get_test_status(
        &self,
        ct: &CancellationToken,
        bench_result_id: &str,
    ) -> Result<String> {
        self.get(ct, &["runtime", "bench-results", "progress", bench_result_id])
            .await
    }

    async fn run_test(&self, ct: &CancellationToken, runtime_id: &str) -> Result<String> {
        let (request, route) =
            self.request(Method::POST, &["runtime", "scenarios", "run", runtime_id])?;
        self.execute(ct, request, &route).await
    }

    async fn get_report_details(&self, ct: &CancellationToken, report_id: &str) -> Result<String> {
        self.get(ct, &["analysis", "bench-reports", report_id]).await
    }

    async fn get_metric_detail(
        &self,
        ct: &CancellationToken,
        bench_result_id: &str,
        metric_ids: &[String],
    ) -> Result<String> {
        let summary = SummaryReportItem::for_bench_result(bench_result_id, metric_ids);
        let body = serde_json::to_vec(&summary)?;
        debug!(
            bench_result_id = bench_result_id,
            metrics = metric_ids.len(),
            "Requesting metrics summary"
        );

        let (request, route) = self.request(Method::POST, &["analysis", "metrics", "summary"])?;
        let request = request.header(CONTENT_TYPE, CONTENT_TYPE_JSON).body(body);
        self.execute(ct, request, &route).await
    }

    async fn get_current_user_workspaces(&self, ct: &CancellationToken) -> Result<String> {
        self.get(ct, &["workspaces", "member-of"]).await
    }

    async fn get_projects_by_workspace_id(
        &self,
        ct: &CancellationToken,
        workspace_id: &str,
    ) -> Result<String> {
        self.get(
            ct,
            &["design", "projects", "by-workspace", workspace_id, "DESIGN"],
        )
        .await
    }

    async fn get_runtime_ids(&self, ct: &CancellationToken, project_id: &str) -> Result<String> {
        self.get(ct, &["runtime", "scenarios", "by-project", project_id])
            .await
    }
}
