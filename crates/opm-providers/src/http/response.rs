//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the remote API.

use opm_domain::error::{Error, Result};
use reqwest::Response;
use tracing::{debug, warn};

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check the status and return the raw body text
    ///
    /// The body is never decoded. A non-2xx status becomes
    /// [`Error::RemoteApi`] carrying the status and the raw body; a body that
    /// cannot be read becomes [`Error::Transport`].
    pub async fn check_and_read(response: Response, route: &str) -> Result<String> {
        let status = response.status();

        let body = response.text().await.map_err(|e| {
            Error::transport_with_source(format!("failed to read response body from {route}"), e)
        })?;

        if !status.is_success() {
            warn!(
                route = route,
                status = status.as_u16(),
                "OctoPerf API rejected the request"
            );
            return Err(Error::remote_api(status.as_u16(), body));
        }

        debug!(
            route = route,
            status = status.as_u16(),
            bytes = body.len(),
            "OctoPerf API call succeeded"
        );
        Ok(body)
    }
}
