use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::extract::{GeoCandidate, GeoResult};
use crate::config::UpstreamConfig;
use crate::errors::GeovisionError;

/// Client for the external geolookup API.
///
/// Built once at startup and shared via `web::Data`; holds a `reqwest`
/// client with the configured total timeout. Each `lookup` issues exactly
/// one outbound request and classifies every failure into a
/// `GeovisionError` carrying the proxy's response detail.
#[derive(Debug, Clone)]
pub struct GeolookupProvider {
    base_url: String,
    http: Client,
}

impl GeolookupProvider {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Look up one IP address.
    ///
    /// The address is treated as an opaque path segment; malformed input is
    /// the upstream's problem to reject. The upstream answers with a list
    /// of candidate records and only the first one is used.
    pub async fn lookup(&self, ip: &str) -> Result<GeoResult, GeovisionError> {
        let url = format!("{}/geolookup/{}", self.base_url, ip);
        trace!("Querying upstream: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            // Capture the failing code here, in the error path itself.
            if status == reqwest::StatusCode::NOT_FOUND {
                debug!("Upstream has no entry for {}", ip);
                return Err(GeovisionError::upstream_not_found(ip));
            }
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream returned HTTP {} for {}: {}", status, ip, body);
            return Err(GeovisionError::upstream_status(
                status.as_u16(),
                format!("upstream geolocation error: HTTP {} {}", status.as_u16(), body),
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| GeovisionError::serialization(e.to_string()))?;

        let records = match payload.as_array() {
            Some(records) if !records.is_empty() => records,
            _ => {
                debug!("Upstream returned empty or non-list payload for {}", ip);
                return Err(GeovisionError::no_data(ip));
            }
        };

        // First record is the most specific match.
        GeoCandidate::from_record(&records[0])
            .into_result(ip)
            .ok_or_else(|| GeovisionError::no_data(ip))
    }
}

/// Map a reqwest transport failure onto the proxy's error taxonomy.
fn classify_transport_error(err: &reqwest::Error) -> GeovisionError {
    if err.is_timeout() {
        GeovisionError::upstream_timeout("upstream geolocation request timed out")
    } else if err.is_connect() {
        GeovisionError::upstream_connection("failed to connect to upstream geolocation service")
    } else {
        GeovisionError::internal(format!("upstream request failed: {}", err))
    }
}
