//! Proxy API client
//!
//! One GET per submission, 10 second timeout. Non-200 answers surface the
//! proxy's `detail` text; every transport failure maps to a user-facing
//! `ClientError` and nothing is retried.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::ClientError;
use crate::upstream::GeoResult;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const OSM_ZOOM: u8 = 10;

/// HTTP client for one lookup proxy.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: Client,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
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

    /// Query the proxy for one IP address.
    pub async fn query(&self, ip: &str) -> Result<GeoResult, ClientError> {
        let url = format!("{}/ip/{}", self.base_url, ip);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body["detail"].as_str().map(String::from))
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ClientError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<GeoResult>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    fn classify_transport_error(&self, err: &reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else {
            ClientError::Request(err.to_string())
        }
    }
}

/// OpenStreetMap URL centered on the coordinates at a fixed zoom.
pub fn map_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={}&mlon={}&zoom={}",
        latitude, longitude, OSM_ZOOM
    )
}

/// Open the system default browser on the map.
pub fn open_map(latitude: f64, longitude: f64) -> Result<(), ClientError> {
    webbrowser::open(&map_url(latitude, longitude))
        .map_err(|e| ClientError::Request(format!("failed to open browser: {}", e)))
}
