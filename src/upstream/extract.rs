//! Field extraction from upstream geolookup records
//!
//! The upstream returns a list of loosely-shaped records with two nested
//! maps of interest: `country_info` (name, alpha-2 code, average
//! coordinates) and `country` (autonomous system number/organization).
//! Missing fields degrade to sentinel values rather than failing the
//! request; only absent coordinates make the lookup unanswerable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNKNOWN: &str = "Unknown";

/// Normalized lookup output, the proxy's 200 body.
///
/// Only constructed when both coordinates are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub ip: String,
    pub country: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub asn: String,
    pub timezone: String,
}

/// Intermediate extraction result with still-optional coordinates.
#[derive(Debug, Clone, Default)]
pub struct GeoCandidate {
    pub country: String,
    pub country_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub asn: String,
}

impl GeoCandidate {
    /// Extract the fields of interest from one upstream record.
    pub fn from_record(record: &Value) -> Self {
        let country_info = &record["country_info"];
        let country = country_info["Country"]
            .as_str()
            .unwrap_or(UNKNOWN)
            .to_string();
        let country_code = country_info["Alpha-2 code"]
            .as_str()
            .unwrap_or("")
            .to_string();
        let latitude = coordinate(&country_info["Latitude (average)"]);
        let longitude = coordinate(&country_info["Longitude (average)"]);

        let country_data = &record["country"];
        let asn = format_asn(
            &country_data["AutonomousSystemNumber"],
            &country_data["AutonomousSystemOrganization"],
        );

        Self {
            country,
            country_code,
            latitude,
            longitude,
            asn,
        }
    }

    /// Promote to a `GeoResult` when both coordinates are present.
    ///
    /// City and timezone are fixed sentinels: the upstream provider does
    /// not supply either.
    pub fn into_result(self, ip: &str) -> Option<GeoResult> {
        let latitude = self.latitude?;
        let longitude = self.longitude?;
        Some(GeoResult {
            ip: ip.to_string(),
            country: self.country,
            country_code: self.country_code,
            latitude,
            longitude,
            city: UNKNOWN.to_string(),
            asn: self.asn,
            timezone: UNKNOWN.to_string(),
        })
    }
}

/// Coordinates arrive as JSON numbers or numeric strings; empty strings
/// count as absent.
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

/// `"<number> (<org>)"`, or `"Unknown"` when the AS number is absent.
fn format_asn(number: &Value, organization: &Value) -> String {
    let number = match number {
        Value::Number(n) => n.to_string(),
        Value::String(s) if !s.is_empty() => s.clone(),
        _ => return UNKNOWN.to_string(),
    };
    let organization = match organization {
        Value::String(s) if !s.is_empty() => s.as_str(),
        Value::Number(_) | Value::Bool(_) => return format!("{} ({})", number, organization),
        _ => UNKNOWN,
    };
    format!("{} ({})", number, organization)
}
