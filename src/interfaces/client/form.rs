//! Lookup form resolution
//!
//! Raw prompt input → validated lookup target. All validation happens
//! here, before any network call: an empty IP or an unparseable port never
//! reaches the wire.

use super::ClientError;

pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct LookupForm {
    pub ip: String,
    pub hostname: String,
    pub port: String,
}

/// A validated lookup request: the address to resolve and the proxy base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTarget {
    pub ip: String,
    pub base_url: String,
}

impl LookupForm {
    /// Resolve the form into a lookup target.
    ///
    /// Blank hostname/port fall back to the defaults; a non-empty,
    /// non-numeric port is an error, not a fallback.
    pub fn resolve(&self) -> Result<LookupTarget, ClientError> {
        let ip = self.ip.trim();
        if ip.is_empty() {
            return Err(ClientError::EmptyIp);
        }

        let hostname = match self.hostname.trim() {
            "" => DEFAULT_HOSTNAME,
            host => host,
        };

        let port = match self.port.trim() {
            "" => DEFAULT_PORT,
            raw => raw
                .parse::<u16>()
                .map_err(|_| ClientError::InvalidPort(raw.to_string()))?,
        };

        Ok(LookupTarget {
            ip: ip.to_string(),
            base_url: format!("http://{}:{}", hostname, port),
        })
    }
}
