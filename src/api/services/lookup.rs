use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::GeovisionError;
use crate::upstream::GeolookupProvider;

/// Error body shape for every non-200 answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub struct LookupService;

impl LookupService {
    /// `GET /ip/{ip}` — geolocate one address through the upstream provider.
    ///
    /// The path segment is forwarded as-is; the upstream decides what a
    /// valid address is. The provider's error value carries both the
    /// response status and the detail text, so the mapping here is a plain
    /// match with no exception-style control flow.
    pub async fn geolocate_ip(
        path: web::Path<String>,
        provider: web::Data<GeolookupProvider>,
    ) -> impl Responder {
        let ip = path.into_inner();
        debug!("Geolocation lookup requested for {}", ip);

        match provider.lookup(&ip).await {
            Ok(result) => {
                info!(
                    "Resolved {} to {} ({}, {})",
                    ip, result.country, result.latitude, result.longitude
                );
                HttpResponse::Ok().json(result)
            }
            Err(err) => Self::error_response(&ip, err),
        }
    }

    fn error_response(ip: &str, err: GeovisionError) -> HttpResponse {
        warn!("Lookup for {} failed: {}", ip, err);
        HttpResponse::build(err.status_code()).json(ErrorDetail {
            detail: err.message().to_string(),
        })
    }
}

/// Route registration for the lookup endpoint.
pub fn lookup_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ip/{ip_address}", web::get().to(LookupService::geolocate_ip));
}
