use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Liveness/info response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
    pub app_name: String,
}

pub struct InfoService;

impl InfoService {
    /// Root endpoint: static greeting plus the configured application name.
    pub async fn read_root(config: web::Data<Config>) -> impl Responder {
        HttpResponse::Ok().json(InfoResponse {
            message: "Hello from IP Geolocation API".to_string(),
            app_name: config.app.name.clone(),
        })
    }
}

/// Route registration for the info endpoint.
pub fn info_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(InfoService::read_root));
}
