//! Server mode
//!
//! Assembles and runs the lookup proxy: permissive CORS, the shared
//! configuration value and upstream provider as app data, and the two
//! routes. No state survives a request.

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::info;

use crate::api::services::{info_routes, lookup_routes};
use crate::config::Config;
use crate::upstream::GeolookupProvider;

/// Build the CORS middleware.
///
/// Any origin is allowed by design: the proxy exposes nothing but public
/// country-level lookups. Credentials stay disabled — wildcard origin plus
/// credentials is a combination we never ship.
pub fn build_cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Run the lookup proxy until shutdown.
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: Config) -> Result<()> {
    let provider = GeolookupProvider::new(&config.upstream);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!(
        "Starting {} at http://{} (upstream: {})",
        config.app.name, bind_address, config.upstream.base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors_middleware())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(provider.clone()))
            .configure(info_routes)
            .configure(lookup_routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
