//! Mode routing
//!
//! Two execution modes share one binary:
//! - Server mode: the lookup proxy (HTTP server), the default
//! - Client mode: the interactive lookup client

pub mod client;
pub mod server;

pub use client::run_client;
pub use server::run_server;
