//! geovision - IP geolocation lookup proxy and client
//!
//! Two thin layers composed only via HTTP:
//! - the **lookup proxy** forwards one lookup per request to an external
//!   geolookup provider and normalizes the response shape
//! - the **lookup client** collects an address interactively, queries the
//!   proxy, renders the result, and opens a map in the default browser
//!
//! # Architecture
//! - `api`: HTTP services (info + lookup endpoints)
//! - `upstream`: outbound provider call and field extraction
//! - `interfaces`: the interactive client
//! - `config`: startup configuration (TOML + env + defaults)
//! - `runtime`: execution modes (server, client)
//! - `system`: logging initialization

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod system;
pub mod upstream;
