//! HTTP API layer

pub mod services;
