//! HTTP services
//!
//! Thin request handlers: no state beyond the request, no business logic
//! past "call the provider, map the outcome".

pub mod info;
pub mod lookup;

pub use info::{info_routes, InfoService};
pub use lookup::{lookup_routes, ErrorDetail, LookupService};
