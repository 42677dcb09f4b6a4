//! Upstream geolocation provider
//!
//! One outbound `GET {base_url}/geolookup/{ip}` per proxy request, bounded
//! by a fixed timeout. The provider owns the error classification: the
//! failing upstream status code is captured inside the error value itself.

mod extract;
mod provider;

pub use extract::GeoResult;
pub use provider::GeolookupProvider;
