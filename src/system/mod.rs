//! Platform and process utilities

pub mod logging;

pub use logging::init_logging;
