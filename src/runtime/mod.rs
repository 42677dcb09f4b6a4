//! Application lifecycle and execution modes

pub mod modes;

pub use modes::{run_client, run_server};
