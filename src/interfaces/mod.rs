//! User interfaces

pub mod client;
