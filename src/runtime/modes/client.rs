//! Client mode
//!
//! Entry point for the interactive lookup client.

use anyhow::Result;

use crate::config::Config;
use crate::interfaces::client;

/// Run the interactive client until the user quits.
pub async fn run_client(config: Config) -> Result<()> {
    client::run(&config).await
}
