use clap::Parser;
use dotenvy::dotenv;

use geovision::cli::{Cli, Commands};
use geovision::config::Config;
use geovision::errors::GeovisionError;
use geovision::runtime::{run_client, run_server};
use geovision::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Client) => {
            // Client mode stays quiet on the log side; output is the UI.
            run_client(config).await
        }
        Some(Commands::Server) | None => {
            let _guard = init_logging(&config);
            if let Err(err) = run_server(config).await {
                eprintln!(
                    "{}",
                    GeovisionError::internal(err.to_string()).format_colored()
                );
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
