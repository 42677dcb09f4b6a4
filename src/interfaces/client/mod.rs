//! Interactive lookup client
//!
//! Terminal front-end for the lookup proxy: a prompt loop that collects an
//! IP address and proxy hostname/port, queries the proxy, renders the
//! result, and opens the default browser on the map. Every failure path
//! ends in a visible message; the loop is always ready for the next
//! attempt. Nothing is retried automatically.

pub mod api;
pub mod form;
pub mod render;

pub use api::ProxyClient;
pub use form::{LookupForm, LookupTarget};

use std::fmt;
use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::config::Config;

// ============ ClientError ============

/// Errors from the client layer, all purely presentational.
#[derive(Debug)]
pub enum ClientError {
    /// Empty IP field; caught before any network call
    EmptyIp,
    /// Unparseable port field; caught before any network call
    InvalidPort(String),
    /// Proxy did not answer within the timeout
    Timeout,
    /// Could not connect to the proxy at this base URL
    Connection(String),
    /// Proxy answered non-200 with this detail
    Server { status: u16, detail: String },
    /// Response body could not be parsed
    Parse(String),
    /// Any other request failure
    Request(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::EmptyIp => write!(f, "Please enter an IP address"),
            ClientError::InvalidPort(raw) => write!(f, "Invalid port: {}", raw),
            ClientError::Timeout => {
                write!(f, "Request timed out - server may be unreachable")
            }
            ClientError::Connection(base_url) => {
                write!(f, "Failed to connect to server at {}", base_url)
            }
            ClientError::Server { status, detail } => {
                write!(f, "Server error ({}): {}", status, detail)
            }
            ClientError::Parse(msg) => write!(f, "Response parse error: {}", msg),
            ClientError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

// ============ Notifications ============

fn notify_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

fn notify_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

fn notify_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

// ============ Interactive loop ============

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    // EOF means the user is done
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the interactive client until EOF or `quit`.
///
/// The configured server host/port supply the prompt defaults, so a client
/// started next to the proxy works with three Enter presses.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let default_host = config.server.host.clone();
    let default_port = config.server.port.to_string();

    println!("{}", "GeoIP-Vision".bold());
    println!("Locate any IP address on a map. Type 'quit' or press Ctrl-D to exit.\n");

    loop {
        let ip = match prompt("Target IP address (e.g. 8.8.8.8): ")? {
            Some(ip) => ip,
            None => break,
        };
        if matches!(ip.trim(), "quit" | "exit") {
            break;
        }

        let hostname = match prompt(&format!("Proxy hostname [{}]: ", default_host))? {
            Some(hostname) => hostname,
            None => break,
        };
        let port = match prompt(&format!("Proxy port [{}]: ", default_port))? {
            Some(port) => port,
            None => break,
        };

        let form = LookupForm { ip, hostname, port };
        submit(&form, &default_host, &default_port).await;
        println!();
    }

    Ok(())
}

/// Handle one form submission: validate, query, render, open the map.
async fn submit(form: &LookupForm, default_host: &str, default_port: &str) {
    // Config-provided defaults fill blank fields before validation.
    let form = LookupForm {
        ip: form.ip.clone(),
        hostname: if form.hostname.trim().is_empty() {
            default_host.to_string()
        } else {
            form.hostname.clone()
        },
        port: if form.port.trim().is_empty() {
            default_port.to_string()
        } else {
            form.port.clone()
        },
    };

    let target = match form.resolve() {
        Ok(target) => target,
        Err(err @ ClientError::EmptyIp) => {
            notify_warning(&err.to_string());
            return;
        }
        Err(err) => {
            notify_error(&err.to_string());
            return;
        }
    };

    println!("Querying {} ...", target.base_url);
    let client = ProxyClient::new(&target.base_url);
    match client.query(&target.ip).await {
        Ok(result) => {
            println!("\nResults for {}:", target.ip);
            println!("{}", render::render_result(&result));
            notify_success(&format!("Opening map for {}...", result.country));
            if let Err(err) = api::open_map(result.latitude, result.longitude) {
                notify_error(&err.to_string());
            }
        }
        Err(err) => {
            notify_error(&err.to_string());
        }
    }
}
