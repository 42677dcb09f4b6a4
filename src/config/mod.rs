//! Application configuration
//!
//! Configuration is resolved once at startup from (in order of precedence):
//! environment variables > TOML file > hardcoded defaults. The resulting
//! `Config` value is cloned into the server's `web::Data` — there is no
//! global mutable singleton.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the geolookup provider, without trailing slash.
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    #[serde(default = "default_upstream_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; empty or absent means stdout.
    #[serde(default)]
    pub file: Option<String>,
}

// Default value functions
fn default_app_name() -> String {
    "IP Geolocation API".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_upstream_base_url() -> String {
    "https://ip.circl.lu".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            debug: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file with environment variable override.
    ///
    /// `config_path` comes from `-c/--config`; when absent the usual
    /// locations are searched before falling back to defaults.
    pub fn load(config_path: Option<&str>) -> Self {
        let mut config = Self::load_from_file(config_path);
        config.override_with_env();
        config
    }

    fn load_from_file(config_path: Option<&str>) -> Self {
        let default_paths = ["geovision.toml", "config.toml", "/etc/geovision/config.toml"];
        let candidates: Vec<&str> = match config_path {
            Some(path) => vec![path],
            None => default_paths.to_vec(),
        };

        for path in candidates {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<Config>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        if let Ok(name) = env::var("APP_NAME") {
            self.app.name = name;
        }
        if let Ok(debug) = env::var("DEBUG") {
            self.app.debug = matches!(debug.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Ok(host) = env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(url) = env::var("UPSTREAM_API_URL") {
            self.upstream.base_url = url;
        }
        if let Ok(timeout) = env::var("UPSTREAM_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                self.upstream.timeout_secs = timeout;
            }
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    /// Effective log filter: the debug flag floors the level at `debug`.
    pub fn log_filter(&self) -> String {
        if self.app.debug {
            "debug".to_string()
        } else {
            self.logging.level.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_out_of_the_box_contract() {
        let config = Config::default();
        assert_eq!(config.app.name, "IP Geolocation API");
        assert!(!config.app.debug);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.upstream.base_url, "https://ip.circl.lu");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [upstream]
            base_url = "http://localhost:1234"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.base_url, "http://localhost:1234");
        assert_eq!(config.app.name, "IP Geolocation API");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, Config::default().server.port);
    }

    #[test]
    fn test_log_filter_respects_debug_flag() {
        let mut config = Config::default();
        assert_eq!(config.log_filter(), "info");
        config.app.debug = true;
        assert_eq!(config.log_filter(), "debug");
    }
}
