//! Server configuration loading from file and environment variables.

use qubestr_policy::Roster;
use qubestr_types::RelayInfo;
use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Relay metadata served as the NIP-11 document.
    #[serde(default)]
    pub relay: RelayConfig,

    /// Publishing authorization.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to: an IP address or a resolvable hostname.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Relay metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_name")]
    pub name: String,

    #[serde(default = "default_relay_description")]
    pub description: String,

    /// Administrator public key advertised to clients. Empty to omit.
    #[serde(default)]
    pub pubkey: String,
}

/// Who may publish HyperSignal events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Comma-separated hex public keys. Empty means nobody.
    #[serde(default)]
    pub authorized_pubkeys: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "qubestr_policy=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3334
}

fn default_relay_name() -> String {
    RelayInfo::default().name
}

fn default_relay_description() -> String {
    RelayInfo::default().description
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            name: default_relay_name(),
            description: default_relay_description(),
            pubkey: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl ServerConfig {
    /// Resolves `host:port` to the addresses the listener may bind.
    ///
    /// # Errors
    ///
    /// Returns the resolver error if the host cannot be resolved.
    pub fn socket_addrs(&self) -> std::io::Result<Vec<SocketAddr>> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map(|addrs| addrs.collect())
    }
}

impl Config {
    /// Builds the authorization roster. Called once at startup.
    pub fn roster(&self) -> Roster {
        Roster::parse(&self.auth.authorized_pubkeys)
    }

    /// Builds the NIP-11 document advertised by this relay.
    pub fn relay_info(&self) -> RelayInfo {
        RelayInfo {
            name: self.relay.name.clone(),
            description: self.relay.description.clone(),
            pubkey: self.relay.pubkey.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..RelayInfo::default()
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults, then
/// applies environment overrides (see [`apply_env_overrides`]).
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Like [`load_config`], reading environment overrides through `lookup`.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config_with<F>(path: Option<&str>, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    apply_env_overrides(&mut config, lookup);
    Ok(config)
}

/// Applies environment overrides using `lookup` to read variables.
///
/// - `HOST` overrides `server.host` (an IP address or hostname)
/// - `PORT` overrides `server.port`
/// - `AUTHORIZED_PUBKEYS` overrides `auth.authorized_pubkeys`
/// - `RELAY_NAME`, `RELAY_DESCRIPTION`, `RELAY_ADMIN_PUBKEY` override `relay.*`
/// - `QUBESTR_LOG_LEVEL` overrides `logging.level`
/// - `QUBESTR_LOG_JSON` overrides `logging.json` ("true"/"1" or "false"/"0")
///
/// Values that fail to parse are logged and the previous value is kept.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST") {
        let host = host.trim();
        if host.is_empty() {
            tracing::warn!(current = %config.server.host, "empty HOST value, keeping current");
        } else {
            config.server.host = host.to_string();
        }
    }
    if let Some(port) = lookup("PORT") {
        match port.parse() {
            Ok(parsed) => config.server.port = parsed,
            Err(e) => tracing::warn!(
                value = %port,
                current = config.server.port,
                "invalid PORT value, keeping current: {}",
                e
            ),
        }
    }
    if let Some(keys) = lookup("AUTHORIZED_PUBKEYS") {
        config.auth.authorized_pubkeys = keys;
    }
    if let Some(name) = lookup("RELAY_NAME") {
        config.relay.name = name;
    }
    if let Some(description) = lookup("RELAY_DESCRIPTION") {
        config.relay.description = description;
    }
    if let Some(pubkey) = lookup("RELAY_ADMIN_PUBKEY") {
        config.relay.pubkey = pubkey;
    }
    if let Some(level) = lookup("QUBESTR_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = lookup("QUBESTR_LOG_JSON") {
        match json.as_str() {
            "true" | "1" => config.logging.json = true,
            "false" | "0" => config.logging.json = false,
            other => tracing::warn!(value = other, "invalid QUBESTR_LOG_JSON value, ignoring"),
        }
    }
}
