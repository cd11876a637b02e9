// crates/plat-daemon/src/config.rs
//
// Runtime configuration for the Plat registry daemon.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Host address for the RPC server.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port for the RPC server.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Path to the registry owner's secret key file (hex-encoded).
    #[serde(default = "default_owner_key_path")]
    pub owner_key_path: String,

    /// Opening price per fraction unit, in cents. Must be positive; the
    /// owner can change it at runtime via `market/set_price`.
    #[serde(default = "default_unit_price")]
    pub unit_price: u64,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overridden by RUST_LOG when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    50061
}

fn default_owner_key_path() -> String {
    "~/.plat/owner.key".to_string()
}

fn default_unit_price() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            owner_key_path: default_owner_key_path(),
            unit_price: default_unit_price(),
            log_level: default_log_level(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: DaemonConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.rpc_port, 50061);
        assert_eq!(config.unit_price, 100);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DaemonConfig = toml::from_str("rpc_port = 9000\nunit_price = 25\n").unwrap();
        assert_eq!(config.rpc_port, 9000);
        assert_eq!(config.unit_price, 25);
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.owner_key_path, "~/.plat/owner.key");
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(DaemonConfig::load("/nonexistent/plat.toml").is_err());
    }
}
