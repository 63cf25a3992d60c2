use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;

/// Host process configuration loaded from environment variables.
/// The health handler itself reads none of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// `FUNCTIONS_CUSTOMHANDLER_PORT` is set by the Azure Functions host when the
    /// binary runs as a custom handler and wins over `PORT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("FUNCTIONS_CUSTOMHANDLER_PORT") {
            Some(raw) => parse_port("FUNCTIONS_CUSTOMHANDLER_PORT", &raw)?,
            None => match lookup("PORT") {
                Some(raw) => parse_port("PORT", &raw)?,
                None => DEFAULT_PORT,
            },
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("BIND_ADDR '{raw}' is not a valid IP address"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Config {
            bind_addr,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("{key} must be a valid port number, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_from_env() {
        let config = config_from(&[("PORT", "3000")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_custom_handler_port_wins_over_port() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("FUNCTIONS_CUSTOMHANDLER_PORT", "7071"),
        ])
        .unwrap();
        assert_eq!(config.port, 7071);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"), "Error was {err}");
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        assert!(config_from(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "70000")]).is_err());
    }

    #[test]
    fn test_bind_addr_and_log_level() {
        let config = config_from(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_bind_addr_is_rejected() {
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
