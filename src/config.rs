//! Server configuration from environment variables
//!
//!   SERVER_HOST         — bind host (default: 0.0.0.0)
//!   SERVER_PORT         — bind port (default: 3000)
//!   ENUM_SELECT_WARMUP  — warm the description cache at start-up (default: true)
//!
//! A `.env` file in the working directory is loaded first when present.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub warmup: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            warmup: true,
        }
    }
}

impl ServerConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = parse_or_default("SERVER_HOST", lookup("SERVER_HOST"), defaults.host);
        let port = parse_or_default("SERVER_PORT", lookup("SERVER_PORT"), defaults.port);
        let warmup = lookup("ENUM_SELECT_WARMUP")
            .map(|v| match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    warn!(
                        "Invalid ENUM_SELECT_WARMUP '{}', using default {}",
                        other, defaults.warmup
                    );
                    defaults.warmup
                }
            })
            .unwrap_or(defaults.warmup);

        Self { host, port, warmup }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {} '{}', using default {}: {}", key, raw, default, e);
            default
        }),
    }
}
