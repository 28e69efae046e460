//! Configuration loading for the clock server
//!
//! Supports JSON configuration files for:
//! - Server settings (host, port)
//! - The seed list of clocks the ring is built from at startup

use meridian_core::ClockError;
use meridian_ports::Clock;
use meridian_registry::ClockRing;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Root configuration for the clock server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Display name used in startup logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Listener configuration
    #[serde(default)]
    pub server: HttpConfig,

    /// Clocks appended to the ring, in order; the first one becomes the head
    #[serde(default = "default_clocks")]
    pub clocks: Vec<ClockSeed>,
}

fn default_name() -> String {
    "Meridian World Clock".to_string()
}

fn default_clocks() -> Vec<ClockSeed> {
    vec![
        ClockSeed::new("Colombia", "America/Bogota", "clock_colombia.png"),
        ClockSeed::new("United Kingdom", "Europe/London", "clock_uk.png"),
        ClockSeed::new("China", "Asia/Shanghai", "clock_china.png"),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            server: HttpConfig::default(),
            clocks: default_clocks(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `HOST` and `PORT` environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        self
    }

    /// Build the ring from the seed list
    ///
    /// Fails on the first seed with an unknown timezone.
    pub fn build_ring(&self, clock: Arc<dyn Clock>) -> Result<ClockRing, ConfigError> {
        let mut ring = ClockRing::new(clock);
        for seed in &self.clocks {
            ring.append(&seed.city, &seed.timezone, &seed.image)
                .map_err(|source| ConfigError::InvalidClock {
                    city: seed.city.clone(),
                    source,
                })?;
        }
        Ok(ring)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// One entry of the startup seed list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSeed {
    pub city: String,
    pub timezone: String,
    #[serde(default)]
    pub image: String,
}

impl ClockSeed {
    pub fn new(city: &str, timezone: &str, image: &str) -> Self {
        Self {
            city: city.to_string(),
            timezone: timezone.to_string(),
            image: image.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid clock {city}: {source}")]
    InvalidClock {
        city: String,
        #[source]
        source: ClockError,
    },
}
