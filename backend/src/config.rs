//! # Configuration
//!
//! Settings are read from a YAML file and then overridden from the
//! environment. Every field has a default, so an empty file (or none at all)
//! gives a working demo server on the built-in seed data.
//!
//! ## YAML Format
//!
//! ```yaml
//! server:
//!   host: "127.0.0.1"
//!   port: 3000
//!   cors_origin: "http://localhost:3000"
//! data:
//!   fixture_dir: "fixtures/seed"
//!   simulate_latency: true
//! auth:
//!   email: "mama@example.de"
//!   password: "test123"
//! clock:
//!   today: "2024-01-25"
//! ```
//!
//! ## Environment
//!
//! - `LETTERBOX_CONFIG`: config file path (default `letterbox.yaml`, optional)
//! - `LETTERBOX_HOST`, `LETTERBOX_PORT`
//! - `LETTERBOX_FIXTURE_DIR`
//! - `LETTERBOX_SIMULATE_LATENCY`: `true` / `false`
//! - `LETTERBOX_TODAY`: pin the clock to a `YYYY-MM-DD` date

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::backend::domain::auth_service::DemoCredentials;

pub const CONFIG_PATH_VAR: &str = "LETTERBOX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "letterbox.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed browser origin; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origin: Some("http://localhost:3000".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory of CSV fixtures; the built-in seed data when unset
    pub fixture_dir: Option<PathBuf>,
    pub simulate_latency: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fixture_dir: None,
            simulate_latency: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed "today"; the system clock when unset
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub auth: DemoCredentials,
    pub clock: ClockConfig,
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("{} must be true or false, got {:?}", name, other)),
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse configuration")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config file and apply environment overrides.
    ///
    /// A missing default config file is fine; a missing file named by
    /// `LETTERBOX_CONFIG` is an error.
    pub fn load() -> Result<Self> {
        let lookup = |name: &str| std::env::var(name).ok();

        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load_from(path)?
                } else {
                    info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
                    Self::default()
                }
            }
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Apply `LETTERBOX_*` overrides from `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("LETTERBOX_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LETTERBOX_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("LETTERBOX_PORT is not a port number: {:?}", port))?;
        }
        if let Some(dir) = lookup("LETTERBOX_FIXTURE_DIR") {
            self.data.fixture_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = lookup("LETTERBOX_SIMULATE_LATENCY") {
            self.data.simulate_latency = parse_bool("LETTERBOX_SIMULATE_LATENCY", &flag)?;
        }
        if let Some(today) = lookup("LETTERBOX_TODAY") {
            let date = NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d")
                .with_context(|| format!("LETTERBOX_TODAY is not a YYYY-MM-DD date: {:?}", today))?;
            self.clock.today = Some(date);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.server.host, self.server.port))
    }
}
