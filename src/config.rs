//! Application configuration from environment variables.
//!
//! `.env` is loaded by `main` through dotenvy before [`AppConfig::from_env`] runs.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub pricing_config_path: PathBuf,
    pub availability: AvailabilitySettings,
    pub email: EmailRelaySettings,
}

/// Upstream availability sources and caching
#[derive(Debug, Clone)]
pub struct AvailabilitySettings {
    /// iCal feed exported by the channel manager
    pub feed_url: Option<String>,
    /// Secondary JSON API
    pub api_url: Option<String>,
    pub cache_ttl: Duration,
    pub upstream_timeout: Duration,
}

/// Transactional e-mail relay (EmailJS-style REST API)
#[derive(Debug, Clone)]
pub struct EmailRelaySettings {
    pub url: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl EmailRelaySettings {
    /// All credentials present
    pub fn is_configured(&self) -> bool {
        self.service_id.is_some() && self.template_id.is_some() && self.public_key.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

const DEFAULT_EMAIL_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cache_ttl_secs: u64 = parse_or(&get, "AVAILABILITY_CACHE_TTL_SECS", 600)?;
        let timeout_secs: u64 = parse_or(&get, "UPSTREAM_TIMEOUT_SECS", 10)?;

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            pricing_config_path: get("PRICING_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("pricing-config.json")),
            availability: AvailabilitySettings {
                feed_url: get("AVAILABILITY_FEED_URL"),
                api_url: get("AVAILABILITY_API_URL"),
                cache_ttl: Duration::from_secs(cache_ttl_secs.max(1)),
                upstream_timeout: Duration::from_secs(timeout_secs.max(1)),
            },
            email: EmailRelaySettings {
                url: get("EMAIL_RELAY_URL")
                    .unwrap_or_else(|| DEFAULT_EMAIL_RELAY_URL.to_string()),
                service_id: get("EMAIL_SERVICE_ID"),
                template_id: get("EMAIL_TEMPLATE_ID"),
                public_key: get("EMAIL_PUBLIC_KEY"),
            },
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "HOST",
            value: self.host.clone(),
        })
    }
}

fn parse_or<G, T>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
