// src/config.rs
use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_TRANSLATION_URL: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_DIALOGUE_URL: &str = "http://localhost:5005/webhooks/rest/webhook";
pub const DEFAULT_DIALOGUE_SENDER: &str = "user";
pub const DEFAULT_ALERTS_FILE: &str = "data/alerts.json";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub translation_url: String,
    pub dialogue_url: String,
    pub dialogue_sender: String,
    pub alerts_file: String,
    pub allowed_origin: HeaderValue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            translation_url: DEFAULT_TRANSLATION_URL.to_string(),
            dialogue_url: DEFAULT_DIALOGUE_URL.to_string(),
            dialogue_sender: DEFAULT_DIALOGUE_SENDER.to_string(),
            alerts_file: DEFAULT_ALERTS_FILE.to_string(),
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

impl Config {
    /// Load from the environment, reading `.env` first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_raw = get("AROGYA_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let origin_raw = get("AROGYA_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN);
        let allowed_origin = HeaderValue::from_str(&origin_raw)
            .map_err(|_| ConfigError::InvalidOrigin(origin_raw.clone()))?;

        Ok(Self {
            bind_addr,
            translation_url: get("AROGYA_TRANSLATION_URL", DEFAULT_TRANSLATION_URL),
            dialogue_url: get("AROGYA_DIALOGUE_URL", DEFAULT_DIALOGUE_URL),
            dialogue_sender: get("AROGYA_DIALOGUE_SENDER", DEFAULT_DIALOGUE_SENDER),
            alerts_file: get("AROGYA_ALERTS_FILE", DEFAULT_ALERTS_FILE),
            allowed_origin,
        })
    }
}
