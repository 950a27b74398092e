//! Nomen Configuration Management
//!
//! Handles configuration from environment variables and TOML files
//! with sensible defaults for development.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default base URL of the hosted inference API
pub const DEFAULT_NER_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default token classification model (French, with dates)
pub const DEFAULT_NER_MODEL: &str = "Jean-Baptiste/camembert-ner-with-dates";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// NER backend configuration
    pub ner: NerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        self.apply_env(|key| std::env::var(key).ok())?;
        Ok(self)
    }

    /// Override fields from a key lookup (normally the process environment)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(host) = lookup("API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("API_PORT") {
            self.server.port = parse_value("API_PORT", port)?;
        }
        // Port assigned by a serverless custom handler host wins
        if let Some(port) = lookup("FUNCTIONS_CUSTOMHANDLER_PORT") {
            self.server.port = parse_value("FUNCTIONS_CUSTOMHANDLER_PORT", port)?;
        }
        if let Some(size) = lookup("MAX_BODY_SIZE") {
            self.server.max_body_size = parse_value("MAX_BODY_SIZE", size)?;
        }

        // NER
        if let Some(provider) = lookup("NER_PROVIDER") {
            self.ner.provider = provider.parse()?;
        }
        if let Some(url) = lookup("NER_BASE_URL") {
            self.ner.base_url = url;
        }
        if let Some(url) = lookup("NER_ENDPOINT_URL") {
            self.ner.endpoint_url = Some(url);
        }
        if let Some(model) = lookup("NER_MODEL") {
            self.ner.model = model;
        }
        if let Some(token) = lookup("HF_API_TOKEN") {
            self.ner.api_token = Some(token);
        }
        if let Some(secs) = lookup("NER_TIMEOUT_SECS") {
            self.ner.timeout_secs = parse_value("NER_TIMEOUT_SECS", secs)?;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("LOG_JSON") {
            self.logging.json_format = parse_value("LOG_JSON", json)?;
        }

        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    })
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

/// NER backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    /// Inference provider
    pub provider: NerProvider,

    /// Base URL of the hosted inference API
    pub base_url: String,

    /// Full URL of a self-hosted endpoint (provider `endpoint`)
    pub endpoint_url: Option<String>,

    /// Token classification model identifier
    pub model: String,

    /// Bearer token for the inference API
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            provider: NerProvider::HuggingFace,
            base_url: DEFAULT_NER_BASE_URL.to_string(),
            endpoint_url: None,
            model: DEFAULT_NER_MODEL.to_string(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}

/// Supported NER inference providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NerProvider {
    /// Hosted inference API, model addressed by name
    HuggingFace,
    /// Self-hosted server speaking the same token classification contract
    Endpoint,
}

impl std::str::FromStr for NerProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Self::HuggingFace),
            "endpoint" => Ok(Self::Endpoint),
            _ => Err(ConfigError::InvalidValue {
                key: "NER_PROVIDER".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
