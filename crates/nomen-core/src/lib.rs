//! Nomen Core - Domain models, traits, and shared types
//!
//! This crate defines the core abstractions used throughout Nomen:
//! - Entities produced by a named entity recognition (NER) model
//! - The `NerPipeline` trait implemented by inference backends
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, LoggingConfig, NerConfig, NerProvider, ServerConfig};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for Nomen operations
#[derive(Error, Debug)]
pub enum NomenError {
    #[error("NER error: {0}")]
    NerError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for NomenError {
    fn from(err: ConfigError) -> Self {
        NomenError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NomenError>;

// ============================================================================
// Entity Models
// ============================================================================

/// Category label assigned by the NER model to a span
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityGroup {
    Person,
    Location,
    Organization,
    Date,
    Misc,
    Other(String),
}

impl EntityGroup {
    /// Parse a model label such as `PER`, `B-LOC` or `person`
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        let bare = trimmed
            .strip_prefix("B-")
            .or_else(|| trimmed.strip_prefix("I-"))
            .unwrap_or(trimmed);

        match bare.to_uppercase().as_str() {
            "PER" | "PERSON" => Self::Person,
            "LOC" | "LOCATION" => Self::Location,
            "ORG" | "ORGANIZATION" => Self::Organization,
            "DATE" => Self::Date,
            "MISC" => Self::Misc,
            _ => Self::Other(bare.to_string()),
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "person",
            Self::Location => "location",
            Self::Organization => "organization",
            Self::Date => "date",
            Self::Misc => "misc",
            Self::Other(label) => label.as_str(),
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Self::Person)
    }
}

impl std::fmt::Display for EntityGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for EntityGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Entity recognized by an NER pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerEntity {
    /// Category label
    pub group: EntityGroup,
    /// Surface string as emitted by the model
    pub text: String,
    /// Start offset in the input text
    #[serde(default)]
    pub start: usize,
    /// End offset in the input text
    #[serde(default)]
    pub end: usize,
    /// Model confidence score
    #[serde(default)]
    pub confidence: f32,
}

impl NerEntity {
    /// Create an entity with no position or confidence metadata
    pub fn new(group: EntityGroup, text: impl Into<String>) -> Self {
        Self {
            group,
            text: text.into(),
            start: 0,
            end: 0,
            confidence: 0.0,
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Named entity recognition backend
///
/// Entities are returned in the order the model emits them.
#[async_trait]
pub trait NerPipeline: Send + Sync {
    async fn infer(&self, text: &str) -> Result<Vec<NerEntity>>;

    /// Identifier of the underlying model, for diagnostics
    fn model_name(&self) -> &str;
}

// ============================================================================
// Tests
// ============================================================================
