//! HTTP-backed NER pipeline
//!
//! Talks to a token classification endpoint using the hosted inference API
//! contract: the text goes out as `inputs`, aggregated entity groups come back
//! as a JSON array.
//!
//! Author: hephaex@gmail.com

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nomen_core::{
    ConfigError, EntityGroup, NerConfig, NerEntity, NerPipeline, NerProvider, NomenError, Result,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    aggregation_strategy: &'static str,
}

/// One entity as returned by the endpoint
///
/// Aggregated output uses `entity_group`, raw token output uses `entity`.
#[derive(Debug, Deserialize)]
struct RawEntity {
    #[serde(alias = "entity")]
    entity_group: String,
    word: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    start: Option<usize>,
    #[serde(default)]
    end: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Entities(Vec<RawEntity>),
    Error { error: String },
}

impl From<RawEntity> for NerEntity {
    fn from(raw: RawEntity) -> Self {
        NerEntity {
            group: EntityGroup::from_label(&raw.entity_group),
            text: raw.word,
            start: raw.start.unwrap_or_default(),
            end: raw.end.unwrap_or_default(),
            confidence: raw.score,
        }
    }
}

/// Parse an endpoint response body into entities, preserving order
pub fn parse_inference_response(body: &str) -> Result<Vec<NerEntity>> {
    let response: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| NomenError::NerError(format!("Failed to parse response: {e}")))?;

    match response {
        InferenceResponse::Entities(entities) => {
            Ok(entities.into_iter().map(NerEntity::from).collect())
        }
        InferenceResponse::Error { error } => Err(NomenError::NerError(error)),
    }
}

// ============================================================================
// HTTP pipeline
// ============================================================================

/// NER pipeline backed by an HTTP inference endpoint
pub struct HttpNerPipeline {
    client: Client,
    url: String,
    model: String,
    api_token: Option<String>,
}

impl HttpNerPipeline {
    /// Create a pipeline posting to `url`
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            model: model.into(),
            api_token: None,
        }
    }

    /// Create from config
    pub fn from_config(config: &NerConfig) -> Result<Self> {
        let url = match config.provider {
            NerProvider::HuggingFace => format!(
                "{}/models/{}",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            NerProvider::Endpoint => config
                .endpoint_url
                .clone()
                .ok_or_else(|| ConfigError::MissingRequired("NER_ENDPOINT_URL".to_string()))?,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NomenError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            model: config.model.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Set the bearer token sent with each request
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NerPipeline for HttpNerPipeline {
    async fn infer(&self, text: &str) -> Result<Vec<NerEntity>> {
        let request = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                aggregation_strategy: "simple",
            },
        };

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| NomenError::NerError(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NomenError::NerError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(NomenError::NerError(format!(
                "Inference endpoint returned {status}: {body}"
            )));
        }

        let entities = parse_inference_response(&body)?;
        tracing::debug!(count = entities.len(), "NER inference complete");
        Ok(entities)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Factory function
// ============================================================================

/// Build the process-wide NER pipeline from config
pub fn load_ner_pipeline(config: &NerConfig) -> Result<Arc<dyn NerPipeline>> {
    tracing::info!(model = %config.model, provider = ?config.provider, "Loading NER model");
    Ok(Arc::new(HttpNerPipeline::from_config(config)?))
}

// ============================================================================
// Tests
// ============================================================================
