//! Test utilities: an in-memory NER pipeline and a router built on it

use crate::{create_router, state::AppState};
use async_trait::async_trait;
use axum::Router;
use nomen_core::{AppConfig, EntityGroup, NerEntity, NerPipeline, NomenError, Result};
use nomen_extractor::InformationExtractor;
use std::sync::Arc;

/// Pipeline returning the same entities (or the same failure) for any input
pub struct StaticNerPipeline {
    outcome: std::result::Result<Vec<NerEntity>, String>,
}

impl StaticNerPipeline {
    pub fn new(entities: Vec<NerEntity>) -> Self {
        Self {
            outcome: Ok(entities),
        }
    }

    /// Build from `(label, surface)` pairs, e.g. `("PER", "Jean")`
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(label, text)| NerEntity::new(EntityGroup::from_label(label), *text))
                .collect(),
        )
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl NerPipeline for StaticNerPipeline {
    async fn infer(&self, _text: &str) -> Result<Vec<NerEntity>> {
        self.outcome.clone().map_err(NomenError::NerError)
    }

    fn model_name(&self) -> &str {
        "static"
    }
}

/// Build the application router around `pipeline` with default config
pub fn create_router_for_testing(pipeline: StaticNerPipeline) -> Router {
    let extractor = InformationExtractor::new(Arc::new(pipeline));
    create_router(Arc::new(AppState::new(AppConfig::default(), extractor)))
}
