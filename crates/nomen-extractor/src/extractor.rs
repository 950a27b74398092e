//! Information extractor
//!
//! Turns raw text into a single surname using an injected NER pipeline.

use std::sync::Arc;

use nomen_core::{NerPipeline, Result};

use crate::validator::is_valid_name_candidate;

/// Surname extractor over an NER pipeline
#[derive(Clone)]
pub struct InformationExtractor {
    pipeline: Arc<dyn NerPipeline>,
}

impl InformationExtractor {
    /// Create an extractor around an initialized pipeline
    pub fn new(pipeline: Arc<dyn NerPipeline>) -> Self {
        tracing::info!(model = pipeline.model_name(), "NER model initialized");
        Self { pipeline }
    }

    /// Name of the model backing this extractor
    pub fn model_name(&self) -> &str {
        self.pipeline.model_name()
    }

    /// Extract the first valid person name from `text`, uppercased
    ///
    /// Person entities are scanned in model order and the first one whose
    /// lowercased surface string passes validation wins. Returns `Ok(None)`
    /// when no person entity validates.
    pub async fn extract_name(&self, text: &str) -> Result<Option<String>> {
        tracing::info!(text, "Extracting name from text");

        let entities = self.pipeline.infer(text).await?;

        let mut persons = entities.iter().filter(|e| e.group.is_person());
        if let Some(entity) = persons.find(|e| is_valid_name_candidate(&e.text.to_lowercase())) {
            let name = entity.text.to_uppercase();
            tracing::info!(name = %name, "Name extracted");
            return Ok(Some(name));
        }

        tracing::warn!("No name was extracted");
        Ok(None)
    }
}

impl std::fmt::Debug for InformationExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InformationExtractor")
            .field("model", &self.pipeline.model_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nomen_core::{EntityGroup, NerEntity, NomenError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Pipeline returning a fixed entity list
    struct FixedPipeline {
        entities: Vec<NerEntity>,
        calls: AtomicUsize,
    }

    impl FixedPipeline {
        fn new(entities: Vec<NerEntity>) -> Arc<Self> {
            Arc::new(Self {
                entities,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl NerPipeline for FixedPipeline {
        async fn infer(&self, _text: &str) -> Result<Vec<NerEntity>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.entities.clone())
        }

        fn model_name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingPipeline;

    #[async_trait]
    impl NerPipeline for FailingPipeline {
        async fn infer(&self, _text: &str) -> Result<Vec<NerEntity>> {
            Err(NomenError::NerError("model unavailable".to_string()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn person(text: &str) -> NerEntity {
        NerEntity::new(EntityGroup::Person, text)
    }

    #[tokio::test]
    async fn test_extracts_first_person() {
        let pipeline = FixedPipeline::new(vec![
            person("Jean"),
            NerEntity::new(EntityGroup::Location, "Paris"),
        ]);
        let extractor = InformationExtractor::new(pipeline.clone());

        let name = extractor.extract_name("Jean habite à Paris").await.unwrap();
        assert_eq!(name.as_deref(), Some("JEAN"));
        assert_eq!(pipeline.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_candidate_yields_none() {
        let extractor = InformationExtractor::new(FixedPipeline::new(vec![person("Xk")]));

        let name = extractor.extract_name("Xk est là").await.unwrap();
        assert_eq!(name, None);
    }

    #[tokio::test]
    async fn test_no_entities_yields_none() {
        let extractor = InformationExtractor::new(FixedPipeline::new(vec![]));

        assert_eq!(extractor.extract_name("rien").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_skips_invalid_then_returns_later_person() {
        let extractor = InformationExtractor::new(FixedPipeline::new(vec![
            person("Xk"),
            NerEntity::new(EntityGroup::Organization, "Renault"),
            person("J.-P."),
            person("Dupont"),
            person("Martin"),
        ]));

        let name = extractor.extract_name("...").await.unwrap();
        assert_eq!(name.as_deref(), Some("DUPONT"));
    }

    #[tokio::test]
    async fn test_ignores_non_person_groups() {
        let extractor = InformationExtractor::new(FixedPipeline::new(vec![
            NerEntity::new(EntityGroup::Location, "Paris"),
            NerEntity::new(EntityGroup::Date, "lundi"),
            NerEntity::new(EntityGroup::Other("MISC".to_string()), "Euro"),
        ]));

        assert_eq!(extractor.extract_name("...").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_uppercases_accented_and_compound_names() {
        let extractor =
            InformationExtractor::new(FixedPipeline::new(vec![person("Lefèvre-d'Orléans")]));

        let name = extractor.extract_name("...").await.unwrap();
        assert_eq!(name.as_deref(), Some("LEFÈVRE-D'ORLÉANS"));
    }

    #[tokio::test]
    async fn test_pipeline_error_propagates() {
        let extractor = InformationExtractor::new(Arc::new(FailingPipeline));

        let err = extractor.extract_name("Jean").await.unwrap_err();
        assert!(matches!(err, NomenError::NerError(_)));
    }
}
