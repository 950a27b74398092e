//! Nomen Extractor - Surname extraction pipeline
//!
//! Runs text through a named entity recognition (NER) pipeline, keeps the
//! person entities and returns the first one that passes lexical validation.

pub mod extractor;
pub mod ner;
pub mod validator;

pub use extractor::InformationExtractor;
pub use ner::{load_ner_pipeline, parse_inference_response, HttpNerPipeline};
pub use validator::is_valid_name_candidate;
