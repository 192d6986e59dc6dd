//! Meeting classification
//!
//! The judgment mechanism is pluggable: a model-backed classifier for normal
//! operation and a keyword heuristic for offline use.

mod keyword;
mod model;

pub use keyword::KeywordClassifier;
pub use model::ModelClassifier;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::build_provider;
use crate::report::MeetingCategory;

#[async_trait]
pub trait Classifier: Send + Sync {
    /// Decide which report template fits this transcript.
    ///
    /// Implementations degrade to `General` rather than failing when the
    /// transcript carries no usable signal.
    async fn classify(&self, transcript: &str) -> Result<MeetingCategory>;
}

/// Build a classifier from runtime settings.
pub fn build_classifier(settings: &Settings) -> Result<Box<dyn Classifier>> {
    match settings.report.classifier.to_lowercase().as_str() {
        "model" => Ok(Box::new(ModelClassifier::new(build_provider(settings)?))),
        "keyword" => Ok(Box::new(KeywordClassifier)),
        other => anyhow::bail!(
            "Unsupported report.classifier '{}'. Supported classifiers: model, keyword",
            other
        ),
    }
}
