//! Model-backed classifier

use anyhow::Result;
use async_trait::async_trait;

use crate::classify::Classifier;
use crate::llm::{build_classification_prompt, LlmProvider};
use crate::report::MeetingCategory;

/// Asks the LLM provider for a single-word category.
pub struct ModelClassifier {
    provider: Box<dyn LlmProvider>,
}

impl ModelClassifier {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Map a model answer onto a category. Followup is checked first so a
    /// hedged "intro or followup" answer resolves to followup; anything
    /// unclear means general.
    fn parse_answer(answer: &str) -> MeetingCategory {
        let answer = answer.trim().to_lowercase();

        if answer.contains("follow") {
            MeetingCategory::Followup
        } else if answer.contains("intro") {
            MeetingCategory::Intro
        } else {
            MeetingCategory::General
        }
    }
}

#[async_trait]
impl Classifier for ModelClassifier {
    async fn classify(&self, transcript: &str) -> Result<MeetingCategory> {
        let prompt = build_classification_prompt(transcript);

        match self.provider.complete(&prompt).await {
            Ok(answer) => Ok(Self::parse_answer(&answer)),
            Err(err) => {
                tracing::warn!("Classification failed, defaulting to general: {:#}", err);
                Ok(MeetingCategory::General)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(&'static str);

    #[async_trait]
    impl LlmProvider for FixedProvider {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl LlmProvider for BrokenProvider {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    #[test]
    fn parses_plain_answers() {
        assert_eq!(
            ModelClassifier::parse_answer("intro"),
            MeetingCategory::Intro
        );
        assert_eq!(
            ModelClassifier::parse_answer("  Followup\n"),
            MeetingCategory::Followup
        );
        assert_eq!(
            ModelClassifier::parse_answer("FOLLOW-UP"),
            MeetingCategory::Followup
        );
        assert_eq!(
            ModelClassifier::parse_answer("general"),
            MeetingCategory::General
        );
    }

    #[test]
    fn ambiguous_answer_defaults_to_general() {
        assert_eq!(
            ModelClassifier::parse_answer("board meeting"),
            MeetingCategory::General
        );
        assert_eq!(ModelClassifier::parse_answer(""), MeetingCategory::General);
    }

    #[test]
    fn hedged_answer_resolves_to_followup() {
        assert_eq!(
            ModelClassifier::parse_answer("intro or followup"),
            MeetingCategory::Followup
        );
    }

    #[test]
    fn provider_failure_degrades_to_general() {
        tokio_test::block_on(async {
            let classifier = ModelClassifier::new(Box::new(BrokenProvider));
            let category = classifier
                .classify("Ana: hello")
                .await
                .expect("classification never hard-fails");
            assert_eq!(category, MeetingCategory::General);
        });
    }

    #[test]
    fn same_answer_yields_same_category() {
        tokio_test::block_on(async {
            let classifier = ModelClassifier::new(Box::new(FixedProvider("intro")));
            let first = classifier.classify("Ana: hi").await.unwrap();
            let second = classifier.classify("Ana: hi").await.unwrap();
            assert_eq!(first, second);
            assert_eq!(first, MeetingCategory::Intro);
        });
    }
}
