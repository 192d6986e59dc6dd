//! Rule-based offline classifier

use anyhow::Result;
use async_trait::async_trait;

use crate::classify::Classifier;
use crate::report::MeetingCategory;

/// Keyword heuristic for environments without model access.
///
/// Followup cues are checked before intro cues: a transcript that references
/// an earlier meeting is a followup even when it pitches the idea again.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

/// Phrases that point at an earlier meeting with the same founders.
const FOLLOWUP_CUES: &[&str] = &[
    "last time",
    "last meeting",
    "as discussed",
    "as we discussed",
    "since we last spoke",
    "when we spoke",
    "previous meeting",
    "previously agreed",
];

/// Vocabulary of a first founder meeting. Two hits are required so that a
/// stray "founder" mention in an internal sync does not flip the category.
const INTRO_CUES: &[&str] = &[
    "founder",
    "co-founder",
    "pitch",
    "nice to meet",
    "great to meet",
    "your idea",
    "your background",
    "pre-seed",
    "raised",
];

impl KeywordClassifier {
    /// Synchronous core, usable without an async runtime.
    pub fn classify_text(transcript: &str) -> MeetingCategory {
        let haystack = transcript.to_lowercase();

        if hits(&haystack, FOLLOWUP_CUES) > 0 {
            return MeetingCategory::Followup;
        }
        if hits(&haystack, INTRO_CUES) >= 2 {
            return MeetingCategory::Intro;
        }
        MeetingCategory::General
    }
}

fn hits(haystack: &str, cues: &[&str]) -> usize {
    cues.iter().filter(|cue| haystack.contains(*cue)).count()
}

#[async_trait]
impl Classifier for KeywordClassifier {
    async fn classify(&self, transcript: &str) -> Result<MeetingCategory> {
        Ok(Self::classify_text(transcript))
    }
}
