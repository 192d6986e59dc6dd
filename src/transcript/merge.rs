//! Sentence record merging

use serde::{Deserialize, Serialize};

/// One sentence record from an upstream transcription service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default)]
    pub id: i64,

    /// Sentence text
    #[serde(default)]
    pub transcript: String,

    /// ISO-8601 timestamp; not used for merging
    #[serde(default)]
    pub timestamp: String,

    /// Speaker attribution, may be absent
    #[serde(default)]
    pub speaker: String,
}

/// Merge sentence records into `Speaker: text` dialogue lines.
///
/// Consecutive records from the same speaker collapse into a single line,
/// chunks joined with spaces. Records with empty text are skipped. A missing
/// speaker is labeled "Unknown speaker". An empty record list yields an
/// empty string.
pub fn merge_sentences(sentences: &[Sentence]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_speaker: Option<&str> = None;
    let mut current_chunks: Vec<&str> = Vec::new();

    for sentence in sentences {
        let text = sentence.transcript.trim();
        if text.is_empty() {
            continue;
        }

        let speaker = match sentence.speaker.trim() {
            "" => "Unknown speaker",
            name => name,
        };

        if current_speaker == Some(speaker) {
            current_chunks.push(text);
        } else {
            flush_line(&mut lines, current_speaker, &current_chunks);
            current_speaker = Some(speaker);
            current_chunks.clear();
            current_chunks.push(text);
        }
    }

    flush_line(&mut lines, current_speaker, &current_chunks);
    lines.join("\n")
}

fn flush_line(lines: &mut Vec<String>, speaker: Option<&str>, chunks: &[&str]) {
    if let Some(speaker) = speaker {
        if !chunks.is_empty() {
            lines.push(format!("{}: {}", speaker, chunks.join(" ")));
        }
    }
}
