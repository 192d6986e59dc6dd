//! Transcript loading from files or stdin

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::transcript::merge::{merge_sentences, Sentence};
use crate::DebriefError;

/// Read raw input from a file, or from stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read transcript from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))
    }
}

/// Load a transcript, converting JSON sentence records into dialogue text.
///
/// Plain text passes through untouched. Input whose first non-whitespace
/// character is `[` is treated as a sentence record array.
pub fn load_transcript(path: &Path) -> Result<String> {
    let raw = read_input(path)?;

    if looks_like_records(&raw) {
        let sentences = parse_sentences(&raw)?;
        Ok(merge_sentences(&sentences))
    } else {
        Ok(raw)
    }
}

/// Parse a JSON array of sentence records.
pub fn parse_sentences(raw: &str) -> Result<Vec<Sentence>> {
    serde_json::from_str(raw)
        .map_err(|e| DebriefError::Input(format!("invalid sentence records: {}", e)).into())
}

fn looks_like_records(raw: &str) -> bool {
    raw.trim_start().starts_with('[')
}
