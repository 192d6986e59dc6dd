//! Transcript input handling
//!
//! Accepts plain text or the JSON sentence records emitted by upstream
//! transcription services, and normalizes both into dialogue text.

mod input;
mod merge;

pub use input::{load_transcript, parse_sentences, read_input};
pub use merge::{merge_sentences, Sentence};
