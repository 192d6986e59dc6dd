//! debrief - Meeting transcript classification and structured report generation
//!
//! Takes a raw transcript, decides what kind of meeting it was, and renders
//! the matching markdown report with AI-generated section content.

pub mod classify;
pub mod cli;
pub mod config;
pub mod llm;
pub mod report;
pub mod transcript;

use thiserror::Error;

/// Main error type for debrief
#[derive(Error, Debug)]
pub enum DebriefError {
    #[error("Invalid transcript input: {0}")]
    Input(String),

    #[error("Unknown meeting category: {0} (expected intro, followup, or general)")]
    Category(String),
}

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "debrief";
