//! Report rendering
//!
//! Fans out one generation call per template section and assembles the
//! results in template order.

use futures_util::future::join_all;
use serde::Serialize;

use crate::llm::{build_section_prompt, LlmProvider};
use crate::report::template::{template_for, MeetingCategory, Section};

/// A rendered report section.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub heading: String,
    pub content: String,
}

/// A fully rendered meeting report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub category: MeetingCategory,
    pub sections: Vec<RenderedSection>,
}

impl Report {
    /// Assemble the report as a markdown document.
    ///
    /// Sections with no content render as `None`, matching the convention
    /// the generation prompt asks the model to use.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);

        for section in &self.sections {
            out.push_str("\n## ");
            out.push_str(&section.heading);
            out.push_str("\n\n");
            let content = section.content.trim();
            out.push_str(if content.is_empty() { "None" } else { content });
            out.push('\n');
        }

        out
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a report for an already classified transcript.
///
/// Section calls run concurrently; `join_all` keeps template order in the
/// output regardless of completion order. A failed call degrades that single
/// section to empty content instead of aborting the report.
pub async fn render(
    provider: &dyn LlmProvider,
    transcript: &str,
    category: MeetingCategory,
    title: &str,
) -> Report {
    let template = template_for(category);

    let calls = template
        .sections
        .iter()
        .map(|section| generate_section(provider, transcript, section));
    let contents = join_all(calls).await;

    let sections = template
        .sections
        .iter()
        .zip(contents)
        .map(|(section, content)| RenderedSection {
            heading: section.heading.to_string(),
            content,
        })
        .collect();

    Report {
        title: title.to_string(),
        category,
        sections,
    }
}

async fn generate_section(
    provider: &dyn LlmProvider,
    transcript: &str,
    section: &Section,
) -> String {
    let prompt = build_section_prompt(transcript, section.heading, section.instruction);

    match provider.complete(&prompt).await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(
                "Section '{}' failed to generate: {:#}",
                section.heading,
                err
            );
            String::new()
        }
    }
}
