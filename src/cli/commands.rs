//! CLI command implementations

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::classify::build_classifier;
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::build_provider;
use crate::report::{render, template_for, MeetingCategory};
use crate::transcript::{load_transcript, merge_sentences, parse_sentences, read_input};

/// Generate a structured report for a transcript.
pub async fn generate_report(
    settings: &Settings,
    input: &Path,
    title: Option<String>,
    category: Option<String>,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let transcript = load_transcript(input)?;

    if format != "md" && format != "json" {
        anyhow::bail!("Unsupported format: {}. Supported: md, json", format);
    }

    // Parse the category override before anything expensive happens.
    let forced = category
        .map(|raw| MeetingCategory::from_str(&raw))
        .transpose()?;

    let provider = build_provider(settings)?;

    let category = match forced {
        Some(category) => category,
        None => {
            let classifier = build_classifier(settings)?;
            let category = classifier.classify(&transcript).await?;
            tracing::info!("Classified meeting as {}", category.as_str());
            category
        }
    };

    let title = title.unwrap_or_else(|| default_title(input));

    let report = render(provider.as_ref(), &transcript, category, &title).await;

    let content = if format == "json" {
        report.to_json()?
    } else {
        report.to_markdown()
    };

    if let Some(path) = output {
        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}

/// Classify a transcript and print the category.
pub async fn classify_transcript(settings: &Settings, input: &Path) -> Result<()> {
    let transcript = load_transcript(input)?;

    let classifier = build_classifier(settings)?;
    let category = classifier.classify(&transcript).await?;

    println!("{}", category.as_str());

    Ok(())
}

/// Merge raw sentence records into dialogue text.
pub fn format_transcript(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let raw = read_input(input)?;
    let sentences = parse_sentences(&raw)?;
    let dialogue = merge_sentences(&sentences);

    if let Some(path) = output {
        std::fs::write(&path, &dialogue)
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        println!("Transcript written to: {}", path.display());
    } else {
        println!("{}", dialogue);
    }

    Ok(())
}

/// Print the section layout for each meeting category.
pub fn show_templates() {
    for category in MeetingCategory::ALL {
        let template = template_for(category);
        println!("{}:", category.as_str());
        for (i, section) in template.sections.iter().enumerate() {
            println!("  {}. {}", i + 1, section.heading);
        }
        println!();
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn default_title(input: &Path) -> String {
    match input.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) if stem != "-" => format!("Meeting Report: {}", stem),
        _ => format!("Meeting Report {}", Local::now().format("%Y-%m-%d")),
    }
}
