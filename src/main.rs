//! debrief - Meeting transcript classification and report generation
//!
//! Entry point for the debrief CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use debrief::cli::{Cli, Commands};
use debrief::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            debrief::cli::completions::print(shell);
        }
        Commands::Templates => {
            debrief::cli::commands::show_templates();
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Report {
                    input,
                    title,
                    category,
                    format,
                    output,
                } => {
                    debrief::cli::commands::generate_report(
                        &settings, &input, title, category, &format, output,
                    )
                    .await?;
                }
                Commands::Classify { input } => {
                    debrief::cli::commands::classify_transcript(&settings, &input).await?;
                }
                Commands::Format { input, output } => {
                    debrief::cli::commands::format_transcript(&input, output)?;
                }
                Commands::Config(config_cmd) => {
                    debrief::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Templates | Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
