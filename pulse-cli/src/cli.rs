use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use pulse_core::{Config, config::DEFAULT_BASE_URL, provider_from_config};
use tracing::info;

use crate::ui;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "pulse", version, about = "Current weather and a short forecast")]
pub struct Cli {
    /// OpenWeather API key; takes precedence over the configured one.
    #[arg(long, global = true, env = "PULSE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally a custom base URL).
    Configure,

    /// Show weather for a place once and exit.
    Show {
        /// Place name, e.g. "Paris" or "Portland, US".
        place: String,
    },

    /// Search repeatedly; the screen refreshes as results arrive. This is the default.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { place }) => {
                let provider = provider_from_config(&Config::load()?, self.api_key.as_deref())?;
                ui::show(Arc::new(provider), &place).await
            }
            Some(Command::Interactive) | None => {
                let provider = provider_from_config(&Config::load()?, self.api_key.as_deref())?;
                ui::interactive(Arc::new(provider)).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let base_url = Text::new("API base URL:")
        .with_default(config.base_url())
        .prompt()
        .context("Failed to read base URL")?;
    let base_url = base_url.trim().trim_end_matches('/');
    config.base_url = (base_url != DEFAULT_BASE_URL).then(|| base_url.to_string());

    let path = config.save()?;
    info!(path = %path.display(), "configuration saved");
    println!("Saved configuration to {}", path.display());

    Ok(())
}
