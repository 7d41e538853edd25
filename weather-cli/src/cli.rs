use std::{io, process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{Config, SearchOrchestrator, provider_from_config};

use crate::terminal::TerminalTarget;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather and a short forecast for a city")]
pub struct Cli {
    /// Log more (-v, -vv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        /// Use this API key instead of the configured one.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Search repeatedly from a prompt, starting with the default city.
    Interactive {
        /// Use this API key instead of the configured one.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, api_key } => {
                let config = load_config(api_key)?;
                let city = city.unwrap_or_else(|| config.default_city().to_string());
                let mut orchestrator = build_orchestrator(&config)?;

                let outcome = orchestrator.search(&city).await;
                Ok(if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
            }
            Command::Interactive { api_key } => {
                let config = load_config(api_key)?;
                let mut orchestrator = build_orchestrator(&config)?;

                orchestrator.search(config.default_city()).await;
                loop {
                    let city = match Text::new("City:").with_help_message("Esc to quit").prompt() {
                        Ok(city) => city,
                        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                            break;
                        }
                        Err(err) => return Err(err).context("Failed to read city from prompt"),
                    };
                    orchestrator.search(&city).await;
                }

                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load_config(api_key: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(key) = api_key {
        config.set_api_key(key);
    }
    Ok(config)
}

fn build_orchestrator(
    config: &Config,
) -> anyhow::Result<SearchOrchestrator<TerminalTarget<io::Stdout>>> {
    let provider = Arc::new(provider_from_config(config)?);
    debug!(api_base = provider.api_base(), "using OpenWeather provider");

    Ok(SearchOrchestrator::new(provider.clone(), provider, TerminalTarget::stdout())
        .with_forecast_days(config.forecast_days()))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let default_city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key.trim().to_string());
    config.default_city = Some(default_city.trim().to_string()).filter(|city| !city.is_empty());
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}
