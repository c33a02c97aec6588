//! briefly - Fetch a web article and get a short AI summary of it
//!
//! Entry point for the briefly CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use briefly::cli::{Cli, Commands};
use briefly::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env wins over the inherited environment
    dotenvy::dotenv_override().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    let verbose = cli.verbose;

    match cli.command.unwrap_or(Commands::Prompt) {
        Commands::Completions { shell } => {
            briefly::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            init_logging(log_filter(&command, &settings, verbose));

            // Execute command
            match command {
                Commands::Prompt => {
                    briefly::cli::commands::prompt_and_summarize(&settings).await?;
                }
                Commands::Summarize { url } => {
                    briefly::cli::commands::summarize_url(&settings, &url).await?;
                }
                Commands::Tui => {
                    briefly::tui::run(&settings).await?;
                }
                Commands::Config(config_cmd) => {
                    briefly::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

/// Log filter for the command; `RUST_LOG` wins except under the TUI.
fn log_filter(command: &Commands, settings: &Settings, verbose: bool) -> EnvFilter {
    match command {
        // stderr output would tear the alternate screen
        Commands::Tui => EnvFilter::new("off"),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new(&settings.general.log_level)
            }
        }),
    }
}

fn init_logging(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
