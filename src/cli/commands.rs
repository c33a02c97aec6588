//! CLI command implementations

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::pipeline::Pipeline;

const PROMPT: &str = "Enter a news/blog URL: ";
const SUMMARY_HEADER: &str = "--- Article Summary ---";

/// Read one URL from stdin and print its summary
pub async fn prompt_and_summarize(settings: &Settings) -> Result<()> {
    let pipeline = Pipeline::from_settings(settings)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_prompt(&pipeline, &mut input, &mut output).await
}

/// Prompt loop body, generic over the streams so it can be driven in tests.
///
/// Pipeline failures are printed, not returned: the prompt always exits cleanly.
pub async fn run_prompt<R, W>(pipeline: &Pipeline, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut url = String::new();
    input
        .read_line(&mut url)
        .context("Failed to read URL from stdin")?;

    match pipeline.run(&url).await {
        Ok(digest) => {
            writeln!(output)?;
            writeln!(output, "{}", SUMMARY_HEADER)?;
            writeln!(output, "{}", digest.summary)?;
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Pipeline failed");
            writeln!(output, "{}", e)?;
        }
    }

    Ok(())
}

/// Summarize a URL given on the command line
pub async fn summarize_url(settings: &Settings, url: &str) -> Result<()> {
    let pipeline = Pipeline::from_settings(settings)?;

    let digest = pipeline.run(url).await?;

    println!("{}", SUMMARY_HEADER);
    println!("{}", digest.summary);

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
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
