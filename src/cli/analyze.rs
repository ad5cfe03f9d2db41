//! Analyze command implementation
//!
//! This command is the caller side of the scorer:
//! 1. Validate the submission for its content type
//! 2. Run the scorer (with its simulated latency) behind a spinner
//! 3. Render the result (text, json) to stdout or a file

use crate::models::ContentType;
use crate::validate::validate;
use crate::{analyzer, reporters};

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Run the analyze command
pub fn run(
    content: &str,
    content_type: ContentType,
    format: &str,
    output: Option<&Path>,
    no_delay: bool,
) -> Result<()> {
    validate(content, content_type)?;

    info!(%content_type, len = content.len(), "starting analysis");

    let quiet_mode = format == "json" && output.is_none();

    let result = if no_delay {
        analyzer::score_content(content, content_type)
    } else {
        let spinner = if quiet_mode {
            ProgressBar::hidden()
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(create_spinner_style());
            spinner.set_message("Analyzing content...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        };

        // The scorer is total today, but the await stays guarded so a
        // future failing backend surfaces as a friendly message.
        let rt = tokio::runtime::Runtime::new()?;
        let result = rt
            .block_on(async { Ok::<_, anyhow::Error>(analyzer::analyze(content, content_type).await) })
            .context("Unable to analyze the content. Please try again later.")?;
        spinner.finish_and_clear();
        result
    };

    let rendered = reporters::report(&result, format)?;

    if let Some(out_path) = output {
        std::fs::write(out_path, &rendered)
            .with_context(|| format!("failed to write report to {}", out_path.display()))?;
        println!(
            "{}Report written to: {}",
            style("📄 ").bold(),
            style(out_path.display()).cyan()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .expect("static template is valid")
}
