//! Crediscope - Mock credibility analysis CLI
//!
//! Scores URLs, article text, and headlines with a deterministic demo
//! model and reports warning signs, fact-check links, and related
//! coverage.

use anyhow::Result;
use clap::Parser;
use crediscope::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
