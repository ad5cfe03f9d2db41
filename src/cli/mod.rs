//! CLI command definitions and handlers

pub(crate) mod analyze;

use crate::models::ContentType;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crediscope - Mock credibility analysis for news content
///
/// 100% LOCAL - No account needed. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "crediscope")]
#[command(
    version,
    about = "Score URLs, article text, and headlines for credibility signals — warning signs, fact-check links, and related coverage",
    long_about = "Crediscope scores a URL, article text, or a headline and reports a \
credibility rating with an explanation, warning signs, fact-check links, and \
related coverage.\n\n\
The analysis is a deterministic demo model: identical input always produces \
the identical report. 100% LOCAL — no data leaves your machine.",
    after_help = "\
Examples:
  crediscope analyze https://example.com/news-article
  crediscope analyze --type headline \"Breaking News Today\"
  crediscope analyze --type text \"$(cat article.txt)\" --format json
  crediscope analyze --type url https://example.com/story -o report.json -f json

Documentation: https://github.com/crediscope/crediscope"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a piece of content and report its credibility
    #[command(after_help = "\
Validation rules:
  url       must start with http:// or https://
  text      at least 20 characters
  headline  at least 10 characters

Examples:
  crediscope analyze https://example.com/news-article
  crediscope analyze --type text \"Full article body here...\" --format json
  crediscope analyze --type headline \"Breaking News Today\" --no-delay")]
    Analyze {
        /// The content to analyze: a URL, article text, or a headline
        content: String,

        /// What kind of content is being submitted
        #[arg(long = "type", short = 't', value_enum, default_value_t = ContentType::Url)]
        content_type: ContentType,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Skip the simulated analysis delay
        #[arg(long)]
        no_delay: bool,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            content,
            content_type,
            format,
            output,
            no_delay,
        } => analyze::run(&content, content_type, &format, output.as_deref(), no_delay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["crediscope", "analyze", "https://example.com/story"]);
        let Commands::Analyze {
            content,
            content_type,
            format,
            output,
            no_delay,
        } = cli.command;
        assert_eq!(content, "https://example.com/story");
        assert_eq!(content_type, ContentType::Url);
        assert_eq!(format, "text");
        assert!(output.is_none());
        assert!(!no_delay);
    }

    #[test]
    fn test_analyze_headline_type() {
        let cli = Cli::parse_from([
            "crediscope",
            "analyze",
            "--type",
            "headline",
            "Breaking News Today",
        ]);
        let Commands::Analyze { content_type, .. } = cli.command;
        assert_eq!(content_type, ContentType::Headline);
    }
}
