//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisResult, CredibilityRating};
use anyhow::Result;

/// Rating colors (ANSI escape codes)
fn rating_color(rating: CredibilityRating) -> &'static str {
    match rating {
        CredibilityRating::High => "\x1b[32m",   // Green
        CredibilityRating::Medium => "\x1b[33m", // Yellow
        CredibilityRating::Low => "\x1b[31m",    // Red
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of the score bar in characters
const BAR_WIDTH: u32 = 40;

/// Render a "N/100" score bar, filled proportionally
fn score_bar(percent: u32, color: &str) -> String {
    let filled = (percent * BAR_WIDTH / 100).min(BAR_WIDTH);
    let empty = BAR_WIDTH - filled;
    format!(
        "{color}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled as usize),
        "░".repeat(empty as usize)
    )
}

/// Render a result as formatted terminal output
pub fn render(result: &AnalysisResult) -> Result<String> {
    let mut out = String::new();
    let color = rating_color(result.credibility);
    let percent = result.score_percent();

    // Header with rating badge and score bar
    out.push_str(&format!("\n{BOLD}Crediscope Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Rating: {color}{BOLD}{}{RESET}  Score: {BOLD}{percent}/100{RESET}\n",
        result.credibility.label()
    ));
    out.push_str(&format!("  {}\n\n", score_bar(percent, color)));

    if let Some(title) = &result.title {
        out.push_str(&format!("{BOLD}{title}{RESET}\n"));
    }
    if let Some(source) = &result.source {
        out.push_str(&format!("{DIM}Source: {source}{RESET}\n"));
    }

    out.push_str(&format!("\n{BOLD}ANALYSIS{RESET}\n"));
    out.push_str(&format!("  {}\n", result.explanation));

    if !result.warnings.is_empty() {
        out.push_str(&format!(
            "\n{BOLD}WARNING SIGNS{RESET} ({})\n",
            result.warnings.len()
        ));
        for warning in &result.warnings {
            out.push_str(&format!("  \x1b[33m!{RESET} {warning}\n"));
        }
    }

    if let Some(fact_checks) = &result.fact_checks {
        out.push_str(&format!("\n{BOLD}FACT CHECK{RESET}\n"));
        for fact_check in fact_checks {
            out.push_str(&format!(
                "  {} {DIM}{}{RESET}\n",
                fact_check.name, fact_check.url
            ));
        }
    }

    if let Some(related) = &result.related_articles {
        out.push_str(&format!("\n{BOLD}RELATED COVERAGE{RESET}\n"));
        for article in related {
            out.push_str(&format!(
                "  {} {DIM}({}) {}{RESET}\n",
                article.title, article.source, article.url
            ));
        }
    }

    // Closing tip based on rating
    match result.credibility {
        CredibilityRating::High => out.push_str(&format!(
            "\n{DIM}No major red flags found. Cross-checking never hurts.{RESET}\n"
        )),
        CredibilityRating::Medium => out.push_str(&format!(
            "\n{DIM}Verify the claims above before sharing this content.{RESET}\n"
        )),
        CredibilityRating::Low => out.push_str(&format!(
            "\n{DIM}Treat this content with caution. See the fact-check links above.{RESET}\n"
        )),
    }

    Ok(out)
}
