//! Output reporters for analysis results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::AnalysisResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an analysis result in the specified format
pub fn report(result: &AnalysisResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt)
}

/// Render an analysis result using an OutputFormat enum
pub fn report_with_format(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result),
        OutputFormat::Json => json::render(result),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analyzer::score_content;
    use crate::models::ContentType;

    /// A low-rated result carrying every optional section
    pub(crate) fn test_result() -> AnalysisResult {
        score_content("a", ContentType::Text)
    }

    /// A high-rated result with no optional sections
    pub(crate) fn test_result_high() -> AnalysisResult {
        score_content("zz", ContentType::Text)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("terminal").unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }
}
