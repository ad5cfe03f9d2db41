//! JSON reporter
//!
//! Outputs the full AnalysisResult as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::AnalysisResult;
use anyhow::Result;

/// Render a result as JSON
pub fn render(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_result, test_result_high};

    #[test]
    fn test_json_render_valid() {
        let json_str = render(&test_result()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["credibility"], "low");
        assert_eq!(parsed["score"], 0.22);
        assert_eq!(
            parsed["warnings"].as_array().expect("warnings array").len(),
            4
        );
        assert_eq!(
            parsed["fact_checks"].as_array().expect("fact_checks").len(),
            2
        );
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let json_str = render(&test_result_high()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["credibility"], "high");
        assert!(parsed.get("fact_checks").is_none());
        assert!(parsed.get("related_articles").is_none());
        assert_eq!(parsed["warnings"].as_array().expect("warnings").len(), 0);
    }

    #[test]
    fn test_json_round_trips() {
        let result = test_result();
        let json_str = render_compact(&result).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let back: AnalysisResult = serde_json::from_str(&json_str).expect("parse back");
        assert_eq!(back, result);
    }
}
