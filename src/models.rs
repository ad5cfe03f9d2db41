//! Core data models for Crediscope
//!
//! These models represent the input taxonomy (what kind of content was
//! submitted) and the analysis result returned by the scorer.

use serde::{Deserialize, Serialize};

/// Kind of content submitted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A link to a news article
    Url,
    /// Full article text
    Text,
    /// A headline on its own
    Headline,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Url => write!(f, "url"),
            ContentType::Text => write!(f, "text"),
            ContentType::Headline => write!(f, "headline"),
        }
    }
}

/// Three-tier credibility rating derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityRating {
    High,
    Medium,
    Low,
}

impl CredibilityRating {
    /// Bucket a score using fixed thresholds: >= 0.70 high, >= 0.40 medium, else low
    pub fn from_score(score: f64) -> Self {
        if score >= 0.70 {
            CredibilityRating::High
        } else if score >= 0.40 {
            CredibilityRating::Medium
        } else {
            CredibilityRating::Low
        }
    }

    /// User-facing label shown next to the rating badge
    pub fn label(&self) -> &'static str {
        match self {
            CredibilityRating::High => "Likely Credible",
            CredibilityRating::Medium => "Potentially Misleading",
            CredibilityRating::Low => "Likely False",
        }
    }
}

impl std::fmt::Display for CredibilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredibilityRating::High => write!(f, "high"),
            CredibilityRating::Medium => write!(f, "medium"),
            CredibilityRating::Low => write!(f, "low"),
        }
    }
}

/// An external fact-checking outlet suggested for verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckSource {
    pub name: String,
    pub url: String,
}

/// Coverage of the same story from an established outlet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub title: String,
    pub source: String,
    pub url: String,
}

/// Result of a credibility analysis
///
/// `fact_checks` is present exactly when the rating is not high;
/// `related_articles` is present exactly when the rating is low.
/// Absence is modeled as `None`, never as an empty vec, so the presence
/// rules stay checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub credibility: CredibilityRating,
    /// Clamped to [0.10, 0.95]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact_checks: Option<Vec<FactCheckSource>>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<RelatedArticle>>,
}

impl AnalysisResult {
    /// Score scaled to 0-100 for display ("N/100")
    pub fn score_percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}
