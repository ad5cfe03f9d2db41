//! Crediscope - Mock credibility analysis for news content
//!
//! A demo credibility scorer: given a URL, article text, or a headline,
//! it returns a rating, a score, an explanation, warning signs,
//! fact-check links, and related coverage. Everything is driven by a
//! deterministic fingerprint of the input — there is no real detection
//! model, network call, or persistence.

pub mod analyzer;
pub mod cli;
pub mod models;
pub mod reporters;
pub mod validate;

pub use analyzer::{analyze, fingerprint, score_content};
pub use models::{
    AnalysisResult, ContentType, CredibilityRating, FactCheckSource, RelatedArticle,
};
pub use validate::{validate, InputError};
