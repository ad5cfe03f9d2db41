//! Deterministic content credibility scorer
//!
//! This is the whole "model": a hash-driven decision procedure seeded
//! from the input text. The content fingerprint (a wrapping sum of code
//! points) drives every selection, so identical input always produces an
//! identical result. The only nondeterminism is the simulated analysis
//! latency, which affects no returned field.
//!
//! # Pipeline
//!
//! ```text
//! fingerprint -> base score -> type adjustment -> rating bucket
//!             -> explanation / warnings / fact checks / related articles
//!             -> title + source attribution
//! ```

mod attribution;
pub(crate) mod catalog;

use crate::models::{
    AnalysisResult, ContentType, CredibilityRating, FactCheckSource, RelatedArticle,
};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Analyze content for credibility signals.
///
/// Suspends for a simulated 2.0-3.0s of "model time" before scoring.
/// Safe to call concurrently; there is no shared state between calls.
pub async fn analyze(content: &str, content_type: ContentType) -> AnalysisResult {
    let jitter: u64 = rand::rng().random_range(0..1000);
    tokio::time::sleep(Duration::from_millis(2000 + jitter)).await;
    score_content(content, content_type)
}

/// Synchronous core of [`analyze`]: pure and total over its input.
pub fn score_content(content: &str, content_type: ContentType) -> AnalysisResult {
    let hash = fingerprint(content);
    let base_score = (hash % 85 + 10) as f64 / 100.0;
    let score = adjust_for_type(base_score, content_type);
    let credibility = CredibilityRating::from_score(score);

    debug!(%content_type, hash, score, %credibility, "scored content");

    let explanation = catalog::explanations_for(credibility)[(hash % 3) as usize].to_string();
    let warnings = select_warnings(hash, credibility);

    let fact_checks = if credibility != CredibilityRating::High {
        Some(select_fact_checks(hash))
    } else {
        None
    };

    let related_articles = if credibility == CredibilityRating::Low {
        Some(select_related_articles(hash))
    } else {
        None
    };

    let (title, source) = attribution::derive(content, content_type);

    AnalysisResult {
        credibility,
        score,
        title: Some(title),
        source: Some(source),
        explanation,
        fact_checks,
        warnings,
        related_articles,
    }
}

/// Content fingerprint: wrapping sum of Unicode code points.
///
/// Order-independent and deliberately primitive. Spelled out as explicit
/// arithmetic so the selections below stay reproducible across platforms.
pub fn fingerprint(content: &str) -> u64 {
    content
        .chars()
        .fold(0u64, |acc, ch| acc.wrapping_add(ch as u64))
}

/// Nudge the base score by content type, clamped to [0.10, 0.95].
///
/// Headlines carry the least context and lose a tenth; URLs can be
/// checked against known outlets and gain a twentieth.
fn adjust_for_type(base_score: f64, content_type: ContentType) -> f64 {
    match content_type {
        ContentType::Headline => (base_score - 0.10).max(0.10),
        ContentType::Url => (base_score + 0.05).min(0.95),
        ContentType::Text => base_score,
    }
}

/// Warning count is fixed per bucket: high 0, medium 2, low 4.
/// Indexing may repeat an entry; duplicates are allowed.
fn select_warnings(hash: u64, credibility: CredibilityRating) -> Vec<String> {
    let count = match credibility {
        CredibilityRating::High => 0,
        CredibilityRating::Medium => 2,
        CredibilityRating::Low => 4,
    };
    (0..count as u64)
        .map(|i| {
            let index = (hash.wrapping_add(i * 13) % catalog::WARNING_SIGNS.len() as u64) as usize;
            catalog::WARNING_SIGNS[index].to_string()
        })
        .collect()
}

/// Exactly two suggested outlets, at hash % 5 and (hash + 7) % 5.
/// The two picks may coincide.
fn select_fact_checks(hash: u64) -> Vec<FactCheckSource> {
    let len = catalog::FACT_CHECK_SOURCES.len() as u64;
    [hash % len, hash.wrapping_add(7) % len]
        .into_iter()
        .map(|index| {
            let (name, url) = catalog::FACT_CHECK_SOURCES[index as usize];
            FactCheckSource {
                name: name.to_string(),
                url: url.to_string(),
            }
        })
        .collect()
}

/// Two or three related articles, stepping the catalog by 11 per pick.
fn select_related_articles(hash: u64) -> Vec<RelatedArticle> {
    let len = catalog::RELATED_ARTICLES.len() as u64;
    let count = 2 + (hash % 2);
    (0..count)
        .map(|i| {
            let (title, source, url) = catalog::RELATED_ARTICLES
                [(hash.wrapping_add(i * 11) % len) as usize];
            RelatedArticle {
                title: title.to_string(),
                source: source.to_string(),
                url: url.to_string(),
            }
        })
        .collect()
}
