//! Static catalogs the scorer indexes into
//!
//! All selections are lookup-table indexing driven by the content
//! fingerprint; nothing here is generated dynamically. Entry order is
//! part of the scoring contract and must not be reshuffled.

use crate::models::CredibilityRating;

/// Canned explanations, three per rating bucket
const EXPLANATIONS_HIGH: [&str; 3] = [
    "This content appears to be from a reputable source and contains verified information. The article cites credible sources and presents balanced reporting.",
    "The information presented is consistent with reporting from multiple credible news outlets. The article provides context and avoids sensationalism.",
    "The content follows journalistic standards, properly attributes sources, and presents facts that can be independently verified.",
];

const EXPLANATIONS_MEDIUM: [&str; 3] = [
    "While some information appears accurate, the content contains unverified claims or presents information in a potentially misleading way.",
    "The article mixes factual reporting with opinion or speculation, making it difficult to separate fact from interpretation.",
    "The content may be presenting a one-sided view of events without adequate context or alternative perspectives.",
];

const EXPLANATIONS_LOW: [&str; 3] = [
    "This content contains multiple red flags for misinformation, including unverified claims, emotional manipulation, and lack of credible sources.",
    "The article appears designed to provoke emotional reactions rather than inform, using sensationalist language and making claims that contradict established facts.",
    "The information presented conflicts with reporting from multiple credible sources and lacks evidence to support its claims.",
];

/// Warning-sign catalog, indexed modulo its length
pub(crate) const WARNING_SIGNS: [&str; 10] = [
    "Uses emotionally charged language designed to provoke outrage",
    "Makes claims without citing credible sources",
    "Contains logical fallacies or misleading arguments",
    "Presents opinions as facts without clarification",
    "Information contradicts established expert consensus",
    "Uses misleading headlines that don't match the content",
    "Contains outdated information presented as current",
    "Lacks context that would significantly change interpretation",
    "Uses manipulated images or media out of context",
    "Cites anonymous or unverifiable sources",
];

/// Fact-checking outlets: (name, url)
pub(crate) const FACT_CHECK_SOURCES: [(&str, &str); 5] = [
    ("Snopes Fact Check", "https://www.snopes.com/"),
    ("PolitiFact", "https://www.politifact.com/"),
    ("FactCheck.org", "https://www.factcheck.org/"),
    ("Reuters Fact Check", "https://www.reuters.com/fact-check/"),
    ("AP Fact Check", "https://apnews.com/hub/ap-fact-check"),
];

/// Related coverage from established outlets: (title, source, url)
pub(crate) const RELATED_ARTICLES: [(&str, &str, &str); 5] = [
    (
        "Understanding the Facts Behind the Recent Claims",
        "Reuters",
        "https://www.reuters.com/",
    ),
    (
        "Experts Weigh In On Viral News Story",
        "Associated Press",
        "https://www.ap.org/",
    ),
    (
        "Fact vs Fiction: Analyzing Recent Events",
        "The New York Times",
        "https://www.nytimes.com/",
    ),
    (
        "In-depth: What Really Happened According to Sources",
        "The Washington Post",
        "https://www.washingtonpost.com/",
    ),
    (
        "Context Matters: The Full Story Behind Viral Claims",
        "NPR",
        "https://www.npr.org/",
    ),
];

/// Explanation list for a rating bucket
pub(crate) fn explanations_for(rating: CredibilityRating) -> &'static [&'static str; 3] {
    match rating {
        CredibilityRating::High => &EXPLANATIONS_HIGH,
        CredibilityRating::Medium => &EXPLANATIONS_MEDIUM,
        CredibilityRating::Low => &EXPLANATIONS_LOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_bucket_has_three_explanations() {
        for rating in [
            CredibilityRating::High,
            CredibilityRating::Medium,
            CredibilityRating::Low,
        ] {
            assert_eq!(explanations_for(rating).len(), 3);
        }
    }

    #[test]
    fn test_catalog_urls_are_absolute() {
        for (_, url) in FACT_CHECK_SOURCES {
            assert!(url.starts_with("https://"), "bad url: {url}");
        }
        for (_, _, url) in RELATED_ARTICLES {
            assert!(url.starts_with("https://"), "bad url: {url}");
        }
    }
}
