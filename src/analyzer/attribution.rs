//! Title and source derivation
//!
//! Each content type gets a different heuristic for naming what was
//! analyzed. None of this feeds into scoring; it only labels the result.

use crate::models::ContentType;

/// Token substrings that mark a headline word as a publication name
const SOURCE_MARKERS: [&str; 5] = ["Times", "Post", "News", "Daily", "Journal"];

/// Fallback when a URL has no usable host segment.
/// Splitting "https://host/path" on '/' puts the host at index 2; anything
/// malformed (no "//", empty host) falls back here. Intended behavior, not
/// an error.
const FALLBACK_DOMAIN: &str = "example.com";

/// Derive (title, source) for a piece of content
pub(crate) fn derive(content: &str, content_type: ContentType) -> (String, String) {
    match content_type {
        ContentType::Url => {
            let domain = content
                .split('/')
                .nth(2)
                .filter(|seg| !seg.is_empty())
                .unwrap_or(FALLBACK_DOMAIN);
            let source = domain.strip_prefix("www.").unwrap_or(domain).to_string();
            let title = format!("Article from {source}");
            (title, source)
        }
        ContentType::Headline => {
            let source = content
                .split_whitespace()
                .find(|word| SOURCE_MARKERS.iter().any(|marker| word.contains(marker)))
                .unwrap_or("Unknown source")
                .to_string();
            (content.to_string(), source)
        }
        ContentType::Text => {
            let title = content
                .split_whitespace()
                .take(5)
                .collect::<Vec<_>>()
                .join(" ")
                + "...";
            (title, "Unknown source".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_domain_extraction() {
        let (title, source) = derive("https://www.example.com/story", ContentType::Url);
        assert_eq!(source, "example.com");
        assert_eq!(title, "Article from example.com");
    }

    #[test]
    fn test_url_without_www_prefix() {
        let (title, source) = derive("https://apnews.com/article/123", ContentType::Url);
        assert_eq!(source, "apnews.com");
        assert_eq!(title, "Article from apnews.com");
    }

    #[test]
    fn test_malformed_url_falls_back_to_default_domain() {
        // No "//" means there is no segment at index 2
        let (title, source) = derive("not-a-url", ContentType::Url);
        assert_eq!(source, "example.com");
        assert_eq!(title, "Article from example.com");
    }

    #[test]
    fn test_url_with_empty_host_falls_back() {
        let (_, source) = derive("http:///path", ContentType::Url);
        assert_eq!(source, "example.com");
    }

    #[test]
    fn test_headline_title_is_verbatim() {
        let (title, source) = derive("Breaking News Today", ContentType::Headline);
        assert_eq!(title, "Breaking News Today");
        assert_eq!(source, "News");
    }

    #[test]
    fn test_headline_marker_inside_longer_token() {
        let (_, source) = derive(
            "Report: Newspaper industry shrinks again",
            ContentType::Headline,
        );
        // "Newspaper" contains "News" and is the first match
        assert_eq!(source, "Newspaper");
    }

    #[test]
    fn test_headline_without_marker() {
        let (_, source) = derive("Scientists discover ancient ruins", ContentType::Headline);
        assert_eq!(source, "Unknown source");
    }

    #[test]
    fn test_text_title_is_first_five_words() {
        let (title, source) = derive(
            "The quick brown fox jumps over the lazy dog",
            ContentType::Text,
        );
        assert_eq!(title, "The quick brown fox jumps...");
        assert_eq!(source, "Unknown source");
    }

    #[test]
    fn test_text_shorter_than_five_words() {
        let (title, _) = derive("Short text here", ContentType::Text);
        assert_eq!(title, "Short text here...");
    }
}
