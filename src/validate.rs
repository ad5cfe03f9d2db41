//! Caller-side input validation
//!
//! The scorer itself is total; these checks gate what reaches it. Rules
//! mirror the submission form: URLs need an http prefix, article text
//! needs enough characters to be worth scoring, headlines need to be a
//! full headline rather than a fragment.

use crate::models::ContentType;
use thiserror::Error;

/// Minimum trimmed length for full article text
pub const MIN_TEXT_LEN: usize = 20;

/// Minimum trimmed length for a headline
pub const MIN_HEADLINE_LEN: usize = 10;

/// Why a submission was rejected before analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid URL: please enter a valid URL starting with http:// or https://")]
    InvalidUrl,

    #[error("text too short: please enter at least {MIN_TEXT_LEN} characters for analysis (got {len})")]
    TextTooShort { len: usize },

    #[error("headline too short: please enter a full headline for analysis (at least {MIN_HEADLINE_LEN} characters, got {len})")]
    HeadlineTooShort { len: usize },
}

/// Check a submission against the rules for its content type.
///
/// Returns `Ok(())` when the content may be passed to the scorer.
pub fn validate(content: &str, content_type: ContentType) -> Result<(), InputError> {
    match content_type {
        ContentType::Url => {
            if content.is_empty() || !content.starts_with("http") {
                return Err(InputError::InvalidUrl);
            }
        }
        ContentType::Text => {
            let len = content.trim().chars().count();
            if len < MIN_TEXT_LEN {
                return Err(InputError::TextTooShort { len });
            }
        }
        ContentType::Headline => {
            let len = content.trim().chars().count();
            if len < MIN_HEADLINE_LEN {
                return Err(InputError::HeadlineTooShort { len });
            }
        }
    }
    Ok(())
}
