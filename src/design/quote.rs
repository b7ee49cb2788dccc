//! Quote values: curated catalog entries and user-authored text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::style::UnknownStyle;

/// Maximum quote length accepted at the editing boundary.
pub const MAX_QUOTE_CHARS: usize = 300;

/// Maximum attribution length accepted by the write-your-own form.
pub const MAX_AUTHOR_CHARS: usize = 80;

/// Attribution used when a custom quote is submitted without an author.
pub const CUSTOM_AUTHOR_FALLBACK: &str = "You";

/// Tag marking a quote as user-authored.
pub const CUSTOM_TAG: &str = "custom";

/// Category assigned to every custom quote.
pub const CUSTOM_CATEGORY: Category = Category::Mindfulness;

/// Errors raised when building a custom quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Quote text cannot be empty")]
    EmptyText,

    #[error("Quote text is {len} characters; the limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("Author is {len} characters; the limit is {max}")]
    AuthorTooLong { len: usize, max: usize },
}

/// Quote category used for browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Stoic,
    Poetry,
    Entrepreneurship,
    Mindfulness,
    Leadership,
    Love,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Stoic,
        Category::Poetry,
        Category::Entrepreneurship,
        Category::Mindfulness,
        Category::Leadership,
        Category::Love,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Stoic => "stoic",
            Category::Poetry => "poetry",
            Category::Entrepreneurship => "entrepreneurship",
            Category::Mindfulness => "mindfulness",
            Category::Leadership => "leadership",
            Category::Love => "love",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownStyle::new("category", s))
    }
}

/// A piece of attributed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_title: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
}

impl Quote {
    /// Builds a user-authored quote from the write-your-own form.
    ///
    /// Text and author are trimmed. A blank author becomes
    /// [`CUSTOM_AUTHOR_FALLBACK`]; the category and tags are fixed.
    pub fn custom(text: &str, author: &str) -> Result<Self, QuoteError> {
        let text = accept_quote_text(text)?;

        let author = author.trim();
        let author_len = author.chars().count();
        if author_len > MAX_AUTHOR_CHARS {
            return Err(QuoteError::AuthorTooLong {
                len: author_len,
                max: MAX_AUTHOR_CHARS,
            });
        }
        let author = if author.is_empty() {
            CUSTOM_AUTHOR_FALLBACK.to_string()
        } else {
            author.to_string()
        };

        Ok(Self {
            id: format!("custom-{}", Uuid::new_v4().simple()),
            text,
            author,
            author_title: None,
            category: CUSTOM_CATEGORY,
            tags: vec![CUSTOM_TAG.to_string()],
        })
    }

    /// Case-insensitive match against text, author and tags.
    ///
    /// An empty or whitespace-only needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.text.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Copy of this quote with only the text replaced.
    pub(crate) fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }
}

/// Trims `text` and checks it against the editing limits.
pub fn accept_quote_text(text: &str) -> Result<String, QuoteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuoteError::EmptyText);
    }
    let len = trimmed.chars().count();
    if len > MAX_QUOTE_CHARS {
        return Err(QuoteError::TextTooLong {
            len,
            max: MAX_QUOTE_CHARS,
        });
    }
    Ok(trimmed.to_string())
}
