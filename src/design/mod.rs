//! Quote-art design value objects.
//!
//! A [`Design`] binds one [`Quote`] to a full set of style choices. It only
//! comes into existence from a quote ([`Design::from_quote`]) and changes only
//! through an explicit [`DesignPatch`] or a quote text replacement.

pub mod quote;
pub mod style;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use quote::{
    accept_quote_text, Category, Quote, QuoteError, CUSTOM_AUTHOR_FALLBACK, CUSTOM_CATEGORY,
    CUSTOM_TAG, MAX_AUTHOR_CHARS, MAX_QUOTE_CHARS,
};
pub use style::{Alignment, Background, Palette, QuoteSize, Typography, UnknownStyle};

/// Stable design identity, generated once at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(String);

impl DesignId {
    pub fn generate() -> Self {
        Self(format!("design-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DesignId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full styling configuration bound to one quote.
///
/// Equality and hashing consider only `id`: two snapshots of the same design
/// taken before and after a style change are the same design.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: DesignId,
    pub quote: Quote,
    pub typography: Typography,
    pub background: Background,
    pub palette: Palette,
    pub show_author: bool,
    pub alignment: Alignment,
    pub quote_size: QuoteSize,
}

impl Design {
    /// Creates a design for `quote` with the default style.
    pub fn from_quote(id: DesignId, quote: Quote) -> Self {
        Self {
            id,
            quote,
            typography: Typography::default(),
            background: Background::default(),
            palette: Palette::default(),
            show_author: true,
            alignment: Alignment::default(),
            quote_size: QuoteSize::default(),
        }
    }

    /// Copy of this design with the quote text replaced.
    ///
    /// The caller has already validated `text`; quote id, author, category
    /// and tags are carried over untouched.
    pub(crate) fn with_quote_text(&self, text: String) -> Self {
        Self {
            quote: self.quote.with_text(text),
            ..self.clone()
        }
    }
}

impl PartialEq for Design {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Design {}

impl Hash for Design {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Partial update of the style fields of a [`Design`].
///
/// Unset fields keep their prior value. `id` and `quote` are not part of the
/// patch, and unknown fields are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DesignPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_author: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_size: Option<QuoteSize>,
}

impl DesignPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typography(mut self, typography: Typography) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn show_author(mut self, show_author: bool) -> Self {
        self.show_author = Some(show_author);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn quote_size(mut self, quote_size: QuoteSize) -> Self {
        self.quote_size = Some(quote_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges this patch over `design`, returning the new design.
    pub fn apply(&self, design: &Design) -> Design {
        Design {
            id: design.id.clone(),
            quote: design.quote.clone(),
            typography: self.typography.unwrap_or(design.typography),
            background: self.background.unwrap_or(design.background),
            palette: self.palette.unwrap_or(design.palette),
            show_author: self.show_author.unwrap_or(design.show_author),
            alignment: self.alignment.unwrap_or(design.alignment),
            quote_size: self.quote_size.unwrap_or(design.quote_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> Quote {
        Quote {
            id: "q-test".to_string(),
            text: "Waste no more time arguing what a good man should be. Be one.".to_string(),
            author: "Marcus Aurelius".to_string(),
            author_title: Some("Roman Emperor".to_string()),
            category: Category::Stoic,
            tags: vec!["virtue".to_string()],
        }
    }

    #[test]
    fn from_quote_applies_default_style() {
        let design = Design::from_quote(DesignId::from("design-1"), sample_quote());
        assert_eq!(design.typography, Typography::ClassicSerif);
        assert_eq!(design.background, Background::Solid);
        assert_eq!(design.palette, Palette::WarmNeutrals);
        assert_eq!(design.alignment, Alignment::Center);
        assert_eq!(design.quote_size, QuoteSize::Standard);
        assert!(design.show_author);
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = DesignId::generate();
        let b = DesignId::generate();
        assert!(a.as_str().starts_with("design-"));
        assert_ne!(a, b);
    }

    #[test]
    fn equality_is_by_id() {
        let design = Design::from_quote(DesignId::from("design-1"), sample_quote());
        let restyled = DesignPatch::new().palette(Palette::Ocean).apply(&design);
        assert_eq!(design, restyled);

        let other = Design::from_quote(DesignId::from("design-2"), sample_quote());
        assert_ne!(design, other);
    }

    #[test]
    fn empty_patch_is_identity_on_every_field() {
        let design = Design::from_quote(DesignId::from("design-1"), sample_quote());
        let patch = DesignPatch::new();
        assert!(patch.is_empty());

        let merged = patch.apply(&design);
        assert_eq!(merged.typography, design.typography);
        assert_eq!(merged.background, design.background);
        assert_eq!(merged.palette, design.palette);
        assert_eq!(merged.show_author, design.show_author);
        assert_eq!(merged.alignment, design.alignment);
        assert_eq!(merged.quote_size, design.quote_size);
        assert_eq!(merged.quote, design.quote);
    }

    #[test]
    fn patch_rejects_identity_fields() {
        let err = serde_json::from_str::<DesignPatch>(r#"{"id": "design-9"}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<DesignPatch>(r#"{"quote": {}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn patch_deserializes_camel_case_fields() {
        let patch: DesignPatch =
            serde_json::from_str(r#"{"quoteSize": "oversized", "showAuthor": false}"#).unwrap();
        assert_eq!(patch.quote_size, Some(QuoteSize::Oversized));
        assert_eq!(patch.show_author, Some(false));
        assert!(patch.palette.is_none());
    }

    #[test]
    fn quote_text_replacement_keeps_attribution() {
        let design = Design::from_quote(DesignId::from("design-1"), sample_quote());
        let edited = design.with_quote_text("Be one.".to_string());
        assert_eq!(edited.quote.text, "Be one.");
        assert_eq!(edited.quote.id, "q-test");
        assert_eq!(edited.quote.author, "Marcus Aurelius");
        assert_eq!(edited.quote.author_title.as_deref(), Some("Roman Emperor"));
        assert_eq!(edited.quote.tags, vec!["virtue".to_string()]);
        assert_eq!(edited.id, design.id);
    }
}
