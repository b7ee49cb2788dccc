//! Read-only quote and category catalogs.
//!
//! The lifecycle controller only needs [`QuoteCatalog::lookup`]; browsing,
//! search and paging sit on top of [`QuoteCatalog::quotes`].

mod categories;
mod quotes;

use serde::{Deserialize, Serialize};

use crate::design::{Category, Quote};

pub use categories::{CategoryInfo, CATEGORIES};

/// Quotes shown per "load more" step on the browse surface.
pub const PAGE_SIZE: usize = 12;

/// Source of quotes addressable by id.
///
/// Lookups return owned copies: a design that edits its quote text never
/// touches the catalog entry.
pub trait QuoteCatalog: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Quote>;

    /// All quotes in display order.
    fn quotes(&self) -> Vec<Quote>;
}

/// The built-in curated catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedCatalog;

impl CuratedCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Fixed selection of quotes for the landing page.
    pub fn featured(&self) -> Vec<Quote> {
        quotes::FEATURED_IDS
            .iter()
            .filter_map(|id| self.lookup(id))
            .collect()
    }
}

impl QuoteCatalog for CuratedCatalog {
    fn lookup(&self, id: &str) -> Option<Quote> {
        quotes::CURATED
            .iter()
            .find(|entry| entry.id == id)
            .map(to_quote)
    }

    fn quotes(&self) -> Vec<Quote> {
        quotes::CURATED.iter().map(to_quote).collect()
    }
}

fn to_quote(entry: &quotes::CuratedEntry) -> Quote {
    Quote {
        id: entry.id.to_string(),
        text: entry.text.to_string(),
        author: entry.author.to_string(),
        author_title: entry.author_title.map(str::to_string),
        category: entry.category,
        tags: entry.tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Filters for the browse surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub category: Option<Category>,
    /// Free-text search over text, author and tags.
    #[serde(default, rename = "q")]
    pub search: Option<String>,
    /// 1-based; each page extends the visible list by [`PAGE_SIZE`].
    #[serde(default)]
    pub page: Option<usize>,
}

/// One "load more" step of browse results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsePage {
    pub quotes: Vec<Quote>,
    pub total: usize,
    pub has_more: bool,
}

/// Quotes in `category` (all when `None`) matching `search`, in display order.
pub fn filter_quotes(
    catalog: &dyn QuoteCatalog,
    category: Option<Category>,
    search: &str,
) -> Vec<Quote> {
    catalog
        .quotes()
        .into_iter()
        .filter(|q| category.is_none_or(|c| q.category == c))
        .filter(|q| q.matches_search(search))
        .collect()
}

/// Applies category, then search, then paging.
pub fn browse(catalog: &dyn QuoteCatalog, query: &BrowseQuery) -> BrowsePage {
    let search = query.search.as_deref().unwrap_or("");
    let filtered = filter_quotes(catalog, query.category, search);

    let total = filtered.len();
    let visible = query.page.unwrap_or(1).max(1).saturating_mul(PAGE_SIZE);
    let quotes: Vec<Quote> = filtered.into_iter().take(visible).collect();

    BrowsePage {
        has_more: visible < total,
        quotes,
        total,
    }
}
