//! Session-scoped design store.
//!
//! Provides a cloneable handle over the design session state. Every
//! mutation takes the write lock for the whole read-reduce-write step, so
//! two operations never interleave.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::design::{accept_quote_text, Design, DesignId, DesignPatch, Quote};
use crate::session::lifecycle::Selection;
use crate::ui::design::{DesignIntent, DesignReducer, DesignSessionState};
use crate::ui::mvi::Reducer;

/// Handle to one user's design session.
///
/// Clones share the same state. Create one store per session and hand it to
/// whichever layer needs it; dropping the last handle ends the session.
#[derive(Clone, Default)]
pub struct DesignStore {
    inner: Arc<RwLock<DesignSessionState>>,
}

impl DesignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the whole session state.
    pub fn snapshot(&self) -> DesignSessionState {
        self.inner.read().clone()
    }

    pub fn current_design(&self) -> Option<Design> {
        self.inner.read().design().cloned()
    }

    pub fn current_quote(&self) -> Option<Quote> {
        self.inner.read().quote().cloned()
    }

    pub fn is_active(&self) -> bool {
        self.inner.read().is_active()
    }

    /// Starts a new design from `quote` with the default style.
    ///
    /// Replaces any active design unconditionally.
    pub fn initialize(&self, quote: Quote) -> Design {
        let mut guard = self.inner.write();
        Self::start(&mut guard, quote)
    }

    /// Enters the design for `quote_id` under a single write lock.
    ///
    /// Keeps a design that already shows the quote, otherwise starts one from
    /// whatever `lookup` finds, otherwise keeps the active design. Returns
    /// `None` only when `lookup` misses and no design is active.
    pub fn select_with<F>(&self, quote_id: &str, lookup: F) -> Option<Selection>
    where
        F: FnOnce(&str) -> Option<Quote>,
    {
        let mut guard = self.inner.write();
        if let Some(design) = guard.design() {
            if design.quote.id == quote_id {
                return Some(Selection::Retained(design.clone()));
            }
        }

        match lookup(quote_id) {
            Some(quote) => Some(Selection::Initialized(Self::start(&mut guard, quote))),
            None => guard.design().cloned().map(Selection::Retained),
        }
    }

    /// Overwrites the style fields set in `patch`.
    ///
    /// Returns `None` and changes nothing when no design is active.
    pub fn update(&self, patch: DesignPatch) -> Option<Design> {
        let mut guard = self.inner.write();
        if !guard.is_active() {
            tracing::warn!("Style update ignored: no active design");
            return None;
        }

        tracing::debug!(?patch, "Design updated");
        let next = DesignReducer::reduce(std::mem::take(&mut *guard), DesignIntent::Update { patch });
        *guard = next;
        guard.design().cloned()
    }

    /// Replaces the quote text with the trimmed `text`.
    ///
    /// Returns `None` and changes nothing when no design is active or the
    /// text is blank or over the length limit.
    pub fn edit_quote_text(&self, text: &str) -> Option<Design> {
        let mut guard = self.inner.write();
        if !guard.is_active() {
            tracing::warn!("Quote edit ignored: no active design");
            return None;
        }
        if let Err(err) = accept_quote_text(text) {
            tracing::debug!(reason = %err, "Quote edit rejected");
            return None;
        }

        let next = DesignReducer::reduce(
            std::mem::take(&mut *guard),
            DesignIntent::EditQuoteText {
                text: text.to_string(),
            },
        );
        *guard = next;

        let design = guard.design().cloned();
        if let Some(design) = &design {
            tracing::debug!(design_id = %design.id, "Quote text edited");
        }
        design
    }

    /// Drops the quote and the design.
    pub fn clear(&self) {
        let mut guard = self.inner.write();
        *guard = DesignReducer::reduce(std::mem::take(&mut *guard), DesignIntent::Clear);
        tracing::info!("Design session cleared");
    }

    fn start(state: &mut DesignSessionState, quote: Quote) -> Design {
        let design = Design::from_quote(DesignId::generate(), quote);
        *state = DesignReducer::reduce(
            std::mem::take(state),
            DesignIntent::Initialize {
                design: design.clone(),
            },
        );
        tracing::info!(design_id = %design.id, quote_id = %design.quote.id, "Design initialized");
        design
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::design::{Category, Palette};

    fn quote() -> Quote {
        Quote {
            id: "q-10".to_string(),
            text: "Nature does not hurry, yet everything is accomplished.".to_string(),
            author: "Lao Tzu".to_string(),
            author_title: None,
            category: Category::Mindfulness,
            tags: vec!["patience".to_string()],
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = DesignStore::new();
        assert!(!store.is_active());
        assert!(store.current_design().is_none());
        assert!(store.current_quote().is_none());
    }

    #[test]
    fn clones_share_state() {
        let store = DesignStore::new();
        let handle = store.clone();
        let design = store.initialize(quote());
        assert_eq!(handle.current_design(), Some(design));
    }

    #[test]
    fn quote_and_design_are_set_and_cleared_together() {
        let store = DesignStore::new();
        store.initialize(quote());
        assert!(store.current_quote().is_some());
        assert!(store.current_design().is_some());

        store.clear();
        assert!(store.current_quote().is_none());
        assert!(store.current_design().is_none());
    }

    #[test]
    fn update_returns_merged_design() {
        let store = DesignStore::new();
        store.initialize(quote());
        let design = store
            .update(DesignPatch::new().palette(Palette::Earth))
            .unwrap();
        assert_eq!(design.palette, Palette::Earth);
        assert_eq!(store.current_design().unwrap().palette, Palette::Earth);
    }

    #[test]
    fn over_long_edit_is_rejected() {
        let store = DesignStore::new();
        store.initialize(quote());
        let too_long = "x".repeat(crate::design::MAX_QUOTE_CHARS + 1);
        assert!(store.edit_quote_text(&too_long).is_none());
        assert_eq!(store.current_design().unwrap().quote.text, quote().text);
    }

    #[test]
    fn select_with_keeps_matching_design() {
        let store = DesignStore::new();
        let design = store.initialize(quote());
        let selection = store.select_with("q-10", |_| panic!("lookup not needed"));
        assert!(matches!(selection, Some(Selection::Retained(kept)) if kept.id == design.id));
    }

    #[test]
    fn select_with_misses_only_without_design() {
        let store = DesignStore::new();
        assert!(store.select_with("q-404", |_| None).is_none());
        assert!(!store.is_active());

        store.initialize(quote());
        assert!(matches!(
            store.select_with("q-404", |_| None),
            Some(Selection::Retained(_))
        ));
    }

    #[test]
    fn clear_waits_for_select_to_finish() {
        let store = DesignStore::new();
        store.initialize(quote());
        let cleared = Arc::new(AtomicBool::new(false));
        let mut clearer = None;

        let selection = store.select_with("q-11", |id| {
            let handle = store.clone();
            let flag = cleared.clone();
            clearer = Some(thread::spawn(move || {
                handle.clear();
                flag.store(true, Ordering::SeqCst);
            }));
            thread::sleep(Duration::from_millis(50));
            assert!(!cleared.load(Ordering::SeqCst));

            let mut next = quote();
            next.id = id.to_string();
            Some(next)
        });

        assert!(matches!(selection, Some(Selection::Initialized(_))));
        clearer.unwrap().join().unwrap();
        assert!(cleared.load(Ordering::SeqCst));
        assert!(!store.is_active());
    }
}
