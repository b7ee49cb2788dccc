//! Design lifecycle: select a quote → design → configure print.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::QuoteCatalog;
use crate::design::{Design, DesignPatch, Quote, QuoteError};
use crate::session::store::DesignStore;
use crate::ui::design::DesignSessionState;

/// Browse surface, the recovery route for every navigation failure.
pub const BROWSE_ROUTE: &str = "/inspire/browse";

pub fn design_route(quote_id: &str) -> String {
    format!("/inspire/design/{quote_id}")
}

pub fn configure_route(design_id: &str) -> String {
    format!("/inspire/configure/{design_id}")
}

/// Recoverable navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("Quote '{quote_id}' not found")]
    QuoteNotFound { quote_id: String },

    #[error("No design is in progress")]
    NoActiveDesign,

    #[error("Design '{design_id}' is not the design in progress")]
    DesignNotFound { design_id: String },

    #[error("Invalid quote: {0}")]
    InvalidQuote(#[from] QuoteError),
}

impl LifecycleError {
    /// Route the caller should navigate to, if any.
    ///
    /// An invalid custom quote keeps the user on the form.
    pub fn redirect_to(&self) -> Option<&'static str> {
        match self {
            LifecycleError::QuoteNotFound { .. }
            | LifecycleError::NoActiveDesign
            | LifecycleError::DesignNotFound { .. } => Some(BROWSE_ROUTE),
            LifecycleError::InvalidQuote(_) => None,
        }
    }
}

/// Coarse lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum LifecyclePhase {
    Uninitialized,
    #[serde(rename_all = "camelCase")]
    Active { quote_id: String },
}

impl From<&DesignSessionState> for LifecyclePhase {
    fn from(state: &DesignSessionState) -> Self {
        match state.active_quote_id() {
            Some(quote_id) => LifecyclePhase::Active {
                quote_id: quote_id.to_string(),
            },
            None => LifecyclePhase::Uninitialized,
        }
    }
}

/// Result of selecting a quote.
#[derive(Debug, Clone)]
pub enum Selection {
    /// A new design was started from a curated quote.
    Initialized(Design),
    /// The active design was kept: it already shows the quote, or the id is
    /// not curated and a design started elsewhere is in progress.
    Retained(Design),
}

impl Selection {
    pub fn design(&self) -> &Design {
        match self {
            Selection::Initialized(design) | Selection::Retained(design) => design,
        }
    }
}

/// Completed design handed to the print-configuration step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintHandoff {
    pub route: String,
    pub design: Design,
}

/// Sequences quote selection, design editing and the print handoff over one
/// [`DesignStore`].
#[derive(Clone)]
pub struct LifecycleController {
    store: DesignStore,
    catalog: Arc<dyn QuoteCatalog>,
}

impl LifecycleController {
    pub fn new(store: DesignStore, catalog: Arc<dyn QuoteCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &DesignStore {
        &self.store
    }

    /// Enters the design step for `quote_id`.
    ///
    /// Precedence: keep a design that already shows the quote; otherwise start
    /// one from the curated catalog; otherwise keep whatever design is in
    /// progress (a custom quote started by [`write_own`](Self::write_own));
    /// only with no design at all is the quote reported as not found.
    pub fn select(&self, quote_id: &str) -> Result<Selection, LifecycleError> {
        let selection = self
            .store
            .select_with(quote_id, |id| self.catalog.lookup(id));

        match selection {
            Some(Selection::Retained(design)) if design.quote.id != quote_id => {
                tracing::debug!(
                    quote_id = %quote_id,
                    design_id = %design.id,
                    "Quote not curated, keeping design in progress"
                );
                Ok(Selection::Retained(design))
            }
            Some(selection) => Ok(selection),
            None => {
                tracing::warn!(quote_id = %quote_id, "Quote not found, redirecting to browse");
                Err(LifecycleError::QuoteNotFound {
                    quote_id: quote_id.to_string(),
                })
            }
        }
    }

    /// Starts a design from a user-authored quote.
    ///
    /// The caller navigates to [`design_route`] of the returned quote id.
    pub fn write_own(&self, text: &str, author: &str) -> Result<Design, LifecycleError> {
        let quote = Quote::custom(text, author)?;
        Ok(self.store.initialize(quote))
    }

    pub fn edit_text(&self, text: &str) -> Option<Design> {
        self.store.edit_quote_text(text)
    }

    pub fn change_style(&self, patch: DesignPatch) -> Option<Design> {
        self.store.update(patch)
    }

    /// Hands a copy of the active design to print configuration.
    pub fn proceed_to_configure(&self) -> Result<PrintHandoff, LifecycleError> {
        let design = self
            .store
            .current_design()
            .ok_or(LifecycleError::NoActiveDesign)?;
        tracing::info!(design_id = %design.id, "Design handed to print configuration");
        Ok(PrintHandoff {
            route: configure_route(design.id.as_str()),
            design,
        })
    }

    /// Re-reads the active design for the configure route of `design_id`.
    pub fn resume_configure(&self, design_id: &str) -> Result<Design, LifecycleError> {
        match self.store.current_design() {
            Some(design) if design.id.as_str() == design_id => Ok(design),
            _ => Err(LifecycleError::DesignNotFound {
                design_id: design_id.to_string(),
            }),
        }
    }

    pub fn abandon(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes() {
        assert_eq!(design_route("q-1"), "/inspire/design/q-1");
        assert_eq!(configure_route("design-1"), "/inspire/configure/design-1");
    }

    #[test]
    fn navigation_errors_redirect_to_browse() {
        let err = LifecycleError::QuoteNotFound {
            quote_id: "q-404".to_string(),
        };
        assert_eq!(err.redirect_to(), Some(BROWSE_ROUTE));
        assert_eq!(LifecycleError::NoActiveDesign.redirect_to(), Some(BROWSE_ROUTE));
        assert_eq!(
            LifecycleError::InvalidQuote(QuoteError::EmptyText).redirect_to(),
            None
        );
    }

    #[test]
    fn phase_serializes_with_tag() {
        let json = serde_json::to_value(LifecyclePhase::Active {
            quote_id: "q-1".to_string(),
        })
        .unwrap();
        assert_eq!(json["phase"], "active");
        assert_eq!(json["quoteId"], "q-1");

        let json = serde_json::to_value(LifecyclePhase::Uninitialized).unwrap();
        assert_eq!(json["phase"], "uninitialized");
    }
}
