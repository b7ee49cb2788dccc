use crate::design::{Design, Quote};
use crate::ui::mvi::UiState;

/// Session state for the design step.
///
/// `quote` is the selection the design was started from. Text edits change
/// only `design.quote`, so `quote` keeps the original wording.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DesignSessionState {
    #[default]
    Uninitialized,
    Active { quote: Quote, design: Design },
}

impl UiState for DesignSessionState {}

impl DesignSessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn design(&self) -> Option<&Design> {
        match self {
            Self::Active { design, .. } => Some(design),
            Self::Uninitialized => None,
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Active { quote, .. } => Some(quote),
            Self::Uninitialized => None,
        }
    }

    /// Id of the quote the active design shows.
    pub fn active_quote_id(&self) -> Option<&str> {
        self.design().map(|d| d.quote.id.as_str())
    }
}
