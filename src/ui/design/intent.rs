//! Intents for the design session.

use crate::design::{Design, DesignPatch};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DesignIntent {
    /// Make `design` the active one, replacing any other. Its quote becomes
    /// the held selection.
    Initialize { design: Design },

    /// Overwrite the style fields set in `patch`.
    Update { patch: DesignPatch },

    /// Replace the quote text. Blank or over-long text is ignored.
    EditQuoteText { text: String },

    /// Drop the quote and the design.
    Clear,
}

impl Intent for DesignIntent {}
