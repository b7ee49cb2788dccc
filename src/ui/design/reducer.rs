//! Reducer for the design session.

use crate::design::accept_quote_text;
use crate::ui::mvi::Reducer;

use super::intent::DesignIntent;
use super::state::DesignSessionState;

/// Pure transition function for [`DesignSessionState`].
///
/// Mutations that arrive without an active design, and text edits that fail
/// validation, return the state unchanged.
pub struct DesignReducer;

impl Reducer for DesignReducer {
    type State = DesignSessionState;
    type Intent = DesignIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DesignIntent::Initialize { design } => DesignSessionState::Active {
                quote: design.quote.clone(),
                design,
            },

            DesignIntent::Update { patch } => match state {
                DesignSessionState::Active { quote, design } => DesignSessionState::Active {
                    design: patch.apply(&design),
                    quote,
                },
                other => other,
            },

            DesignIntent::EditQuoteText { text } => match state {
                DesignSessionState::Active { quote, design } => match accept_quote_text(&text) {
                    Ok(text) => DesignSessionState::Active {
                        design: design.with_quote_text(text),
                        quote,
                    },
                    Err(_) => DesignSessionState::Active { quote, design },
                },
                other => other,
            },

            DesignIntent::Clear => DesignSessionState::Uninitialized,
        }
    }
}
