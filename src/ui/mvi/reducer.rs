//! The transition half of MVI.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
///
/// Stores hold the state and call `reduce`; nothing else writes it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Next state for `intent`. Intents that make no sense in `state`
    /// hand it back untouched.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
