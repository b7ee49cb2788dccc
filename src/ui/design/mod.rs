//! Design session feature module.
//!
//! Holds the state machine behind the design step: no design yet, or one
//! active design together with the quote it was started from.

mod intent;
mod reducer;
mod state;

pub use intent::DesignIntent;
pub use reducer::DesignReducer;
pub use state::DesignSessionState;
