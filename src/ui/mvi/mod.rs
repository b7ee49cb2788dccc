//! Model-View-Intent (MVI) primitives for the design session.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Preview
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of the session (no design, or one active design)
//! - **Intent**: a user action (select a quote, change a style, edit the text)
//! - **Reducer**: pure function producing the next state from an intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
