//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents carry everything the reducer needs, including values that are
/// not pure to produce (generated ids), so that reducing stays pure.
pub trait Intent: Send + 'static {}
