//! Base trait for session state in the MVI architecture.

/// Marker trait for state objects.
///
/// States are cloned out to readers as snapshots; `Default` is the empty
/// session a store starts from and returns to when cleared.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
