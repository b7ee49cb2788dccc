//! Per-user design session: the store holding the active design and the
//! controller sequencing it through the browse → design → configure flow.

mod lifecycle;
mod store;

pub use lifecycle::{
    configure_route, design_route, LifecycleController, LifecycleError, LifecyclePhase,
    PrintHandoff, Selection, BROWSE_ROUTE,
};
pub use store::DesignStore;
