//! Design editing state and the presentation derived from it.

pub mod design;
pub mod mvi;
pub mod preview;
pub mod render;
pub mod theme;
