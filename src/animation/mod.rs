//! Frame-indexed state machine consumed by renderers.

pub(crate) mod ease;
pub(crate) mod state;
