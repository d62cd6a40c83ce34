//! Planning entry point and frame export.

pub(crate) mod animation_plan;
pub(crate) mod export;
