//! Validated inputs, the radius ladder, zoom stages and the phase timeline.

pub(crate) mod epsilons;
pub(crate) mod ladder;
pub(crate) mod params;
pub(crate) mod stage;
pub(crate) mod timeline;
