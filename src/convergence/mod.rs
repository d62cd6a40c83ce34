//! Empirical convergence-threshold search.

pub(crate) mod detector;
