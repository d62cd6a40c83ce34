/// Convenience result type used across the crate.
pub type ZoomResult<T> = Result<T, ZoomError>;

/// Error taxonomy for planning and querying a zoom animation.
///
/// Every failure is surfaced to the caller; nothing is recovered internally and no partial
/// [`AnimationPlan`](crate::AnimationPlan) is ever produced.
#[derive(thiserror::Error, Debug)]
pub enum ZoomError {
    /// Epsilons were not supplied as an ordered, fixed, non-empty collection.
    #[error("invalid epsilons type: {0}")]
    InvalidEpsilonsType(String),

    /// Epsilons are not strictly decreasing, or contain a non-positive / non-finite entry.
    #[error("invalid epsilons order: {0}")]
    InvalidEpsilonsOrder(String),

    /// Planning parameters (`acc`, search cap, frame counts, margin) are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The threshold search hit the search cap for at least one epsilon.
    #[error(
        "convergence unproven for epsilon indices {indices:?} within search cap {search_cap}; \
         the epsilon may be too small or the sequence may diverge or converge too slowly"
    )]
    ConvergenceUnproven {
        /// Positions (into the epsilon list) whose search failed.
        indices: Vec<usize>,
        /// Search cap that was exhausted.
        search_cap: u64,
    },

    /// An epsilon is not meaningfully smaller than the view half-width it zooms from.
    #[error(
        "degenerate radius ladder at stage {stage}: epsilon {epsilon} is not meaningfully \
         smaller than half-width {half_width}"
    )]
    DegenerateLadder {
        /// Stage (epsilon position) where the ladder broke down.
        stage: usize,
        /// Epsilon of that stage.
        epsilon: f64,
        /// Half-width the stage would zoom from.
        half_width: f64,
    },

    /// The caller-supplied sequence failed or produced a non-finite point.
    #[error("sequence error: {0}")]
    Sequence(String),

    /// Errors when serializing or deserializing parameters or plan data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZoomError {
    /// Build a [`ZoomError::InvalidEpsilonsType`] value.
    pub fn epsilons_type(msg: impl Into<String>) -> Self {
        Self::InvalidEpsilonsType(msg.into())
    }

    /// Build a [`ZoomError::InvalidEpsilonsOrder`] value.
    pub fn epsilons_order(msg: impl Into<String>) -> Self {
        Self::InvalidEpsilonsOrder(msg.into())
    }

    /// Build a [`ZoomError::InvalidParams`] value.
    pub fn params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Build a [`ZoomError::Sequence`] value.
    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }

    /// Build a [`ZoomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is a precondition failure detected before any threshold search.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidEpsilonsType(_) | Self::InvalidEpsilonsOrder(_) | Self::InvalidParams(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
