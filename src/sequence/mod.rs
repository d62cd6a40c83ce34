//! Caller-supplied planar sequences and the sampler that evaluates them.

pub(crate) mod presets;
pub(crate) mod sampler;

use crate::foundation::core::Point;
use crate::foundation::error::ZoomResult;

/// A planar sequence `n -> (x, y)` defined for every index `n >= 1`.
///
/// Implementations are treated as black boxes: the planner may evaluate any index, in any order,
/// any number of times, and expects the same answer each time.
///
/// Infallible closures `Fn(u64) -> Point` implement this trait directly; wrap fallible ones in
/// [`FallibleSequence`].
pub trait Sequence {
    /// Evaluate the sequence at index `n` (`n >= 1`).
    fn point(&self, n: u64) -> ZoomResult<Point>;

    /// Vectorized evaluation. The default maps [`Sequence::point`] over `indices`.
    fn points(&self, indices: &[u64]) -> ZoomResult<Vec<Point>> {
        indices.iter().map(|&n| self.point(n)).collect()
    }
}

impl<F> Sequence for F
where
    F: Fn(u64) -> Point,
{
    fn point(&self, n: u64) -> ZoomResult<Point> {
        Ok(self(n))
    }
}

/// Adapter for sequence closures that can fail.
pub struct FallibleSequence<F>(pub F);

impl<F> Sequence for FallibleSequence<F>
where
    F: Fn(u64) -> ZoomResult<Point>,
{
    fn point(&self, n: u64) -> ZoomResult<Point> {
        (self.0)(n)
    }
}
