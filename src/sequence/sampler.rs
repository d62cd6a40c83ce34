use crate::foundation::core::Point;
use crate::foundation::error::{ZoomError, ZoomResult};
use crate::foundation::math::norm;
use crate::sequence::Sequence;

/// Display size of point `n` is `POINT_SIZE_SCALE / n`.
pub const POINT_SIZE_SCALE: f64 = 20.0;

/// Evaluate `seq` at `n`, rejecting index 0 and non-finite coordinates.
pub fn sample<S>(seq: &S, n: u64) -> ZoomResult<Point>
where
    S: Sequence + ?Sized,
{
    if n == 0 {
        return Err(ZoomError::sequence("sequence indices start at 1"));
    }
    let p = seq.point(n)?;
    check_finite(n, p)?;
    Ok(p)
}

/// Vectorized [`sample`]; points are returned in the order of `indices`.
pub fn sample_many<S>(seq: &S, indices: &[u64]) -> ZoomResult<Vec<Point>>
where
    S: Sequence + ?Sized,
{
    if indices.contains(&0) {
        return Err(ZoomError::sequence("sequence indices start at 1"));
    }
    let points = seq.points(indices)?;
    if points.len() != indices.len() {
        return Err(ZoomError::sequence(format!(
            "vectorized evaluation returned {} points for {} indices",
            points.len(),
            indices.len()
        )));
    }
    for (&n, &p) in indices.iter().zip(&points) {
        check_finite(n, p)?;
    }
    Ok(points)
}

pub fn distance_to_origin(p: Point) -> f64 {
    norm(p)
}

/// Evaluate the inclusive index range `first..=last` once.
pub fn sample_range<S>(seq: &S, first: u64, last: u64) -> ZoomResult<ScatterSamples>
where
    S: Sequence + ?Sized,
{
    if first == 0 || first > last {
        return Err(ZoomError::sequence(format!(
            "invalid sample range {first}..={last}"
        )));
    }
    let indices: Vec<u64> = (first..=last).collect();
    let points = sample_many(seq, &indices)?;
    Ok(ScatterSamples { first, points })
}

fn check_finite(n: u64, p: Point) -> ZoomResult<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(ZoomError::sequence(format!(
            "sequence produced a non-finite point ({}, {}) at index {n}",
            p.x, p.y
        )))
    }
}

/// Contiguous run of evaluated sequence points, starting at index `first`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScatterSamples {
    first: u64,
    points: Vec<Point>,
}

impl ScatterSamples {
    pub fn first_index(&self) -> u64 {
        self.first
    }

    pub fn last_index(&self) -> u64 {
        self.first + self.points.len() as u64 - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at sequence index `n`, if it was sampled.
    pub fn get(&self, n: u64) -> Option<Point> {
        let offset = n.checked_sub(self.first)?;
        self.points.get(usize::try_from(offset).ok()?).copied()
    }

    /// `(index, point)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, Point)> + '_ {
        (self.first..).zip(self.points.iter().copied())
    }

    /// Largest distance to the origin over all samples (0 when empty).
    pub fn max_distance(&self) -> f64 {
        self.points
            .iter()
            .map(|&p| distance_to_origin(p))
            .fold(0.0, f64::max)
    }
}

/// Display size for sequence index `n` (`n >= 1`); later points are drawn smaller.
pub fn point_size(n: u64) -> f64 {
    POINT_SIZE_SCALE / n.max(1) as f64
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sampler.rs"]
mod tests;
