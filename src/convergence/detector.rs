use crate::foundation::error::{ZoomError, ZoomResult};
use crate::sequence::Sequence;
use crate::sequence::sampler::{distance_to_origin, sample};

/// Default upper bound on probed indices per epsilon (`2^16`).
pub const DEFAULT_SEARCH_CAP: u64 = 1 << 16;

/// Outcome of a single threshold search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// First index of an accepted run of in-ball samples.
    Found(u64),
    /// The next probe index exceeded the search cap before a run was accepted.
    NotFound,
}

impl Threshold {
    pub fn index(self) -> Option<u64> {
        match self {
            Self::Found(n) => Some(n),
            Self::NotFound => None,
        }
    }
}

/// Find the smallest `N` such that indices `N..N+acc` all lie strictly inside the
/// `epsilon` ball around the origin.
///
/// Single forward pass: a miss resets the run to zero and the search restarts from the next index,
/// so a later excursion outside the ball invalidates any earlier apparent convergence. The search
/// gives up once the next index would exceed `search_cap`, so a run must complete before index
/// `search_cap` to be accepted.
pub fn find_threshold<S>(seq: &S, epsilon: f64, acc: u64, search_cap: u64) -> ZoomResult<Threshold>
where
    S: Sequence + ?Sized,
{
    if acc == 0 {
        return Err(ZoomError::params("acc must be >= 1"));
    }

    let mut run = 0u64;
    let mut k = 1u64;
    while run < acc {
        if distance_to_origin(sample(seq, k)?) < epsilon {
            run += 1;
        } else {
            run = 0;
        }
        k += 1;
        if k > search_cap {
            return Ok(Threshold::NotFound);
        }
    }
    Ok(Threshold::Found(k - acc))
}

/// Run [`find_threshold`] for every epsilon, in order.
///
/// Any epsilon whose search hits the cap is collected, and all of them are reported together as
/// [`ZoomError::ConvergenceUnproven`].
#[tracing::instrument(skip(seq))]
pub fn find_thresholds<S>(
    seq: &S,
    epsilons: &[f64],
    acc: u64,
    search_cap: u64,
) -> ZoomResult<Vec<u64>>
where
    S: Sequence + ?Sized,
{
    let mut found = Vec::with_capacity(epsilons.len());
    let mut failed = Vec::new();

    for (i, &eps) in epsilons.iter().enumerate() {
        match find_threshold(seq, eps, acc, search_cap)? {
            Threshold::Found(n) => {
                tracing::debug!(stage = i, epsilon = eps, threshold = n, "threshold found");
                found.push(n);
            }
            Threshold::NotFound => {
                tracing::debug!(stage = i, epsilon = eps, search_cap, "threshold not found");
                failed.push(i);
            }
        }
    }

    if !failed.is_empty() {
        return Err(ZoomError::ConvergenceUnproven {
            indices: failed,
            search_cap,
        });
    }
    Ok(found)
}

#[cfg(test)]
#[path = "../../tests/unit/convergence/detector.rs"]
mod tests;
