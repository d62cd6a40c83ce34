use crate::foundation::error::{ZoomError, ZoomResult};

/// Smallest accepted `floor(half_width / epsilon)`. Factors 1 and 2 would not shrink the view.
pub const MIN_ZOOM_FACTOR: f64 = 3.0;

/// Axis half-widths for every zoom stage: `radii[0]` is the initial view, `radii[i + 1]` the view
/// after zooming in on `epsilons[i]`.
///
/// Each rung is `2 * radii[i] / floor(radii[i] / epsilons[i])`, which keeps the ball between
/// roughly a third and a half of the zoomed half-width however small epsilon is.
#[tracing::instrument]
pub fn build_ladder(
    max_observed_distance: f64,
    epsilons: &[f64],
    margin_factor: f64,
) -> ZoomResult<Vec<f64>> {
    let initial = margin_factor * max_observed_distance.ceil();
    if !initial.is_finite() || initial <= 0.0 {
        return Err(ZoomError::DegenerateLadder {
            stage: 0,
            epsilon: epsilons.first().copied().unwrap_or(f64::NAN),
            half_width: initial,
        });
    }

    let mut radii = Vec::with_capacity(epsilons.len() + 1);
    radii.push(initial);
    for (stage, &eps) in epsilons.iter().enumerate() {
        let current = radii[stage];
        let factor = (current / eps).floor();
        if !factor.is_finite() || factor < MIN_ZOOM_FACTOR {
            return Err(ZoomError::DegenerateLadder {
                stage,
                epsilon: eps,
                half_width: current,
            });
        }
        let next = 2.0 * current / factor;
        tracing::debug!(stage, epsilon = eps, factor, half_width = next, "ladder rung");
        radii.push(next);
    }
    Ok(radii)
}

#[cfg(test)]
#[path = "../../tests/unit/planning/ladder.rs"]
mod tests;
