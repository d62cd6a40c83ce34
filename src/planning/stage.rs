use crate::foundation::core::Point;

/// Offset applied to the epsilon label so it clears the ball's rim.
const LABEL_WIGGLE: f64 = 1.1;
/// The pointer text sits this many epsilons up and to the left of the origin.
const POINTER_TEXT_OFFSET: f64 = 1.25;

/// One zoom stage: an epsilon, its threshold, and the ladder rungs it zooms between.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stage {
    pub index: usize,
    pub epsilon: f64,
    /// First index of the accepted in-ball run.
    pub threshold: u64,
    /// Sequence point at `threshold`.
    pub threshold_point: Point,
    pub radius_from: f64,
    pub radius_to: f64,
    /// Fill opacity of this stage's ball; nested balls darken as they shrink.
    pub ball_opacity: f64,
}

impl Stage {
    /// `radii` is the full ladder; the stage reads rungs `index` and `index + 1`.
    pub(crate) fn new(
        index: usize,
        epsilon: f64,
        threshold: u64,
        threshold_point: Point,
        radii: &[f64],
    ) -> Self {
        Self {
            index,
            epsilon,
            threshold,
            threshold_point,
            radius_from: radii[index],
            radius_to: radii[index + 1],
            ball_opacity: ((index + 1) as f64 / 10.0).min(1.0),
        }
    }

    /// Annotation shown while this stage is frozen.
    pub fn overlay(&self) -> StageOverlay {
        let diag = LABEL_WIGGLE * self.epsilon / std::f64::consts::SQRT_2;
        StageOverlay {
            stage: self.index,
            label_text: format!("ε = {}", self.epsilon),
            label_anchor: Point::new(diag, -diag),
            pointer_text: format!("{}-th point", self.threshold),
            pointer_target: self.threshold_point,
            pointer_text_anchor: Point::new(
                -POINTER_TEXT_OFFSET * self.epsilon,
                POINTER_TEXT_OFFSET * self.epsilon,
            ),
        }
    }
}

/// Epsilon label plus a pointer at the threshold point, in data coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StageOverlay {
    pub stage: usize,
    pub label_text: String,
    pub label_anchor: Point,
    pub pointer_text: String,
    pub pointer_target: Point,
    pub pointer_text_anchor: Point,
}
