use crate::animation::ease::Ease;
use crate::foundation::core::FrameIndex;
use crate::foundation::math::lerp;
use crate::planning::stage::{Stage, StageOverlay};
use crate::planning::timeline::{Phase, Timeline};

/// Rendering directive for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    pub frame: FrameIndex,
    pub phase: Phase,
    /// Both axes span `[-axis_half_width, axis_half_width]`.
    pub axis_half_width: f64,
    /// Scatter points visible, counted from sequence index 1.
    pub visible_points: usize,
    /// Stage whose overlay is shown, if any.
    pub active_stage: Option<usize>,
    pub overlay: Option<StageOverlay>,
}

impl FrameState {
    pub fn label_text(&self) -> Option<&str> {
        self.overlay.as_ref().map(|o| o.label_text.as_str())
    }
}

/// Pure map from global frame number to [`FrameState`].
///
/// Holds only borrowed, precomputed tables; there is no counter or cursor, so frames can be
/// queried in any order, repeatedly, or from several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct AnimationStateMachine<'a> {
    timeline: &'a Timeline,
    stages: &'a [Stage],
    initial_half_width: f64,
    points_to_show: u64,
    sample_count: usize,
    ease: Ease,
}

impl<'a> AnimationStateMachine<'a> {
    pub(crate) fn new(
        timeline: &'a Timeline,
        stages: &'a [Stage],
        initial_half_width: f64,
        points_to_show: u64,
        sample_count: usize,
        ease: Ease,
    ) -> Self {
        Self {
            timeline,
            stages,
            initial_half_width,
            points_to_show,
            sample_count,
            ease,
        }
    }

    pub fn state_at(&self, frame: FrameIndex) -> FrameState {
        let (phase, local) = self.timeline.locate(frame);
        let mut state = FrameState {
            frame,
            phase,
            axis_half_width: self.initial_half_width,
            visible_points: self.sample_count,
            active_stage: None,
            overlay: None,
        };

        match phase {
            Phase::Reveal => {
                let revealed = local / self.timeline.reveal_rate() + 1;
                let revealed = revealed.min(self.points_to_show);
                state.visible_points = usize::try_from(revealed)
                    .unwrap_or(usize::MAX)
                    .min(self.sample_count);
            }
            Phase::Wait => {}
            Phase::Zoom(k) => {
                let Some(stage) = self.stages.get(k) else {
                    return state;
                };
                let t = local as f64 / self.timeline.frame_unit() as f64;
                state.axis_half_width =
                    lerp(stage.radius_from, stage.radius_to, self.ease.apply(t));
            }
            Phase::Freeze(k) => {
                let Some(stage) = self.stages.get(k) else {
                    return state;
                };
                state.axis_half_width = stage.radius_to;
                // Shown from the first freeze frame, cleared on the last one.
                if local + 1 < self.timeline.freeze_unit() {
                    state.active_stage = Some(k);
                    state.overlay = Some(stage.overlay());
                }
            }
            Phase::Done => {
                if let Some(last) = self.stages.last() {
                    state.axis_half_width = last.radius_to;
                }
            }
        }
        state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
