//! convergence-zoom finds where a planar sequence settles into shrinking epsilon balls and turns
//! that evidence into a deterministic, seekable zoom animation schedule.
//!
//! # Pipeline overview
//!
//! 1. **Search**: `Sequence + epsilons + acc -> thresholds` (one bounded forward pass per epsilon)
//! 2. **Ladder**: `max sampled distance + epsilons -> radii` (axis half-width per zoom stage)
//! 3. **Timeline**: `stages + PlanParams -> Timeline` (reveal, wait, then zoom/freeze per stage)
//! 4. **Query**: `AnimationPlan + FrameIndex -> FrameState` (pure, any order, any thread)
//!
//! Drawing is left to the caller: a renderer asks [`AnimationPlan::state_at`] for each frame and
//! paints the axis extent, scatter points, balls and overlay it describes.
//!
//! ```no_run
//! use convergence_zoom::{FrameIndex, PlanParams, Point, plan_animation};
//!
//! let seq = |n: u64| Point::new(1.0 / n as f64, 0.0);
//! let plan = plan_animation(&seq, &[0.25, 0.05], 3, &PlanParams::default())?;
//! let state = plan.state_at(FrameIndex(1500));
//! println!("{} {:?}", state.axis_half_width, state.label_text());
//! # Ok::<(), convergence_zoom::ZoomError>(())
//! ```
#![forbid(unsafe_code)]

mod animation;
mod convergence;
mod foundation;
mod plan;
mod planning;
mod sequence;

pub use animation::ease::Ease;
pub use animation::state::{AnimationStateMachine, FrameState};
pub use convergence::detector::{DEFAULT_SEARCH_CAP, Threshold, find_threshold, find_thresholds};
pub use foundation::core::{FrameIndex, FrameRange, Point, Vec2};
pub use foundation::error::{ZoomError, ZoomResult};
pub use plan::animation_plan::{AnimationPlan, PlanSummary, plan_animation};
pub use plan::export::ExportThreading;
pub use planning::epsilons::EpsilonList;
pub use planning::ladder::{MIN_ZOOM_FACTOR, build_ladder};
pub use planning::params::PlanParams;
pub use planning::stage::{Stage, StageOverlay};
pub use planning::timeline::{Phase, PhaseSpan, Timeline, build_timeline};
pub use sequence::presets::Preset;
pub use sequence::sampler::{
    POINT_SIZE_SCALE, ScatterSamples, distance_to_origin, point_size, sample, sample_many,
    sample_range,
};
pub use sequence::{FallibleSequence, Sequence};
