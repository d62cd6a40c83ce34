use crate::animation::state::{AnimationStateMachine, FrameState};
use crate::convergence::detector::find_thresholds;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ZoomError, ZoomResult};
use crate::planning::epsilons::EpsilonList;
use crate::planning::ladder::build_ladder;
use crate::planning::params::PlanParams;
use crate::planning::stage::Stage;
use crate::planning::timeline::{PhaseSpan, Timeline, build_timeline};
use crate::sequence::Sequence;
use crate::sequence::sampler::{ScatterSamples, point_size, sample_range};

/// Immutable result of planning: thresholds, ladder, samples and the phase timeline.
///
/// All rendering state is derived from these tables by [`AnimationPlan::state_at`]; nothing is
/// mutated after construction, so a plan can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct AnimationPlan {
    epsilons: EpsilonList,
    acc: u64,
    params: PlanParams,
    samples: ScatterSamples,
    radii: Vec<f64>,
    stages: Vec<Stage>,
    timeline: Timeline,
}

/// Serializable overview of a plan.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlanSummary {
    pub epsilons: Vec<f64>,
    pub acc: u64,
    pub thresholds: Vec<u64>,
    pub radii: Vec<f64>,
    pub sample_count: usize,
    pub max_distance: f64,
    pub total_frames: u64,
    pub phases: Vec<PhaseSpan>,
    pub stages: Vec<Stage>,
}

/// Find every threshold, build the radius ladder, and lay out the timeline.
///
/// Preconditions (epsilons, `acc`, parameters) are checked before any sequence evaluation. Failing
/// threshold searches are reported together; no partial plan is returned.
#[tracing::instrument(skip(sequence, params))]
pub fn plan_animation<S>(
    sequence: &S,
    epsilons: &[f64],
    acc: u64,
    params: &PlanParams,
) -> ZoomResult<AnimationPlan>
where
    S: Sequence + ?Sized,
{
    let epsilons = EpsilonList::new(epsilons)?;
    if acc == 0 {
        return Err(ZoomError::params("acc must be >= 1"));
    }
    params.validate()?;

    let thresholds = find_thresholds(sequence, epsilons.as_slice(), acc, params.search_cap)?;

    // Sample far enough to cover every accepted run.
    let last_run_start = thresholds.iter().copied().max().unwrap_or(1);
    let last_index = last_run_start
        .checked_add(acc - 1)
        .ok_or_else(|| ZoomError::params("sample range overflows u64"))?;
    let samples = sample_range(sequence, 1, last_index)?;
    let max_distance = samples.max_distance();

    let radii = build_ladder(max_distance, epsilons.as_slice(), params.margin_factor)?;

    let stages = epsilons
        .iter()
        .zip(&thresholds)
        .enumerate()
        .map(|(i, (eps, &n))| -> ZoomResult<Stage> {
            let point = samples.get(n).ok_or_else(|| {
                ZoomError::sequence(format!("threshold index {n} was not sampled"))
            })?;
            Ok(Stage::new(i, eps, n, point, &radii))
        })
        .collect::<ZoomResult<Vec<_>>>()?;

    let timeline = build_timeline(&stages, params)?;

    tracing::info!(
        stages = stages.len(),
        samples = samples.len(),
        max_distance,
        total_frames = timeline.total_frames(),
        "animation planned"
    );

    Ok(AnimationPlan {
        epsilons,
        acc,
        params: params.clone(),
        samples,
        radii,
        stages,
        timeline,
    })
}

impl AnimationPlan {
    pub fn total_frames(&self) -> u64 {
        self.timeline.total_frames()
    }

    /// Rendering directive for `frame`. Defined for every frame; frames past the end are `Done`.
    pub fn state_at(&self, frame: FrameIndex) -> FrameState {
        self.state_machine().state_at(frame)
    }

    pub fn state_machine(&self) -> AnimationStateMachine<'_> {
        AnimationStateMachine::new(
            &self.timeline,
            &self.stages,
            self.radii[0],
            self.params.points_to_show,
            self.samples.len(),
            self.params.zoom_ease,
        )
    }

    pub fn epsilons(&self) -> &EpsilonList {
        &self.epsilons
    }

    pub fn acc(&self) -> u64 {
        self.acc
    }

    pub fn params(&self) -> &PlanParams {
        &self.params
    }

    pub fn thresholds(&self) -> Vec<u64> {
        self.stages.iter().map(|s| s.threshold).collect()
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn samples(&self) -> &ScatterSamples {
        &self.samples
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Display size of the scatter point at sequence index `n`.
    pub fn point_size(&self, n: u64) -> f64 {
        point_size(n)
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            epsilons: self.epsilons.as_slice().to_vec(),
            acc: self.acc,
            thresholds: self.thresholds(),
            radii: self.radii.clone(),
            sample_count: self.samples.len(),
            max_distance: self.samples.max_distance(),
            total_frames: self.total_frames(),
            phases: self.timeline.spans().to_vec(),
            stages: self.stages.clone(),
        }
    }
}
