use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ZoomError, ZoomResult};
use crate::planning::params::PlanParams;
use crate::planning::stage::Stage;

/// Named animation phase. `Zoom` and `Freeze` carry the 0-based stage index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", content = "stage", rename_all = "snake_case")]
pub enum Phase {
    Reveal,
    Wait,
    Zoom(usize),
    Freeze(usize),
    Done,
}

impl Phase {
    pub fn stage(self) -> Option<usize> {
        match self {
            Self::Zoom(k) | Self::Freeze(k) => Some(k),
            Self::Reveal | Self::Wait | Self::Done => None,
        }
    }
}

/// A phase and the frames it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PhaseSpan {
    pub phase: Phase,
    pub range: FrameRange,
}

/// Immutable interval table partitioning `[0, total_frames)` into phases.
///
/// Empty phases (no reveal, no wait) are left out of the table.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    spans: Vec<PhaseSpan>,
    total_frames: u64,
    reveal_rate: u64,
    frame_unit: u64,
    freeze_unit: u64,
}

impl Timeline {
    pub fn spans(&self) -> &[PhaseSpan] {
        &self.spans
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn reveal_rate(&self) -> u64 {
        self.reveal_rate
    }

    pub fn frame_unit(&self) -> u64 {
        self.frame_unit
    }

    pub fn freeze_unit(&self) -> u64 {
        self.freeze_unit
    }

    /// Resolve a global frame to its phase and the offset into that phase.
    ///
    /// Frames at or past the end resolve to [`Phase::Done`] with the offset past the end.
    pub fn locate(&self, frame: FrameIndex) -> (Phase, u64) {
        if frame.0 >= self.total_frames {
            return (Phase::Done, frame.0 - self.total_frames);
        }
        let idx = self.spans.partition_point(|s| s.range.end.0 <= frame.0);
        let span = self.spans[idx];
        (span.phase, span.range.local(frame))
    }

    pub fn span_of(&self, phase: Phase) -> Option<PhaseSpan> {
        self.spans.iter().copied().find(|s| s.phase == phase)
    }
}

/// Lay out reveal, wait, then one zoom + freeze pair per stage.
pub fn build_timeline(stages: &[Stage], params: &PlanParams) -> ZoomResult<Timeline> {
    params.validate()?;
    if stages.is_empty() {
        return Err(ZoomError::params("timeline needs at least one stage"));
    }

    let overflow = || ZoomError::params("timeline frame count overflows u64");
    let reveal = params
        .points_to_show
        .checked_mul(params.reveal_rate)
        .ok_or_else(overflow)?;
    let per_stage = params
        .frame_unit
        .checked_add(params.freeze_unit)
        .ok_or_else(overflow)?;
    let total = (stages.len() as u64)
        .checked_mul(per_stage)
        .and_then(|s| s.checked_add(reveal))
        .and_then(|s| s.checked_add(params.wait_frames))
        .ok_or_else(overflow)?;

    let mut spans = Vec::with_capacity(2 + 2 * stages.len());
    let mut cursor = FrameIndex(0);
    let mut push = |phase: Phase, len: u64| {
        let range = FrameRange::with_len(cursor, len);
        cursor = range.end;
        if !range.is_empty() {
            spans.push(PhaseSpan { phase, range });
        }
    };

    push(Phase::Reveal, reveal);
    push(Phase::Wait, params.wait_frames);
    for stage in stages {
        push(Phase::Zoom(stage.index), params.frame_unit);
        push(Phase::Freeze(stage.index), params.freeze_unit);
    }
    debug_assert_eq!(cursor.0, total);

    Ok(Timeline {
        spans,
        total_frames: total,
        reveal_rate: params.reveal_rate,
        frame_unit: params.frame_unit,
        freeze_unit: params.freeze_unit,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/planning/timeline.rs"]
mod tests;
