use super::*;
use crate::foundation::core::Point;
use crate::planning::params::PlanParams;
use crate::planning::timeline::build_timeline;

const RADII: [f64; 3] = [4.0, 2.0, 0.5];

fn fixture(ease: Ease) -> (Timeline, Vec<Stage>, PlanParams) {
    let params = PlanParams {
        reveal_rate: 2,
        points_to_show: 3,
        wait_frames: 4,
        frame_unit: 10,
        freeze_unit: 5,
        zoom_ease: ease,
        ..PlanParams::default()
    };
    let stages = vec![
        Stage::new(0, 0.6, 5, Point::new(0.3, 0.1), &RADII),
        Stage::new(1, 0.1, 40, Point::new(0.05, 0.0), &RADII),
    ];
    let timeline = build_timeline(&stages, &params).unwrap();
    (timeline, stages, params)
}

fn machine<'a>(
    t: &'a Timeline,
    stages: &'a [Stage],
    p: &PlanParams,
    samples: usize,
) -> AnimationStateMachine<'a> {
    AnimationStateMachine::new(t, stages, RADII[0], p.points_to_show, samples, p.zoom_ease)
}

#[test]
fn reveal_shows_one_point_per_rate_frames() {
    let (t, stages, p) = fixture(Ease::Linear);
    let m = machine(&t, &stages, &p, 50);
    let visible: Vec<usize> = (0..6).map(|f| m.state_at(FrameIndex(f)).visible_points).collect();
    assert_eq!(visible, vec![1, 1, 2, 2, 3, 3]);
    for f in 0..6 {
        let s = m.state_at(FrameIndex(f));
        assert_eq!(s.phase, Phase::Reveal);
        assert_eq!(s.axis_half_width, 4.0);
        assert_eq!(s.active_stage, None);
    }
    // Everything shows once the reveal is over.
    assert_eq!(m.state_at(FrameIndex(6)).phase, Phase::Wait);
    assert_eq!(m.state_at(FrameIndex(6)).visible_points, 50);
}

#[test]
fn reveal_is_capped_by_sample_count() {
    let (t, stages, p) = fixture(Ease::Linear);
    let m = machine(&t, &stages, &p, 2);
    assert_eq!(m.state_at(FrameIndex(5)).visible_points, 2);
}

#[test]
fn zoom_interpolates_linearly_between_rungs() {
    let (t, stages, p) = fixture(Ease::Linear);
    let m = machine(&t, &stages, &p, 50);
    // Zoom(0) starts after 6 reveal + 4 wait frames.
    let s = m.state_at(FrameIndex(10));
    assert_eq!(s.phase, Phase::Zoom(0));
    assert_eq!(s.axis_half_width, 4.0);
    let s = m.state_at(FrameIndex(15));
    assert_eq!(s.axis_half_width, 3.0);
    assert_eq!(s.active_stage, None);
    assert!(s.overlay.is_none());

    // Zoom(1) starts at 10 + 15.
    let s = m.state_at(FrameIndex(25));
    assert_eq!(s.phase, Phase::Zoom(1));
    assert_eq!(s.axis_half_width, 2.0);
    let s = m.state_at(FrameIndex(30));
    assert_eq!(s.axis_half_width, 1.25);
}

#[test]
fn zoom_half_width_is_monotone_within_a_stage() {
    for ease in [Ease::Linear, Ease::InOutCubic, Ease::OutQuad] {
        let (t, stages, p) = fixture(ease);
        let m = machine(&t, &stages, &p, 50);
        let widths: Vec<f64> = (10..20)
            .map(|f| m.state_at(FrameIndex(f)).axis_half_width)
            .collect();
        for w in widths.windows(2) {
            assert!(w[0] >= w[1], "{ease:?}: {widths:?}");
        }
        // The freeze lands exactly on the next rung.
        assert_eq!(m.state_at(FrameIndex(20)).axis_half_width, 2.0);
    }
}

#[test]
fn freeze_overlay_visible_until_last_frame() {
    let (t, stages, p) = fixture(Ease::Linear);
    let m = machine(&t, &stages, &p, 50);
    // Freeze(0) covers frames 20..25.
    for f in 20..24 {
        let s = m.state_at(FrameIndex(f));
        assert_eq!(s.phase, Phase::Freeze(0));
        assert_eq!(s.axis_half_width, 2.0);
        assert_eq!(s.active_stage, Some(0));
        assert_eq!(s.label_text(), Some("ε = 0.6"));
        assert_eq!(s.overlay.as_ref().unwrap().pointer_text, "5-th point");
    }
    let last = m.state_at(FrameIndex(24));
    assert_eq!(last.phase, Phase::Freeze(0));
    assert_eq!(last.active_stage, None);
    assert_eq!(last.label_text(), None);

    let s = m.state_at(FrameIndex(35));
    assert_eq!(s.phase, Phase::Freeze(1));
    assert_eq!(s.active_stage, Some(1));
    assert_eq!(s.overlay.unwrap().pointer_target, Point::new(0.05, 0.0));
}

#[test]
fn done_holds_final_view() {
    let (t, stages, p) = fixture(Ease::Linear);
    let m = machine(&t, &stages, &p, 50);
    assert_eq!(t.total_frames(), 40);
    for f in [40, 41, 10_000] {
        let s = m.state_at(FrameIndex(f));
        assert_eq!(s.phase, Phase::Done);
        assert_eq!(s.axis_half_width, 0.5);
        assert_eq!(s.visible_points, 50);
        assert_eq!(s.active_stage, None);
    }
}

#[test]
fn active_stage_matches_overlay_everywhere() {
    let (t, stages, p) = fixture(Ease::Linear);
    let m = machine(&t, &stages, &p, 50);
    for f in 0..t.total_frames() + 5 {
        let s = m.state_at(FrameIndex(f));
        assert_eq!(s.active_stage, s.overlay.as_ref().map(|o| o.stage));
        if let Some(k) = s.active_stage {
            assert_eq!(s.phase, Phase::Freeze(k));
        }
    }
}

#[test]
fn stage_missing_from_table_keeps_default_view() {
    let (t, stages, p) = fixture(Ease::Linear);
    // Timeline was laid out for two stages; only the first is handed over.
    let m = machine(&t, &stages[..1], &p, 50);
    for f in 25..40 {
        let s = m.state_at(FrameIndex(f));
        assert_eq!(s.phase.stage(), Some(1));
        assert_eq!(s.axis_half_width, RADII[0]);
        assert_eq!(s.active_stage, None);
        assert!(s.overlay.is_none());
    }
    assert_eq!(m.state_at(FrameIndex(22)).active_stage, Some(0));
    assert_eq!(m.state_at(FrameIndex(40)).axis_half_width, RADII[1]);
}
