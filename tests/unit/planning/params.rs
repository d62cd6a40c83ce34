use super::*;
use std::io::Cursor;

#[test]
fn defaults_match_reference_timing() {
    let p = PlanParams::default();
    assert_eq!(p.search_cap, 65536);
    assert_eq!(p.margin_factor, 1.1);
    assert_eq!(p.reveal_frames(), 1200);
    assert_eq!(p.wait_frames, 50);
    assert_eq!(p.frame_unit, 500);
    assert_eq!(p.freeze_unit, 400);
    assert_eq!(p.zoom_ease, Ease::Linear);
    p.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let p = PlanParams::from_reader(Cursor::new(r#"{ "frame_unit": 10, "zoom_ease": "in_out_quad" }"#))
        .unwrap();
    assert_eq!(p.frame_unit, 10);
    assert_eq!(p.zoom_ease, Ease::InOutQuad);
    assert_eq!(p.freeze_unit, 400);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PlanParams::from_reader(Cursor::new(r#"{ "frame_units": 10 }"#)).unwrap_err();
    assert!(matches!(err, ZoomError::Serde(_)));
}

#[test]
fn zero_durations_and_bad_margin_are_invalid() {
    let cases = [
        PlanParams {
            search_cap: 0,
            ..PlanParams::default()
        },
        PlanParams {
            reveal_rate: 0,
            ..PlanParams::default()
        },
        PlanParams {
            frame_unit: 0,
            ..PlanParams::default()
        },
        PlanParams {
            freeze_unit: 0,
            ..PlanParams::default()
        },
        PlanParams {
            margin_factor: 0.9,
            ..PlanParams::default()
        },
        PlanParams {
            margin_factor: f64::NAN,
            ..PlanParams::default()
        },
    ];
    for p in cases {
        assert!(matches!(p.validate(), Err(ZoomError::InvalidParams(_))), "{p:?}");
    }
}

#[test]
fn zero_reveal_and_wait_are_allowed() {
    let p = PlanParams {
        points_to_show: 0,
        wait_frames: 0,
        ..PlanParams::default()
    };
    p.validate().unwrap();
    assert_eq!(p.reveal_frames(), 0);
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = PlanParams::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.json"));
}
