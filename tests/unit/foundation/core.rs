use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn with_len_and_local_offsets() {
    let r = FrameRange::with_len(FrameIndex(10), 4);
    assert_eq!(r.end, FrameIndex(14));
    assert_eq!(r.len_frames(), 4);
    assert_eq!(r.local(FrameIndex(12)), 2);
    let frames: Vec<u64> = r.frames().map(|f| f.0).collect();
    assert_eq!(frames, vec![10, 11, 12, 13]);
}
