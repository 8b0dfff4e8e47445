use super::*;

#[test]
fn frame_index_clamps_to_last_frame() {
    assert_eq!(FrameIndex(500).clamp_to(192), FrameIndex(191));
    assert_eq!(FrameIndex(7).clamp_to(192), FrameIndex(7));
    assert_eq!(FrameIndex(3).clamp_to(0), FrameIndex(0));
}

#[test]
fn frame_index_ordinal_is_one_based() {
    assert_eq!(FrameIndex(0).ordinal(), 1);
    assert_eq!(FrameIndex(191).ordinal(), 192);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 720).is_err());
    assert!(Canvas::new(1280, 0).is_err());
    let c = Canvas::new(4, 2).unwrap();
    assert_eq!(c.rgba8_len(), 32);
}

#[test]
fn scroll_direction_between_samples() {
    assert_eq!(
        ScrollDirection::between(10.0, 20.0),
        Some(ScrollDirection::Forward)
    );
    assert_eq!(
        ScrollDirection::between(20.0, 10.0),
        Some(ScrollDirection::Backward)
    );
    assert_eq!(ScrollDirection::between(5.0, 5.0), None);
}
