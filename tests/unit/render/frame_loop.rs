use std::sync::Arc;

use super::*;
use crate::{
    assets::decode::PreparedFrame, foundation::core::Canvas, render::surface::CanvasSurface,
};

fn frame(v: u8) -> PreparedFrame {
    PreparedFrame {
        width: 1,
        height: 1,
        rgba8: Arc::new(vec![v, v, v, 255]),
    }
}

fn setup() -> (FrameStore, CanvasSurface) {
    let mut store = FrameStore::new(3);
    store.insert(FrameIndex(0), frame(10)).unwrap();
    store.insert(FrameIndex(2), frame(30)).unwrap();
    (store, CanvasSurface::new(Canvas::new(1, 1).unwrap()))
}

#[test]
fn paints_once_per_target_change() {
    let (store, mut surface) = setup();
    let mut rl = RenderLoop::new();
    assert_eq!(rl.rendered(), None);
    assert_eq!(
        rl.tick(FrameIndex(0), &store, &mut surface).unwrap(),
        RenderOutcome::Painted(FrameIndex(0))
    );
    assert_eq!(
        rl.tick(FrameIndex(0), &store, &mut surface).unwrap(),
        RenderOutcome::Unchanged
    );
    assert_eq!(
        rl.tick(FrameIndex(2), &store, &mut surface).unwrap(),
        RenderOutcome::Painted(FrameIndex(2))
    );
    assert_eq!(surface.pixel(0, 0), Some([30, 30, 30, 255]));
    assert_eq!(rl.paints(), 2);
    assert_eq!(surface.blits(), 2);
}

#[test]
fn holes_are_never_painted() {
    let (store, mut surface) = setup();
    let mut rl = RenderLoop::new();
    rl.tick(FrameIndex(0), &store, &mut surface).unwrap();
    for _ in 0..3 {
        assert_eq!(
            rl.tick(FrameIndex(1), &store, &mut surface).unwrap(),
            RenderOutcome::Hole(FrameIndex(1))
        );
    }
    assert_eq!(rl.rendered(), Some(FrameIndex(0)));
    assert_eq!(surface.pixel(0, 0), Some([10, 10, 10, 255]));
    assert_eq!(surface.blits(), 1);
}

#[test]
fn hole_filled_later_is_picked_up() {
    let (mut store, mut surface) = setup();
    let mut rl = RenderLoop::new();
    assert_eq!(
        rl.tick(FrameIndex(1), &store, &mut surface).unwrap(),
        RenderOutcome::Hole(FrameIndex(1))
    );
    store.insert(FrameIndex(1), frame(20)).unwrap();
    assert_eq!(
        rl.tick(FrameIndex(1), &store, &mut surface).unwrap(),
        RenderOutcome::Painted(FrameIndex(1))
    );
}

#[test]
fn cancelled_loop_stops_painting() {
    let (store, mut surface) = setup();
    let mut rl = RenderLoop::new();
    rl.cancel();
    assert!(!rl.is_running());
    assert_eq!(
        rl.tick(FrameIndex(0), &store, &mut surface).unwrap(),
        RenderOutcome::Stopped
    );
    assert_eq!(surface.blits(), 0);
}
