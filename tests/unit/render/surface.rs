use std::sync::Arc;

use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> PreparedFrame {
    PreparedFrame {
        width: w,
        height: h,
        rgba8: Arc::new(px.repeat((w * h) as usize)),
    }
}

#[test]
fn new_surface_is_opaque_black() {
    let s = CanvasSurface::new(Canvas::new(2, 2).unwrap());
    assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(s.pixel(2, 0), None);
    assert_eq!(s.blits(), 0);
}

#[test]
fn same_size_blit_copies() {
    let mut s = CanvasSurface::new(Canvas::new(2, 2).unwrap());
    s.blit(&solid(2, 2, [9, 8, 7, 255])).unwrap();
    assert_eq!(s.pixel(0, 1), Some([9, 8, 7, 255]));
    assert_eq!(s.blits(), 1);
}

#[test]
fn smaller_frame_is_scaled_to_fill() {
    let mut s = CanvasSurface::new(Canvas::new(4, 4).unwrap());
    let frame = PreparedFrame {
        width: 2,
        height: 1,
        rgba8: Arc::new(vec![255, 0, 0, 255, 0, 0, 255, 255]),
    };
    s.blit(&frame).unwrap();
    assert_eq!(s.pixel(0, 3), Some([255, 0, 0, 255]));
    assert_eq!(s.pixel(1, 0), Some([255, 0, 0, 255]));
    assert_eq!(s.pixel(2, 0), Some([0, 0, 255, 255]));
    assert_eq!(s.pixel(3, 3), Some([0, 0, 255, 255]));
}

#[test]
fn malformed_frame_is_rejected() {
    let mut s = CanvasSurface::new(Canvas::new(2, 2).unwrap());
    let bad = PreparedFrame {
        width: 2,
        height: 2,
        rgba8: Arc::new(vec![0; 3]),
    };
    assert!(s.blit(&bad).is_err());
    assert_eq!(s.blits(), 0);
}

#[test]
fn to_image_matches_canvas() {
    let s = CanvasSurface::new(Canvas::new(3, 2).unwrap());
    let img = s.to_image().unwrap();
    assert_eq!(img.dimensions(), (3, 2));
}
