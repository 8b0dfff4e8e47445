use std::sync::Arc;

use super::*;

fn frame(v: u8) -> PreparedFrame {
    PreparedFrame {
        width: 1,
        height: 1,
        rgba8: Arc::new(vec![v, v, v, 255]),
    }
}

#[test]
fn new_store_is_all_holes() {
    let store = FrameStore::new(4);
    assert_eq!(store.len(), 4);
    assert_eq!(store.populated(), 0);
    assert_eq!(store.holes().len(), 4);
    assert!(store.get(FrameIndex(0)).is_none());
}

#[test]
fn slots_are_write_once() {
    let mut store = FrameStore::new(3);
    store.insert(FrameIndex(1), frame(7)).unwrap();
    assert_eq!(store.get(FrameIndex(1)).unwrap().rgba8[0], 7);
    assert!(store.insert(FrameIndex(1), frame(9)).is_err());
    assert_eq!(store.get(FrameIndex(1)).unwrap().rgba8[0], 7);
}

#[test]
fn out_of_range_insert_fails_and_get_is_none() {
    let mut store = FrameStore::new(2);
    assert!(store.insert(FrameIndex(2), frame(1)).is_err());
    assert!(store.get(FrameIndex(99)).is_none());
}

#[test]
fn holes_lists_unpopulated_slots() {
    let mut store = FrameStore::new(3);
    store.insert(FrameIndex(0), frame(1)).unwrap();
    store.insert(FrameIndex(2), frame(1)).unwrap();
    assert_eq!(store.holes(), vec![FrameIndex(1)]);
    assert!(store.is_hole(FrameIndex(1)));
    assert_eq!(store.populated(), 2);
}
