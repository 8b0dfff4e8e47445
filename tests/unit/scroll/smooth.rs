use super::*;

fn scroller() -> SmoothScroll {
    SmoothScroll::new(SmoothScrollOptions::default(), 10_000.0).unwrap()
}

fn run(s: &mut SmoothScroll, from_ms: f64, to_ms: f64) -> Vec<ScrollEvent> {
    let mut out = Vec::new();
    let mut t = from_ms;
    while t <= to_ms {
        out.extend(s.raf(t));
        t += 16.0;
    }
    out
}

#[test]
fn idle_scroller_emits_nothing() {
    let mut s = scroller();
    assert!(s.raf(0.0).is_none());
    assert!(s.raf(16.0).is_none());
}

#[test]
fn wheel_input_eases_toward_target() {
    let mut s = scroller();
    s.raf(0.0);
    s.input(InputKind::Wheel, 100.0);
    assert_eq!(s.target(), 100.0);

    let events = run(&mut s, 16.0, 1600.0);
    assert!(!events.is_empty());
    let mut prev = 0.0;
    for e in &events {
        assert!(e.scroll >= prev);
        prev = e.scroll;
    }
    let last = events.last().unwrap();
    assert_eq!(last.scroll, 100.0);
    assert!(!last.is_scrolling);
    assert_eq!(last.direction, Some(ScrollDirection::Forward));
    assert!(!s.is_scrolling());
}

#[test]
fn ease_out_front_loads_motion() {
    let mut s = scroller();
    s.raf(0.0);
    s.input(InputKind::Wheel, 1000.0);
    let e = s.raf(300.0).unwrap();
    // A quarter of the duration covers most of the distance.
    assert!(e.scroll > 800.0);
    assert!(e.is_scrolling);
}

#[test]
fn touch_input_is_doubled() {
    let mut s = scroller();
    s.input(InputKind::Touch, 50.0);
    assert_eq!(s.target(), 100.0);
}

#[test]
fn target_is_clamped_to_limit() {
    let mut s = scroller();
    s.input(InputKind::Wheel, -500.0);
    assert_eq!(s.target(), 0.0);
    s.input(InputKind::Wheel, 50_000.0);
    assert_eq!(s.target(), 10_000.0);
}

#[test]
fn large_frame_gap_finishes_tween() {
    let mut s = scroller();
    s.raf(0.0);
    s.scroll_to(ScrollTarget::Offset(4000.0), ScrollToOptions::with_duration(2.0));
    let e = s.raf(5000.0).unwrap();
    assert_eq!(e.scroll, 4000.0);
    assert!(!e.is_scrolling);
}

#[test]
fn immediate_scroll_to_publishes_on_next_raf() {
    let mut s = scroller();
    s.raf(0.0);
    s.scroll_to(
        ScrollTarget::Offset(2500.0),
        ScrollToOptions {
            immediate: true,
            ..ScrollToOptions::default()
        },
    );
    assert_eq!(s.scroll(), 2500.0);
    let e = s.raf(16.0).unwrap();
    assert_eq!(e.scroll, 2500.0);
    assert_eq!(e.velocity, 2500.0);
    assert!(s.raf(32.0).is_none());
}

#[test]
fn scroll_to_top_runs_backwards() {
    let mut s = scroller();
    s.raf(0.0);
    s.scroll_to(
        ScrollTarget::Offset(3000.0),
        ScrollToOptions {
            immediate: true,
            ..ScrollToOptions::default()
        },
    );
    s.raf(16.0);
    s.scroll_to(ScrollTarget::Top, ScrollToOptions::with_duration(2.0));
    let e = s.raf(100.0).unwrap();
    assert!(e.scroll < 3000.0);
    assert_eq!(e.direction, Some(ScrollDirection::Backward));
    let events = run(&mut s, 116.0, 2200.0);
    assert_eq!(events.last().unwrap().scroll, 0.0);
}

#[test]
fn bottom_resolves_to_limit_and_offset_applies() {
    let mut s = scroller();
    s.scroll_to(
        ScrollTarget::Bottom,
        ScrollToOptions {
            offset: -200.0,
            ..ScrollToOptions::default()
        },
    );
    assert_eq!(s.target(), 9800.0);
}

#[test]
fn shrinking_limit_pulls_scroll_back() {
    let mut s = scroller();
    s.scroll_to(
        ScrollTarget::Offset(8000.0),
        ScrollToOptions {
            immediate: true,
            ..ScrollToOptions::default()
        },
    );
    s.set_limit(5000.0);
    assert_eq!(s.scroll(), 5000.0);
    assert_eq!(s.target(), 5000.0);
}

#[test]
fn rejects_bad_options() {
    let opts = SmoothScrollOptions {
        duration: 0.0,
        ..SmoothScrollOptions::default()
    };
    assert!(SmoothScroll::new(opts, 100.0).is_err());
    assert!(SmoothScroll::new(SmoothScrollOptions::default(), -1.0).is_err());
}

#[test]
fn shrinking_limit_mid_tween_keeps_scroll_in_bounds() {
    let mut s = scroller();
    s.raf(0.0);
    s.scroll_to(ScrollTarget::Offset(8000.0), ScrollToOptions::with_duration(1.0));
    s.raf(100.0);
    assert!(s.is_scrolling());

    s.set_limit(1000.0);
    assert!(s.scroll() <= 1000.0);
    for i in 2..32 {
        s.raf(i as f64 * 100.0);
        assert!(s.scroll() <= s.limit(), "scroll {} beyond limit", s.scroll());
    }
    assert!(!s.is_scrolling());
    assert_eq!(s.scroll(), 1000.0);
    assert_eq!(s.target(), 1000.0);
}

#[test]
fn shrinking_limit_above_running_tween_retargets_it() {
    let mut s = scroller();
    s.raf(0.0);
    s.scroll_to(ScrollTarget::Offset(8000.0), ScrollToOptions::with_duration(1.0));
    s.raf(10.0);
    let now = s.scroll();
    assert!(now < 6000.0);

    s.set_limit(6000.0);
    assert!(s.is_scrolling());
    s.raf(2000.0);
    assert_eq!(s.scroll(), 6000.0);
}
