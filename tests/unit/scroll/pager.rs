use super::*;

const VIEWPORT: f64 = 1000.0;

fn stops() -> Vec<ElementBox> {
    vec![
        ElementBox {
            top: 0.0,
            height: 5000.0,
        },
        ElementBox {
            top: 5000.0,
            height: 1000.0,
        },
        ElementBox {
            top: 6000.0,
            height: 1000.0,
        },
    ]
}

fn pager() -> SectionPager {
    SectionPager::new(stops(), VIEWPORT, PagerTimings::default()).unwrap()
}

#[test]
fn activates_when_top_crosses_center() {
    let mut p = pager();
    assert_eq!(p.observe(0.0), None);
    assert_eq!(p.active(), 0);
    assert_eq!(p.observe(4400.0), None);
    assert_eq!(p.observe(4500.0), Some(1));
    assert_eq!(p.observe(5600.0), Some(2));
    assert_eq!(p.chevron(), Chevron::Up);
}

#[test]
fn scrolling_back_reactivates_previous_stop() {
    let mut p = pager();
    p.observe(0.0);
    p.observe(5600.0);
    assert_eq!(p.active(), 2);
    assert_eq!(p.observe(5400.0), Some(1));
    assert_eq!(p.observe(100.0), Some(0));
    assert_eq!(p.chevron(), Chevron::Down);
}

#[test]
fn exactly_one_dot_is_active() {
    let mut p = pager();
    p.observe(0.0);
    p.observe(4600.0);
    let dots: Vec<bool> = p.dots().collect();
    assert_eq!(dots, vec![false, true, false]);
}

#[test]
fn next_advances_then_wraps_to_top() {
    let mut p = pager();
    p.observe(0.0);
    let req = p.next();
    assert_eq!(req.stop, 1);
    assert_eq!(req.target, ScrollTarget::Offset(5000.0));
    assert_eq!(req.options.duration, Some(2.0));

    p.observe(5600.0);
    let req = p.next();
    assert_eq!(req.stop, 0);
    assert_eq!(req.target, ScrollTarget::Top);
    assert_eq!(req.options.duration, Some(2.0));
}

#[test]
fn stop_zero_scrolls_to_top() {
    let p = pager();
    let req = p.scroll_to_stop(0).unwrap();
    assert_eq!(req.target, ScrollTarget::Top);
    assert_eq!(req.options.duration, Some(1.5));
}

#[test]
fn out_of_range_dot_is_ignored() {
    let p = pager();
    assert!(p.select_dot(3).is_none());
    assert_eq!(p.select_dot(2).unwrap().target, ScrollTarget::Offset(6000.0));
}

#[test]
fn single_stop_is_always_last() {
    let p = SectionPager::new(stops()[..1].to_vec(), VIEWPORT, PagerTimings::default()).unwrap();
    assert_eq!(p.chevron(), Chevron::Up);
    assert_eq!(p.next().target, ScrollTarget::Top);
}

#[test]
fn empty_pager_is_rejected() {
    assert!(SectionPager::new(Vec::new(), VIEWPORT, PagerTimings::default()).is_err());
}

#[test]
fn jump_back_to_top_activates_first_stop() {
    let mut p = pager();
    p.observe(0.0);
    p.observe(5600.0);
    assert_eq!(p.active(), 2);
    assert_eq!(p.observe(0.0), Some(0));
}

#[test]
fn jump_forward_activates_stop_in_range() {
    let mut p = pager();
    p.observe(0.0);
    assert_eq!(p.observe(6000.0), Some(2));
}
