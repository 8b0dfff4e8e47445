use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in [Ease::Linear, Ease::InOutQuad, Ease::OutCubic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_expo_saturates_at_one() {
    // 1.001 - 1 at t=0 leaves a tiny positive start.
    assert!((Ease::OutExpo.apply(0.0) - 0.001).abs() < 1e-12);
    assert_eq!(Ease::OutExpo.apply(1.0), 1.0);
    assert_eq!(Ease::OutExpo.apply(0.999), 1.0);
}

#[test]
fn monotonic_spot_check() {
    for ease in [Ease::Linear, Ease::InOutQuad, Ease::OutCubic, Ease::OutExpo] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}
