use super::*;

#[test]
fn progress_updates_bar_and_label() {
    let mut screen = LoadingScreen::default();
    assert_eq!(screen.label(), "0%");
    screen.on_progress(Progress::new(96, 192));
    assert_eq!(screen.bar_width(), 50);
    assert_eq!(screen.label(), "50%");
}

#[test]
fn fade_out_hides_after_duration() {
    let mut screen = LoadingScreen::default();
    screen.advance(5.0);
    assert_eq!(screen.opacity(), 1.0);

    screen.begin_fade_out();
    screen.advance(0.3);
    assert!(screen.is_visible());
    assert!((screen.opacity() - 0.5).abs() < 1e-9);
    screen.advance(0.3);
    assert!(!screen.is_visible());
    assert_eq!(screen.opacity(), 0.0);
}

#[test]
fn zero_duration_fade_hides_immediately() {
    let mut screen = LoadingScreen::new(0.0, Ease::Linear);
    screen.begin_fade_out();
    assert!(!screen.is_visible());
}
