use super::*;

#[test]
fn reveals_follow_page_layout() {
    let cfg = ExperienceConfig::default();
    let (reveals, triggers) = build_reveals(&cfg).unwrap();

    let targets: Vec<RevealTarget> = reveals.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        targets,
        vec![
            RevealTarget::Panel(0),
            RevealTarget::Panel(1),
            RevealTarget::HeroTitle(0),
            RevealTarget::HeroBody(0),
        ]
    );
    assert_eq!(triggers.len(), 4);

    assert_eq!(reveals[0].1.pose().x, -100.0);
    assert_eq!(reveals[1].1.pose().x, 100.0);
    assert_eq!(reveals[2].1.pose().scale, 0.8);
    assert_eq!(reveals[3].1.pose().y, 30.0);
}

#[test]
fn panel_reveal_plays_once_its_top_reaches_seventy_percent() {
    let cfg = ExperienceConfig::default();
    let (mut reveals, mut triggers) = build_reveals(&cfg).unwrap();
    // Left panel top is 4900 and the viewport is 900 tall, so `top 70%` is at 4270.
    let mut fire = |scroll: f64, reveals: &mut Vec<(RevealTarget, Reveal)>| {
        triggers.update(scroll, |&i, ev| reveals[i].1.on_trigger(ev));
    };

    fire(4200.0, &mut reveals);
    assert!(!reveals[0].1.is_animating());
    fire(4300.0, &mut reveals);
    assert!(reveals[0].1.is_animating());
    assert!(!reveals[1].1.is_animating());
}

#[test]
fn tee_forwards_progress_to_both_sinks() {
    let mut screen = LoadingScreen::default();
    let mut seen = Vec::new();
    let mut extra = |p: Progress| seen.push(p.percent);
    let mut tee = Tee {
        screen: &mut screen,
        extra: &mut extra,
    };
    tee.on_progress(Progress::new(1, 4));
    tee.on_progress(Progress::new(4, 4));
    drop(tee);

    assert_eq!(screen.label(), "100%");
    assert_eq!(seen, vec![25, 100]);
}
