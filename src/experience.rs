//! The owning context for one scroll-driven sequence.
//!
//! [`Experience::start`] runs the preload barrier and wires every component together. After
//! that the host drives it with two kinds of calls, both on one thread:
//!
//! - input: [`Experience::wheel`], [`Experience::touch`], [`Experience::click_next`],
//!   [`Experience::click_dot`]
//! - time: [`Experience::tick`] once per display frame
//!
//! Each tick advances the shared clock, lets the smooth scroller publish its new offset,
//! dispatches that offset synchronously to the frame mapper, the section pager and the reveal
//! triggers, and finally runs the render loop.

use crate::{
    animation::ease::Ease,
    animation::reveal::{Reveal, RevealPose, RevealSpec},
    assets::source::FrameSource,
    assets::store::FrameStore,
    config::{ExperienceConfig, Side},
    foundation::core::FrameIndex,
    foundation::error::ScrollSeqResult,
    preload::{NoProgress, PreloadReport, Preloader, Progress, ProgressSink},
    render::frame_loop::{RenderLoop, RenderOutcome},
    render::surface::Surface,
    scroll::mapper::{MapperState, ScrollMapper},
    scroll::pager::{Chevron, NavRequest, SectionPager},
    scroll::smooth::{InputKind, ScrollEvent, SmoothScroll},
    scroll::ticker::{Tick, Ticker},
    scroll::trigger::{Anchor, Edge, ElementBox, TriggerEnd, TriggerRegistry, TriggerSpec},
    ui::loading::LoadingScreen,
};

/// Which page element a reveal animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    Panel(usize),
    HeroTitle(usize),
    HeroBody(usize),
}

/// What happened during one [`Experience::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub tick: Tick,
    pub scroll: Option<ScrollEvent>,
    pub activated_stop: Option<usize>,
    pub render: RenderOutcome,
}

pub struct Experience<S: Surface> {
    config: ExperienceConfig,
    store: FrameStore,
    report: PreloadReport,
    loading: LoadingScreen,
    render: RenderLoop,
    surface: S,
    ticker: Ticker,
    smooth: SmoothScroll,
    mapper: ScrollMapper,
    pager: SectionPager,
    reveals: Vec<(RevealTarget, Reveal)>,
    reveal_triggers: TriggerRegistry<usize>,
}

struct Tee<'a> {
    screen: &'a mut LoadingScreen,
    extra: &'a mut dyn ProgressSink,
}

impl ProgressSink for Tee<'_> {
    fn on_progress(&mut self, progress: Progress) {
        self.screen.on_progress(progress);
        self.extra.on_progress(progress);
    }
}

impl<S: Surface> Experience<S> {
    /// Preload every frame, then initialize scrolling, paging, reveals and rendering.
    pub fn start(
        config: ExperienceConfig,
        source: &dyn FrameSource,
        surface: S,
    ) -> ScrollSeqResult<Self> {
        Self::start_with_progress(config, source, surface, &mut NoProgress)
    }

    /// Like [`Experience::start`], also forwarding loading progress to `progress`.
    #[tracing::instrument(skip_all, fields(frames = config.sequence.frame_count))]
    pub fn start_with_progress(
        config: ExperienceConfig,
        source: &dyn FrameSource,
        surface: S,
        progress: &mut dyn ProgressSink,
    ) -> ScrollSeqResult<Self> {
        config.validate()?;

        let mut store = FrameStore::new(config.sequence.frame_count);
        let mut loading = LoadingScreen::new(config.loading.fade_duration, Ease::InOutQuad);
        let preloader = Preloader::new(config.preload.clone())?;
        let report = preloader.preload(
            &mut store,
            &config.sequence.paths,
            source,
            config.canvas,
            &mut Tee {
                screen: &mut loading,
                extra: progress,
            },
        )?;
        loading.begin_fade_out();

        let page = &config.page;
        let smooth = SmoothScroll::new(config.smooth, page.scroll_limit())?;
        let ticker = Ticker::new(config.ticker.lag_smoothing)?;

        let region_start = Anchor::TOP_TOP.resolve(page.animation_section, page.viewport_height);
        let mapper = ScrollMapper::new(
            config.sequence.frame_count,
            region_start,
            config.scroll.pin_distance,
            config.scroll.fade_distance,
        )?;
        let pager = SectionPager::new(page.stops.clone(), page.viewport_height, config.pager)?;

        let (reveals, reveal_triggers) = build_reveals(&config)?;

        let mut exp = Self {
            config,
            store,
            report,
            loading,
            render: RenderLoop::new(),
            surface,
            ticker,
            smooth,
            mapper,
            pager,
            reveals,
            reveal_triggers,
        };
        exp.dispatch_scroll(exp.smooth.scroll());
        tracing::info!(
            loaded = exp.report.loaded,
            holes = exp.report.failed.len(),
            "experience started"
        );
        Ok(exp)
    }

    /// Advance everything to host timestamp `now` (seconds) and repaint if needed.
    pub fn tick(&mut self, now: f64) -> ScrollSeqResult<FrameReport> {
        let tick = self.ticker.tick(now);
        self.loading.advance(tick.delta);
        for (_, reveal) in &mut self.reveals {
            reveal.advance(tick.delta);
        }

        let scroll = self.smooth.raf(tick.time * 1000.0);
        let activated_stop = match scroll {
            Some(ev) => self.dispatch_scroll(ev.scroll),
            None => None,
        };

        let render = self
            .render
            .tick(self.mapper.target(), &self.store, &mut self.surface)?;
        Ok(FrameReport {
            tick,
            scroll,
            activated_stop,
            render,
        })
    }

    fn dispatch_scroll(&mut self, scroll: f64) -> Option<usize> {
        self.mapper.update(scroll);
        let activated = self.pager.observe(scroll);
        let reveals = &mut self.reveals;
        self.reveal_triggers.update(scroll, |&i, ev| {
            if let Some((_, reveal)) = reveals.get_mut(i) {
                reveal.on_trigger(ev);
            }
        });
        activated
    }

    pub fn wheel(&mut self, delta: f64) {
        self.smooth.input(InputKind::Wheel, delta);
    }

    pub fn touch(&mut self, delta: f64) {
        self.smooth.input(InputKind::Touch, delta);
    }

    /// Handle the "next" control.
    pub fn click_next(&mut self) -> NavRequest {
        let req = self.pager.next();
        self.smooth.scroll_to(req.target, req.options);
        req
    }

    /// Handle a pagination dot. Unknown targets are ignored.
    pub fn click_dot(&mut self, target: usize) -> Option<NavRequest> {
        let req = self.pager.select_dot(target)?;
        self.smooth.scroll_to(req.target, req.options);
        Some(req)
    }

    /// Stop the render loop. Later ticks still advance scrolling but never paint.
    pub fn shutdown(&mut self) {
        self.render.cancel();
    }

    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn preload_report(&self) -> &PreloadReport {
        &self.report
    }

    pub fn loading(&self) -> &LoadingScreen {
        &self.loading
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scroll(&self) -> f64 {
        self.smooth.scroll()
    }

    pub fn mapper_state(&self) -> MapperState {
        self.mapper.state()
    }

    pub fn target(&self) -> FrameIndex {
        self.mapper.target()
    }

    pub fn rendered(&self) -> Option<FrameIndex> {
        self.render.rendered()
    }

    pub fn overlay_opacity(&self) -> f64 {
        self.mapper.state().overlay_opacity
    }

    pub fn active_stop(&self) -> usize {
        self.pager.active()
    }

    pub fn chevron(&self) -> Chevron {
        self.pager.chevron()
    }

    pub fn dots(&self) -> Vec<bool> {
        self.pager.dots().collect()
    }

    /// Current pose of every reveal, in page order.
    pub fn reveal_poses(&self) -> Vec<(RevealTarget, RevealPose)> {
        self.reveals.iter().map(|(t, r)| (*t, r.pose())).collect()
    }

    pub fn reveal_pose(&self, target: RevealTarget) -> Option<RevealPose> {
        self.reveals
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, r)| r.pose())
    }
}

type Reveals = (Vec<(RevealTarget, Reveal)>, TriggerRegistry<usize>);

fn build_reveals(config: &ExperienceConfig) -> ScrollSeqResult<Reveals> {
    let page = &config.page;
    let rc = &config.reveal;
    let vh = page.viewport_height;
    let start = Anchor::at(Edge::Top, rc.start_viewport);

    let mut reveals = Vec::new();
    let mut triggers = TriggerRegistry::new();
    let mut add = |target: RevealTarget,
                   spec: RevealSpec,
                   trigger: TriggerSpec,
                   el: ElementBox|
     -> ScrollSeqResult<()> {
        triggers.register(trigger.resolve(el, vh)?, reveals.len());
        reveals.push((target, Reveal::new(spec, rc.actions)?));
        Ok(())
    };

    let panel_trigger = TriggerSpec::new(
        start,
        TriggerEnd::Anchor(Anchor::at(Edge::Top, rc.end_viewport)),
    );
    for (i, panel) in page.features.iter().enumerate() {
        let x_from = match panel.side {
            Side::Left => -rc.panel_distance,
            Side::Right => rc.panel_distance,
        };
        add(
            RevealTarget::Panel(i),
            RevealSpec::panel(x_from),
            panel_trigger,
            panel.element,
        )?;
    }

    let hero_trigger = TriggerSpec::new(start, TriggerEnd::Anchor(Anchor::BOTTOM_TOP));
    for (i, hero) in page.heroes.iter().enumerate() {
        add(
            RevealTarget::HeroTitle(i),
            RevealSpec::hero_title(),
            hero_trigger,
            *hero,
        )?;
        add(
            RevealTarget::HeroBody(i),
            RevealSpec::hero_body(),
            hero_trigger,
            *hero,
        )?;
    }

    Ok((reveals, triggers))
}

#[cfg(test)]
#[path = "../tests/unit/experience/experience.rs"]
mod tests;
