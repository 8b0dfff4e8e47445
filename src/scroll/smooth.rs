//! Eased, time-integrated scrolling.
//!
//! Raw wheel and touch deltas move a clamped *target* offset. The visible (*animated*) offset
//! then chases that target over a fixed duration with an ease-out curve, advanced by wall-clock
//! time on every [`SmoothScroll::raf`] call.

use crate::{
    animation::ease::Ease,
    foundation::core::ScrollDirection,
    foundation::error::{ScrollSeqError, ScrollSeqResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollOptions {
    /// Seconds to settle on a new target.
    pub duration: f64,
    pub ease: Ease,
    /// When `false`, wheel input jumps straight to the target.
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            ease: Ease::OutExpo,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
        }
    }
}

impl SmoothScrollOptions {
    pub fn validate(&self) -> ScrollSeqResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ScrollSeqError::validation(
                "smooth scroll duration must be > 0",
            ));
        }
        if !(self.wheel_multiplier.is_finite() && self.touch_multiplier.is_finite()) {
            return Err(ScrollSeqError::validation(
                "smooth scroll multipliers must be finite",
            ));
        }
        Ok(())
    }
}

/// Source of a raw scroll delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Wheel,
    Touch,
}

/// Destination of a programmatic scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    /// Absolute document offset (an element's top resolves to this).
    Offset(f64),
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollToOptions {
    /// Seconds; `None` uses the scroller's configured duration.
    pub duration: Option<f64>,
    /// Added to the resolved target before clamping.
    pub offset: f64,
    /// Jump without animating.
    pub immediate: bool,
}

impl ScrollToOptions {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

/// Published after every step that moved (or finished moving) the animated offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub scroll: f64,
    pub limit: f64,
    /// Offset change since the previous event.
    pub velocity: f64,
    pub direction: Option<ScrollDirection>,
    /// `scroll / limit`, or `0` when there is nothing to scroll.
    pub progress: f64,
    pub is_scrolling: bool,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    /// Returns the new value and whether the tween finished.
    fn advance(&mut self, dt: f64) -> (f64, bool) {
        self.elapsed += dt;
        let linear = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let done = linear >= 1.0;
        let eased = if done { 1.0 } else { self.ease.apply(linear) };
        (self.from + (self.to - self.from) * eased, done)
    }
}

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOptions,
    animated: f64,
    target: f64,
    limit: f64,
    velocity: f64,
    direction: Option<ScrollDirection>,
    tween: Option<Tween>,
    last_time_ms: Option<f64>,
    pending: Option<ScrollEvent>,
}

impl SmoothScroll {
    /// `limit` is the largest reachable offset (document height minus viewport height).
    pub fn new(opts: SmoothScrollOptions, limit: f64) -> ScrollSeqResult<Self> {
        opts.validate()?;
        if !(limit.is_finite() && limit >= 0.0) {
            return Err(ScrollSeqError::validation("scroll limit must be >= 0"));
        }
        Ok(Self {
            opts,
            animated: 0.0,
            target: 0.0,
            limit,
            velocity: 0.0,
            direction: None,
            tween: None,
            last_time_ms: None,
            pending: None,
        })
    }

    pub fn scroll(&self) -> f64 {
        self.animated
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        if self.animated > self.limit {
            self.tween = None;
            self.set_immediate(self.limit);
        } else if let Some(tween) = &mut self.tween {
            tween.to = tween.to.clamp(0.0, self.limit);
        }
    }

    /// Feed a raw input delta (positive scrolls down).
    pub fn input(&mut self, kind: InputKind, delta: f64) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let mult = match kind {
            InputKind::Wheel => self.opts.wheel_multiplier,
            InputKind::Touch => self.opts.touch_multiplier,
        };
        let dest = self.target + delta * mult;
        let immediate = kind == InputKind::Wheel && !self.opts.smooth_wheel;
        self.scroll_to(
            ScrollTarget::Offset(dest),
            ScrollToOptions {
                immediate,
                ..ScrollToOptions::default()
            },
        );
    }

    /// Animate (or jump) to `target`.
    pub fn scroll_to(&mut self, target: ScrollTarget, opts: ScrollToOptions) {
        let base = match target {
            ScrollTarget::Offset(v) => v,
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => self.limit,
        };
        let dest = (base + opts.offset).clamp(0.0, self.limit);
        if !dest.is_finite() {
            return;
        }
        self.target = dest;

        let duration = opts.duration.unwrap_or(self.opts.duration);
        if opts.immediate || duration <= 0.0 {
            self.tween = None;
            self.set_immediate(dest);
            return;
        }
        self.tween = Some(Tween {
            from: self.animated,
            to: dest,
            elapsed: 0.0,
            duration,
            ease: self.opts.ease,
        });
    }

    fn set_immediate(&mut self, value: f64) {
        self.target = value;
        let event = self.apply(value, false);
        self.pending = Some(event);
    }

    fn apply(&mut self, value: f64, is_scrolling: bool) -> ScrollEvent {
        self.velocity = value - self.animated;
        if let Some(dir) = ScrollDirection::between(self.animated, value) {
            self.direction = Some(dir);
        }
        self.animated = value;
        ScrollEvent {
            scroll: value,
            limit: self.limit,
            velocity: self.velocity,
            direction: self.direction,
            progress: if self.limit > 0.0 {
                value / self.limit
            } else {
                0.0
            },
            is_scrolling,
        }
    }

    /// Advance the internal clock to `time_ms` and return the scroll event, if any.
    pub fn raf(&mut self, time_ms: f64) -> Option<ScrollEvent> {
        let dt_ms = match self.last_time_ms {
            Some(prev) => (time_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        let mut event = self.pending.take();
        if let Some(mut tween) = self.tween.take() {
            let (value, done) = tween.advance(dt_ms * 0.001);
            if !done {
                self.tween = Some(tween);
            }
            event = Some(self.apply(value, !done));
        }
        event
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
