use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollSeqError, ScrollSeqResult},
    scroll::trigger::TriggerEvent,
};

/// Visual state of a revealed element. The natural (fully revealed) pose is [`RevealPose::REST`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealPose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl RevealPose {
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    fn lerp(a: Self, b: Self, t: f64) -> Self {
        if t >= 1.0 {
            return b;
        }
        let l = |x: f64, y: f64| x + (y - x) * t;
        Self {
            opacity: l(a.opacity, b.opacity),
            x: l(a.x, b.x),
            y: l(a.y, b.y),
            scale: l(a.scale, b.scale),
        }
    }
}

impl Default for RevealPose {
    fn default() -> Self {
        Self::REST
    }
}

/// What a reveal does when its trigger fires a given event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    #[default]
    None,
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
}

/// Actions for `enter`, `leave`, `enter_back` and `leave_back`, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `play none none reverse`.
    pub const PLAY_THEN_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_THEN_REVERSE
    }
}

/// Parameters of a "from" reveal: the element animates from `from` to its rest pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSpec {
    pub from: RevealPose,
    /// Seconds.
    pub duration: f64,
    /// Seconds waited before a forward play starts moving.
    #[serde(default)]
    pub delay: f64,
    pub ease: Ease,
}

impl RevealSpec {
    pub fn validate(&self) -> ScrollSeqResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ScrollSeqError::validation("reveal duration must be > 0"));
        }
        if !(self.delay.is_finite() && self.delay >= 0.0) {
            return Err(ScrollSeqError::validation("reveal delay must be >= 0"));
        }
        Ok(())
    }

    /// Side panel sliding in horizontally from `x_from`.
    pub fn panel(x_from: f64) -> Self {
        Self {
            from: RevealPose {
                opacity: 0.0,
                x: x_from,
                ..RevealPose::REST
            },
            duration: 1.0,
            delay: 0.0,
            ease: Ease::OutCubic,
        }
    }

    /// Hero title growing in from 80%.
    pub fn hero_title() -> Self {
        Self {
            from: RevealPose {
                opacity: 0.0,
                scale: 0.8,
                ..RevealPose::REST
            },
            duration: 1.2,
            delay: 0.0,
            ease: Ease::OutCubic,
        }
    }

    /// Hero paragraph rising 30 units, slightly after the title.
    pub fn hero_body() -> Self {
        Self {
            from: RevealPose {
                opacity: 0.0,
                y: 30.0,
                ..RevealPose::REST
            },
            duration: 1.0,
            delay: 0.2,
            ease: Ease::OutCubic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Stopped,
    Forward,
    Reverse,
}

/// Time-driven reveal tween toggled by scroll trigger events.
#[derive(Clone, Debug)]
pub struct Reveal {
    spec: RevealSpec,
    actions: ToggleActions,
    playhead: f64,
    delay_left: f64,
    playback: Playback,
    paused_from: Playback,
}

impl Reveal {
    pub fn new(spec: RevealSpec, actions: ToggleActions) -> ScrollSeqResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            actions,
            playhead: 0.0,
            delay_left: 0.0,
            playback: Playback::Stopped,
            paused_from: Playback::Stopped,
        })
    }

    /// Apply the toggle action mapped to `event`.
    pub fn on_trigger(&mut self, event: TriggerEvent) {
        match self.actions.action_for(event) {
            ToggleAction::None => {}
            ToggleAction::Play => {
                if self.playhead <= 0.0 {
                    self.delay_left = self.spec.delay;
                }
                self.playback = Playback::Forward;
            }
            ToggleAction::Pause => {
                if self.playback != Playback::Stopped {
                    self.paused_from = self.playback;
                }
                self.playback = Playback::Stopped;
            }
            ToggleAction::Resume => {
                if self.playback == Playback::Stopped {
                    self.playback = self.paused_from;
                }
            }
            ToggleAction::Reverse => {
                self.delay_left = 0.0;
                self.playback = Playback::Reverse;
            }
            ToggleAction::Restart => {
                self.playhead = 0.0;
                self.delay_left = self.spec.delay;
                self.playback = Playback::Forward;
            }
            ToggleAction::Reset => {
                self.playhead = 0.0;
                self.delay_left = 0.0;
                self.playback = Playback::Stopped;
            }
            ToggleAction::Complete => {
                self.playhead = self.spec.duration;
                self.delay_left = 0.0;
                self.playback = Playback::Stopped;
            }
        }
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        match self.playback {
            Playback::Stopped => {}
            Playback::Forward => {
                let mut dt = dt;
                if self.delay_left > 0.0 {
                    let used = self.delay_left.min(dt);
                    self.delay_left -= used;
                    dt -= used;
                }
                self.playhead = (self.playhead + dt).min(self.spec.duration);
                if self.playhead >= self.spec.duration {
                    self.playback = Playback::Stopped;
                }
            }
            Playback::Reverse => {
                self.playhead = (self.playhead - dt).max(0.0);
                if self.playhead <= 0.0 {
                    self.playback = Playback::Stopped;
                }
            }
        }
    }

    /// Eased progress in `[0, 1]`; `0` is the `from` pose.
    pub fn progress(&self) -> f64 {
        self.spec.ease.apply(self.playhead / self.spec.duration)
    }

    pub fn pose(&self) -> RevealPose {
        RevealPose::lerp(self.spec.from, RevealPose::REST, self.progress())
    }

    pub fn is_animating(&self) -> bool {
        self.playback != Playback::Stopped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
