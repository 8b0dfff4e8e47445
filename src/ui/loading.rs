use crate::{
    animation::ease::Ease,
    preload::{Progress, ProgressSink},
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Loading,
    FadingOut { elapsed: f64 },
    Hidden,
}

/// State of the loading overlay: progress bar width, percentage label and the fade-out
/// that follows the preload barrier.
#[derive(Clone, Debug)]
pub struct LoadingScreen {
    percent: u8,
    label: String,
    phase: Phase,
    fade_duration: f64,
    fade_ease: Ease,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new(0.6, Ease::InOutQuad)
    }
}

impl LoadingScreen {
    pub fn new(fade_duration: f64, fade_ease: Ease) -> Self {
        Self {
            percent: 0,
            label: "0%".to_string(),
            phase: Phase::Loading,
            fade_duration: fade_duration.max(0.0),
            fade_ease,
        }
    }

    /// Bar width as a percentage of its track.
    pub fn bar_width(&self) -> u8 {
        self.percent
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Start hiding the overlay. Ignored unless still loading.
    pub fn begin_fade_out(&mut self) {
        if self.phase == Phase::Loading {
            self.phase = if self.fade_duration > 0.0 {
                Phase::FadingOut { elapsed: 0.0 }
            } else {
                Phase::Hidden
            };
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if let Phase::FadingOut { elapsed } = self.phase {
            let elapsed = elapsed + dt.max(0.0);
            self.phase = if elapsed >= self.fade_duration {
                Phase::Hidden
            } else {
                Phase::FadingOut { elapsed }
            };
        }
    }

    pub fn opacity(&self) -> f64 {
        match self.phase {
            Phase::Loading => 1.0,
            Phase::FadingOut { elapsed } => {
                1.0 - self.fade_ease.apply(elapsed / self.fade_duration)
            }
            Phase::Hidden => 0.0,
        }
    }

    /// `false` once the fade has finished and the overlay is removed from layout.
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }
}

impl ProgressSink for LoadingScreen {
    fn on_progress(&mut self, progress: Progress) {
        self.percent = progress.percent;
        self.label = progress.label();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/loading.rs"]
mod tests;
