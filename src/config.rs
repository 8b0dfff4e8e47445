//! JSON configuration for an [`Experience`](crate::Experience).
//!
//! Every field has a default matching the reference page (192 frames at 1280x720, batches of
//! 12, a 4000-unit pinned region with an 800-unit overlay fade), so `{}` is a valid config.

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::reveal::ToggleActions,
    assets::path::FramePathScheme,
    foundation::core::Canvas,
    foundation::error::{ScrollSeqError, ScrollSeqResult},
    preload::PreloadOptions,
    scroll::pager::PagerTimings,
    scroll::smooth::SmoothScrollOptions,
    scroll::ticker::LagSmoothing,
    scroll::trigger::ElementBox,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub frame_count: usize,
    pub paths: FramePathScheme,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frame_count: 192,
            paths: FramePathScheme::default(),
        }
    }
}

/// Lengths of the two scrubbed bindings on the pinned region, in scroll units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub pin_distance: f64,
    pub fade_distance: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            pin_distance: 4000.0,
            fade_distance: 800.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// `None` disables lag smoothing.
    pub lag_smoothing: Option<LagSmoothing>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Horizontal distance feature panels slide in from.
    pub panel_distance: f64,
    /// Viewport fraction where a reveal starts (`top 70%`).
    pub start_viewport: f64,
    /// Viewport fraction where a panel trigger ends (`top 30%`).
    pub end_viewport: f64,
    pub actions: ToggleActions,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            panel_distance: 100.0,
            start_viewport: 0.7,
            end_viewport: 0.3,
            actions: ToggleActions::PLAY_THEN_REVERSE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Seconds the loading overlay takes to fade out.
    pub fade_duration: f64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { fade_duration: 0.6 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeaturePanel {
    pub element: ElementBox,
    pub side: Side,
}

/// Page geometry measured by the host, in document coordinates after pin spacing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub viewport_height: f64,
    pub document_height: f64,
    /// Element whose top reaching the viewport top starts the pinned region.
    pub animation_section: ElementBox,
    /// Stop sections in page order; stop 0 is the top of the page.
    pub stops: Vec<ElementBox>,
    pub features: Vec<FeaturePanel>,
    pub heroes: Vec<ElementBox>,
}

impl Default for PageLayout {
    fn default() -> Self {
        let vh = 900.0;
        let pinned = ElementBox {
            top: 0.0,
            height: vh + 4000.0,
        };
        let f1 = ElementBox {
            top: 4900.0,
            height: vh,
        };
        let f2 = ElementBox {
            top: 5800.0,
            height: vh,
        };
        let hero = ElementBox {
            top: 6700.0,
            height: vh,
        };
        Self {
            viewport_height: vh,
            document_height: 7600.0,
            animation_section: ElementBox {
                top: 0.0,
                height: vh,
            },
            stops: vec![pinned, f1, f2, hero],
            features: vec![
                FeaturePanel {
                    element: f1,
                    side: Side::Left,
                },
                FeaturePanel {
                    element: f2,
                    side: Side::Right,
                },
            ],
            heroes: vec![hero],
        }
    }
}

impl PageLayout {
    /// Largest reachable scroll offset.
    pub fn scroll_limit(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn validate(&self) -> ScrollSeqResult<()> {
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(ScrollSeqError::config("page viewport_height must be > 0"));
        }
        if !(self.document_height.is_finite() && self.document_height >= self.viewport_height) {
            return Err(ScrollSeqError::config(
                "page document_height must be >= viewport_height",
            ));
        }
        if self.stops.is_empty() {
            return Err(ScrollSeqError::config("page needs at least one stop section"));
        }
        let boxes = std::iter::once(&self.animation_section)
            .chain(&self.stops)
            .chain(self.features.iter().map(|f| &f.element))
            .chain(&self.heroes);
        for b in boxes {
            if !(b.top.is_finite() && b.height.is_finite() && b.height >= 0.0) {
                return Err(ScrollSeqError::config(
                    "page elements need a finite top and a non-negative height",
                ));
            }
        }
        if self.stops.windows(2).any(|w| w[1].top < w[0].top) {
            return Err(ScrollSeqError::config(
                "stop sections must be listed in page order",
            ));
        }
        Ok(())
    }
}

/// Complete configuration of an experience.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    pub sequence: SequenceConfig,
    pub canvas: Canvas,
    pub preload: PreloadOptions,
    pub scroll: ScrollConfig,
    pub smooth: SmoothScrollOptions,
    pub ticker: TickerConfig,
    pub pager: PagerTimings,
    pub reveal: RevealConfig,
    pub loading: LoadingConfig,
    pub page: PageLayout,
}

impl ExperienceConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollSeqResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollSeqError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollSeqResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollSeqError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ScrollSeqResult<()> {
        if self.sequence.frame_count == 0 {
            return Err(ScrollSeqError::config("sequence frame_count must be > 0"));
        }
        self.sequence
            .paths
            .validate()
            .map_err(|e| ScrollSeqError::config(e.to_string()))?;
        Canvas::new(self.canvas.width, self.canvas.height)
            .map_err(|e| ScrollSeqError::config(e.to_string()))?;
        self.preload
            .validate()
            .map_err(|e| ScrollSeqError::config(e.to_string()))?;
        let s = &self.scroll;
        if !(s.pin_distance.is_finite() && s.pin_distance > 0.0) {
            return Err(ScrollSeqError::config("scroll pin_distance must be > 0"));
        }
        if !(s.fade_distance.is_finite() && s.fade_distance > 0.0) {
            return Err(ScrollSeqError::config("scroll fade_distance must be > 0"));
        }
        self.smooth
            .validate()
            .map_err(|e| ScrollSeqError::config(e.to_string()))?;
        if let Some(lag) = &self.ticker.lag_smoothing {
            lag.validate()
                .map_err(|e| ScrollSeqError::config(e.to_string()))?;
        }
        let r = &self.reveal;
        if !(r.start_viewport.is_finite() && r.end_viewport.is_finite()) {
            return Err(ScrollSeqError::config("reveal viewport fractions must be finite"));
        }
        if !(self.loading.fade_duration.is_finite() && self.loading.fade_duration >= 0.0) {
            return Err(ScrollSeqError::config("loading fade_duration must be >= 0"));
        }
        self.page.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
