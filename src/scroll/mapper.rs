use crate::{
    animation::scrub::Scrub,
    foundation::core::FrameIndex,
    foundation::error::{ScrollSeqError, ScrollSeqResult},
};

/// Output of the mapper for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperState {
    pub target: FrameIndex,
    /// Opacity of the hero overlay, `1` at region start and `0` after the fade distance.
    pub overlay_opacity: f64,
    /// Normalized progress through the pinned region.
    pub progress: f64,
}

/// Maps scroll offset inside the pinned region to a frame index and the overlay fade.
///
/// Both bindings are scrubs, so this type keeps only the last published state.
#[derive(Clone, Debug)]
pub struct ScrollMapper {
    frame_count: usize,
    frames: Scrub,
    overlay: Scrub,
    state: MapperState,
}

impl ScrollMapper {
    pub fn new(
        frame_count: usize,
        region_start: f64,
        pin_distance: f64,
        fade_distance: f64,
    ) -> ScrollSeqResult<Self> {
        if frame_count == 0 {
            return Err(ScrollSeqError::validation("frame count must be > 0"));
        }
        if !(pin_distance > 0.0 && fade_distance > 0.0) {
            return Err(ScrollSeqError::validation(
                "pin and fade distances must be > 0",
            ));
        }
        let last = (frame_count - 1) as f64;
        let frames = Scrub::new(region_start, region_start + pin_distance, 0.0, last)?.snapped();
        let overlay = Scrub::new(region_start, region_start + fade_distance, 1.0, 0.0)?;
        Ok(Self {
            frame_count,
            frames,
            overlay,
            state: MapperState {
                target: FrameIndex(0),
                overlay_opacity: 1.0,
                progress: 0.0,
            },
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Scroll range `[start, end]` of the pinned region.
    pub fn region(&self) -> (f64, f64) {
        (self.frames.start(), self.frames.end())
    }

    /// Target frame for a normalized region progress.
    pub fn target_for_progress(&self, progress: f64) -> FrameIndex {
        let v = self.frames.value_at_progress(progress);
        FrameIndex(v.max(0.0) as usize).clamp_to(self.frame_count)
    }

    /// Recompute both bindings for `scroll` and publish the result.
    pub fn update(&mut self, scroll: f64) -> MapperState {
        let progress = self.frames.progress(scroll);
        self.state = MapperState {
            target: self.target_for_progress(progress),
            overlay_opacity: self.overlay.sample(scroll),
            progress,
        };
        self.state
    }

    pub fn state(&self) -> MapperState {
        self.state
    }

    pub fn target(&self) -> FrameIndex {
        self.state.target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
