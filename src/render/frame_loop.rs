use crate::{
    assets::store::FrameStore,
    foundation::core::FrameIndex,
    foundation::error::ScrollSeqResult,
    render::surface::Surface,
};

/// What one render tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The target frame was drawn.
    Painted(FrameIndex),
    /// The target is already on screen.
    Unchanged,
    /// The target slot is a hole; the surface keeps its previous frame.
    Hole(FrameIndex),
    /// The loop was cancelled.
    Stopped,
}

/// Per-frame repaint step: draws the target frame only when it differs from the one on screen.
#[derive(Clone, Debug, Default)]
pub struct RenderLoop {
    rendered: Option<FrameIndex>,
    paints: u64,
    cancelled: bool,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last painted frame, `None` before the first paint.
    pub fn rendered(&self) -> Option<FrameIndex> {
        self.rendered
    }

    pub fn paints(&self) -> u64 {
        self.paints
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled
    }

    pub fn tick(
        &mut self,
        target: FrameIndex,
        store: &FrameStore,
        surface: &mut dyn Surface,
    ) -> ScrollSeqResult<RenderOutcome> {
        if self.cancelled {
            return Ok(RenderOutcome::Stopped);
        }
        if self.rendered == Some(target) {
            return Ok(RenderOutcome::Unchanged);
        }
        let Some(frame) = store.get(target) else {
            tracing::trace!(frame = target.0, "target frame is a hole");
            return Ok(RenderOutcome::Hole(target));
        };
        surface.blit(frame)?;
        self.rendered = Some(target);
        self.paints += 1;
        Ok(RenderOutcome::Painted(target))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame_loop.rs"]
mod tests;
