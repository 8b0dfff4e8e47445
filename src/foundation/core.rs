use crate::foundation::error::{ScrollSeqError, ScrollSeqResult};

/// Zero-based position inside a frame sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Clamp into `[0, count - 1]`. An empty sequence clamps to `0`.
    pub fn clamp_to(self, count: usize) -> Self {
        Self(self.0.min(count.saturating_sub(1)))
    }

    /// One-based ordinal used by file naming.
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed output dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ScrollSeqResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScrollSeqError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Vertical direction of travel between two scroll samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    pub fn between(prev: f64, next: f64) -> Option<Self> {
        if next > prev {
            Some(Self::Forward)
        } else if next < prev {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
