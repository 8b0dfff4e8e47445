use crate::foundation::error::{ScrollSeqError, ScrollSeqResult};

/// Value bound 1:1 to scroll position over `[start, end]`.
///
/// A scrub keeps no playback state: the value is a pure function of the scroll offset, so
/// scrolling backward through the range retraces exactly the same values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    start: f64,
    end: f64,
    from: f64,
    to: f64,
    snap: bool,
}

impl Scrub {
    /// Linear binding from `from` at `start` to `to` at `end`.
    pub fn new(start: f64, end: f64, from: f64, to: f64) -> ScrollSeqResult<Self> {
        if !(start.is_finite() && end.is_finite() && from.is_finite() && to.is_finite()) {
            return Err(ScrollSeqError::validation("scrub bounds must be finite"));
        }
        if end <= start {
            return Err(ScrollSeqError::validation(format!(
                "scrub end ({end}) must be greater than start ({start})"
            )));
        }
        Ok(Self {
            start,
            end,
            from,
            to,
            snap: false,
        })
    }

    /// Round sampled values to the nearest integer.
    pub fn snapped(mut self) -> Self {
        self.snap = true;
        self
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Normalized progress in `[0, 1]` for a scroll offset.
    pub fn progress(&self, scroll: f64) -> f64 {
        ((scroll - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Value at normalized progress `p` (clamped).
    pub fn value_at_progress(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        let v = self.from + (self.to - self.from) * p;
        if self.snap { v.round() } else { v }
    }

    /// Value at a scroll offset.
    pub fn sample(&self, scroll: f64) -> f64 {
        self.value_at_progress(self.progress(scroll))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scrub.rs"]
mod tests;
