use crate::foundation::error::{ScrollSeqError, ScrollSeqResult};

/// Clamp applied to a single oversized frame delta: any gap longer than `threshold` seconds is
/// counted as `adjusted` seconds instead.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LagSmoothing {
    pub threshold: f64,
    pub adjusted: f64,
}

impl LagSmoothing {
    pub fn validate(&self) -> ScrollSeqResult<()> {
        if !(self.threshold > 0.0 && self.adjusted > 0.0 && self.adjusted <= self.threshold) {
            return Err(ScrollSeqError::validation(
                "lag smoothing requires 0 < adjusted <= threshold",
            ));
        }
        Ok(())
    }
}

/// One advance of the shared per-frame clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Seconds on the ticker's own timeline.
    pub time: f64,
    /// Seconds since the previous tick on that timeline.
    pub delta: f64,
    pub frame: u64,
}

/// Per-frame clock that every animation consumer (render loop, smooth scroller, reveals)
/// reads from, so they all agree on elapsed time.
#[derive(Clone, Debug)]
pub struct Ticker {
    lag: Option<LagSmoothing>,
    last_host: Option<f64>,
    time: f64,
    frame: u64,
}

impl Ticker {
    /// `lag: None` passes host deltas through unclamped.
    pub fn new(lag: Option<LagSmoothing>) -> ScrollSeqResult<Self> {
        if let Some(l) = &lag {
            l.validate()?;
        }
        Ok(Self {
            lag,
            last_host: None,
            time: 0.0,
            frame: 0,
        })
    }

    /// Advance to host timestamp `now` (seconds). The first call establishes the origin.
    ///
    /// Non-finite timestamps are ignored: the clock does not move and the frame count is kept.
    pub fn tick(&mut self, now: f64) -> Tick {
        if !now.is_finite() {
            return Tick {
                time: self.time,
                delta: 0.0,
                frame: self.frame,
            };
        }
        let raw = match self.last_host {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last_host = Some(now);

        let delta = match self.lag {
            Some(l) if raw > l.threshold => l.adjusted,
            _ => raw,
        };
        self.time += delta;
        self.frame += 1;
        Tick {
            time: self.time,
            delta,
            frame: self.frame,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/ticker.rs"]
mod tests;
