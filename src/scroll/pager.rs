use crate::{
    foundation::error::{ScrollSeqError, ScrollSeqResult},
    scroll::smooth::{ScrollTarget, ScrollToOptions},
    scroll::trigger::{Anchor, ElementBox, TriggerEnd, TriggerEvent, TriggerRegistry, TriggerSpec},
};

/// Orientation of the "next" control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Chevron {
    Down,
    /// Shown on the last stop: pressing next returns to the top.
    Up,
}

/// Programmatic scroll the host should hand to the smooth scroller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavRequest {
    pub stop: usize,
    pub target: ScrollTarget,
    pub options: ScrollToOptions,
}

/// Durations (seconds) for pager-initiated scrolls.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PagerTimings {
    /// Scrolling to stop 0 (the page top).
    pub to_top: f64,
    /// Scrolling to any other stop.
    pub to_section: f64,
    /// "Next" from the last stop back to the top.
    pub wrap: f64,
}

impl Default for PagerTimings {
    fn default() -> Self {
        Self {
            to_top: 1.5,
            to_section: 2.0,
            wrap: 2.0,
        }
    }
}

/// Stop activation uses "top center" to "bottom center" on each stop section.
const STOP_TRIGGER: TriggerSpec =
    TriggerSpec::new(Anchor::TOP_CENTER, TriggerEnd::Anchor(Anchor::BOTTOM_CENTER));

/// Tracks the active stop section and turns pagination controls into scroll requests.
#[derive(Clone, Debug)]
pub struct SectionPager {
    stops: Vec<ElementBox>,
    triggers: TriggerRegistry<usize>,
    active: usize,
    timings: PagerTimings,
}

impl SectionPager {
    pub fn new(
        stops: Vec<ElementBox>,
        viewport_height: f64,
        timings: PagerTimings,
    ) -> ScrollSeqResult<Self> {
        if stops.is_empty() {
            return Err(ScrollSeqError::validation("pager needs at least one stop"));
        }
        let mut triggers = TriggerRegistry::new();
        for (i, el) in stops.iter().enumerate() {
            triggers.register(STOP_TRIGGER.resolve(*el, viewport_height)?, i);
        }
        Ok(Self {
            stops,
            triggers,
            active: 0,
            timings,
        })
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 >= self.stops.len()
    }

    pub fn chevron(&self) -> Chevron {
        if self.is_last() {
            Chevron::Up
        } else {
            Chevron::Down
        }
    }

    /// Active flag for each pagination dot.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.stops.len()).map(|i| i == self.active)
    }

    /// Evaluate stop triggers at `scroll`. Returns the new active stop when it changed.
    ///
    /// A large jump can enter several stops in one update; the last one entered that is still
    /// in range wins.
    pub fn observe(&mut self, scroll: f64) -> Option<usize> {
        let mut entered = Vec::new();
        self.triggers.update(scroll, |&i, ev| {
            if matches!(ev, TriggerEvent::Enter | TriggerEvent::EnterBack) {
                entered.push(i);
            }
        });
        let in_range: Vec<usize> = self.triggers.active_tags().copied().collect();
        let activated = entered
            .iter()
            .rev()
            .find(|i| in_range.contains(i))
            .or(entered.last())
            .copied();
        match activated {
            Some(i) if i != self.active => {
                tracing::debug!(stop = i, prev = self.active, "section activated");
                self.active = i;
                Some(i)
            }
            _ => None,
        }
    }

    /// Request for the "next" control: the following stop, or the top after the last one.
    pub fn next(&self) -> NavRequest {
        if self.is_last() {
            return NavRequest {
                stop: 0,
                target: ScrollTarget::Top,
                options: ScrollToOptions::with_duration(self.timings.wrap),
            };
        }
        self.request_for(self.active + 1)
    }

    /// Request for a pagination dot. Out-of-range targets are ignored.
    pub fn select_dot(&self, target: usize) -> Option<NavRequest> {
        self.scroll_to_stop(target)
    }

    pub fn scroll_to_stop(&self, index: usize) -> Option<NavRequest> {
        (index < self.stops.len()).then(|| self.request_for(index))
    }

    fn request_for(&self, index: usize) -> NavRequest {
        // Stop 0 is the pinned region, which has no stable element offset.
        if index == 0 {
            return NavRequest {
                stop: 0,
                target: ScrollTarget::Top,
                options: ScrollToOptions::with_duration(self.timings.to_top),
            };
        }
        NavRequest {
            stop: index,
            target: ScrollTarget::Offset(self.stops[index].top),
            options: ScrollToOptions::with_duration(self.timings.to_section),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pager.rs"]
mod tests;
