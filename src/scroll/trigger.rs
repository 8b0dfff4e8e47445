//! Scroll-position triggers.
//!
//! A trigger covers a closed scroll range `[start, end]` and reports the four crossings
//! (`Enter`, `Leave`, `EnterBack`, `LeaveBack`) as the scroll offset moves through it. Triggers
//! are evaluated against the current offset on every scroll event; a jump that skips the whole
//! range reports both crossings in order.

use crate::foundation::error::{ScrollSeqError, ScrollSeqResult};

/// Crossing reported by a [`ScrollTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Moved forward past `start`.
    Enter,
    /// Moved forward past `end`.
    Leave,
    /// Moved backward past `end`.
    EnterBack,
    /// Moved backward past `start`.
    LeaveBack,
}

/// Edge of a page element used to place a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Center => self.top + self.height / 2.0,
            Edge::Bottom => self.top + self.height,
        }
    }
}

/// "`<element edge>` meets `<viewport fraction>`", e.g. `top center` or `top 70%`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub element: Edge,
    /// Fraction of the viewport height measured from its top (`0.5` is the center).
    pub viewport: f64,
}

impl Anchor {
    pub const TOP_TOP: Self = Self::at(Edge::Top, 0.0);
    pub const TOP_CENTER: Self = Self::at(Edge::Top, 0.5);
    pub const BOTTOM_CENTER: Self = Self::at(Edge::Bottom, 0.5);
    pub const BOTTOM_TOP: Self = Self::at(Edge::Bottom, 0.0);

    pub const fn at(element: Edge, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the anchor line is reached.
    pub fn resolve(&self, el: ElementBox, viewport_height: f64) -> f64 {
        el.edge(self.element) - viewport_height * self.viewport
    }
}

/// End of a trigger range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEnd {
    Anchor(Anchor),
    /// Fixed distance after the resolved start (`+=N`).
    Distance(f64),
}

/// Placement of a trigger relative to an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerSpec {
    pub start: Anchor,
    pub end: TriggerEnd,
}

impl TriggerSpec {
    pub const fn new(start: Anchor, end: TriggerEnd) -> Self {
        Self { start, end }
    }

    pub fn resolve(&self, el: ElementBox, viewport_height: f64) -> ScrollSeqResult<ScrollTrigger> {
        let start = self.start.resolve(el, viewport_height);
        let end = match self.end {
            TriggerEnd::Anchor(a) => a.resolve(el, viewport_height),
            TriggerEnd::Distance(d) => start + d,
        };
        ScrollTrigger::new(start, end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Resolved trigger range plus the zone seen on the last update.
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    start: f64,
    end: f64,
    zone: Zone,
}

impl ScrollTrigger {
    pub fn new(start: f64, end: f64) -> ScrollSeqResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(ScrollSeqError::validation("trigger bounds must be finite"));
        }
        if end < start {
            return Err(ScrollSeqError::validation(format!(
                "trigger end ({end}) is before start ({start})"
            )));
        }
        Ok(Self {
            start,
            end,
            zone: Zone::Before,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_active(&self) -> bool {
        self.zone == Zone::Active
    }

    fn zone_of(&self, scroll: f64) -> Zone {
        if scroll < self.start {
            Zone::Before
        } else if scroll > self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Re-evaluate against `scroll`, reporting crossings in the order they happened.
    pub fn update(&mut self, scroll: f64, mut emit: impl FnMut(TriggerEvent)) {
        let next = self.zone_of(scroll);
        match (self.zone, next) {
            (Zone::Before, Zone::Active) => emit(TriggerEvent::Enter),
            (Zone::Before, Zone::After) => {
                emit(TriggerEvent::Enter);
                emit(TriggerEvent::Leave);
            }
            (Zone::Active, Zone::After) => emit(TriggerEvent::Leave),
            (Zone::Active, Zone::Before) => emit(TriggerEvent::LeaveBack),
            (Zone::After, Zone::Active) => emit(TriggerEvent::EnterBack),
            (Zone::After, Zone::Before) => {
                emit(TriggerEvent::EnterBack);
                emit(TriggerEvent::LeaveBack);
            }
            _ => {}
        }
        self.zone = next;
    }
}

/// Ordered set of triggers, each tagged with caller data identifying what it drives.
#[derive(Clone, Debug, Default)]
pub struct TriggerRegistry<T> {
    entries: Vec<(ScrollTrigger, T)>,
}

impl<T> TriggerRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, trigger: ScrollTrigger, tag: T) {
        self.entries.push((trigger, tag));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags of triggers whose range currently contains the scroll offset.
    pub fn active_tags(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries
            .iter()
            .filter(|(t, _)| t.is_active())
            .map(|(_, tag)| tag)
    }

    /// Evaluate every trigger in registration order.
    pub fn update(&mut self, scroll: f64, mut on_event: impl FnMut(&T, TriggerEvent)) {
        for (trigger, tag) in &mut self.entries {
            trigger.update(scroll, |ev| on_event(tag, ev));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
