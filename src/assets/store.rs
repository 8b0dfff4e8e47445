use crate::{
    assets::decode::PreparedFrame,
    foundation::core::FrameIndex,
    foundation::error::{ScrollSeqError, ScrollSeqResult},
};

/// Fixed-length, write-once store of decoded frames.
///
/// Slots that never receive a frame stay holes for the lifetime of the store.
#[derive(Clone, Debug)]
pub struct FrameStore {
    slots: Vec<Option<PreparedFrame>>,
}

impl FrameStore {
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Total number of slots (populated or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Populate slot `index`. Each slot accepts exactly one frame.
    pub fn insert(&mut self, index: FrameIndex, frame: PreparedFrame) -> ScrollSeqResult<()> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index.0).ok_or_else(|| {
            ScrollSeqError::validation(format!("frame {index} is out of range (len {len})"))
        })?;
        if slot.is_some() {
            return Err(ScrollSeqError::validation(format!(
                "frame {index} is already populated"
            )));
        }
        *slot = Some(frame);
        Ok(())
    }

    /// Frame at `index`, or `None` for a hole or an out-of-range index.
    pub fn get(&self, index: FrameIndex) -> Option<&PreparedFrame> {
        self.slots.get(index.0).and_then(Option::as_ref)
    }

    pub fn is_hole(&self, index: FrameIndex) -> bool {
        self.get(index).is_none()
    }

    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn holes(&self) -> Vec<FrameIndex> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| FrameIndex(i))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
