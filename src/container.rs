use std::fmt;

use crate::color::Color;
use crate::error::IllegalMove;

/// Slots per container.
pub const CAPACITY: usize = 4;

/// Fixed-capacity stack of color blocks.
///
/// Blocks are packed from index 3 toward index 0: empty slots always form a
/// prefix starting at index 0, so the first occupied slot holds the movable
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Container {
    slots: [Color; CAPACITY],
    selected: bool,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full(color: Color) -> Self {
        Self::from_slots([color; CAPACITY])
    }

    pub fn from_slots(slots: [Color; CAPACITY]) -> Self {
        Self {
            slots,
            selected: false,
        }
    }

    pub fn slots(&self) -> &[Color; CAPACITY] {
        &self.slots
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Number of color changes scanning from index 0 to index 3.
    /// Zero iff every slot holds the same value (including all empty).
    pub fn entropy(&self) -> u32 {
        self.slots.windows(2).filter(|pair| pair[0] != pair[1]).count() as u32
    }

    pub fn empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_empty())
    }

    /// Length of the run of empty slots starting at index 0.
    pub fn free(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_empty()).count()
    }

    /// Index of the next slot to be filled, `None` when the container is full.
    pub fn first(&self) -> Option<usize> {
        self.free().checked_sub(1)
    }

    /// Color and length of the movable run. `(Color::Empty, 0)` when empty.
    pub fn top(&self) -> (Color, usize) {
        let mut blocks = self.slots.iter().copied().filter(|slot| !slot.is_empty());
        match blocks.next() {
            Some(color) => (color, 1 + blocks.take_while(|&slot| slot == color).count()),
            None => (Color::Empty, 0),
        }
    }

    /// Number of slots holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.slots.iter().filter(|&&slot| slot == color).count()
    }

    /// Writes `count` blocks of `color` from [`first`](Self::first) downward.
    ///
    /// Contract: `count <= self.free()`.
    pub fn fill(&mut self, color: Color, count: usize) {
        let free = self.free();
        assert!(
            count <= free,
            "fill of {count} blocks exceeds {free} free slots in {self}"
        );
        for slot in &mut self.slots[free - count..free] {
            *slot = color;
        }
    }

    /// Clears `count` slots from the first occupied slot upward.
    ///
    /// Contract: `count` does not exceed the length of the top run.
    pub fn remove(&mut self, count: usize) {
        let (_, run) = self.top();
        assert!(
            count <= run,
            "remove of {count} blocks exceeds top run of {run} in {self}"
        );
        let start = self.free();
        for slot in &mut self.slots[start..start + count] {
            *slot = Color::Empty;
        }
    }

    /// Moves as much of `source`'s top run as fits into this container.
    /// Returns the number of blocks moved.
    pub fn transfer_from(&mut self, source: &mut Container) -> Result<usize, IllegalMove> {
        let free = self.free();
        if free == 0 {
            return Err(IllegalMove::DestinationFull {
                slots: self.to_string(),
            });
        }

        let (color, run) = source.top();
        let (top, _) = self.top();
        if !self.empty() && top != color {
            return Err(IllegalMove::ColorMismatch { moving: color, top });
        }

        let count = free.min(run);
        self.fill(color, count);
        source.remove(count);
        Ok(count)
    }

    /// Packs blocks toward index 3 keeping their relative order.
    pub(crate) fn compact(&mut self) {
        let mut packed = [Color::Empty; CAPACITY];
        let blocks: Vec<Color> = self.slots.iter().copied().filter(|s| !s.is_empty()).collect();
        packed[CAPACITY - blocks.len()..].copy_from_slice(&blocks);
        self.slots = packed;
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{slot}")?;
        }
        write!(f, "]")?;
        if self.selected {
            write!(f, "*")?;
        }
        Ok(())
    }
}
