use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::container::CAPACITY;
use crate::engine::NUM_CONTAINERS;

const BLOCK_SIZE: i32 = 50;
const COLUMNS: [i32; 4] = [120, 290, 460, 630];
const ROWS: [i32; 2] = [50, 350];

/// Screen layout used when the host does not supply one.
pub static DEFAULT_LAYOUT: Lazy<Layout> = Lazy::new(Layout::classic);

/// A pointer position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with inclusive bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        (self.x..=self.x + self.width).contains(&point.x)
            && (self.y..=self.y + self.height).contains(&point.y)
    }
}

/// Where each container sits on screen. Only the presentation layer reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub block_size: i32,
    pub origins: Vec<Point>,
}

impl Layout {
    /// Two rows of four containers.
    pub fn classic() -> Self {
        let origins = ROWS
            .iter()
            .flat_map(|&y| COLUMNS.iter().map(move |&x| Point::new(x, y)))
            .collect();
        Self {
            block_size: BLOCK_SIZE,
            origins,
        }
    }

    /// Screen rectangle of container `index`: one block wide, four tall.
    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.origins.get(index).map(|origin| Rect {
            x: origin.x,
            y: origin.y,
            width: self.block_size,
            height: self.block_size * CAPACITY as i32,
        })
    }

    /// Rectangle of slot `slot` inside container `index`, index 0 drawn at the top edge.
    pub fn slot_rect(&self, index: usize, slot: usize) -> Option<Rect> {
        if slot >= CAPACITY {
            return None;
        }
        self.rect(index).map(|rect| Rect {
            x: rect.x,
            y: rect.y + slot as i32 * self.block_size,
            width: self.block_size,
            height: self.block_size,
        })
    }

    /// Index of the first container whose rectangle contains `point`.
    pub fn locate(&self, point: Point) -> Option<usize> {
        (0..self.origins.len().min(NUM_CONTAINERS))
            .find(|&index| self.rect(index).is_some_and(|rect| rect.contains(point)))
    }
}

impl Default for Layout {
    fn default() -> Self {
        DEFAULT_LAYOUT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_layout_places_eight_containers_in_two_rows() {
        let layout = Layout::classic();

        assert_eq!(layout.origins.len(), NUM_CONTAINERS);
        assert_eq!(layout.origins[0], Point::new(120, 50));
        assert_eq!(layout.origins[3], Point::new(630, 50));
        assert_eq!(layout.origins[4], Point::new(120, 350));
        assert_eq!(layout.rect(7).map(|r| (r.width, r.height)), Some((50, 200)));
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let rect = Layout::classic().rect(0).unwrap();

        assert!(rect.contains(Point::new(120, 50)));
        assert!(rect.contains(Point::new(170, 250)));
        assert!(!rect.contains(Point::new(171, 250)));
        assert!(!rect.contains(Point::new(120, 49)));
    }

    #[test]
    fn locate_maps_points_to_container_indices() {
        let layout = Layout::classic();

        assert_eq!(layout.locate(Point::new(130, 60)), Some(0));
        assert_eq!(layout.locate(Point::new(470, 200)), Some(2));
        assert_eq!(layout.locate(Point::new(650, 549)), Some(7));
        assert_eq!(layout.locate(Point::new(10, 10)), None);
        assert_eq!(layout.locate(Point::new(200, 300)), None);
    }

    #[test]
    fn slot_rects_stack_downward() {
        let layout = Layout::classic();

        assert_eq!(
            layout.slot_rect(4, 3),
            Some(Rect { x: 120, y: 500, width: 50, height: 50 })
        );
        assert_eq!(layout.slot_rect(4, 4), None);
        assert_eq!(layout.slot_rect(8, 0), None);
    }

    #[test]
    fn default_layout_is_classic() {
        assert_eq!(Layout::default(), Layout::classic());
    }
}
