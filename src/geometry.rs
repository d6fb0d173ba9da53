//! Geometry primitives for spatial navigation.
//!
//! Targets live in the coordinate space of a shared host surface. Coordinates
//! are signed so that off-screen or partially scrolled-out targets remain
//! representable; the overlay clamps to the drawable area at render time.

use serde::{Deserialize, Serialize};

/// A point in host-surface coordinates.
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

/// An axis-aligned rectangle in host-surface coordinates.
///
/// Duplicate and overlapping rectangles are legal within one target set;
/// only target identities have to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<ratatui::layout::Rect> for Rect {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self {
            x: i32::from(rect.x),
            y: i32::from(rect.y),
            width: i32::from(rect.width),
            height: i32::from(rect.height),
        }
    }
}

/// A directional navigation command.
///
/// There are no diagonal or wraparound directions; navigating off the edge of
/// the target set falls back to the nearest candidate regardless of side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order for exhaustive iteration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
