use egui::{Pos2, Rect, pos2, vec2};
use serde::{Deserialize, Serialize};

/// Which way the pointer has travelled relative to the gesture anchor.
///
/// Always derived from the two points, never set directly. This module is
/// the only place the flags are computed, so every consumer agrees on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragDirection {
    pub dragging_left: bool,
    pub dragging_up: bool,
}

impl DragDirection {
    pub fn between(anchor: Pos2, current: Pos2) -> Self {
        Self {
            dragging_left: anchor.x > current.x,
            dragging_up: anchor.y > current.y,
        }
    }
}

/// Normalizes an (anchor, current) point pair into a rectangle with a
/// top-left origin and non-negative size, whichever quadrant the pointer
/// was dragged toward.
///
/// Total over all finite point pairs; equal points yield a zero-area
/// rectangle at that position.
pub fn resolve(anchor: Pos2, current: Pos2) -> Rect {
    let origin = pos2(anchor.x.min(current.x), anchor.y.min(current.y));
    let size = vec2((current.x - anchor.x).abs(), (current.y - anchor.y).abs());
    Rect::from_min_size(origin, size)
}
