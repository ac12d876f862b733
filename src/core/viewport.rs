//! Viewport scroll bookkeeping
//!
//! Minor consumer of the resolved entity position: after each tick the
//! viewport shifts just enough to keep the followed entity inside its
//! per-side minimum margins. It never recenters, so small movements do not
//! scroll the screen.

use crate::core::types::Vec2;

/// Scrolling world-space window kept within margins of a followed entity
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// World position of the top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Minimum distance from the followed center to each edge
    pub min_margin_north: f32,
    pub min_margin_east: f32,
    pub min_margin_south: f32,
    pub min_margin_west: f32,
}

impl Viewport {
    /// Viewport with margins defaulting to a third of each dimension
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_margin_north: height / 3.0,
            min_margin_east: width / 3.0,
            min_margin_south: height / 3.0,
            min_margin_west: width / 3.0,
        }
    }

    /// Scroll so the entity stays inside the margins
    pub fn follow(&mut self, center: Vec2, radius: f32) {
        let margin_north = center.y - self.y;
        let margin_east = self.x + self.width - (center.x + radius);
        let margin_south = self.y + self.height - (center.y + radius);
        let margin_west = center.x - self.x;

        if margin_north < self.min_margin_north {
            self.y -= self.min_margin_north - margin_north;
        } else if margin_south < self.min_margin_south {
            self.y += self.min_margin_south - margin_south;
        }
        if margin_west < self.min_margin_west {
            self.x -= self.min_margin_west - margin_west;
        } else if margin_east < self.min_margin_east {
            self.x += self.min_margin_east - margin_east;
        }
    }
}
