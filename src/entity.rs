//! Moving entity state
//!
//! The committed center, radius, layer and orientation are the observable
//! outputs the renderer consumes; this core never draws anything.

use crate::core::types::Vec2;
use crate::movement::Direction;

/// Whether the entity is idle or moving this tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementMode {
    #[default]
    Stand,
    Run,
}

/// A circular entity that moves through the tile grids
#[derive(Clone, Copy, Debug)]
pub struct Entity {
    /// World-space center, committed once per tick
    pub center: Vec2,
    /// Collision radius
    pub radius: f32,
    /// Grid layer the entity occupies
    pub layer: usize,
    pub movement_mode: MovementMode,
    /// Facing, kept at the last movement direction while standing
    pub orientation: Direction,
}

impl Entity {
    pub fn new(center: Vec2, radius: f32, layer: usize) -> Self {
        Self {
            center,
            radius,
            layer,
            movement_mode: MovementMode::Stand,
            orientation: Direction::South,
        }
    }
}
