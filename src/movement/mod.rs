//! Per-tick movement resolution

pub mod direction;
pub mod resolver;

pub use direction::{Direction, HitSet, ALL_DIRECTIONS};
pub use resolver::{step, MoveInput, RUN_SPEED};
