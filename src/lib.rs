//! Gridrun - collision and movement core for a tile-based 2D action game

pub mod core;
pub mod math;
pub mod tile;
pub mod map;
pub mod movement;
pub mod entity;
