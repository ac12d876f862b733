//! 2D geometry utilities

pub mod rect;
pub mod circle;

pub use rect::Rect;
pub use circle::{circle_vs_square, circle_vs_point};
