//! Error types for the gridrun core

use thiserror::Error;

/// Main error type for the crate
///
/// Covers content errors detectable while materializing a map. Content errors
/// discovered during collision resolution (an unimplemented tile shape) are
/// fatal and abort the tick instead; see the tile resolver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("palette index {index} out of range (palette holds {len} tiles)")]
    PaletteIndex { index: usize, len: usize },

    #[error("grid data length {len} does not match {x}x{y}x{z} dimensions")]
    GridSize { len: usize, x: usize, y: usize, z: usize },
}
