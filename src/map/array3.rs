//! Dense 3D array backing a map's cell grid

use crate::core::error::Error;
use crate::core::types::Result;

/// Dense x/y/z array stored in a flat vec, x-major within each layer
#[derive(Clone, Debug)]
pub struct Array3<T> {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    data: Vec<T>,
}

impl<T: Clone> Array3<T> {
    /// Array of the given dimensions filled with a value
    pub fn filled(size_x: usize, size_y: usize, size_z: usize, value: T) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            data: vec![value; size_x * size_y * size_z],
        }
    }
}

impl<T> Array3<T> {
    /// Wrap an existing flat vec; fails when the length does not match the
    /// dimensions
    pub fn from_vec(data: Vec<T>, size_x: usize, size_y: usize, size_z: usize) -> Result<Self> {
        if data.len() != size_x * size_y * size_z {
            return Err(Error::GridSize {
                len: data.len(),
                x: size_x,
                y: size_y,
                z: size_z,
            });
        }
        Ok(Self { size_x, size_y, size_z, data })
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    pub fn size_z(&self) -> usize {
        self.size_z
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.size_x && y < self.size_y && z < self.size_z);
        x + self.size_x * (y + self.size_y * z)
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> &T {
        &self.data[self.offset(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        let offset = self.offset(x, y, z);
        self.data[offset] = value;
    }

    /// Iterate over every cell in storage order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}
