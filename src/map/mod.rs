//! Tile grid and spatial queries
//!
//! A map is a 3D grid of palette indices plus the palette of distinct tile
//! values it references. Queries convert a world-space region to a clipped
//! tile-index rectangle, so their cost is bounded by the queried area rather
//! than the map size; they return a coarse superset of the tiles that can
//! intersect the region, and precise penetration testing stays with the tile
//! shape resolver.

pub mod array3;

pub use array3::Array3;

use crate::core::error::Error;
use crate::core::types::{Result, Vec2};
use crate::math::Rect;
use crate::tile::{PhysicalPresence, Tile, TILE_SIZE};

/// One tile occurrence returned by a spatial query
///
/// Ephemeral: borrows the tile from the map's palette, lives for one query.
#[derive(Clone, Copy, Debug)]
pub struct TileAndLocation<'a> {
    /// World x of the tile's top-left corner
    pub x: f32,
    /// World y of the tile's top-left corner
    pub y: f32,
    pub tile: &'a Tile,
    /// Squared distance from the query center to the cell center, for
    /// proximity sorting
    pub proximity2: f32,
}

/// A placed tile grid: palette, cell indices and world-space position
#[derive(Clone, Debug)]
pub struct Map {
    palette: Vec<Tile>,
    cells: Array3<Option<u16>>,
    /// World position of the grid's top-left corner
    x: f32,
    y: f32,
    /// Story (building floor) this map occupies
    story: i32,
    // cached from the grid dimensions
    width: f32,
    height: f32,
}

impl Map {
    /// Build a map from a palette and cell grid.
    ///
    /// Every stored index must point into the palette; a dangling index is a
    /// content error and fails construction.
    pub fn new(palette: Vec<Tile>, cells: Array3<Option<u16>>) -> Result<Self> {
        for index in cells.iter().flatten() {
            let index = *index as usize;
            if index >= palette.len() {
                return Err(Error::PaletteIndex { index, len: palette.len() });
            }
        }
        let width = cells.size_x() as f32 * TILE_SIZE;
        let height = cells.size_y() as f32 * TILE_SIZE;
        log::debug!(
            "map built: {}x{}x{} cells, {} palette tiles",
            cells.size_x(),
            cells.size_y(),
            cells.size_z(),
            palette.len()
        );
        Ok(Self {
            palette,
            cells,
            x: 0.0,
            y: 0.0,
            story: 0,
            width,
            height,
        })
    }

    /// Place the map in world space
    pub fn set_position(&mut self, x: f32, y: f32, story: i32) {
        self.x = x;
        self.y = y;
        self.story = story;
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn story(&self) -> i32 {
        self.story
    }

    pub fn layer_count(&self) -> usize {
        self.cells.size_z()
    }

    /// Append every tile whose cell can intersect the square region around
    /// `center` with the given apothem, filtered to at least `min_presence`.
    ///
    /// The index rectangle is inclusive at its edges: a tile exactly touching
    /// the region boundary is returned. Regions outside the grid simply
    /// contribute nothing.
    pub fn intersecting_tiles<'a>(
        &'a self,
        out: &mut Vec<TileAndLocation<'a>>,
        center: Vec2,
        apothem: f32,
        layer: usize,
        min_presence: PhysicalPresence,
    ) {
        if layer >= self.cells.size_z() {
            return;
        }
        let region = Rect::from_center_apothem(center, apothem);
        let (xs, ys) = self.tile_range(region);
        for cell_y in ys {
            for cell_x in xs.clone() {
                let Some(index) = self.cells.get(cell_x, cell_y, layer) else {
                    continue;
                };
                let tile = &self.palette[*index as usize];
                if !tile.has_min_presence(min_presence) {
                    continue;
                }
                let origin = Vec2::new(
                    self.x + cell_x as f32 * TILE_SIZE,
                    self.y + cell_y as f32 * TILE_SIZE,
                );
                let cell_center = origin + Vec2::splat(TILE_SIZE * 0.5);
                out.push(TileAndLocation {
                    x: origin.x,
                    y: origin.y,
                    tile,
                    proximity2: center.distance_squared(cell_center),
                });
            }
        }
    }

    /// Degenerate point query: the tiles whose cells contain (or touch) a
    /// single world-space point, weakest presence filter
    pub fn tiles_at_point<'a>(
        &'a self,
        out: &mut Vec<TileAndLocation<'a>>,
        point: Vec2,
        layer: usize,
    ) {
        self.intersecting_tiles(out, point, 0.0, layer, PhysicalPresence::Rail);
    }

    /// Clipped, edge-inclusive tile-index ranges covering a world-space region
    fn tile_range(&self, region: Rect) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let local_min = region.min - Vec2::new(self.x, self.y);
        let local_max = region.max - Vec2::new(self.x, self.y);
        let clip = |value: i64, limit: usize| value.clamp(0, limit as i64) as usize;

        // ceil - 1 / floor + 1 keeps tiles that only touch the region edge.
        let x0 = clip((local_min.x / TILE_SIZE).ceil() as i64 - 1, self.cells.size_x());
        let x1 = clip((local_max.x / TILE_SIZE).floor() as i64 + 1, self.cells.size_x());
        let y0 = clip((local_min.y / TILE_SIZE).ceil() as i64 - 1, self.cells.size_y());
        let y1 = clip((local_max.y / TILE_SIZE).floor() as i64 + 1, self.cells.size_y());
        (x0..x1, y0..y1)
    }
}

/// Order query results nearest-first by their stored squared proximity
pub fn sort_by_proximity(tiles: &mut [TileAndLocation<'_>]) {
    tiles.sort_by(|a, b| a.proximity2.total_cmp(&b.proximity2));
}
