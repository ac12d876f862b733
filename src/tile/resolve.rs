//! Per-shape circle collision resolution
//!
//! `Tile::resolve_circle` removes the penetration of a circular entity against
//! one tile by mutating the entity center in place, and reports the compass
//! direction the tile pushed from as a `HitSet` bit. The movement resolver ORs
//! these bits across every tile touched in a tick before applying its
//! stop/slide policy.

use std::f32::consts::FRAC_1_SQRT_2;

use crate::core::types::Vec2;
use crate::math::{circle_vs_point, circle_vs_square};
use crate::movement::{Direction, HitSet};

use super::{Tile, TileShape, TILE_SIZE};

/// How far a rail drags the entity back toward its threshold per resolution
const RAIL_STEP: f32 = 3.0;

/// Corner of the tile holding a diagonal wall's right angle
#[derive(Clone, Copy)]
enum DiagCorner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Tile {
    /// Resolve a circular entity against this tile.
    ///
    /// `tile_origin` is the world position of the tile's top-left corner.
    /// The entity center is corrected in place; the returned set holds the
    /// direction the tile is constraining motion from (empty when the tile
    /// did not push, and always empty for rails, whose grip is advisory
    /// rather than blocking).
    ///
    /// # Panics
    ///
    /// Panics on `SolidHole`: its collision behavior is unimplemented content
    /// and silently skipping it would produce wrong movement that is much
    /// harder to debug than a crash.
    pub fn resolve_circle(&self, tile_origin: Vec2, center: &mut Vec2, radius: f32) -> HitSet {
        let before = *center;
        match self.shape {
            TileShape::SolidWall => resolve_square(tile_origin, center, radius),
            TileShape::SolidFloor => {}
            TileShape::SolidHole => {
                log::error!("content references SolidHole collision at {tile_origin:?}");
                panic!("SolidHole collision is not implemented");
            }
            TileShape::DiagFloorWallNw => {
                resolve_diagonal(DiagCorner::Nw, tile_origin, center, radius);
            }
            TileShape::DiagFloorWallNe => {
                resolve_diagonal(DiagCorner::Ne, tile_origin, center, radius);
            }
            TileShape::DiagFloorWallSe => {
                resolve_diagonal(DiagCorner::Se, tile_origin, center, radius);
            }
            TileShape::DiagFloorWallSw => {
                resolve_diagonal(DiagCorner::Sw, tile_origin, center, radius);
            }
            TileShape::RailEast => {
                // Grip band just inside the east edge; pull back west, never
                // past the threshold.
                if tile_origin.y < center.y && center.y < tile_origin.y + TILE_SIZE {
                    let east_edge = tile_origin.x + TILE_SIZE;
                    let threshold = east_edge - radius;
                    if threshold < center.x && center.x < east_edge {
                        center.x = (center.x - RAIL_STEP).max(threshold);
                    }
                }
                return HitSet::EMPTY;
            }
            TileShape::RailWest => {
                if tile_origin.y < center.y && center.y < tile_origin.y + TILE_SIZE {
                    let threshold = tile_origin.x + radius;
                    if tile_origin.x < center.x && center.x < threshold {
                        center.x = (center.x + RAIL_STEP).min(threshold);
                    }
                }
                return HitSet::EMPTY;
            }
            TileShape::RailNorth => {
                if tile_origin.x < center.x && center.x < tile_origin.x + TILE_SIZE {
                    let threshold = tile_origin.y + radius;
                    if tile_origin.y < center.y && center.y < threshold {
                        center.y = (center.y + RAIL_STEP).min(threshold);
                    }
                }
                return HitSet::EMPTY;
            }
            TileShape::RailSouth => {
                if tile_origin.x < center.x && center.x < tile_origin.x + TILE_SIZE {
                    let south_edge = tile_origin.y + TILE_SIZE;
                    let threshold = south_edge - radius;
                    if threshold < center.y && center.y < south_edge {
                        center.y = (center.y - RAIL_STEP).max(threshold);
                    }
                }
                return HitSet::EMPTY;
            }
        }

        match Direction::from_push(*center - before) {
            Some(direction) => HitSet::of(direction),
            None => HitSet::EMPTY,
        }
    }
}

/// Resolve against the whole tile as a solid square
fn resolve_square(tile_origin: Vec2, center: &mut Vec2, radius: f32) {
    let half = TILE_SIZE * 0.5;
    let push = circle_vs_square(tile_origin + Vec2::splat(half), half, *center, radius);
    *center += push;
}

/// Resolve against a diagonal floor/wall tile.
///
/// `t` is the rectilinear distance of the entity center past the wall's
/// right-angle corner, measured toward the floor half. Within `TILE_SIZE` the
/// diagonal cannot be the nearest feature and the tile acts as a full square.
/// Past it, two signed thresholds (the non-hypotenuse edges extended across
/// the diagonal) split the floor half into the two acute-corner zones and the
/// band directly over the hypotenuse, which gets a perpendicular push split
/// evenly between the axes. That split is what makes sliding along a diagonal
/// wall smooth instead of snapping.
fn resolve_diagonal(corner: DiagCorner, tile_origin: Vec2, center: &mut Vec2, radius: f32) {
    let s = TILE_SIZE;
    let p = *center - tile_origin;

    let (t, ta, tb, corner_a, corner_b, out) = match corner {
        DiagCorner::Nw => (
            p.x + p.y,
            -(p.x - s) + p.y,
            -p.x + (p.y - s),
            Vec2::new(s, 0.0),
            Vec2::new(0.0, s),
            Vec2::new(1.0, 1.0),
        ),
        DiagCorner::Ne => (
            -(p.x - s) + p.y,
            p.x + p.y,
            (p.x - s) + (p.y - s),
            Vec2::new(0.0, 0.0),
            Vec2::new(s, s),
            Vec2::new(-1.0, 1.0),
        ),
        DiagCorner::Se => (
            -(p.x - s) - (p.y - s),
            -(p.x - s) + p.y,
            -p.x + (p.y - s),
            Vec2::new(s, 0.0),
            Vec2::new(0.0, s),
            Vec2::new(-1.0, -1.0),
        ),
        DiagCorner::Sw => (
            p.x - (p.y - s),
            p.x + p.y,
            (p.x - s) + (p.y - s),
            Vec2::new(0.0, 0.0),
            Vec2::new(s, s),
            Vec2::new(1.0, -1.0),
        ),
    };

    if t <= s {
        resolve_square(tile_origin, center, radius);
        return;
    }

    match (ta > 0.0) as u8 + (tb > 0.0) as u8 {
        0 => circle_vs_point(tile_origin + corner_a, center, radius),
        2 => circle_vs_point(tile_origin + corner_b, center, radius),
        _ => {
            // Rectilinear reach of the circle across the diagonal.
            let reach = radius / FRAC_1_SQRT_2;
            let overlap = reach - (t - s);
            if overlap > 0.0 {
                *center += out * (overlap * 0.5);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(shape: TileShape) -> Tile {
        Tile::from_shape(shape)
    }

    #[test]
    fn test_floor_never_blocks() {
        let mut center = Vec2::new(8.0, 8.0);
        let hits = tile(TileShape::SolidFloor).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert_eq!(center, Vec2::new(8.0, 8.0));
        assert!(hits.is_empty());
    }

    #[test]
    #[should_panic(expected = "SolidHole")]
    fn test_hole_is_fatal() {
        let mut center = Vec2::new(8.0, 8.0);
        tile(TileShape::SolidHole).resolve_circle(Vec2::ZERO, &mut center, 6.0);
    }

    #[test]
    fn test_wall_pushes_and_reports_push_direction() {
        // Overlapping the tile's north face from above: push is northward.
        let mut center = Vec2::new(8.0, -4.0);
        let hits = tile(TileShape::SolidWall).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert_eq!(center, Vec2::new(8.0, -6.0));
        assert!(hits.contains(Direction::North));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_wall_clear_is_noop() {
        let mut center = Vec2::new(8.0, -15.0);
        let hits = tile(TileShape::SolidWall).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert_eq!(center, Vec2::new(8.0, -15.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_diagonal_nw_hypotenuse_band() {
        // Center over the middle of the diagonal, past the bar.
        let mut center = Vec2::new(10.0, 10.0);
        let hits = tile(TileShape::DiagFloorWallNw).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        let expect = 10.0 + (6.0 / FRAC_1_SQRT_2 - 4.0) * 0.5;
        assert!((center.x - expect).abs() < 1e-4);
        assert!((center.y - expect).abs() < 1e-4);
        assert!(hits.contains(Direction::SouthEast));
    }

    #[test]
    fn test_diagonal_nw_inside_bar_acts_as_square() {
        let mut center = Vec2::new(4.0, 4.0);
        let hits = tile(TileShape::DiagFloorWallNw).resolve_circle(Vec2::ZERO, &mut center, 2.0);
        assert_eq!(center, Vec2::new(-2.0, 4.0));
        assert!(hits.contains(Direction::West));
    }

    #[test]
    fn test_diagonal_nw_acute_corner_zone() {
        // Off the end of the hypotenuse: resolves against the (16, 0) corner.
        let mut center = Vec2::new(18.0, -1.0);
        let hits = tile(TileShape::DiagFloorWallNw).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert!((center.distance(Vec2::new(16.0, 0.0)) - 6.0).abs() < 1e-4);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_diagonal_nw_clear_is_noop() {
        let mut center = Vec2::new(20.0, 20.0);
        let hits = tile(TileShape::DiagFloorWallNw).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert_eq!(center, Vec2::new(20.0, 20.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_diagonal_continuous_across_bar_boundary() {
        // Two shallow-contact positions straddling t == TILE_SIZE near the
        // acute corner must resolve to nearly the same place: the square
        // branch and the corner zone share the (16, 0) corner as the contact
        // feature.
        let mut a = Vec2::new(19.9, -4.0);
        tile(TileShape::DiagFloorWallNw).resolve_circle(Vec2::ZERO, &mut a, 6.0);
        let mut b = Vec2::new(20.1, -4.0);
        tile(TileShape::DiagFloorWallNw).resolve_circle(Vec2::ZERO, &mut b, 6.0);
        assert!(a != Vec2::new(19.9, -4.0), "branch A should make contact");
        assert!(b != Vec2::new(20.1, -4.0), "branch B should make contact");
        assert!(a.distance(b) < 0.5);
    }

    #[test]
    fn test_diagonal_other_orientations_push_outward() {
        let mut center = Vec2::new(6.0, 10.0);
        let hits = tile(TileShape::DiagFloorWallNe).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert!(center.x < 6.0 && center.y > 10.0);
        assert!(hits.contains(Direction::SouthWest));

        let mut center = Vec2::new(6.0, 6.0);
        let hits = tile(TileShape::DiagFloorWallSe).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert!(center.x < 6.0 && center.y < 6.0);
        assert!(hits.contains(Direction::NorthWest));

        let mut center = Vec2::new(10.0, 6.0);
        let hits = tile(TileShape::DiagFloorWallSw).resolve_circle(Vec2::ZERO, &mut center, 6.0);
        assert!(center.x > 10.0 && center.y < 6.0);
        assert!(hits.contains(Direction::NorthEast));
    }

    #[test]
    fn test_rail_east_grips_inside_band() {
        // Within the grip band: dragged back toward the threshold, no bits.
        let mut center = Vec2::new(13.0, 8.0);
        let hits = tile(TileShape::RailEast).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(11.0, 8.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_rail_east_never_crosses_threshold() {
        // Repeated small eastward steps from the threshold never get past it.
        let rail = tile(TileShape::RailEast);
        let mut center = Vec2::new(11.0, 8.0);
        for _ in 0..10 {
            center.x += 1.5;
            rail.resolve_circle(Vec2::ZERO, &mut center, 5.0);
            assert!(center.x <= 11.0);
        }
    }

    #[test]
    fn test_rail_east_ignores_entity_outside_span() {
        // Vertically outside the tile: unaffected regardless of x.
        let mut center = Vec2::new(13.0, 20.0);
        tile(TileShape::RailEast).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(13.0, 20.0));

        // Inside the span but west of the band: also unaffected.
        let mut center = Vec2::new(10.0, 8.0);
        tile(TileShape::RailEast).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(10.0, 8.0));
    }

    #[test]
    fn test_rail_west_mirrors_east() {
        let mut center = Vec2::new(3.0, 8.0);
        let hits = tile(TileShape::RailWest).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(5.0, 8.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_rail_north_and_south_use_vertical_axis() {
        let mut center = Vec2::new(8.0, 3.0);
        tile(TileShape::RailNorth).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(8.0, 5.0));

        let mut center = Vec2::new(8.0, 13.0);
        tile(TileShape::RailSouth).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(8.0, 11.0));

        // Horizontally outside the span: no effect.
        let mut center = Vec2::new(20.0, 3.0);
        tile(TileShape::RailNorth).resolve_circle(Vec2::ZERO, &mut center, 5.0);
        assert_eq!(center, Vec2::new(20.0, 3.0));
    }
}
