//! Compass directions and hit-direction bitmasks
//!
//! Directions live on a 3x3 grid indexed `(dx + 1) + 3 * (dy + 1)` with y
//! growing southward, so `NorthWest` is 0, `Center` is 4 and `SouthEast` is 8.
//! Antipodal pairs always sum to 8, which is what the movement policy's
//! "fatal direction" check relies on.

use crate::core::types::Vec2;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// One of the nine compass directions (including the idle `Center`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    West = 3,
    Center = 4,
    East = 5,
    SouthWest = 6,
    South = 7,
    SouthEast = 8,
}

/// All nine directions in index order
pub const ALL_DIRECTIONS: [Direction; 9] = [
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::West,
    Direction::Center,
    Direction::East,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
];

// tan(22.5 degrees); a push within this slope of an axis quantizes to the axis
const OCTANT_TAN: f32 = 0.414_213_56;

impl Direction {
    /// Grid index, `(dx + 1) + 3 * (dy + 1)`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for a grid index, `None` outside 0..=8
    pub fn from_index(index: usize) -> Option<Direction> {
        ALL_DIRECTIONS.get(index).copied()
    }

    /// Per-axis offsets, each in -1..=1
    pub fn offsets(self) -> (i32, i32) {
        let i = self.index() as i32;
        (i % 3 - 1, i / 3 - 1)
    }

    /// Direction for a pair of per-axis offsets, `None` outside -1..=1
    pub fn from_offsets(dx: i32, dy: i32) -> Option<Direction> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
            return None;
        }
        Direction::from_index(((dx + 1) + 3 * (dy + 1)) as usize)
    }

    /// The exactly opposite direction; `Center` is its own antipode
    pub fn antipode(self) -> Direction {
        ALL_DIRECTIONS[8 - self.index()]
    }

    /// Quantize a push displacement to the nearest of the 8 compass octants.
    ///
    /// Ties at the octant boundary resolve toward the axis direction. A zero
    /// push carries no direction; `Center` is never returned.
    pub fn from_push(push: Vec2) -> Option<Direction> {
        if push == Vec2::ZERO {
            return None;
        }
        let ax = push.x.abs();
        let ay = push.y.abs();
        let dx = if ax <= ay * OCTANT_TAN {
            0
        } else if push.x < 0.0 {
            -1
        } else {
            1
        };
        let dy = if ay <= ax * OCTANT_TAN {
            0
        } else if push.y < 0.0 {
            -1
        } else {
            1
        };
        Direction::from_offsets(dx, dy)
    }

    /// The two wing directions whose blockage marks a corner obstruction of
    /// movement in this direction.
    ///
    /// For a diagonal these are the antipodes of its axis components; for an
    /// axis direction they are the antipodes of the two adjacent diagonals.
    /// `Center` has no wings.
    pub fn wings(self) -> HitSet {
        use Direction as D;
        match self {
            D::NorthWest => HitSet::of(D::East).with(D::South),
            D::North => HitSet::of(D::SouthEast).with(D::SouthWest),
            D::NorthEast => HitSet::of(D::South).with(D::West),
            D::West => HitSet::of(D::NorthEast).with(D::SouthEast),
            D::Center => HitSet::EMPTY,
            D::East => HitSet::of(D::SouthWest).with(D::NorthWest),
            D::SouthWest => HitSet::of(D::North).with(D::East),
            D::South => HitSet::of(D::NorthWest).with(D::NorthEast),
            D::SouthEast => HitSet::of(D::West).with(D::North),
        }
    }
}

/// Set of compass directions an entity is being constrained from
///
/// Accumulated by OR across every tile resolved in one tick and discarded
/// afterwards; stale bits must never leak into the next tick.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct HitSet(u16);

impl HitSet {
    pub const EMPTY: HitSet = HitSet(0);

    /// Set containing a single direction
    pub fn of(direction: Direction) -> HitSet {
        HitSet(1 << direction.index())
    }

    /// Copy of this set with one more direction
    pub fn with(self, direction: Direction) -> HitSet {
        HitSet(self.0 | 1 << direction.index())
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.index();
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether any direction is in both sets
    pub fn intersects(self, other: HitSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Directions in `self` but not in `other`
    pub fn difference(self, other: HitSet) -> HitSet {
        HitSet(self.0 & !other.0)
    }

    /// The sole member, if the set holds exactly one direction
    pub fn as_single(self) -> Option<Direction> {
        if self.0.count_ones() == 1 {
            Direction::from_index(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }
}

impl BitOr for HitSet {
    type Output = HitSet;
    fn bitor(self, rhs: HitSet) -> HitSet {
        HitSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for HitSet {
    fn bitor_assign(&mut self, rhs: HitSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for HitSet {
    type Output = HitSet;
    fn bitand(self, rhs: HitSet) -> HitSet {
        HitSet(self.0 & rhs.0)
    }
}

impl fmt::Debug for HitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for direction in ALL_DIRECTIONS {
            if self.contains(direction) {
                set.entry(&direction);
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_encoding() {
        assert_eq!(Direction::NorthWest.index(), 0);
        assert_eq!(Direction::Center.index(), 4);
        assert_eq!(Direction::SouthEast.index(), 8);
        assert_eq!(Direction::from_offsets(1, 0), Some(Direction::East));
        assert_eq!(Direction::from_offsets(0, -1), Some(Direction::North));
        assert_eq!(Direction::from_offsets(2, 0), None);
    }

    #[test]
    fn test_offsets_roundtrip() {
        for direction in ALL_DIRECTIONS {
            let (dx, dy) = direction.offsets();
            assert_eq!(Direction::from_offsets(dx, dy), Some(direction));
        }
    }

    #[test]
    fn test_antipode_pairs_sum_to_eight() {
        for direction in ALL_DIRECTIONS {
            assert_eq!(direction.index() + direction.antipode().index(), 8);
            assert_eq!(direction.antipode().antipode(), direction);
        }
        assert_eq!(Direction::Center.antipode(), Direction::Center);
        assert_eq!(Direction::NorthWest.antipode(), Direction::SouthEast);
    }

    #[test]
    fn test_from_push_axes_and_diagonals() {
        assert_eq!(Direction::from_push(Vec2::new(1.0, 0.0)), Some(Direction::East));
        assert_eq!(Direction::from_push(Vec2::new(0.0, -2.0)), Some(Direction::North));
        assert_eq!(Direction::from_push(Vec2::new(3.0, 3.0)), Some(Direction::SouthEast));
        assert_eq!(Direction::from_push(Vec2::new(-1.0, -1.0)), Some(Direction::NorthWest));
        assert_eq!(Direction::from_push(Vec2::ZERO), None);
    }

    #[test]
    fn test_from_push_near_axis_quantizes_to_axis() {
        // Slope well under tan(22.5): axis wins.
        assert_eq!(Direction::from_push(Vec2::new(5.0, 0.5)), Some(Direction::East));
        // Exactly on the octant boundary: tie resolves toward the axis.
        assert_eq!(
            Direction::from_push(Vec2::new(1.0, OCTANT_TAN)),
            Some(Direction::East)
        );
        // Slope past the boundary: diagonal.
        assert_eq!(Direction::from_push(Vec2::new(1.0, 0.9)), Some(Direction::SouthEast));
    }

    #[test]
    fn test_wings_table() {
        let nw = Direction::NorthWest.wings();
        assert!(nw.contains(Direction::East) && nw.contains(Direction::South));
        assert_eq!(nw.len(), 2);

        let north = Direction::North.wings();
        assert!(north.contains(Direction::SouthEast) && north.contains(Direction::SouthWest));

        assert!(Direction::Center.wings().is_empty());
    }

    #[test]
    fn test_hit_set_ops() {
        let mut hits = HitSet::EMPTY;
        assert!(hits.is_empty());
        hits.insert(Direction::South);
        hits |= HitSet::of(Direction::East);
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(Direction::South));
        assert!(!hits.contains(Direction::North));

        let wings = Direction::NorthWest.wings();
        assert!(hits.intersects(wings));
        let open = wings.difference(HitSet::of(Direction::South));
        assert_eq!(open.as_single(), Some(Direction::East));
        assert_eq!(wings.as_single(), None);
    }
}
