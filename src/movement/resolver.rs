//! One-tick movement resolution
//!
//! `step` runs a full simulation tick: trial position from directional input,
//! spatial query over every loaded map, per-tile collision resolution, then
//! the stop/slide policy over the accumulated hit directions. Everything is
//! synchronous and the hit accumulator is scoped to the tick; no collision
//! state survives into the next one.

use crate::core::types::Vec2;
use crate::entity::{Entity, MovementMode};
use crate::map::{Map, TileAndLocation};
use crate::tile::PhysicalPresence;

use super::direction::{Direction, HitSet};

/// Per-tick movement speed of a running entity, in world units per axis.
///
/// Deliberately applied per axis without normalization: diagonal movement
/// covers more ground than axis movement.
pub const RUN_SPEED: f32 = 3.0;

/// Directional input snapshot, polled once at tick start by the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl MoveInput {
    /// Net horizontal input in -1..=1
    pub fn dx(&self) -> i32 {
        self.east as i32 - self.west as i32
    }

    /// Net vertical input in -1..=1, positive southward
    pub fn dy(&self) -> i32 {
        self.south as i32 - self.north as i32
    }

    /// The compass direction this input requests
    pub fn direction(&self) -> Direction {
        // dx/dy are each in range, so the lookup is total.
        Direction::from_offsets(self.dx(), self.dy()).unwrap_or(Direction::Center)
    }
}

/// Advance an entity by one simulation tick against every loaded map.
///
/// Commits the resolved center and updates the entity's movement mode and
/// orientation. `speed` is the per-axis displacement for this tick; pass
/// [`RUN_SPEED`] for normal running.
pub fn step(entity: &mut Entity, input: MoveInput, maps: &[Map], speed: f32) {
    let direction = input.direction();
    if direction == Direction::Center {
        entity.movement_mode = MovementMode::Stand;
    } else {
        entity.movement_mode = MovementMode::Run;
        entity.orientation = direction;
    }

    let start = entity.center;
    let (dx, dy) = direction.offsets();
    let mut pos = start + Vec2::new(dx as f32, dy as f32) * speed;

    // Coarse query across all maps, weakest presence filter; the per-shape
    // resolvers do the narrow testing.
    let mut tiles: Vec<TileAndLocation<'_>> = Vec::new();
    for map in maps {
        map.intersecting_tiles(&mut tiles, pos, entity.radius, entity.layer, PhysicalPresence::Rail);
    }

    // Resolve against every tile before any policy decision; the policy must
    // see the complete hit mask.
    let mut hits = HitSet::EMPTY;
    for t in &tiles {
        hits |= t.tile.resolve_circle(Vec2::new(t.x, t.y), &mut pos, entity.radius);
    }

    if !hits.is_empty() {
        let fatal = direction.antipode();
        let wings = direction.wings();
        if hits.contains(fatal) {
            // Head-on block: discard the trial entirely.
            pos = start;
        } else if hits & wings == wings {
            // Both wings obstructed: cornered.
            pos = start;
        } else if hits.intersects(wings) {
            // One wing open: slide along it, recomputed from the pre-trial
            // center at full speed.
            let open = wings.difference(hits);
            debug_assert_eq!(open.len(), 1, "one wing blocked must leave one open");
            if let Some(way) = open.as_single() {
                let (wx, wy) = way.offsets();
                pos = start + Vec2::new(-wx as f32, -wy as f32) * speed;
            }
        }
        log::trace!("tick hits {hits:?} -> {pos:?}");
    }

    entity.center = pos;
}
