//! Tile data model
//!
//! Tiles are small immutable values interned in a map's palette and referenced
//! by index from the cell grid; nothing owns a tile beyond the palette.

mod resolve;

/// Side length of a tile cell in world units, constant across the system
pub const TILE_SIZE: f32 = 16.0;

/// Closed enumeration of tile collision shapes
///
/// The diagonal suffix names the corner holding the wall triangle's right
/// angle; the wall fills the half of the tile on that corner's side of the
/// diagonal. Rails are named for the edge they guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileShape {
    SolidWall,
    SolidFloor,
    /// Hole collision is unimplemented content; resolving against it is fatal
    SolidHole,
    DiagFloorWallNw,
    DiagFloorWallNe,
    DiagFloorWallSe,
    DiagFloorWallSw,
    RailNorth,
    RailEast,
    RailSouth,
    RailWest,
}

/// Coarse obstruction level used to exclude tiles before precise geometry
///
/// Ordered so that `Wall` is the strongest presence: a query for "at least
/// wall" excludes floors, holes and rails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhysicalPresence {
    Rail,
    Hole,
    Floor,
    Wall,
}

/// Movement-speed / footstep-audio modifier; not interpreted by this core
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    #[default]
    Normal,
    Water,
    Ice,
}

/// Opaque handle to a tile's visual content; rendering is out of scope here
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GraphicId(pub u32);

/// One tile of level geometry: shape, surface and visual handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    pub shape: TileShape,
    pub surface: SurfaceType,
    pub graphic: GraphicId,
}

impl Tile {
    pub fn new(shape: TileShape, surface: SurfaceType, graphic: GraphicId) -> Self {
        Self { shape, surface, graphic }
    }

    /// Tile with the given shape and default surface/graphic
    pub fn from_shape(shape: TileShape) -> Self {
        Self::new(shape, SurfaceType::Normal, GraphicId::default())
    }

    /// The fixed shape-to-presence table
    pub fn presence(&self) -> PhysicalPresence {
        match self.shape {
            TileShape::SolidWall
            | TileShape::DiagFloorWallNw
            | TileShape::DiagFloorWallNe
            | TileShape::DiagFloorWallSe
            | TileShape::DiagFloorWallSw => PhysicalPresence::Wall,
            TileShape::SolidFloor => PhysicalPresence::Floor,
            TileShape::SolidHole => PhysicalPresence::Hole,
            TileShape::RailNorth
            | TileShape::RailEast
            | TileShape::RailSouth
            | TileShape::RailWest => PhysicalPresence::Rail,
        }
    }

    /// Whether this tile's presence satisfies a minimum-presence filter
    pub fn has_min_presence(&self, min_presence: PhysicalPresence) -> bool {
        self.presence() >= min_presence
    }
}
