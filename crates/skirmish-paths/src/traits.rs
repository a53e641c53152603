use std::fmt::Debug;
use std::hash::Hash;

use skirmish_core::Coord;

/// Data a walkable tile exposes to the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walkable {
    /// Cost of entering the tile. Zero means free entry.
    pub move_cost: u32,
    /// Whether a player currently stands on the tile.
    pub occupied: bool,
}

/// What a tile allows a mover to do.
///
/// Walkable-only data is only reachable through [`walkable`](Self::walkable),
/// so a blocked tile can never be asked for a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Passage {
    /// Never enterable (walls, closed doors, void).
    Blocked,
    /// Enterable terrain.
    Open(Walkable),
}

impl Passage {
    /// Shorthand for an unoccupied walkable tile.
    #[inline]
    pub const fn open(move_cost: u32) -> Self {
        Self::Open(Walkable {
            move_cost,
            occupied: false,
        })
    }

    /// Shorthand for a walkable tile holding a player.
    #[inline]
    pub const fn occupied(move_cost: u32) -> Self {
        Self::Open(Walkable {
            move_cost,
            occupied: true,
        })
    }

    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Narrow to the walkable capability.
    #[inline]
    pub fn walkable(self) -> Option<Walkable> {
        match self {
            Self::Open(w) => Some(w),
            Self::Blocked => None,
        }
    }
}

/// Read-only view of a grid that reachability searches run against.
///
/// Tiles are identified by cheap, copyable handles (typically an index into
/// the provider's own tile storage); the search never copies tile data.
pub trait GridProvider {
    /// Stable identity of a tile.
    type Tile: Copy + Eq + Hash + Ord + Debug;

    /// Resolve a coordinate. Out-of-bounds coordinates yield `None`.
    fn tile_at(&self, c: Coord) -> Option<Self::Tile>;

    /// Append the tiles adjacent to `tile` into `buf`. The caller clears
    /// `buf` before calling. Order must be stable between calls.
    fn neighbours_of(&self, tile: Self::Tile, buf: &mut Vec<Self::Tile>);

    /// Current passage state of `tile`.
    fn passage(&self, tile: Self::Tile) -> Passage;
}

impl<G: GridProvider + ?Sized> GridProvider for &G {
    type Tile = G::Tile;

    #[inline]
    fn tile_at(&self, c: Coord) -> Option<Self::Tile> {
        (**self).tile_at(c)
    }

    #[inline]
    fn neighbours_of(&self, tile: Self::Tile, buf: &mut Vec<Self::Tile>) {
        (**self).neighbours_of(tile, buf)
    }

    #[inline]
    fn passage(&self, tile: Self::Tile) -> Passage {
        (**self).passage(tile)
    }
}
