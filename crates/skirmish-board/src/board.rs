//! The game board: an arena of tiles addressed by [`TileId`].

use std::collections::BTreeMap;

use log::debug;
use skirmish_core::{Bounds, Coord};
use skirmish_paths::{GridProvider, Passage, Pathfinder, Reachable, Walkable};

use crate::config::{BoardConfig, Connectivity};
use crate::error::BoardError;
use crate::tile::{PlayerId, TileKind};

/// Handle to a tile of a [`Board`]: its row-major index.
///
/// Handles are only meaningful for the board that produced them; a board
/// treats a handle it does not know as blocked terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(usize);

impl TileId {
    /// Row-major index of the tile.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    kind: TileKind,
    occupant: Option<PlayerId>,
}

/// A completed character move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub player: PlayerId,
    pub from: Coord,
    pub to: Coord,
    /// Tiles walked, `from` and `to` included.
    pub path: Vec<Coord>,
    /// Movement points spent.
    pub cost: u32,
}

/// A rectangular game board of terrain tiles and the characters on them.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: Bounds,
    slots: Vec<Slot>,
    players: BTreeMap<PlayerId, TileId>,
    config: BoardConfig,
}

impl Board {
    /// Create a board of the given size filled with `fill`.
    pub fn new(bounds: Bounds, fill: TileKind, config: BoardConfig) -> Self {
        Self {
            bounds,
            slots: vec![
                Slot {
                    kind: fill,
                    occupant: None,
                };
                bounds.len()
            ],
            players: BTreeMap::new(),
            config,
        }
    }

    /// Build a board from row-major terrain. `kinds` must hold exactly
    /// `bounds.len()` entries.
    pub(crate) fn from_kinds(bounds: Bounds, kinds: Vec<TileKind>, config: BoardConfig) -> Self {
        debug_assert_eq!(kinds.len(), bounds.len());
        Self {
            bounds,
            slots: kinds
                .into_iter()
                .map(|kind| Slot {
                    kind,
                    occupant: None,
                })
                .collect(),
            players: BTreeMap::new(),
            config,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Handle of the tile at `c`, or `None` outside the board.
    #[inline]
    pub fn tile_id(&self, c: Coord) -> Option<TileId> {
        self.bounds.index(c).map(TileId)
    }

    /// Coordinate of a tile handle.
    #[inline]
    pub fn coord_of(&self, id: TileId) -> Coord {
        self.bounds.coord(id.0)
    }

    /// Terrain at `c`.
    pub fn kind(&self, c: Coord) -> Option<TileKind> {
        self.slot(c).map(|s| s.kind)
    }

    /// Character standing at `c`.
    pub fn occupant(&self, c: Coord) -> Option<PlayerId> {
        self.slot(c).and_then(|s| s.occupant)
    }

    /// Where `player` currently stands.
    pub fn position_of(&self, player: PlayerId) -> Option<Coord> {
        self.players.get(&player).map(|&id| self.coord_of(id))
    }

    /// Every placed player with its position, ordered by id.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, Coord)> + '_ {
        self.players
            .iter()
            .map(|(&p, &id)| (p, self.bounds.coord(id.0)))
    }

    /// Replace the terrain at `c`.
    ///
    /// A tile holding a character cannot be turned into impassable terrain.
    pub fn set_kind(&mut self, c: Coord, kind: TileKind) -> Result<(), BoardError> {
        let idx = self.index(c)?;
        let slot = &mut self.slots[idx];
        if let Some(by) = slot.occupant {
            if !kind.is_walkable() {
                return Err(BoardError::Occupied { at: c, by });
            }
        }
        slot.kind = kind;
        Ok(())
    }

    /// Open a closed door or close an open one. Returns whether the door is
    /// now open.
    pub fn toggle_door(&mut self, c: Coord) -> Result<bool, BoardError> {
        let idx = self.index(c)?;
        let slot = &mut self.slots[idx];
        let TileKind::Door { open } = slot.kind else {
            return Err(BoardError::NotADoor(c));
        };
        if let Some(by) = slot.occupant {
            return Err(BoardError::Occupied { at: c, by });
        }
        slot.kind = TileKind::Door { open: !open };
        debug!("door at {c} is now {}", if open { "closed" } else { "open" });
        Ok(!open)
    }

    /// Put a player's character on the board.
    pub fn place_player(&mut self, player: PlayerId, c: Coord) -> Result<(), BoardError> {
        if self.players.contains_key(&player) {
            return Err(BoardError::AlreadyPlaced(player));
        }
        let idx = self.enterable(c)?;
        self.slots[idx].occupant = Some(player);
        self.players.insert(player, TileId(idx));
        debug!("{player} placed at {c}");
        Ok(())
    }

    /// Take a player's character off the board, returning where it stood.
    pub fn remove_player(&mut self, player: PlayerId) -> Option<Coord> {
        let id = self.players.remove(&player)?;
        self.slots[id.0].occupant = None;
        let c = self.coord_of(id);
        debug!("{player} removed from {c}");
        Some(c)
    }

    /// A pathfinder over this board spending at most `budget` per path.
    pub fn pathfinder(&self, budget: u32) -> Pathfinder<'_, Board> {
        Pathfinder::new(self, budget)
    }

    /// Tiles `player` can reach this turn with `budget` movement points.
    pub fn reachable_for(
        &self,
        player: PlayerId,
        budget: u32,
    ) -> Result<Reachable<TileId>, BoardError> {
        let from = self
            .position_of(player)
            .ok_or(BoardError::UnknownPlayer(player))?;
        Ok(self.pathfinder(budget).find_all_reachable_tiles(from))
    }

    /// Walk `player` to `to` along the cheapest path within `budget`.
    ///
    /// Moving to the tile the player already stands on is a zero-cost move.
    pub fn move_player(
        &mut self,
        player: PlayerId,
        to: Coord,
        budget: u32,
    ) -> Result<Movement, BoardError> {
        let dest = self.tile_id(to).ok_or(BoardError::OutOfBounds(to))?;
        let reachable = self.reachable_for(player, budget)?;
        let Some(route) = reachable.route(dest) else {
            return Err(BoardError::Unreachable {
                player,
                to,
                budget,
            });
        };

        let path: Vec<Coord> = route.path.iter().map(|&id| self.coord_of(id)).collect();
        let cost = route.cost;
        let origin = reachable.start().unwrap_or(dest);

        self.slots[origin.0].occupant = None;
        self.slots[dest.0].occupant = Some(player);
        self.players.insert(player, dest);

        let from = self.coord_of(origin);
        debug!("{player} moved {from} -> {to} spending {cost}/{budget}");
        Ok(Movement {
            player,
            from,
            to,
            path,
            cost,
        })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn slot(&self, c: Coord) -> Option<&Slot> {
        self.bounds.index(c).map(|i| &self.slots[i])
    }

    fn index(&self, c: Coord) -> Result<usize, BoardError> {
        self.bounds.index(c).ok_or(BoardError::OutOfBounds(c))
    }

    /// Index of `c` if a character could step onto it right now.
    pub(crate) fn enterable(&self, c: Coord) -> Result<usize, BoardError> {
        let idx = self.index(c)?;
        let slot = &self.slots[idx];
        if !slot.kind.is_walkable() {
            return Err(BoardError::NotWalkable(c));
        }
        if let Some(by) = slot.occupant {
            return Err(BoardError::Occupied { at: c, by });
        }
        Ok(idx)
    }
}

impl GridProvider for Board {
    type Tile = TileId;

    #[inline]
    fn tile_at(&self, c: Coord) -> Option<TileId> {
        self.tile_id(c)
    }

    fn neighbours_of(&self, tile: TileId, buf: &mut Vec<TileId>) {
        let c = self.coord_of(tile);
        match self.config.connectivity {
            Connectivity::Four => {
                buf.extend(c.neighbors_4().into_iter().filter_map(|n| self.tile_id(n)))
            }
            Connectivity::Eight => {
                buf.extend(c.neighbors_8().into_iter().filter_map(|n| self.tile_id(n)))
            }
        }
    }

    fn passage(&self, tile: TileId) -> Passage {
        let Some(slot) = self.slots.get(tile.0) else {
            return Passage::Blocked;
        };
        match slot.kind.move_cost() {
            Some(move_cost) => Passage::Open(Walkable {
                move_cost,
                occupied: slot.occupant.is_some(),
            }),
            None => Passage::Blocked,
        }
    }
}
