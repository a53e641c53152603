use std::fmt;

use skirmish_core::Coord;

use crate::tile::PlayerId;

/// Errors raised by board edits and character movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The coordinate lies outside the board.
    OutOfBounds(Coord),
    /// The tile cannot hold a character.
    NotWalkable(Coord),
    /// Another character already stands on the tile.
    Occupied { at: Coord, by: PlayerId },
    /// The player has no character on the board.
    UnknownPlayer(PlayerId),
    /// The player already has a character on the board.
    AlreadyPlaced(PlayerId),
    NotADoor(Coord),
    /// The destination is not within the player's movement budget.
    Unreachable {
        player: PlayerId,
        to: Coord,
        budget: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is outside the board"),
            Self::NotWalkable(c) => write!(f, "tile {c} is not walkable"),
            Self::Occupied { at, by } => write!(f, "tile {at} is occupied by {by}"),
            Self::UnknownPlayer(p) => write!(f, "{p} is not on the board"),
            Self::AlreadyPlaced(p) => write!(f, "{p} is already on the board"),
            Self::NotADoor(c) => write!(f, "tile {c} is not a door"),
            Self::Unreachable { player, to, budget } => {
                write!(f, "{player} cannot reach {to} with {budget} movement points")
            }
        }
    }
}

impl std::error::Error for BoardError {}
