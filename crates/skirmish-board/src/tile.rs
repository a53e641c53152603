//! Terrain kinds and the players that stand on them.

use std::fmt;

/// Terrain of a single board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TileKind {
    /// Plain ground.
    #[default]
    Base,
    /// Slippery ice: entering it is free.
    Ice,
    /// Shallow water: slow to wade through.
    Water,
    Wall,
    Door { open: bool },
}

impl TileKind {
    pub const BASE_COST: u32 = 1;
    pub const ICE_COST: u32 = 0;
    pub const WATER_COST: u32 = 2;
    pub const OPEN_DOOR_COST: u32 = 1;

    /// Movement points spent entering this terrain, or `None` if it cannot
    /// be entered.
    pub const fn move_cost(self) -> Option<u32> {
        match self {
            Self::Base => Some(Self::BASE_COST),
            Self::Ice => Some(Self::ICE_COST),
            Self::Water => Some(Self::WATER_COST),
            Self::Door { open: true } => Some(Self::OPEN_DOOR_COST),
            Self::Wall | Self::Door { open: false } => None,
        }
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.move_cost().is_some()
    }

    #[inline]
    pub const fn is_door(self) -> bool {
        matches!(self, Self::Door { .. })
    }

    /// Character used for this terrain in text layouts.
    pub const fn glyph(self) -> char {
        match self {
            Self::Base => '.',
            Self::Ice => 'i',
            Self::Water => 'w',
            Self::Wall => '#',
            Self::Door { open: false } => '+',
            Self::Door { open: true } => '/',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Base),
            'i' => Some(Self::Ice),
            'w' => Some(Self::Water),
            '#' => Some(Self::Wall),
            '+' => Some(Self::Door { open: false }),
            '/' => Some(Self::Door { open: true }),
            _ => None,
        }
    }
}

/// Identifies a player's character on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TileKind; 6] = [
        TileKind::Base,
        TileKind::Ice,
        TileKind::Water,
        TileKind::Wall,
        TileKind::Door { open: false },
        TileKind::Door { open: true },
    ];

    #[test]
    fn costs() {
        assert_eq!(TileKind::Base.move_cost(), Some(1));
        assert_eq!(TileKind::Ice.move_cost(), Some(0));
        assert_eq!(TileKind::Water.move_cost(), Some(2));
        assert_eq!(TileKind::Door { open: true }.move_cost(), Some(1));
        assert!(!TileKind::Wall.is_walkable());
        assert!(!TileKind::Door { open: false }.is_walkable());
    }

    #[test]
    fn glyphs_are_unique_and_invertible() {
        for kind in ALL {
            assert_eq!(TileKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(TileKind::from_glyph('x'), None);
    }

    #[test]
    fn doors() {
        assert!(TileKind::Door { open: false }.is_door());
        assert!(!TileKind::Wall.is_door());
    }
}
