//! Boards written as text, and the map definitions saved by the editor.
//!
//! A layout is one line per board row and one glyph per tile (see
//! [`TileKind::glyph`]). The digits `1`–`9` stand for plain ground holding
//! the character of that player. Every line must have the same width;
//! whitespace around the whole layout is ignored. [`MapDefinition`] keeps
//! characters in a separate list so they may stand on any terrain.

use std::fmt;

use skirmish_core::{Bounds, Coord};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::tile::{PlayerId, TileKind};

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no tiles.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither terrain nor a player digit.
    InvalidGlyph { ch: char, at: Coord },
    /// The same player appears twice.
    DuplicatePlayer(PlayerId),
    /// A listed player cannot stand where the map puts them.
    Unplaceable { player: PlayerId, error: BoardError },
    /// A player cannot be written as a layout digit.
    NoGlyph { player: PlayerId, at: Coord },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no tiles"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} is {found} tiles wide, expected {expected}"
            ),
            Self::InvalidGlyph { ch, at } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {at}")
            }
            Self::DuplicatePlayer(p) => write!(f, "layout places {p} more than once"),
            Self::Unplaceable { player, error } => {
                write!(f, "layout cannot place {player}: {error}")
            }
            Self::NoGlyph { player, at } => {
                write!(f, "layout has no glyph for {player} at {at}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl Board {
    /// Build a board from a text layout.
    pub fn from_layout(s: &str, config: BoardConfig) -> Result<Self, LayoutError> {
        let lines: Vec<Vec<char>> = s
            .trim()
            .lines()
            .map(|l| l.trim_end_matches('\r').chars().collect())
            .collect();
        let width = lines.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LayoutError::Empty);
        }
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != width) {
            return Err(LayoutError::InconsistentWidth {
                row,
                expected: width,
                found: line.len(),
            });
        }

        let bounds = Bounds::new(lines.len() as i32, width as i32);
        let mut kinds = Vec::with_capacity(bounds.len());
        let mut players = Vec::new();

        for (c, &ch) in bounds.iter().zip(lines.iter().flatten()) {
            let kind = match (TileKind::from_glyph(ch), ch.to_digit(10)) {
                (Some(kind), _) => kind,
                (None, Some(n)) if n > 0 => {
                    players.push((PlayerId(n), c));
                    TileKind::Base
                }
                _ => return Err(LayoutError::InvalidGlyph { ch, at: c }),
            };
            kinds.push(kind);
        }

        let mut board = Board::from_kinds(bounds, kinds, config);
        for (player, c) in players {
            board.place_listed(player, c)?;
        }
        Ok(board)
    }

    /// Render the board back to a text layout.
    ///
    /// Fails if a character cannot be written as a digit: its id is above
    /// 9 or it stands on anything but plain ground. [`MapDefinition`] has
    /// no such limits.
    pub fn to_layout(&self) -> Result<String, LayoutError> {
        if let Some((player, at)) = self
            .players()
            .find(|&(p, at)| layout_digit(p).is_none() || self.kind(at) != Some(TileKind::Base))
        {
            return Err(LayoutError::NoGlyph { player, at });
        }
        let rows = self.rows_with(|c, kind| {
            self.occupant(c)
                .and_then(layout_digit)
                .unwrap_or(kind.glyph())
        });
        Ok(rows.join("\n"))
    }

    /// Terrain-only rows, characters left out.
    fn terrain_rows(&self) -> Vec<String> {
        self.rows_with(|_, kind| kind.glyph())
    }

    fn rows_with(&self, glyph: impl Fn(Coord, TileKind) -> char) -> Vec<String> {
        let bounds = self.bounds();
        (0..bounds.rows)
            .map(|row| {
                (0..bounds.cols)
                    .map(|col| {
                        let c = Coord::new(row, col);
                        self.kind(c).map_or(' ', |kind| glyph(c, kind))
                    })
                    .collect()
            })
            .collect()
    }

    /// Place a player named by a layout or map definition.
    fn place_listed(&mut self, player: PlayerId, at: Coord) -> Result<(), LayoutError> {
        match self.place_player(player, at) {
            Ok(()) => Ok(()),
            Err(BoardError::AlreadyPlaced(_)) => Err(LayoutError::DuplicatePlayer(player)),
            Err(error) => Err(LayoutError::Unplaceable { player, error }),
        }
    }
}

fn layout_digit(player: PlayerId) -> Option<char> {
    match player.0 {
        n @ 1..=9 => char::from_digit(n, 10),
        _ => None,
    }
}

/// A named map as saved by the map editor.
///
/// Terrain and characters are stored apart, so a character may stand on
/// any walkable terrain and carry any id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Layout rows, top to bottom. Player digits are accepted here too.
    pub rows: Vec<String>,
    /// Characters placed on top of the terrain.
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: Vec<(PlayerId, Coord)>,
}

impl MapDefinition {
    /// Capture `board` under the given name.
    pub fn from_board(
        name: impl Into<String>,
        description: impl Into<String>,
        board: &Board,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rows: board.terrain_rows(),
            players: board.players().collect(),
        }
    }

    /// Size of the map, assuming well-formed rows.
    pub fn bounds(&self) -> Bounds {
        let cols = self.rows.first().map_or(0, |r| r.chars().count());
        Bounds::new(self.rows.len() as i32, cols as i32)
    }

    /// Build a playable board from this definition.
    pub fn to_board(&self, config: BoardConfig) -> Result<Board, LayoutError> {
        let mut board = Board::from_layout(&self.rows.join("\n"), config)?;
        for &(player, at) in &self.players {
            board.place_listed(player, at)?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: &str = "\
#####
#1.w#
#+i2#
#####";

    #[test]
    fn parse_arena() {
        let b = Board::from_layout(ARENA, BoardConfig::default()).unwrap();
        assert_eq!(b.bounds(), Bounds::new(4, 5));
        assert_eq!(b.kind(Coord::new(0, 0)), Some(TileKind::Wall));
        assert_eq!(b.kind(Coord::new(1, 3)), Some(TileKind::Water));
        assert_eq!(b.kind(Coord::new(2, 1)), Some(TileKind::Door { open: false }));
        assert_eq!(b.kind(Coord::new(2, 2)), Some(TileKind::Ice));
        assert_eq!(b.kind(Coord::new(1, 1)), Some(TileKind::Base));
        assert_eq!(b.position_of(PlayerId(1)), Some(Coord::new(1, 1)));
        assert_eq!(b.position_of(PlayerId(2)), Some(Coord::new(2, 3)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let b = Board::from_layout("\n\n..\n..\n\n", BoardConfig::default()).unwrap();
        assert_eq!(b.bounds(), Bounds::new(2, 2));
    }

    #[test]
    fn layout_round_trip() {
        let b = Board::from_layout(ARENA, BoardConfig::default()).unwrap();
        assert_eq!(b.to_layout().unwrap(), ARENA);
    }

    #[test]
    fn to_layout_refuses_players_without_a_digit() {
        let mut b = Board::from_layout("1i", BoardConfig::default()).unwrap();
        b.move_player(PlayerId(1), Coord::new(0, 1), 1).unwrap();
        assert_eq!(
            b.to_layout(),
            Err(LayoutError::NoGlyph {
                player: PlayerId(1),
                at: Coord::new(0, 1)
            })
        );

        let mut b = Board::from_layout("..", BoardConfig::default()).unwrap();
        b.place_player(PlayerId(12), Coord::new(0, 0)).unwrap();
        assert!(matches!(b.to_layout(), Err(LayoutError::NoGlyph { .. })));
    }

    #[test]
    fn empty_layout() {
        assert_eq!(
            Board::from_layout("  \n ", BoardConfig::default()).unwrap_err(),
            LayoutError::Empty
        );
    }

    #[test]
    fn inconsistent_width() {
        assert_eq!(
            Board::from_layout("...\n..\n...", BoardConfig::default()).unwrap_err(),
            LayoutError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_glyph() {
        let err = Board::from_layout("..\n.x", BoardConfig::default()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidGlyph {
                ch: 'x',
                at: Coord::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
        // Zero is not a player.
        assert!(Board::from_layout("0", BoardConfig::default()).is_err());
    }

    #[test]
    fn duplicate_player() {
        assert_eq!(
            Board::from_layout("1.1", BoardConfig::default()).unwrap_err(),
            LayoutError::DuplicatePlayer(PlayerId(1))
        );
    }

    #[test]
    fn map_definition_builds_board() {
        let def = MapDefinition {
            name: "duel".into(),
            description: String::new(),
            rows: vec!["1..".into(), ".#2".into()],
            players: Vec::new(),
        };
        assert_eq!(def.bounds(), Bounds::new(2, 3));
        let b = def.to_board(BoardConfig::default()).unwrap();
        assert_eq!(b.position_of(PlayerId(2)), Some(Coord::new(1, 2)));

        let saved = MapDefinition::from_board("duel", "", &b);
        assert_eq!(saved.rows, vec!["...".to_string(), ".#.".to_string()]);
        assert_eq!(
            saved.players,
            vec![(PlayerId(1), Coord::new(0, 0)), (PlayerId(2), Coord::new(1, 2))]
        );
    }

    #[test]
    fn saved_map_keeps_players_on_any_walkable_terrain() {
        let mut b = Board::from_layout(
            "\
1iw/
2...
3...",
            BoardConfig::default(),
        )
        .unwrap();
        b.move_player(PlayerId(1), Coord::new(0, 1), 0).unwrap();
        b.move_player(PlayerId(2), Coord::new(0, 2), 4).unwrap();
        b.move_player(PlayerId(3), Coord::new(0, 3), 5).unwrap();
        b.place_player(PlayerId(14), Coord::new(2, 3)).unwrap();

        let saved = MapDefinition::from_board("ford", "", &b);
        let loaded = saved.to_board(BoardConfig::default()).unwrap();
        assert_eq!(loaded.players().collect::<Vec<_>>(), b.players().collect::<Vec<_>>());
        assert_eq!(loaded.kind(Coord::new(0, 1)), Some(TileKind::Ice));
        assert_eq!(loaded.kind(Coord::new(0, 2)), Some(TileKind::Water));
        assert_eq!(loaded.kind(Coord::new(0, 3)), Some(TileKind::Door { open: true }));
        assert_eq!(MapDefinition::from_board("ford", "", &loaded), saved);
    }

    #[test]
    fn listed_players_must_fit_the_terrain() {
        let def = MapDefinition {
            name: "bad".into(),
            description: String::new(),
            rows: vec!["1#".into()],
            players: vec![(PlayerId(2), Coord::new(0, 1))],
        };
        assert_eq!(
            def.to_board(BoardConfig::default()).unwrap_err(),
            LayoutError::Unplaceable {
                player: PlayerId(2),
                error: BoardError::NotWalkable(Coord::new(0, 1))
            }
        );

        let def = MapDefinition {
            players: vec![(PlayerId(1), Coord::new(0, 0))],
            rows: vec!["1.".into()],
            ..def
        };
        assert_eq!(
            def.to_board(BoardConfig::default()).unwrap_err(),
            LayoutError::DuplicatePlayer(PlayerId(1))
        );
    }
}
