//! The skirmish game board.
//!
//! A [`Board`] stores terrain and character positions for one match and
//! serves as the [`GridProvider`](skirmish_paths::GridProvider) that
//! movement searches run against:
//!
//! ```
//! use skirmish_board::{Board, BoardConfig, PlayerId};
//! use skirmish_core::Coord;
//!
//! let mut board = Board::from_layout(
//!     "1.w.\n.#..",
//!     BoardConfig::default(),
//! )
//! .unwrap();
//! let moved = board.move_player(PlayerId(1), Coord::new(0, 3), 4).unwrap();
//! assert_eq!(moved.cost, 4);
//! ```

mod board;
mod config;
mod error;
mod layout;
mod tile;

pub use board::{Board, Movement, TileId};
pub use config::{BoardConfig, Connectivity};
pub use error::BoardError;
pub use layout::{LayoutError, MapDefinition};
pub use tile::{PlayerId, TileKind};
