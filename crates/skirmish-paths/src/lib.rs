//! Movement-budget reachability for turn-based tactical grids.
//!
//! Given a mover's position and how many movement points it may spend,
//! [`Pathfinder::find_all_reachable_tiles`] returns every tile it can reach
//! along with one cheapest path to each. Tiles may cost different amounts to
//! enter (including nothing at all), may be impassable, and may be occupied
//! by other players, which blocks movement through them.
//!
//! The search runs against any [`GridProvider`], which answers tile lookups,
//! neighbour enumeration and per-tile [`Passage`] queries.

mod frontier;
mod reachable;
mod traits;

pub use reachable::{Pathfinder, Reachable, Route, path_cost};
pub use traits::{GridProvider, Passage, Walkable};
