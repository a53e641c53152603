use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use skirmish_core::Coord;

use crate::frontier::Frontier;
use crate::traits::GridProvider;

/// The cheapest discovered way to reach one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<T> {
    /// Sum of the entry costs of every step after the start.
    pub cost: u32,
    /// Tiles from the start to the destination, both inclusive.
    pub path: Vec<T>,
}

/// Search-local node: a tile, its accumulated cost and how we got there.
#[derive(Debug)]
struct PathNode<T> {
    tile: T,
    cost: u32,
    path: Vec<T>,
}

/// Every tile reachable within a movement budget, each with one cheapest path.
///
/// Iteration is ordered by tile handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable<T: Ord> {
    start: Option<T>,
    routes: BTreeMap<T, Route<T>>,
}

impl<T: Copy + Ord> Reachable<T> {
    fn empty() -> Self {
        Self {
            start: None,
            routes: BTreeMap::new(),
        }
    }

    /// The tile the search started from, if it was walkable.
    pub fn start(&self) -> Option<T> {
        self.start
    }

    /// Cheapest path to `tile`, start and destination included.
    pub fn get(&self, tile: T) -> Option<&[T]> {
        self.routes.get(&tile).map(|r| r.path.as_slice())
    }

    /// Total movement cost of the path to `tile`.
    pub fn cost(&self, tile: T) -> Option<u32> {
        self.routes.get(&tile).map(|r| r.cost)
    }

    pub fn route(&self, tile: T) -> Option<&Route<T>> {
        self.routes.get(&tile)
    }

    pub fn contains(&self, tile: T) -> bool {
        self.routes.contains_key(&tile)
    }

    /// Number of reachable tiles, the start included.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Every reachable tile.
    pub fn tiles(&self) -> impl Iterator<Item = T> + '_ {
        self.routes.keys().copied()
    }

    /// Every reachable tile other than the start.
    pub fn destinations(&self) -> impl Iterator<Item = T> + '_ {
        let start = self.start;
        self.tiles().filter(move |t| Some(*t) != start)
    }

    /// `(tile, path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, &[T])> + '_ {
        self.routes.iter().map(|(t, r)| (*t, r.path.as_slice()))
    }

    /// `(tile, route)` pairs.
    pub fn routes(&self) -> impl Iterator<Item = (T, &Route<T>)> + '_ {
        self.routes.iter().map(|(t, r)| (*t, r))
    }

    /// Drop the costs, keeping the plain tile → path mapping.
    pub fn into_paths(self) -> BTreeMap<T, Vec<T>> {
        self.routes.into_iter().map(|(t, r)| (t, r.path)).collect()
    }
}

/// Computes where a mover can go on a grid with a fixed movement budget.
///
/// Both the grid and the budget are fixed for the life of the pathfinder;
/// build one per character per turn. Each query allocates its own frontier
/// and visited map, so several pathfinders may share one grid.
pub struct Pathfinder<'g, G: GridProvider> {
    grid: &'g G,
    budget: u32,
}

impl<'g, G: GridProvider> Pathfinder<'g, G> {
    /// Create a pathfinder over `grid` spending at most `budget` per path.
    pub fn new(grid: &'g G, budget: u32) -> Self {
        Self { grid, budget }
    }

    /// Maximum total cost of any returned path.
    #[inline]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    #[inline]
    pub fn grid(&self) -> &'g G {
        self.grid
    }

    /// Uniform-cost search from `start` over every affordable tile.
    ///
    /// Returns an empty result if `start` resolves to no tile or to a tile
    /// that is not walkable. The start tile's occupancy is not checked, so a
    /// player may search from the tile they stand on; every other occupied
    /// tile blocks expansion. Equal-cost candidates settle in the order they
    /// were discovered, with neighbours discovered in provider order.
    pub fn find_all_reachable_tiles(&self, start: Coord) -> Reachable<G::Tile> {
        let Some(start_tile) = self.grid.tile_at(start) else {
            debug!("reachability from {start}: no tile");
            return Reachable::empty();
        };
        if !self.grid.passage(start_tile).is_walkable() {
            debug!("reachability from {start}: start tile is not walkable");
            return Reachable::empty();
        }

        let mut visited: HashMap<G::Tile, PathNode<G::Tile>> = HashMap::new();
        let mut frontier = Frontier::new();
        frontier.push(
            PathNode {
                tile: start_tile,
                cost: 0,
                path: vec![start_tile],
            },
            0,
        );

        let mut nbuf = Vec::with_capacity(8);

        while let Some((current, _)) = frontier.pop() {
            // Stale or duplicate entry.
            if visited
                .get(&current.tile)
                .is_some_and(|settled| settled.cost <= current.cost)
            {
                continue;
            }

            let tile = current.tile;
            let cost = current.cost;
            trace!("settled {tile:?} at cost {cost}");
            visited.insert(tile, current);

            nbuf.clear();
            self.grid.neighbours_of(tile, &mut nbuf);

            for &next in nbuf.iter() {
                let Some(w) = self.grid.passage(next).walkable() else {
                    continue;
                };
                if w.occupied {
                    continue;
                }
                let candidate = cost.saturating_add(w.move_cost);
                if candidate > self.budget {
                    continue;
                }
                if visited
                    .get(&next)
                    .is_some_and(|settled| settled.cost <= candidate)
                {
                    continue;
                }

                let prefix = visited.get(&tile).map_or(&[][..], |n| n.path.as_slice());
                let mut path = Vec::with_capacity(prefix.len() + 1);
                path.extend_from_slice(prefix);
                path.push(next);
                frontier.push(
                    PathNode {
                        tile: next,
                        cost: candidate,
                        path,
                    },
                    candidate,
                );
            }
        }

        debug!(
            "reachability from {start}: {} tiles within budget {} ({} frontier pushes)",
            visited.len(),
            self.budget,
            frontier.pushed()
        );

        let routes = visited
            .into_values()
            .filter(|n| n.cost <= self.budget)
            .map(|n| {
                (
                    n.tile,
                    Route {
                        cost: n.cost,
                        path: n.path,
                    },
                )
            })
            .collect();

        Reachable {
            start: Some(start_tile),
            routes,
        }
    }
}

/// Total entry cost of walking `path`, excluding its first tile.
///
/// Returns `None` if any step after the first is not walkable. Occupancy is
/// not considered.
pub fn path_cost<G: GridProvider>(grid: &G, path: &[G::Tile]) -> Option<u32> {
    path.iter().skip(1).try_fold(0u32, |acc, &t| {
        grid.passage(t)
            .walkable()
            .map(|w| acc.saturating_add(w.move_cost))
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route {
            cost: 3,
            path: vec![4usize, 5, 9],
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
