//! **skirmish-core** — geometry shared by the skirmish board crates.
//!
//! This crate provides the coordinate types every other crate speaks:
//! a (row, column) [`Coord`] and an origin-anchored [`Bounds`] rectangle
//! with row-major flat indexing.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Coord};
