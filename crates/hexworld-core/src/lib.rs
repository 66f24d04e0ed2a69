//! Core types for hexagonal world grids.
//!
//! This crate provides the foundation the search engine in `hexworld-paths`
//! builds on:
//!
//! - [`HexCoord`]: axial hex coordinates with cube conversion, neighbor
//!   enumeration and hex distance
//! - [`Tile`]: read-only terrain data (elevation, movement penalty)
//! - [`Region`]: the narrow map-access contract consumed by searches
//! - [`HexMap`]: a sparse tile store implementing [`Region`]

pub mod coords;
pub mod region;
pub mod tile;

pub use coords::{HexCoord, HexDirection};
pub use region::{HexMap, OccupantId, Region};
pub use tile::{IMPASSABLE, Tile};
