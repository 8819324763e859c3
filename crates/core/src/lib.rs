//! This crate defines the core content of Greenwood, such as [`TileId`] and the
//! other vocabulary types shared by the world and its generators.

mod tile;
pub use tile::*;

mod biome;
pub use biome::*;

mod chunk;
pub use chunk::*;

pub mod utility;
