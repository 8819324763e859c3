//! A deterministic 2D tile world: procedural generation plus chunked
//! streaming.
//!
//! The crate is split in two halves. The stateless half (the `gw-*` crates
//! re-exported below) turns a seed and a coordinate into a tile, always the
//! same way. The stateful half ([`World`]) caches the results in fixed-size
//! chunks, streams them in around a player position, and layers mutation
//! (harvesting) on top of the cache.
//!
//! ```no_run
//! use greenwood::{Config, World};
//!
//! let config = Config::load("config.ron");
//! let mut world = World::from_config(&config);
//! let spawn = world.find_spawn();
//! ```

pub mod config;
pub mod world;

pub use config::Config;
pub use world::{Harvest, ResourceKind, World};

pub use gw_core::{Biome, Chunk, ChunkPos, LocalPos, TileId};
pub use gw_worldgen_core::WorldGenerator;
pub use gw_worldgen_std::StandardWorldGenerator;
