//! The stateful side of the world: the chunk store, the streaming controller
//! and the collision/mutation query surface.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use glam::{IVec2, Vec2};
use hashbrown::HashMap;

use gw_core::utility::chunk_and_local_pos;
use gw_core::{Biome, Chunk, ChunkPos, TileId};
use gw_rng::DefaultRng;
use gw_worldgen_core::WorldGenerator;
use gw_worldgen_std::StandardWorldGenerator;

use crate::Config;

/// A collection of chunks.
type Chunks = HashMap<ChunkPos, Chunk, BuildHasherDefault<rustc_hash::FxHasher>>;

/// What a successful harvest produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Harvest {
    /// The tile that was removed from the world.
    pub removed: TileId,
    /// The kind of resource the harvest yielded.
    pub kind: ResourceKind,
    /// How many units of the resource the harvest yielded.
    pub amount: u32,
}

/// A resource obtained by harvesting a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Wood, obtained from trees.
    Wood,
    /// Stone, obtained from stone deposits.
    Stone,
}

/// A bounded, mutable view of the generated world.
///
/// The [`World`] is the sole owner of every resident [`Chunk`]. Unmutated
/// tiles are exactly reproducible from the generator, which is what allows
/// chunks to be silently evicted and later regenerated; mutated tiles live in
/// the resident chunk's tile cache and diverge from pure generation until the
/// chunk is evicted.
///
/// All reads go through the cache first: a resident chunk answers from its
/// (possibly mutated) tile grid, and only coordinates inside unloaded chunks
/// fall back to live synthesis. Rendering, collision and harvesting therefore
/// always agree on what a tile is.
pub struct World {
    /// The list of chunks that are currently loaded in memory.
    chunks: Chunks,
    /// The generator used to synthesize chunk contents.
    generator: Arc<dyn WorldGenerator>,
    /// The width of the world, in tiles.
    world_width: i32,
    /// The height of the world, in tiles.
    world_height: i32,
    /// The streaming radius around the player, in chunks.
    render_distance: i32,
    /// The side-length of a tile, in world-space units.
    tile_size: i32,
}

impl World {
    /// Creates a new [`World`] that uses the provided [`WorldGenerator`] to
    /// populate chunks.
    pub fn new(config: &Config, generator: Arc<dyn WorldGenerator>) -> Self {
        if config.world_width % Chunk::SIDE != 0 || config.world_height % Chunk::SIDE != 0 {
            gw_log::warning!(
                "world size {}x{} is not a multiple of the chunk side ({}); \
                 the trailing strip will never load",
                config.world_width,
                config.world_height,
                Chunk::SIDE,
            );
        }

        Self {
            chunks: Chunks::default(),
            generator,
            world_width: config.world_width,
            world_height: config.world_height,
            render_distance: config.render_distance,
            tile_size: config.tile_size,
        }
    }

    /// Creates a new [`World`] driven by the standard generator, seeded from
    /// the provided configuration.
    pub fn from_config(config: &Config) -> Self {
        let seed = config.seed();
        gw_log::info!("creating a new world with seed: {seed}");
        let generator = Arc::new(StandardWorldGenerator::from_seed::<DefaultRng>(seed));
        Self::new(config, generator)
    }

    /// Returns the generator that the world uses to populate chunks.
    #[inline]
    pub fn generator(&self) -> &dyn WorldGenerator {
        &*self.generator
    }

    /// Returns the number of chunks that are currently loaded in memory.
    #[inline]
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the chunk at the provided position, if it is resident.
    #[inline]
    pub fn get_existing_chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Returns whether the provided tile coordinate is inside the world.
    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        (0..self.world_width).contains(&pos.x) && (0..self.world_height).contains(&pos.y)
    }

    /// Returns whether the provided chunk coordinate is inside the world.
    #[inline]
    fn chunk_in_bounds(&self, pos: ChunkPos) -> bool {
        (0..self.world_width / Chunk::SIDE).contains(&pos.x)
            && (0..self.world_height / Chunk::SIDE).contains(&pos.y)
    }

    /// Returns the chunk containing the provided world-space position.
    #[inline]
    fn chunk_of_world(&self, pos: Vec2) -> ChunkPos {
        ChunkPos::from_world_pos(pos / self.tile_size as f32)
    }

    /// Loads the chunk at the provided position, synthesizing every tile in
    /// it.
    ///
    /// This is a no-op if the chunk is already resident or outside the world
    /// bounds. It is a bulk synchronous operation costing `Chunk::SIZE`
    /// synthesis calls.
    #[profiling::function]
    pub fn load_chunk(&mut self, pos: ChunkPos) {
        if !self.chunk_in_bounds(pos) || self.chunks.contains_key(&pos) {
            return;
        }

        let chunk = self.generator.generate(pos);
        gw_log::trace!("loaded chunk ({}, {})", pos.x, pos.y);
        self.chunks.insert(pos, chunk);
    }

    /// Loads at most one missing chunk in the square streaming window around
    /// the player.
    ///
    /// The window is scanned in a fixed order (outer X, inner Y) and the
    /// first missing in-bounds chunk is loaded; the scan then stops so a
    /// single tick never pays for more than one chunk synthesis. A fast
    /// moving player sees the remaining holes fill in over the next ticks.
    ///
    /// Returns the position of the chunk that was loaded, if any.
    #[profiling::function]
    pub fn stream_around(&mut self, player_pos: Vec2) -> Option<ChunkPos> {
        let center = self.chunk_of_world(player_pos);

        for dx in -self.render_distance..=self.render_distance {
            for dy in -self.render_distance..=self.render_distance {
                let pos = center + IVec2::new(dx, dy);
                if self.chunk_in_bounds(pos) && !self.chunks.contains_key(&pos) {
                    self.load_chunk(pos);
                    return Some(pos);
                }
            }
        }

        None
    }

    /// Evicts every resident chunk that lies outside the retention window
    /// around the player.
    ///
    /// The retention window is one chunk wider than the streaming window, so
    /// a chunk sitting right on the streaming boundary is not repeatedly
    /// loaded and evicted as the player wobbles across a chunk border.
    /// Evicting a chunk discards its mutations; the area regenerates pristine
    /// if the player returns.
    #[profiling::function]
    pub fn evict_distant(&mut self, player_pos: Vec2) {
        let center = self.chunk_of_world(player_pos);
        let keep = self.render_distance + 1;

        let before = self.chunks.len();
        self.chunks.retain(|&pos, _| pos.axis_distance(center) <= keep);

        let evicted = before - self.chunks.len();
        if evicted > 0 {
            gw_log::trace!("evicted {evicted} chunks around ({}, {})", center.x, center.y);
            self.chunks.shrink_to_fit();
        }
    }

    /// Returns whether the tile at the provided coordinate blocks movement.
    ///
    /// Coordinates outside the world read as solid (the world edge is
    /// impassable). Coordinates inside an unloaded chunk read as non-solid:
    /// streaming lags behind a fast player, and blocking on a permissive
    /// default was judged worse than briefly lax collision.
    pub fn is_tile_solid(&self, pos: IVec2) -> bool {
        if !self.in_bounds(pos) {
            return true;
        }

        let (chunk_pos, local) = chunk_and_local_pos(pos);
        match self.chunks.get(&chunk_pos) {
            Some(chunk) => chunk.is_solid(local),
            None => false,
        }
    }

    /// Returns the tile at the provided coordinate, or [`None`] if it is
    /// outside the world.
    ///
    /// Resident chunks answer from their tile cache, so this reflects
    /// harvesting; only coordinates inside unloaded chunks fall back to live
    /// synthesis.
    pub fn tile_at(&self, pos: IVec2) -> Option<TileId> {
        if !self.in_bounds(pos) {
            return None;
        }

        let (chunk_pos, local) = chunk_and_local_pos(pos);
        match self.chunks.get(&chunk_pos) {
            Some(chunk) => chunk.tile(local),
            None => Some(self.generator.tile_at(pos)),
        }
    }

    /// Replaces the tile at the provided coordinate, provided the chunk is
    /// resident and the tile currently is `expected`.
    ///
    /// On success the tile's solidity bit is recomputed and `true` is
    /// returned. Unresident chunks and mismatched tiles fail silently with
    /// `false`; harvesting a tile that is no longer a tree must not overwrite
    /// whatever took its place.
    pub fn mutate_tile(&mut self, pos: IVec2, expected: TileId, new: TileId) -> bool {
        let (chunk_pos, local) = chunk_and_local_pos(pos);

        let Some(chunk) = self.chunks.get_mut(&chunk_pos) else {
            return false;
        };

        if chunk.tile(local) != Some(expected) {
            return false;
        }

        chunk.set_tile(local, new);
        gw_log::trace!(
            "tile ({}, {}) mutated: {expected:?} -> {new:?}",
            pos.x,
            pos.y
        );
        true
    }

    /// Harvests the tile at the provided coordinate, if it is resident and
    /// harvestable.
    ///
    /// Trees leave grass behind and yield wood; stone deposits leave dirt
    /// behind and yield stone. Range and tool checks are the caller's
    /// responsibility.
    pub fn harvest(&mut self, pos: IVec2) -> Option<Harvest> {
        let (chunk_pos, local) = chunk_and_local_pos(pos);
        let tile = self.chunks.get(&chunk_pos)?.tile(local)?;
        let replacement = tile.harvested_into()?;

        let (kind, amount) = match tile {
            TileId::Tree => (ResourceKind::Wood, 10),
            TileId::Stone => (ResourceKind::Stone, 5),
            _ => return None,
        };

        if !self.mutate_tile(pos, tile, replacement) {
            return None;
        }

        Some(Harvest {
            removed: tile,
            kind,
            amount,
        })
    }

    /// Finds a safe spawn coordinate: open grass in a grassland biome.
    ///
    /// Spirals outward from the center of the world and returns the first
    /// candidate; falls back to the center if none is found nearby.
    pub fn find_spawn(&self) -> IVec2 {
        let center = IVec2::new(self.world_width / 2, self.world_height / 2);

        for radius in 0..100 {
            for angle in (0..360).step_by(10) {
                let rad = (angle as f32).to_radians();
                let pos = center
                    + IVec2::new(
                        (radius as f32 * rad.cos()) as i32,
                        (radius as f32 * rad.sin()) as i32,
                    );

                if self.in_bounds(pos)
                    && self.generator.biome_at(pos) == Biome::Grassland
                    && self.generator.tile_at(pos) == TileId::Grass
                {
                    return pos;
                }
            }
        }

        center
    }
}
