//! This crate simply defines the base world generator trait for use by other crates.

use glam::IVec2;

use gw_core::{Biome, Chunk, ChunkPos, LocalPos, TileId};

/// Describes how to synthesize the tiles of a world.
pub trait WorldGenerator: Send + Sync {
    /// Returns the tile that generates at the provided coordinate.
    ///
    /// # Purity
    ///
    /// This function is expected to be pure. Calling it multiple times with
    /// the same `pos` value must produce the same exact tile: the world
    /// silently evicts and regenerates chunks, and relies on this to do so
    /// without the terrain shifting under the player.
    fn tile_at(&self, pos: IVec2) -> TileId;

    /// Returns the biome the provided coordinate belongs to.
    ///
    /// The same purity requirement as [`tile_at`](WorldGenerator::tile_at)
    /// applies.
    fn biome_at(&self, pos: IVec2) -> Biome;

    /// Generates the chunk at the provided position.
    ///
    /// The returned chunk has every cell synthesized (and therefore a
    /// consistent solidity cache) and is marked loaded.
    fn generate(&self, pos: ChunkPos) -> Chunk {
        let origin = pos.origin();
        let mut chunk = Chunk::empty();
        for local in LocalPos::iter_all() {
            chunk.set_tile(local, self.tile_at(origin + local.to_ivec2()));
        }
        chunk.mark_loaded();
        chunk
    }

    /// Prints debug information about the world generator using the provided
    /// buffer.
    fn debug_info(&self, buf: &mut String) {
        let _ = buf;
    }
}
