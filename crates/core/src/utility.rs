//! Utility functions for the core library.

use glam::IVec2;

use crate::{Chunk, ChunkPos, LocalPos};

/// Splits a tile coordinate into the chunk that contains it and the local
/// position of the tile within that chunk.
pub fn chunk_and_local_pos(pos: IVec2) -> (ChunkPos, LocalPos) {
    let chunk = ChunkPos::of_tile(pos);
    let local = unsafe {
        // SAFETY: `rem_euclid` by `Chunk::SIDE` is always in `0..Chunk::SIDE`.
        LocalPos::from_xy_unchecked(pos.x.rem_euclid(Chunk::SIDE), pos.y.rem_euclid(Chunk::SIDE))
    };
    (chunk, local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        for &(x, y) in &[(0, 0), (15, 15), (16, 16), (137, 42), (-1, -17)] {
            let pos = IVec2::new(x, y);
            let (chunk, local) = chunk_and_local_pos(pos);
            assert_eq!(chunk.origin() + local.to_ivec2(), pos);
        }
    }
}
