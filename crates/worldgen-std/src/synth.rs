use glam::IVec2;

use gw_core::{Biome, TileId};
use gw_rng::{DefaultRng, FromRng, Mixer, Rng};

use crate::noise::NoiseField;
use crate::{biomes, terrain};

/// Heights above this value are peaks, which are almost always stone.
const PEAK_HEIGHT: f32 = 0.8;

/// Below this height a mountain can still grow the occasional tree.
const TREE_LINE: f32 = 0.6;

/// Maps a coordinate (and its biome) to a concrete tile.
///
/// Every tile gets its own throwaway generator, seeded by hashing the world
/// coordinate, so synthesis never depends on call order or on any shared
/// generator state. Re-synthesizing a coordinate always yields the same tile;
/// that is what lets a chunk be evicted and later regenerated without the
/// world visibly changing.
pub struct Synthesizer {
    /// Hashes a world coordinate into the per-tile generator seed.
    tile_seed: Mixer<2>,
}

impl FromRng for Synthesizer {
    fn from_rng(rng: &mut impl Rng) -> Self {
        Self {
            tile_seed: Mixer::from_rng(rng),
        }
    }
}

impl Synthesizer {
    /// Returns the tile that generates at the provided coordinate.
    pub fn tile_at(&self, noise: &NoiseField, pos: IVec2) -> TileId {
        let mut rng = DefaultRng::from_seed(self.tile_seed.mix_i32([pos.x, pos.y]));
        let draw = rng.next_f32_01();

        match biomes::classify(noise, pos) {
            Biome::River | Biome::Lake => TileId::Water,
            Biome::Mountain => self.mountain_tile(noise, pos, draw, &mut rng),
            Biome::Forest => {
                if draw < 0.75 {
                    TileId::Tree
                } else {
                    TileId::Grass
                }
            }
            Biome::Grassland => {
                if draw < 0.05 {
                    TileId::Tree
                } else {
                    TileId::Grass
                }
            }
        }
    }

    /// The mountain tile rule: more stone the higher the terrain.
    fn mountain_tile(
        &self,
        noise: &NoiseField,
        pos: IVec2,
        draw: f32,
        rng: &mut impl Rng,
    ) -> TileId {
        let height = terrain::mountain_height(noise, pos);

        // The highest peaks are almost always stone.
        if height > PEAK_HEIGHT {
            return if draw < 0.95 {
                TileId::Stone
            } else {
                TileId::Grass
            };
        }

        let stone_chance = (0.3 + (height - terrain::MOUNTAIN_THRESHOLD) * 1.5).min(0.9);
        if draw < stone_chance {
            return TileId::Stone;
        }

        // Below the tree line, what isn't stone has a small chance of a tree.
        if height < TREE_LINE && rng.next_f32_01() < 0.1 {
            return TileId::Tree;
        }

        TileId::Grass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> (NoiseField, Synthesizer) {
        let mut rng = DefaultRng::from_seed(1234);
        (NoiseField::from_rng(&mut rng), Synthesizer::from_rng(&mut rng))
    }

    #[test]
    fn synthesis_is_deterministic() {
        let (noise, synth) = parts();
        for x in 0..60 {
            for y in 0..60 {
                let pos = IVec2::new(x * 13, y * 7);
                assert_eq!(synth.tile_at(&noise, pos), synth.tile_at(&noise, pos));
            }
        }
    }

    #[test]
    fn water_biomes_are_water() {
        let (noise, synth) = parts();
        for x in 0..200 {
            for y in 0..200 {
                let pos = IVec2::new(x * 5, y * 5);
                match biomes::classify(&noise, pos) {
                    Biome::River | Biome::Lake => {
                        assert_eq!(synth.tile_at(&noise, pos), TileId::Water)
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn peaks_are_mostly_stone() {
        let (noise, synth) = parts();
        let (mut stone, mut total) = (0u32, 0u32);

        for x in 0..400 {
            for y in 0..400 {
                let pos = IVec2::new(x * 5, y * 5);
                if biomes::classify(&noise, pos) == Biome::Mountain
                    && terrain::mountain_height(&noise, pos) > PEAK_HEIGHT
                {
                    total += 1;
                    if synth.tile_at(&noise, pos) == TileId::Stone {
                        stone += 1;
                    }
                }
            }
        }

        assert!(total > 100, "sweep found too few peaks: {total}");
        assert!(stone as f32 / total as f32 > 0.9);
    }

    #[test]
    fn mountain_trees_stay_below_the_tree_line() {
        let (noise, synth) = parts();
        let mut below = 0u32;

        for x in 0..600 {
            for y in 0..600 {
                let pos = IVec2::new(x, y);
                if biomes::classify(&noise, pos) == Biome::Mountain
                    && synth.tile_at(&noise, pos) == TileId::Tree
                {
                    assert!(terrain::mountain_height(&noise, pos) < TREE_LINE);
                    below += 1;
                }
            }
        }

        assert!(below > 0, "sweep found no mountain trees");
    }

    #[test]
    fn dirt_never_generates() {
        // Dirt only appears through harvesting; pure synthesis never emits it.
        let (noise, synth) = parts();
        for x in 0..100 {
            for y in 0..100 {
                assert_ne!(synth.tile_at(&noise, IVec2::new(x * 19, y * 23)), TileId::Dirt);
            }
        }
    }
}
