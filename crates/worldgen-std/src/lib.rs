//! The standard world generator.
//!
//! Generation is layered, one direction only: noise ([`noise::NoiseField`])
//! feeds the terrain fields ([`terrain`]), which feed biome classification
//! ([`biomes`]), which feeds tile synthesis ([`synth`]). Everything is a pure
//! function of the world coordinate and the seed, except the openly mutable
//! noise memo.

use glam::IVec2;

use gw_core::{Biome, TileId};
use gw_rng::{FromRng, Rng};
use gw_worldgen_core::WorldGenerator;

pub mod biomes;
pub mod noise;
pub mod terrain;

mod synth;
pub use synth::*;

use noise::NoiseField;

/// The standard [`WorldGenerator`] implementation.
pub struct StandardWorldGenerator {
    /// The shared noise field all derived channels sample.
    noise: NoiseField,
    /// The per-tile synthesis rules.
    synth: Synthesizer,
}

impl FromRng for StandardWorldGenerator {
    fn from_rng(rng: &mut impl Rng) -> Self {
        Self {
            noise: NoiseField::from_rng(rng),
            synth: Synthesizer::from_rng(rng),
        }
    }
}

impl StandardWorldGenerator {
    /// Creates a new [`StandardWorldGenerator`] from the provided seed.
    pub fn from_seed<R: Rng>(seed: u64) -> Self {
        Self::from_rng(&mut R::from_seed(seed))
    }

    /// Returns the shared noise field of this generator.
    #[inline]
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }
}

impl WorldGenerator for StandardWorldGenerator {
    #[profiling::function]
    fn tile_at(&self, pos: IVec2) -> TileId {
        self.synth.tile_at(&self.noise, pos)
    }

    fn biome_at(&self, pos: IVec2) -> Biome {
        biomes::classify(&self.noise, pos)
    }

    fn debug_info(&self, buf: &mut String) {
        use std::fmt::Write;

        let _ = writeln!(buf, "Noise cells: {}", self.noise.memo_len());
    }
}
