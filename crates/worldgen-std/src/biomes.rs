//! Biome classification.

use glam::IVec2;

use gw_core::Biome;

use crate::noise::NoiseField;
use crate::terrain;

/// The scale of the elevation channel.
const ELEVATION_SCALE: i32 = 150;
/// The scale of the moisture channel.
const MOISTURE_SCALE: i32 = 120;
/// The scale of the temperature channel.
const TEMPERATURE_SCALE: i32 = 180;

/// The offset of the moisture channel within the shared noise field.
const MOISTURE_OFFSET: IVec2 = IVec2::splat(1000);
/// The offset of the temperature channel within the shared noise field.
const TEMPERATURE_OFFSET: IVec2 = IVec2::splat(2000);

/// The elevation of the provided coordinate, in `[0.0, 1.0]`.
pub fn elevation(noise: &NoiseField, pos: IVec2) -> f32 {
    noise.sample(pos, ELEVATION_SCALE)
}

/// The moisture of the provided coordinate, in `[0.0, 1.0]`.
pub fn moisture(noise: &NoiseField, pos: IVec2) -> f32 {
    noise.sample(pos + MOISTURE_OFFSET, MOISTURE_SCALE)
}

/// The temperature of the provided coordinate, in `[0.0, 1.0]`.
pub fn temperature(noise: &NoiseField, pos: IVec2) -> f32 {
    noise.sample(pos + TEMPERATURE_OFFSET, TEMPERATURE_SCALE)
}

/// Classifies the provided coordinate into a [`Biome`].
///
/// The precedence is ordered and the first match wins: River, then Lake,
/// then Mountain, then Forest, then Grassland. A coordinate close enough to
/// a river is a river no matter how mountainous it is.
pub fn classify(noise: &NoiseField, pos: IVec2) -> Biome {
    if terrain::river_distance(noise, pos) < terrain::RIVER_THRESHOLD {
        return Biome::River;
    }

    let moisture = moisture(noise, pos);
    if elevation(noise, pos) < 0.25 && moisture > 0.4 {
        return Biome::Lake;
    }

    if terrain::mountain_height(noise, pos) > terrain::MOUNTAIN_THRESHOLD {
        return Biome::Mountain;
    }

    let temperature = temperature(noise, pos);
    if moisture > 0.55 && temperature > 0.3 && temperature < 0.8 {
        return Biome::Forest;
    }

    Biome::Grassland
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_rng::{DefaultRng, FromRng, Rng};

    fn field() -> NoiseField {
        NoiseField::from_rng(&mut DefaultRng::from_seed(1234))
    }

    #[test]
    fn river_dominates_everything() {
        let noise = field();
        let mut seen_mountainous_river = false;

        for x in 0..300 {
            for y in 0..300 {
                let pos = IVec2::new(x * 3, y * 3);
                if terrain::river_distance(&noise, pos) < terrain::RIVER_THRESHOLD {
                    assert_eq!(classify(&noise, pos), Biome::River);
                    if terrain::mountain_height(&noise, pos) > terrain::MOUNTAIN_THRESHOLD {
                        seen_mountainous_river = true;
                    }
                }
            }
        }

        // The sweep must have exercised the interesting case: a coordinate
        // that is both on a river and in a mountain range.
        assert!(seen_mountainous_river);
    }

    #[test]
    fn classification_is_deterministic() {
        let noise = field();
        for x in 0..50 {
            for y in 0..50 {
                let pos = IVec2::new(x * 31, y * 17);
                assert_eq!(classify(&noise, pos), classify(&noise, pos));
            }
        }
    }

    #[test]
    fn every_biome_generates_somewhere() {
        let noise = field();
        let mut seen = [false; 5];
        for x in 0..400 {
            for y in 0..400 {
                let index = classify(&noise, IVec2::new(x * 5, y * 5)) as usize;
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&b| b), "missing biome in sweep: {seen:?}");
    }
}
