//! The derived terrain fields: distance to the nearest river and mountain
//! height.
//!
//! Both are pure functions of a tile coordinate, built from [`NoiseField`]
//! samples at different scales and offsets. The offsets exist purely to
//! decorrelate noise channels that share the same underlying field.

use glam::IVec2;

use crate::noise::NoiseField;

/// Distances below this value count as "on a river".
pub const RIVER_THRESHOLD: f32 = 8.0;

/// Mountain heights above this value count as "in a mountain range".
pub const MOUNTAIN_THRESHOLD: f32 = 0.4;

/// Returns the distance from the provided coordinate to the nearest river
/// line.
///
/// Three independently shaped meanders are evaluated (a diagonal sinusoid, a
/// horizontal-period one and a vertical-period one), each perturbed by its
/// own noise channel; the minimum of the three distances wins.
pub fn river_distance(noise: &NoiseField, pos: IVec2) -> f32 {
    let (x, y) = (pos.x as f32, pos.y as f32);

    // Diagonal flow.
    let river_x = x + y * 0.3;
    let river_y = y - x * 0.2;
    let perturb = noise.sample(IVec2::new(river_x as i32, river_y as i32), 50) * 30.0;
    let diagonal = ((river_x * 0.01).sin() * 50.0 + perturb).abs();

    // Horizontal meandering.
    let perturb = noise.sample(pos, 80) * 40.0;
    let horizontal = ((pos.y % 300) as f32 - 150.0 + (x * 0.02).sin() * 30.0 + perturb).abs();

    // Vertical meandering.
    let perturb = noise.sample(pos, 90) * 35.0;
    let vertical = ((pos.x % 400) as f32 - 200.0 + (y * 0.015).sin() * 25.0 + perturb).abs();

    diagonal.min(horizontal).min(vertical)
}

/// Returns the mountain height of the provided coordinate, in `[0.0, 1.0]`.
///
/// The height is the maximum of two noise-perturbed ridge fields (sinusoids
/// of the rotated coordinate sum and difference) and, where it is strong
/// enough, an isolated-peak contribution, plus a fine detail term.
pub fn mountain_height(noise: &NoiseField, pos: IVec2) -> f32 {
    let (x, y) = (pos.x as f32, pos.y as f32);
    let mut height: f32 = 0.0;

    // Primary range: large scale ridges.
    let ridge = ((x + y) * 0.003).sin().abs() * 0.8;
    height = height.max(ridge + noise.sample(pos, 200) * 0.3);

    // Secondary range: perpendicular ridges.
    let ridge = ((x - y) * 0.004).sin().abs() * 0.7;
    height = height.max(ridge + noise.sample(pos + IVec2::splat(500), 150) * 0.25);

    // Isolated peaks only contribute where the product is strong.
    let peaks = noise.sample(pos, 100) * noise.sample(pos + IVec2::splat(1000), 120);
    if peaks > 0.6 {
        height = height.max(peaks);
    }

    // Fine detail.
    height += noise.sample(pos, 50) * 0.15;

    height.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_rng::{DefaultRng, FromRng, Rng};

    fn field() -> NoiseField {
        NoiseField::from_rng(&mut DefaultRng::from_seed(1234))
    }

    #[test]
    fn river_distance_is_non_negative() {
        let noise = field();
        for x in 0..200 {
            for y in 0..200 {
                assert!(river_distance(&noise, IVec2::new(x * 7, y * 5)) >= 0.0);
            }
        }
    }

    #[test]
    fn mountain_height_is_clamped() {
        let noise = field();
        for x in 0..200 {
            for y in 0..200 {
                let h = mountain_height(&noise, IVec2::new(x * 11, y * 3));
                assert!((0.0..=1.0).contains(&h));
            }
        }
    }

    #[test]
    fn fields_are_deterministic() {
        let noise = field();
        let pos = IVec2::new(421, 933);
        assert_eq!(
            river_distance(&noise, pos).to_bits(),
            river_distance(&noise, pos).to_bits()
        );
        assert_eq!(
            mountain_height(&noise, pos).to_bits(),
            mountain_height(&noise, pos).to_bits()
        );
    }
}
