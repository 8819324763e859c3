use std::path::Path;

use serde::{Deserialize, Serialize};

/// The session configuration of a world.
///
/// These values are fixed for the lifetime of a [`World`](crate::World); they
/// are read once at startup (usually from a RON file) and determine the shape
/// of every bound check the world performs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The seed of the world, or [`None`] to draw a fresh one from the
    /// operating system.
    pub seed: Option<u64>,
    /// The side-length of a tile, in world-space units (pixels).
    pub tile_size: i32,
    /// The width of the world, in tiles.
    pub world_width: i32,
    /// The height of the world, in tiles.
    pub world_height: i32,
    /// The streaming radius around the player, in chunks.
    pub render_distance: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tile_size: 64,
            world_width: 2000,
            world_height: 2000,
            render_distance: 8,
        }
    }
}

impl Config {
    /// Loads the configuration from the provided RON file.
    ///
    /// A missing or malformed file is not fatal: the default configuration is
    /// returned and the problem is logged.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                gw_log::warning!("can't read '{}': {err}; using defaults", path.display());
                return Self::default();
            }
        };

        match ron::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                gw_log::error!("invalid config '{}': {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Returns the configured seed, drawing one from the operating system if
    /// the configuration does not pin one.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(gw_rng::entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_world() {
        let config = Config::default();
        assert_eq!(config.tile_size, 64);
        assert_eq!(config.world_width, 2000);
        assert_eq!(config.world_height, 2000);
        assert_eq!(config.render_distance, 8);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load("/definitely/not/a/config.ron");
        assert_eq!(config.world_width, Config::default().world_width);
    }

    #[test]
    fn parses_partial_ron() {
        let config: Config = ron::from_str("(render_distance: 2, seed: Some(9))").unwrap();
        assert_eq!(config.render_distance, 2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tile_size, 64);
    }
}
