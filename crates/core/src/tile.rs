use bitflags::bitflags;
use bytemuck::Contiguous;

/// A tile identifier.
///
/// This enumeration defines what tiles are authorized to exist in a game world.
/// A tile is a semantic tag only; how it is presented on screen is the
/// rendering layer's business.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Contiguous)]
#[repr(u8)]
pub enum TileId {
    #[default]
    Grass,
    Water,
    Stone,
    Tree,
    Dirt,
}

bitflags! {
    /// A set of flags associated with a [`TileId`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileFlags: u8 {
        /// The tile blocks movement.
        const SOLID = 1 << 0;
        /// The tile can be harvested by the player.
        const HARVESTABLE = 1 << 1;
    }
}

/// Static information about a [`TileId`].
pub struct TileInfo {
    /// The flags of the tile.
    pub flags: TileFlags,
    /// The tile this one turns into when harvested, if it can be harvested.
    pub harvested_into: Option<TileId>,
}

impl TileId {
    /// The total number of [`TileId`] instances.
    pub const COUNT: usize = <Self as Contiguous>::MAX_VALUE as usize + 1;

    /// Returns the [`TileInfo`] instance associated with this [`TileId`].
    #[inline]
    pub fn info(self) -> &'static TileInfo {
        const INFOS: [TileInfo; TileId::COUNT] = [
            // Grass
            TileInfo {
                flags: TileFlags::empty(),
                harvested_into: None,
            },
            // Water
            TileInfo {
                flags: TileFlags::SOLID,
                harvested_into: None,
            },
            // Stone
            TileInfo {
                flags: TileFlags::HARVESTABLE,
                harvested_into: Some(TileId::Dirt),
            },
            // Tree
            TileInfo {
                flags: TileFlags::SOLID.union(TileFlags::HARVESTABLE),
                harvested_into: Some(TileId::Grass),
            },
            // Dirt
            TileInfo {
                flags: TileFlags::empty(),
                harvested_into: None,
            },
        ];

        &INFOS[self as usize]
    }

    /// Returns whether this tile blocks movement.
    #[inline]
    pub fn is_solid(self) -> bool {
        self.info().flags.contains(TileFlags::SOLID)
    }

    /// Returns the tile left behind when this one is harvested, or [`None`]
    /// if the tile cannot be harvested.
    #[inline]
    pub fn harvested_into(self) -> Option<TileId> {
        self.info().harvested_into
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solidity_rule() {
        assert!(TileId::Water.is_solid());
        assert!(TileId::Tree.is_solid());
        assert!(!TileId::Grass.is_solid());
        assert!(!TileId::Stone.is_solid());
        assert!(!TileId::Dirt.is_solid());
    }

    #[test]
    fn harvest_transitions() {
        assert_eq!(TileId::Tree.harvested_into(), Some(TileId::Grass));
        assert_eq!(TileId::Stone.harvested_into(), Some(TileId::Dirt));
        assert_eq!(TileId::Water.harvested_into(), None);
    }
}
