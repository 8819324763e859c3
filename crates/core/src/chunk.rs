use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

use glam::{IVec2, Vec2};

use crate::TileId;

const X_MASK: u8 = 0b1111;
const Y_MASK: u8 = 0b1111 << 4;

/// A local tile position within a [`Chunk`].
///
/// # Representation
///
/// Internally, this type is represented by a single index that is guaranteed
/// to be less than [`Chunk::SIZE`].
///
/// The formula to convert between a local position and its index is:
///
/// ```text
/// index = x + y * Chunk::SIDE
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalPos(u8);

impl LocalPos {
    /// Creates a new [`LocalPos`] from the given coordinates without checking
    /// if they are in bounds.
    ///
    /// # Safety
    ///
    /// This function assumes that the coordinates are less than [`Chunk::SIDE`].
    #[inline]
    pub unsafe fn from_xy_unchecked(x: i32, y: i32) -> Self {
        Self((x + y * Chunk::SIDE) as u8)
    }

    /// Creates a new [`LocalPos`] from the given coordinates.
    ///
    /// # Panics
    ///
    /// This function panics if any of the provided coordinates are out of bounds.
    #[track_caller]
    pub fn from_xy(x: i32, y: i32) -> Self {
        assert!((0..Chunk::SIDE).contains(&x));
        assert!((0..Chunk::SIDE).contains(&y));
        unsafe { Self::from_xy_unchecked(x, y) }
    }

    /// Returns the X coordinate of the position.
    #[inline]
    pub fn x(self) -> i32 {
        (self.0 & X_MASK) as _
    }

    /// Returns the Y coordinate of the position.
    #[inline]
    pub fn y(self) -> i32 {
        ((self.0 & Y_MASK) >> 4) as _
    }

    /// Returns the position as an [`IVec2`].
    #[inline]
    pub fn to_ivec2(self) -> IVec2 {
        IVec2::new(self.x(), self.y())
    }

    /// Returns the index of the tile within the chunk.
    ///
    /// The returned index is guaranteed to be less than [`Chunk::SIZE`].
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all the [`LocalPos`] instances in the chunk,
    /// in row-major order (X varies fastest).
    #[inline]
    pub fn iter_all() -> impl Iterator<Item = Self> {
        (0..Chunk::SIZE).map(|i| Self(i as u8))
    }
}

impl Debug for LocalPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalPos")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

/// A simple wrapper around a static array that can be indexed with a
/// [`LocalPos`] with no bound checking.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
struct TileStore<T>([T; Chunk::SIZE]);

impl<T> Index<LocalPos> for TileStore<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: LocalPos) -> &Self::Output {
        // SAFETY: a `LocalPos` is always less than `Chunk::SIZE`.
        unsafe { self.0.get_unchecked(index.index()) }
    }
}

impl<T> IndexMut<LocalPos> for TileStore<T> {
    #[inline]
    fn index_mut(&mut self, index: LocalPos) -> &mut Self::Output {
        unsafe { self.0.get_unchecked_mut(index.index()) }
    }
}

/// A fixed-size square of tiles; the unit of loading, unloading and mutation.
///
/// A chunk stores one optional [`TileId`] per cell (absent until synthesized)
/// and a parallel grid of solidity bits so collision queries never have to
/// re-derive a tile's type.
///
/// # Invariant
///
/// Whenever a tile slot holds a value, the matching solidity bit equals
/// [`TileId::is_solid`] for that value. [`Chunk::set_tile`] is the only way to
/// write a tile, and it maintains this.
pub struct Chunk {
    /// The tiles of the chunk. `None` marks a cell that has not been
    /// synthesized yet.
    tiles: TileStore<Option<TileId>>,
    /// The cached collision bit of every cell.
    solid: TileStore<bool>,
    /// Whether the chunk has been fully populated.
    loaded: bool,
}

impl Chunk {
    /// The side-length of a chunk, in tiles.
    pub const SIDE: i32 = 16;

    /// The total size of a chunk, in tiles.
    ///
    /// This is equal to `SIDE * SIDE`.
    pub const SIZE: usize = (Self::SIDE * Self::SIDE) as usize;

    /// Creates a new, empty [`Chunk`] with no synthesized tiles.
    pub fn empty() -> Self {
        Self {
            tiles: TileStore([None; Self::SIZE]),
            solid: TileStore([false; Self::SIZE]),
            loaded: false,
        }
    }

    /// Returns the tile at the provided position, or [`None`] if the cell has
    /// not been synthesized yet.
    #[inline]
    pub fn tile(&self, pos: LocalPos) -> Option<TileId> {
        self.tiles[pos]
    }

    /// Sets the tile at the provided position and recomputes its solidity bit.
    #[inline]
    pub fn set_tile(&mut self, pos: LocalPos, tile: TileId) {
        self.tiles[pos] = Some(tile);
        self.solid[pos] = tile.is_solid();
    }

    /// Returns the cached solidity bit of the provided position.
    ///
    /// Unsynthesized cells read as non-solid.
    #[inline]
    pub fn is_solid(&self, pos: LocalPos) -> bool {
        self.solid[pos]
    }

    /// Returns whether the chunk has been fully populated.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Marks the chunk as fully populated.
    #[inline]
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::empty()
    }
}

/// The 2D position of a chunk in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPos {
    /// The X coordinate of the chunk.
    pub x: i32,
    /// The Y coordinate of the chunk.
    pub y: i32,
}

impl ChunkPos {
    /// Creates a new [`ChunkPos`] from the provided coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the chunk containing the provided tile coordinate.
    #[inline]
    pub fn of_tile(pos: IVec2) -> Self {
        Self {
            x: pos.x.div_euclid(Chunk::SIDE),
            y: pos.y.div_euclid(Chunk::SIDE),
        }
    }

    /// Converts the provided world-space position (in tile units) into a
    /// chunk position.
    #[inline]
    pub fn from_world_pos(pos: Vec2) -> Self {
        Self::of_tile(pos.floor().as_ivec2())
    }

    /// Returns the tile-space origin of the chunk.
    #[inline]
    pub const fn origin(self) -> IVec2 {
        IVec2::new(self.x * Chunk::SIDE, self.y * Chunk::SIDE)
    }

    /// Returns the largest distance along either axis between two chunk
    /// positions.
    ///
    /// The retention window is a square, so this per-axis metric (rather than
    /// the euclidean distance) is what eviction tests against.
    #[inline]
    pub fn axis_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Hash for ChunkPos {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64((self.x as u32 as u64) << 32 | self.y as u32 as u64);
    }
}

impl std::ops::Add<IVec2> for ChunkPos {
    type Output = Self;

    #[inline]
    fn add(self, rhs: IVec2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_pos_packing() {
        for y in 0..Chunk::SIDE {
            for x in 0..Chunk::SIDE {
                let pos = LocalPos::from_xy(x, y);
                assert_eq!(pos.x(), x);
                assert_eq!(pos.y(), y);
                assert_eq!(pos.index(), (x + y * Chunk::SIDE) as usize);
            }
        }
    }

    #[test]
    #[should_panic]
    fn local_pos_out_of_bounds() {
        let _ = LocalPos::from_xy(Chunk::SIDE, 0);
    }

    #[test]
    fn set_tile_updates_solidity() {
        let mut chunk = Chunk::empty();
        let pos = LocalPos::from_xy(3, 7);

        assert_eq!(chunk.tile(pos), None);
        assert!(!chunk.is_solid(pos));

        chunk.set_tile(pos, TileId::Tree);
        assert_eq!(chunk.tile(pos), Some(TileId::Tree));
        assert!(chunk.is_solid(pos));

        chunk.set_tile(pos, TileId::Grass);
        assert_eq!(chunk.tile(pos), Some(TileId::Grass));
        assert!(!chunk.is_solid(pos));
    }

    #[test]
    fn chunk_pos_of_tile() {
        assert_eq!(ChunkPos::of_tile(IVec2::new(0, 0)), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::of_tile(IVec2::new(15, 15)), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::of_tile(IVec2::new(16, 31)), ChunkPos::new(1, 1));
        assert_eq!(ChunkPos::of_tile(IVec2::new(-1, 5)), ChunkPos::new(-1, 0));
    }

    #[test]
    fn from_world_pos_floors() {
        assert_eq!(
            ChunkPos::from_world_pos(Vec2::new(0.0, 15.9)),
            ChunkPos::new(0, 0)
        );
        assert_eq!(
            ChunkPos::from_world_pos(Vec2::new(16.0, 31.5)),
            ChunkPos::new(1, 1)
        );
        // Negative chunk multiples land in the chunk they start, not one
        // further out.
        assert_eq!(
            ChunkPos::from_world_pos(Vec2::new(-16.0, -0.5)),
            ChunkPos::new(-1, -1)
        );
        assert_eq!(
            ChunkPos::from_world_pos(Vec2::new(-16.5, -33.0)),
            ChunkPos::new(-2, -3)
        );
    }

    #[test]
    fn axis_distance_is_per_axis() {
        let a = ChunkPos::new(0, 0);
        let b = ChunkPos::new(3, -9);
        assert_eq!(a.axis_distance(b), 9);
    }
}
