/// The biome a world coordinate belongs to.
///
/// Biomes drive the probability tables used by tile synthesis; the ordered
/// precedence rules that pick one live with the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Open grass with sparse trees. The default when nothing else matches.
    Grassland,
    /// Dense tree cover.
    Forest,
    /// Stone-dominated high ground.
    Mountain,
    /// Still water in low, wet areas.
    Lake,
    /// Running water following a meander line.
    River,
}
