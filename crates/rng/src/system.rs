//! Provide entropy from the operating system.

/// Returns a random `u64` value.
///
/// This is only used to pick a seed for brand new worlds; everything after
/// that point is deterministic in the chosen seed.
pub fn entropy() -> u64 {
    let mut bytes = [0u8; 8];
    let _ = getrandom::getrandom(&mut bytes);
    u64::from_ne_bytes(bytes)
}
