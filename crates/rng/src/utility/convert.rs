/// Converts a `u32` value into a `f32` value in the range `[0.0, 1.0]`.
#[inline]
pub fn f32_from_u32_01(x: u32) -> f32 {
    (x & 0xFFFFFF) as f32 * (1.0 / 0xFFFFFF as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range() {
        assert_eq!(f32_from_u32_01(0), 0.0);
        for x in [1u32, 0xFF, 0xFFFFFF, u32::MAX] {
            let f = f32_from_u32_01(x);
            assert!((0.0..=1.0).contains(&f));
        }
    }
}
