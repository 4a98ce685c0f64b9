/// Random number generator (xorshift32). State must start non-zero.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform draw in [0, 1)
#[inline]
pub(super) fn next_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / 16_777_216.0
}
