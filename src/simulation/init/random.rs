/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in [0, 1)
#[inline]
pub(crate) fn rand_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / 16_777_216.0
}

/// Uniform f32 in [lo, hi)
#[inline]
pub(crate) fn rand_range(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + rand_f32(state) * (hi - lo)
}
