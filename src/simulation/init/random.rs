/// Fallback seed; xorshift never leaves a zero state
pub(crate) const FALLBACK_SEED: u32 = 12345;

#[inline]
pub(crate) fn seed_state(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

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
