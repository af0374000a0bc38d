//! Spawn color generation.
//!
//! Colors are presentation metadata only; the physics never reads them.
//! The UI draws whatever color the body was spawned with.

use crate::simulation::random::xorshift32;

/// Generate a random bright color, packed as 0xRRGGBB.
///
/// Each channel is kept in [100, 255] so circles stay visible against the
/// dark canvas background.
pub fn random_bright_color(rng_state: &mut u32) -> u32 {
    let r = 100 + (xorshift32(rng_state) % 156);
    let g = 100 + (xorshift32(rng_state) % 156);
    let b = 100 + (xorshift32(rng_state) % 156);
    (r << 16) | (g << 8) | b
}
