//! Six-sided die logic.

use dicebox_core::rng::RandomSource;

/// Number of faces on the die.
pub const DIE_SIDES: u32 = 6;

/// Draws one die value, uniformly distributed over `{1, ..., 6}`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn roll_die(rng: &mut dyn RandomSource) -> u8 {
    rng.next_u32_range(1, DIE_SIDES) as u8
}

/// Draws `count` independent die values, in draw order.
#[must_use]
pub fn roll_dice(rng: &mut dyn RandomSource, count: u32) -> Vec<u8> {
    (0..count).map(|_| roll_die(rng)).collect()
}
