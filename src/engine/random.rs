// Coin-flip style randomness
//
// Each helper comes in two forms: one taking an explicit generator, for
// seeded and reproducible runs, and one using `rand::thread_rng()`. The
// thread-local generator is per thread, so the second form may be called
// from anywhere without extra locking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::input::Direction;

/// Create a deterministic generator for tests and replays
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Return `true` or `false` with equal probability, drawing from `rng`
pub fn random_boolean_with<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<f32>() > 0.5
}

/// Return [`Direction::Left`] or [`Direction::Right`] with equal probability,
/// drawing from `rng`. Never returns [`Direction::None`].
pub fn random_direction_with<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    match rng.gen_range(0..2) {
        0 => Direction::Left,
        _ => Direction::Right,
    }
}

/// Return a random boolean
pub fn random_boolean() -> bool {
    random_boolean_with(&mut rand::thread_rng())
}

/// Return a random horizontal direction
pub fn random_direction() -> Direction {
    random_direction_with(&mut rand::thread_rng())
}
