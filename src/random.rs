//! Random integers & coordinates within bounds
use crate::game::Position;
use rand::Rng;

/// Return an integer drawn uniformly from `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
pub(crate) fn random_in<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Return a position whose coordinates are drawn independently from `0..=max_x`
/// and `0..=max_y`
pub(crate) fn random_position<R: Rng + ?Sized>(rng: &mut R, max_x: i32, max_y: i32) -> Position {
    Position::new(random_in(rng, 0, max_x), random_in(rng, 0, max_y))
}
