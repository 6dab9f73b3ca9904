use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a food cell uniformly at random among cells the snake does not
/// occupy.
///
/// Returns `None` when the snake fills the whole board, which the engine
/// treats as the win condition instead of retrying forever.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
