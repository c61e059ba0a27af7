//! Probabilistic, capacity-bounded spawning

use rand::Rng;

use super::state::World;
use crate::consts::*;

/// Pick a y for an asteroid spawning at `x`.
///
/// Away from the side borders the asteroid is pushed onto the top or bottom
/// edge so it never appears on top of the ship's central spawn point. On a
/// side border any y is allowed.
pub fn spawn_y<R: Rng + ?Sized>(x: f32, rng: &mut R) -> f32 {
    if x > 1.0 && x < FIELD_WIDTH - 1.0 {
        if rng.random_bool(0.5) {
            1.0
        } else {
            FIELD_HEIGHT - 1.0
        }
    } else {
        rng.random_range(1..=(FIELD_HEIGHT as u32 - 1)) as f32
    }
}

/// A roll of `ASTEROID_SPAWN_ROLL` on 1..=20 spawns, while under the cap
#[inline]
pub fn asteroid_spawn_due(count: usize, roll: u32) -> bool {
    count < MAX_ASTEROIDS && roll == ASTEROID_SPAWN_ROLL
}

/// A roll of exactly `ITEM_SPAWN_ROLL` on 1..=50 spawns, while under the cap
#[inline]
pub fn item_spawn_due(count: usize, roll: u32) -> bool {
    count < MAX_ITEMS && roll == ITEM_SPAWN_ROLL
}

/// Roll for one new asteroid and one new item
pub fn run_spawner(world: &mut World) {
    let roll = world.rng().random_range(1..=ASTEROID_SPAWN_SIDES);
    if asteroid_spawn_due(world.asteroids.len(), roll) {
        world.spawn_border_asteroid();
    }

    let roll = world.rng().random_range(1..=ITEM_SPAWN_SIDES);
    if item_spawn_due(world.items.len(), roll) {
        world.spawn_item();
    }
}
