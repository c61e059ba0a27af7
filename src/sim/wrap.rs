//! Toroidal wrap-around for the playing field

use glam::Vec2;

use super::state::World;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Map `value` into `[0, limit)`.
///
/// Values at or past the limit and values below zero both land on the
/// opposite side, so an entity leaving one edge reappears at the other.
#[inline]
pub fn wrap(value: f32, limit: f32) -> f32 {
    let wrapped = value.rem_euclid(limit);
    // rem_euclid can round up to `limit` for tiny negative inputs
    if wrapped >= limit { 0.0 } else { wrapped }
}

/// Wrap x against the field width and y against the field height
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(wrap(pos.x, FIELD_WIDTH), wrap(pos.y, FIELD_HEIGHT))
}

/// Wrap every body in the world
pub fn wrap_world(world: &mut World) {
    world.ship.body.pos = wrap_position(world.ship.body.pos);
    for asteroid in &mut world.asteroids {
        asteroid.body.pos = wrap_position(asteroid.body.pos);
    }
    for missile in &mut world.missiles {
        missile.body.pos = wrap_position(missile.body.pos);
    }
    for item in &mut world.items {
        item.body.pos = wrap_position(item.body.pos);
    }
}
