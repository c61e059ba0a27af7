//! Per-tick motion for every entity category

use super::state::{Ship, World};
use crate::consts::{SHIP_DECELERATION, SHIP_MAX_SPEED};
use crate::{drift_heading, thrust_heading};

/// Advance the ship, asteroids, missiles and items by one tick
pub fn advance(world: &mut World) {
    advance_ship(&mut world.ship);

    for asteroid in &mut world.asteroids {
        asteroid.body.pos += drift_heading(asteroid.body.angle) * asteroid.velocity;
    }

    for missile in &mut world.missiles {
        missile.body.angle = missile.fixed_angle;
        missile.body.pos += thrust_heading(missile.fixed_angle) * missile.velocity;
    }

    for item in &mut world.items {
        item.body.angle = item.wander_angle;
        item.body.pos += drift_heading(item.wander_angle) * item.velocity;
    }
}

/// Thrust, move, turn, then bleed off speed.
///
/// The ship moves at the pre-clamp speed for this tick, so it can briefly
/// travel at `SHIP_MAX_SPEED + SHIP_ACCELERATION` before being clamped.
pub fn advance_ship(ship: &mut Ship) {
    ship.velocity += ship.acceleration;
    ship.body.pos += thrust_heading(ship.body.angle) * ship.velocity;
    ship.body.angle += ship.rotation_velocity as f32;

    if ship.velocity > 0.0 {
        ship.velocity -= SHIP_DECELERATION;
    }
    if ship.velocity < 0.0 {
        ship.velocity = 0.0;
    }
    if ship.velocity >= SHIP_MAX_SPEED {
        ship.velocity = SHIP_MAX_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Missile;
    use glam::Vec2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_ship_thrust_moves_along_sin_cos() {
        let mut ship = Ship::new(3);
        ship.body.angle = 90.0;
        ship.acceleration = SHIP_ACCELERATION;

        advance_ship(&mut ship);

        assert!(approx(ship.body.pos, SHIP_SPAWN + Vec2::new(0.25, 0.0)));
        assert!((ship.velocity - (0.25 - SHIP_DECELERATION)).abs() < 1e-6);
    }

    #[test]
    fn test_ship_decays_to_zero_never_negative() {
        let mut ship = Ship::new(3);
        ship.velocity = 0.1;
        advance_ship(&mut ship);
        assert!((ship.velocity - 0.03).abs() < 1e-6);
        advance_ship(&mut ship);
        assert_eq!(ship.velocity, 0.0);
        advance_ship(&mut ship);
        assert_eq!(ship.velocity, 0.0);
    }

    #[test]
    fn test_ship_speed_caps_at_max() {
        let mut ship = Ship::new(3);
        ship.acceleration = SHIP_ACCELERATION;
        for _ in 0..200 {
            advance_ship(&mut ship);
            assert!((0.0..=SHIP_MAX_SPEED).contains(&ship.velocity));
        }
        assert_eq!(ship.velocity, SHIP_MAX_SPEED);
    }

    #[test]
    fn test_ship_rotation_is_unbounded() {
        let mut ship = Ship::new(3);
        ship.rotation_velocity = SHIP_ROTATION_SPEED;
        for _ in 0..50 {
            advance_ship(&mut ship);
        }
        assert_eq!(ship.body.angle, 400.0);
    }

    #[test]
    fn test_asteroid_and_item_use_cos_sin() {
        let mut world = World::new(1);
        let start = Vec2::new(100.0, 100.0);
        world.spawn_asteroid(2, start).unwrap();
        world.asteroids[0].body.angle = 90.0;
        world.asteroids[0].velocity = 3.0;
        world.spawn_item();
        world.items[0].body.pos = start;
        world.items[0].wander_angle = 0.0;

        advance(&mut world);

        assert!(approx(world.asteroids[0].body.pos, start + Vec2::new(0.0, 3.0)));
        assert!(approx(world.items[0].body.pos, start + Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_missile_ignores_ship_rotation() {
        let mut world = World::new(1);
        world.missiles.push(Missile::new(50, Vec2::new(100.0, 100.0), 0.0));
        world.ship.rotation_velocity = SHIP_ROTATION_SPEED;

        advance(&mut world);
        advance(&mut world);

        let missile = &world.missiles[0];
        assert_eq!(missile.body.angle, 0.0);
        assert!(approx(missile.body.pos, Vec2::new(100.0, 126.0)));
    }
}
