//! Demo mode - a simple pilot that plays the game
//!
//! Turns toward the nearest asteroid, closes distance when it is far away,
//! and fires when roughly lined up.

use super::state::World;
use super::tick::TickInput;
use crate::angle_delta_deg;

/// Degrees of slack before the pilot bothers turning
const AIM_DEADZONE: f32 = 6.0;
/// Fire only when the target is within this many degrees of the nose
const FIRE_CONE: f32 = 12.0;
/// Ticks between shots
const FIRE_INTERVAL: u64 = 8;
/// Thrust toward targets further than this
const CHASE_DISTANCE: f32 = 260.0;

/// Heading in degrees that points the ship's nose from `from` to `to`
fn heading_to(from: glam::Vec2, to: glam::Vec2) -> f32 {
    let d = to - from;
    // Ship heading is (sin, cos), so atan2 takes x first
    d.x.atan2(d.y).to_degrees()
}

/// Build the next tick's input from the current world
pub fn autopilot_input(world: &World) -> TickInput {
    let ship = &world.ship;
    let target = world.asteroids.iter().min_by(|a, b| {
        let da = a.body.pos.distance_squared(ship.body.pos);
        let db = b.body.pos.distance_squared(ship.body.pos);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    let Some(target) = target else {
        // Nothing to shoot: drift toward the nearest item, if any
        let item = world.items.iter().min_by(|a, b| {
            let da = a.body.pos.distance_squared(ship.body.pos);
            let db = b.body.pos.distance_squared(ship.body.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
        return match item {
            Some(item) => steer(ship.body.angle, heading_to(ship.body.pos, item.body.pos), true),
            None => TickInput::default(),
        };
    };

    let desired = heading_to(ship.body.pos, target.body.pos);
    let far = target.body.pos.distance(ship.body.pos) > CHASE_DISTANCE;
    let mut input = steer(ship.body.angle, desired, far);

    let delta = angle_delta_deg(ship.body.angle, desired);
    input.fire = delta.abs() < FIRE_CONE && world.time_ticks % FIRE_INTERVAL == 0;
    input
}

fn steer(current: f32, desired: f32, thrust: bool) -> TickInput {
    let delta = angle_delta_deg(current, desired);
    TickInput {
        accelerate: thrust && delta.abs() < 45.0,
        rotate_left: delta > AIM_DEADZONE,
        rotate_right: delta < -AIM_DEADZONE,
        fire: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SHIP_SPAWN;
    use crate::sim::tick::tick;
    use glam::Vec2;

    #[test]
    fn test_idle_without_targets() {
        let world = World::new(1);
        assert_eq!(autopilot_input(&world), TickInput::default());
    }

    #[test]
    fn test_turns_toward_target() {
        let mut world = World::new(1);
        // Straight along +x is heading 90; ship starts at 0 so it must turn left (+)
        world.spawn_asteroid(3, SHIP_SPAWN + Vec2::new(100.0, 0.0)).unwrap();
        let input = autopilot_input(&world);
        assert!(input.rotate_left);
        assert!(!input.rotate_right);

        world.ship.body.angle = 180.0;
        let input = autopilot_input(&world);
        assert!(input.rotate_right);
    }

    #[test]
    fn test_fires_when_lined_up() {
        let mut world = World::new(1);
        world.ship.body.angle = 90.0;
        world.spawn_asteroid(3, SHIP_SPAWN + Vec2::new(100.0, 0.0)).unwrap();
        world.time_ticks = FIRE_INTERVAL * 3;

        let input = autopilot_input(&world);
        assert!(input.fire);
        assert!(!input.rotate_left && !input.rotate_right);
        assert!(!input.accelerate);
    }

    #[test]
    fn test_demo_session_scores() {
        let mut world = World::new(2718);
        for _ in 0..30 * 120 {
            let input = autopilot_input(&world);
            tick(&mut world, &input);
        }
        assert!(world.time_ticks > 0);
        assert!(world.missiles.len() < 30);
    }
}
