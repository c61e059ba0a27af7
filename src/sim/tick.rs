//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically.

use super::collision::resolve_collisions;
use super::hud::{check_game_over, update_lifecycle};
use super::kinematics;
use super::spawn::run_spawner;
use super::state::{GamePhase, World};
use super::wrap::wrap_world;
use crate::consts::{SHIP_ACCELERATION, SHIP_ROTATION_SPEED};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust key held
    pub accelerate: bool,
    /// Rotate counter-clockwise key held
    pub rotate_left: bool,
    /// Rotate clockwise key held
    pub rotate_right: bool,
    /// Fire pressed since the last tick (edge-triggered)
    pub fire: bool,
}

impl TickInput {
    /// Rotation velocity implied by the held keys; opposing keys cancel
    pub fn rotation_velocity(&self) -> i32 {
        match (self.rotate_left, self.rotate_right) {
            (true, false) => SHIP_ROTATION_SPEED,
            (false, true) => -SHIP_ROTATION_SPEED,
            _ => 0,
        }
    }
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) {
    // Game over suspends the loop; inputs are ignored from here on
    if world.phase == GamePhase::GameOver {
        return;
    }

    world.time_ticks += 1;

    apply_input(world, input);
    kinematics::advance(world);
    wrap_world(world);
    run_spawner(world);
    resolve_collisions(world);
    update_lifecycle(world);
    check_game_over(world);
}

/// Copy held-key state onto the ship and launch a missile on a fire edge
pub fn apply_input(world: &mut World, input: &TickInput) {
    world.ship.acceleration = if input.accelerate {
        SHIP_ACCELERATION
    } else {
        0.0
    };
    world.ship.rotation_velocity = input.rotation_velocity();

    if input.fire {
        let id = world.fire_missile();
        log::debug!("Missile {} fired at angle {}", id, world.ship.body.angle);
    }
}
