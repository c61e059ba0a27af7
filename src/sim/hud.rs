//! Session clock, missile lifetime, HUD text and the game-over check

use super::state::{GamePhase, World};
use crate::consts::{MISSILE_EXPIRY_SECS, TICK_DT};

pub const INSTRUCTIONS: &str = "'up' to accelerate ship; arrow keys to rotate; 'space' to shoot";

/// Advance timers, expire old missiles and refresh the HUD
pub fn update_lifecycle(world: &mut World) {
    world.elapsed += f64::from(TICK_DT);
    expire_missiles(world);
    refresh_hud(world);
}

/// Drop missiles whose rounded age has reached the expiry mark, then age the rest.
///
/// Rounding to nearest means a missile goes away once its age passes ~1.5s.
pub fn expire_missiles(world: &mut World) {
    world
        .missiles
        .retain(|m| m.age.round() as u32 != MISSILE_EXPIRY_SECS);
    for missile in &mut world.missiles {
        missile.age += TICK_DT;
    }
}

pub fn status_lines(world: &World) -> Vec<String> {
    vec![
        format!("Lives: {}", world.ship.lives),
        format!("Score: {}", world.score),
        format!("Time: {}", world.elapsed.round()),
        format!("Speed: {}", world.ship.velocity.round()),
    ]
}

pub fn game_over_lines(world: &World) -> Vec<String> {
    vec![
        format!("FINAL SCORE: {}", world.score),
        format!("You survived for {} seconds!", world.elapsed.round()),
    ]
}

pub fn refresh_hud(world: &mut World) {
    world.hud.message = status_lines(world);
    if world.hud.instructions.is_empty() {
        world.hud.instructions = INSTRUCTIONS.to_string();
    }
}

/// Freeze the session once the ship is out of lives. Returns true on the
/// tick the game ends.
pub fn check_game_over(world: &mut World) -> bool {
    if world.phase == GamePhase::GameOver || world.ship.lives > 0 {
        return false;
    }
    world.phase = GamePhase::GameOver;
    world.hud.message = game_over_lines(world);
    log::info!(
        "Game over: score {} after {:.1}s ({} ticks)",
        world.score,
        world.elapsed,
        world.time_ticks
    );
    true
}
