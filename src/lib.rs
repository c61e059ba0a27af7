//! Astro Drift - An asteroid shooter on a wrapping field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `session`: Fixed timestep driver and key-state plumbing
//! - `settings`: Runtime settings loaded from JSON
//! - `error`: Error types

pub mod error;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError, SimResult};
pub use session::{Key, Session};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (30 Hz)
    pub const TICK_DT: f32 = 1.0 / 30.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 900.0;

    /// Ship defaults
    pub const SHIP_SPAWN: Vec2 = Vec2::new(400.0, 450.0);
    pub const SHIP_SIZE: Vec2 = Vec2::new(32.0, 40.0);
    pub const STARTING_LIVES: u32 = 999;
    pub const SHIP_ACCELERATION: f32 = 0.25;
    pub const SHIP_DECELERATION: f32 = 0.07;
    pub const SHIP_MAX_SPEED: f32 = 8.0;
    /// Degrees per tick while a rotate key is held
    pub const SHIP_ROTATION_SPEED: i32 = 8;

    /// Asteroid defaults
    pub const ASTEROID_MIN_SPEED: u32 = 1;
    pub const ASTEROID_MAX_SPEED: u32 = 4;
    /// Upper bound of the random heading (degrees, inclusive)
    pub const ASTEROID_MAX_HEADING: u32 = 350;
    /// Spawn x is drawn from `0..=ASTEROID_SPAWN_MAX_X`
    pub const ASTEROID_SPAWN_MAX_X: u32 = 365;
    pub const MAX_ASTEROIDS: usize = 5;
    /// Asteroid spawns when a 1..=20 roll lands on 20
    pub const ASTEROID_SPAWN_SIDES: u32 = 20;
    pub const ASTEROID_SPAWN_ROLL: u32 = 20;

    /// Missile defaults
    pub const MISSILE_SIZE: Vec2 = Vec2::new(5.0, 20.0);
    pub const MISSILE_SPEED: f32 = 13.0;
    /// A missile expires once its age rounds to this many seconds
    pub const MISSILE_EXPIRY_SECS: u32 = 2;

    /// Item defaults
    pub const ITEM_SIZE: Vec2 = Vec2::new(24.0, 24.0);
    pub const ITEM_SPEED: f32 = 1.0;
    pub const ITEM_SPRITE_VARIANTS: u8 = 3;
    /// Upper bound of the random wander angle (degrees, inclusive)
    pub const ITEM_MAX_HEADING: u32 = 360;
    pub const MAX_ITEMS: usize = 3;
    /// Item spawns when a 1..=50 roll lands on 2
    pub const ITEM_SPAWN_SIDES: u32 = 50;
    pub const ITEM_SPAWN_ROLL: u32 = 2;

    /// Score awards
    pub const SMALL_ASTEROID_SCORE: u64 = 50;
    pub const ITEM_SCORE: u64 = 25;
}

/// Unit heading used by the ship and missiles: x follows sin, y follows cos
#[inline]
pub fn thrust_heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

/// Unit heading used by asteroids and items: x follows cos, y follows sin
#[inline]
pub fn drift_heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Signed difference `to - from` in degrees, normalized to [-180, 180)
#[inline]
pub fn angle_delta_deg(from: f32, to: f32) -> f32 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrust_heading_swaps_axes() {
        let h = thrust_heading(90.0);
        assert!((h.x - 1.0).abs() < 1e-6);
        assert!(h.y.abs() < 1e-6);

        let h = thrust_heading(0.0);
        assert!(h.x.abs() < 1e-6);
        assert!((h.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_drift_heading() {
        let h = drift_heading(90.0);
        assert!(h.x.abs() < 1e-6);
        assert!((h.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_delta_wraps() {
        assert!((angle_delta_deg(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((angle_delta_deg(10.0, 350.0) + 20.0).abs() < 1e-4);
        assert!((angle_delta_deg(720.0, 90.0) - 90.0).abs() < 1e-4);
    }
}
