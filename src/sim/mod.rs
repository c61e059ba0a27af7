//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Destroy-lists applied after each pass, never mid-iteration
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod hud;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wrap;

pub use autopilot::autopilot_input;
pub use collision::{Aabb, CollisionSummary, resolve_collisions};
pub use hud::{check_game_over, update_lifecycle};
pub use spawn::{asteroid_spawn_due, item_spawn_due, run_spawner, spawn_y};
pub use state::{
    Asteroid, AsteroidSize, Body, GamePhase, Hud, Item, Missile, Ship, Snapshot, World,
};
pub use tick::{TickInput, apply_input, tick};
pub use wrap::{wrap, wrap_position, wrap_world};
