//! Play session driver
//!
//! Owns the world, tracks held keys, and feeds the simulation one fixed
//! tick at a time from a variable frame clock.

use crate::consts::{MAX_SUBSTEPS, TICK_DT};
use crate::settings::Settings;
use crate::sim::{Snapshot, TickInput, World, autopilot_input, tick};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Thrust,
    RotateLeft,
    RotateRight,
    Fire,
}

impl Key {
    /// Map a key name ("up", "left", "right", "space") to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "up" => Some(Key::Thrust),
            "left" => Some(Key::RotateLeft),
            "right" => Some(Key::RotateRight),
            "space" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// A running game: world plus input state and frame accumulator
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    input: TickInput,
    accumulator: f32,
    autopilot: bool,
}

impl Session {
    pub fn new(seed: u64, lives: u32) -> Self {
        Self {
            world: World::with_lives(seed, lives),
            input: TickInput::default(),
            accumulator: 0.0,
            autopilot: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        log::info!(
            "Starting session: seed {}, {} lives, autopilot {}",
            seed,
            settings.starting_lives,
            settings.autopilot
        );
        let mut session = Self::new(seed, settings.starting_lives);
        session.autopilot = settings.autopilot;
        session
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn snapshot(&self) -> Snapshot {
        self.world.snapshot()
    }

    pub fn is_over(&self) -> bool {
        self.world.is_game_over()
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Key pressed. Held keys stay set until released; fire is a one-shot.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Thrust => self.input.accelerate = true,
            Key::RotateLeft => self.input.rotate_left = true,
            Key::RotateRight => self.input.rotate_right = true,
            Key::Fire => self.input.fire = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Thrust => self.input.accelerate = false,
            Key::RotateLeft => self.input.rotate_left = false,
            Key::RotateRight => self.input.rotate_right = false,
            Key::Fire => {}
        }
    }

    /// Run exactly one simulation tick
    pub fn step(&mut self) {
        let input = if self.autopilot {
            autopilot_input(&self.world)
        } else {
            self.input
        };
        tick(&mut self.world, &input);

        // Clear one-shot inputs after processing
        self.input.fire = false;
    }

    /// Run as many fixed ticks as `dt` seconds of frame time allow.
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.min(0.25);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= TICK_DT {
            log::warn!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }
}
