//! Collision detection and resolution
//!
//! Each pass scans its full set of pairs first, collecting a destroy-list
//! and any split fragments, then applies both once the scan is done.
//! Fragments are never seen by the pass that created them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Asteroid, AsteroidSize, World};
use crate::consts::{ITEM_SCORE, SMALL_ASTEROID_SCORE};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Overlap test; touching edges count as a hit
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// What happened during one collision phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionSummary {
    /// Ship resets (one life each)
    pub ship_hits: u32,
    /// Asteroids destroyed by missiles
    pub asteroids_shot: u32,
    pub items_collected: u32,
    pub fragments_spawned: u32,
    pub points: u64,
}

impl CollisionSummary {
    fn merge(&mut self, other: CollisionSummary) {
        self.ship_hits += other.ship_hits;
        self.asteroids_shot += other.asteroids_shot;
        self.items_collected += other.items_collected;
        self.fragments_spawned += other.fragments_spawned;
        self.points += other.points;
    }
}

/// Run all three passes in order: ship/asteroid, missile/asteroid, ship/item
pub fn resolve_collisions(world: &mut World) -> CollisionSummary {
    let mut summary = ship_asteroid_pass(world);
    summary.merge(missile_asteroid_pass(world));
    summary.merge(ship_item_pass(world));

    if summary != CollisionSummary::default() {
        log::debug!(
            "Tick {}: {} ship hits, {} asteroids shot, {} items, +{} points",
            world.time_ticks,
            summary.ship_hits,
            summary.asteroids_shot,
            summary.items_collected,
            summary.points
        );
    }
    summary
}

/// Every asteroid touching the ship is destroyed and the ship is reset.
///
/// The ship is tested at its current position, so a reset earlier in the
/// scan can put it on top of another asteroid that then also counts.
pub fn ship_asteroid_pass(world: &mut World) -> CollisionSummary {
    let mut summary = CollisionSummary::default();
    let mut destroyed = Vec::new();
    let mut fragments = Vec::new();

    for asteroid in &world.asteroids {
        if !world.ship.body.intersects(&asteroid.body) {
            continue;
        }
        destroyed.push(asteroid.id);
        world.ship.reset();
        summary.ship_hits += 1;
        queue_fragments(asteroid, &mut fragments);
    }

    summary.fragments_spawned = fragments.len() as u32;
    world.asteroids.retain(|a| !destroyed.contains(&a.id));
    spawn_fragments(world, fragments);
    summary
}

/// Every intersecting (asteroid, missile) pair destroys both.
///
/// The full cross product is scanned: one missile may take out several
/// asteroids, and an asteroid struck by several missiles splits once per hit.
pub fn missile_asteroid_pass(world: &mut World) -> CollisionSummary {
    let mut summary = CollisionSummary::default();
    let mut dead_asteroids = Vec::new();
    let mut dead_missiles = Vec::new();
    let mut fragments = Vec::new();

    for asteroid in &world.asteroids {
        for missile in &world.missiles {
            if !missile.body.intersects(&asteroid.body) {
                continue;
            }
            dead_asteroids.push(asteroid.id);
            dead_missiles.push(missile.id);
            summary.asteroids_shot += 1;
            if asteroid.size == AsteroidSize::Small {
                summary.points += SMALL_ASTEROID_SCORE;
            } else {
                queue_fragments(asteroid, &mut fragments);
            }
        }
    }

    summary.fragments_spawned = fragments.len() as u32;
    world.score += summary.points;
    world.asteroids.retain(|a| !dead_asteroids.contains(&a.id));
    world.missiles.retain(|m| !dead_missiles.contains(&m.id));
    spawn_fragments(world, fragments);
    summary
}

/// Items touching the ship are collected
pub fn ship_item_pass(world: &mut World) -> CollisionSummary {
    let mut summary = CollisionSummary::default();
    let mut collected = Vec::new();

    for item in &world.items {
        if world.ship.body.intersects(&item.body) {
            collected.push(item.id);
            summary.items_collected += 1;
            summary.points += ITEM_SCORE;
        }
    }

    world.score += summary.points;
    world.items.retain(|i| !collected.contains(&i.id));
    summary
}

fn queue_fragments(asteroid: &Asteroid, fragments: &mut Vec<(AsteroidSize, Vec2)>) {
    if let Some(size) = asteroid.size.split() {
        fragments.push((size, asteroid.body.pos));
        fragments.push((size, asteroid.body.pos));
    }
}

fn spawn_fragments(world: &mut World, fragments: Vec<(AsteroidSize, Vec2)>) {
    for (size, pos) in fragments {
        let id = world.next_entity_id();
        let fragment = Asteroid::with_size(id, size, pos, world.rng());
        world.asteroids.push(fragment);
    }
}
