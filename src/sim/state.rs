//! Game state and core simulation types
//!
//! Entities are plain records. All per-tick mutation happens in the
//! kinematics, spawn, collision and hud modules.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn::spawn_y;
use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted, ticks no longer advance
    GameOver,
}

/// Positioned, sized render body shared by every entity kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Render angle in degrees (unbounded)
    pub angle: f32,
    /// Unrotated width and height
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            size,
        }
    }

    /// Axis-aligned box enclosing the body rotated by its angle
    pub fn aabb(&self) -> Aabb {
        let rad = self.angle.to_radians();
        let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
        let half = Vec2::new(
            self.size.x * cos + self.size.y * sin,
            self.size.x * sin + self.size.y * cos,
        ) * 0.5;
        Aabb::new(self.pos - half, self.pos + half)
    }

    #[inline]
    pub fn intersects(&self, other: &Body) -> bool {
        self.aabb().intersects(&other.aabb())
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Forward speed along the facing angle, kept in [0, SHIP_MAX_SPEED]
    pub velocity: f32,
    /// Degrees per tick: -8, 0 or 8
    pub rotation_velocity: i32,
    /// 0 or SHIP_ACCELERATION
    pub acceleration: f32,
    pub lives: u32,
}

impl Ship {
    pub fn new(lives: u32) -> Self {
        Self {
            body: Body::new(SHIP_SPAWN, SHIP_SIZE),
            velocity: 0.0,
            rotation_velocity: 0,
            acceleration: 0.0,
            lives,
        }
    }

    /// Put the ship back at the spawn point and take a life.
    /// Facing angle and acceleration are left as they are.
    pub fn reset(&mut self) {
        self.body.pos = SHIP_SPAWN;
        self.velocity = 0.0;
        self.rotation_velocity = 0;
        self.lives = self.lives.saturating_sub(1);
    }
}

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl AsteroidSize {
    /// Side length of the asteroid body
    pub fn scale(self) -> f32 {
        match self {
            AsteroidSize::Large => 60.0,
            AsteroidSize::Medium => 40.0,
            AsteroidSize::Small => 20.0,
        }
    }

    /// Size of the two fragments left behind when destroyed
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AsteroidSize {
    type Error = SimError;

    fn try_from(size: u8) -> SimResult<Self> {
        match size {
            1 => Ok(AsteroidSize::Small),
            2 => Ok(AsteroidSize::Medium),
            3 => Ok(AsteroidSize::Large),
            other => Err(SimError::InvalidAsteroidSize(other)),
        }
    }
}

/// An asteroid entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: Body,
    /// Whole units per tick in 1..=4, fixed at creation
    pub velocity: f32,
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Build an asteroid from a raw size class, rejecting anything but 1, 2 or 3
    pub fn new<R: Rng + ?Sized>(id: u32, size: u8, pos: Vec2, rng: &mut R) -> SimResult<Self> {
        let size = AsteroidSize::try_from(size)?;
        Ok(Self::with_size(id, size, pos, rng))
    }

    pub fn with_size<R: Rng + ?Sized>(id: u32, size: AsteroidSize, pos: Vec2, rng: &mut R) -> Self {
        let scale = size.scale();
        let mut body = Body::new(pos, Vec2::splat(scale));
        body.angle = rng.random_range(0..=ASTEROID_MAX_HEADING) as f32;
        Self {
            id,
            body,
            velocity: rng.random_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED) as f32,
            size,
        }
    }
}

/// A missile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub id: u32,
    pub body: Body,
    /// Heading captured at launch, immune to later ship rotation
    pub fixed_angle: f32,
    pub velocity: f32,
    /// Seconds since launch
    pub age: f32,
}

impl Missile {
    pub fn new(id: u32, pos: Vec2, ship_angle: f32) -> Self {
        let mut body = Body::new(pos, MISSILE_SIZE);
        body.angle = ship_angle;
        Self {
            id,
            body,
            fixed_angle: ship_angle,
            velocity: MISSILE_SPEED,
            age: 0.0,
        }
    }
}

/// A drifting pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub body: Body,
    /// Sprite variant in 0..ITEM_SPRITE_VARIANTS
    pub sprite: u8,
    pub velocity: f32,
    pub wander_angle: f32,
}

impl Item {
    pub fn new<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Self {
        let pos = Vec2::new(
            rng.random_range(0..=FIELD_WIDTH as u32) as f32,
            rng.random_range(0..=FIELD_HEIGHT as u32) as f32,
        );
        let sprite = rng.random_range(0..ITEM_SPRITE_VARIANTS);
        let wander_angle = rng.random_range(0..=ITEM_MAX_HEADING) as f32;
        let mut body = Body::new(pos, ITEM_SIZE);
        body.angle = wander_angle;
        Self {
            id,
            body,
            sprite,
            velocity: ITEM_SPEED,
            wander_angle,
        }
    }

    /// Texture name for the rendering layer
    pub fn sprite_name(&self) -> String {
        format!("item{}.png", self.sprite)
    }
}

/// HUD text fields read by the rendering layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hud {
    /// Status lines while playing, final score and survival time after game over
    pub message: Vec<String>,
    pub instructions: String,
}

/// Complete world state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub missiles: Vec<Missile>,
    pub items: Vec<Item>,
    /// Survival time in seconds
    pub elapsed: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub hud: Hud,
    next_id: u32,
}

impl World {
    /// Create a new world with the given seed and the default life count
    pub fn new(seed: u64) -> Self {
        Self::with_lives(seed, STARTING_LIVES)
    }

    pub fn with_lives(seed: u64, lives: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(lives),
            asteroids: Vec::new(),
            missiles: Vec::new(),
            items: Vec::new(),
            elapsed: 0.0,
            time_ticks: 0,
            score: 0,
            phase: GamePhase::Playing,
            hud: Hud::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Add an asteroid of a raw size class at `pos`, returning its id
    pub fn spawn_asteroid(&mut self, size: u8, pos: Vec2) -> SimResult<u32> {
        let id = self.next_entity_id();
        let asteroid = Asteroid::new(id, size, pos, &mut self.rng)?;
        self.asteroids.push(asteroid);
        Ok(id)
    }

    /// Add a large asteroid on the field border
    pub fn spawn_border_asteroid(&mut self) -> u32 {
        let id = self.next_entity_id();
        let x = self.rng.random_range(0..=ASTEROID_SPAWN_MAX_X) as f32;
        let y = spawn_y(x, &mut self.rng);
        let asteroid = Asteroid::with_size(id, AsteroidSize::Large, Vec2::new(x, y), &mut self.rng);
        log::debug!("Asteroid {} spawned at ({}, {})", id, x, y);
        self.asteroids.push(asteroid);
        id
    }

    pub fn spawn_item(&mut self) -> u32 {
        let id = self.next_entity_id();
        let item = Item::new(id, &mut self.rng);
        log::debug!("Item {} ({}) spawned at {}", id, item.sprite_name(), item.body.pos);
        self.items.push(item);
        id
    }

    /// Launch a missile from the ship's current position and facing
    pub fn fire_missile(&mut self) -> u32 {
        let id = self.next_entity_id();
        self.missiles
            .push(Missile::new(id, self.ship.body.pos, self.ship.body.angle));
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Owned copy of everything the rendering layer reads
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: self.ship.clone(),
            asteroids: self.asteroids.clone(),
            missiles: self.missiles.clone(),
            items: self.items.clone(),
            score: self.score,
            lives: self.ship.lives,
            elapsed: self.elapsed,
            speed: self.ship.velocity,
            phase: self.phase,
            hud: self.hud.clone(),
        }
    }
}

/// Read-only view of a world between ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub missiles: Vec<Missile>,
    pub items: Vec<Item>,
    pub score: u64,
    pub lives: u32,
    pub elapsed: f64,
    pub speed: f32,
    pub phase: GamePhase,
    pub hud: Hud,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let world = World::new(7);
        assert_eq!(world.ship.body.pos, SHIP_SPAWN);
        assert_eq!(world.ship.lives, STARTING_LIVES);
        assert_eq!(world.ship.velocity, 0.0);
        assert_eq!(world.phase, GamePhase::Playing);
        assert!(world.asteroids.is_empty());
        assert!(world.missiles.is_empty());
        assert!(world.items.is_empty());
    }

    #[test]
    fn test_asteroid_rejects_unknown_size() {
        let mut world = World::new(1);
        for size in [0u8, 4, 255] {
            let err = world.spawn_asteroid(size, Vec2::ZERO).unwrap_err();
            assert!(matches!(err, SimError::InvalidAsteroidSize(s) if s == size));
        }
        assert!(world.asteroids.is_empty());
    }

    #[test]
    fn test_asteroid_random_parameters_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for id in 0..500 {
            let a = Asteroid::new(id, 3, Vec2::ZERO, &mut rng).unwrap();
            assert!((1.0..=4.0).contains(&a.velocity));
            assert_eq!(a.velocity.fract(), 0.0);
            assert!((0.0..=350.0).contains(&a.body.angle));
            assert_eq!(a.body.size, Vec2::splat(60.0));
        }
    }

    #[test]
    fn test_asteroid_scale_table() {
        assert_eq!(AsteroidSize::Large.scale(), 60.0);
        assert_eq!(AsteroidSize::Medium.scale(), 40.0);
        assert_eq!(AsteroidSize::Small.scale(), 20.0);
        assert_eq!(AsteroidSize::Large.split(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.split(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.split(), None);
    }

    #[test]
    fn test_item_random_parameters_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for id in 0..500 {
            let item = Item::new(id, &mut rng);
            assert!(item.sprite < ITEM_SPRITE_VARIANTS);
            assert!((0.0..=360.0).contains(&item.wander_angle));
            assert!((0.0..=FIELD_WIDTH).contains(&item.body.pos.x));
            assert!((0.0..=FIELD_HEIGHT).contains(&item.body.pos.y));
            assert_eq!(item.velocity, ITEM_SPEED);
        }
    }

    #[test]
    fn test_missile_takes_ship_pose() {
        let mut world = World::new(5);
        world.ship.body.pos = Vec2::new(120.0, 40.0);
        world.ship.body.angle = 135.0;
        world.fire_missile();

        let missile = &world.missiles[0];
        assert_eq!(missile.body.pos, Vec2::new(120.0, 40.0));
        assert_eq!(missile.fixed_angle, 135.0);
        assert_eq!(missile.velocity, MISSILE_SPEED);
        assert_eq!(missile.age, 0.0);
    }

    #[test]
    fn test_ship_reset_keeps_angle() {
        let mut ship = Ship::new(2);
        ship.body.pos = Vec2::new(10.0, 10.0);
        ship.body.angle = 48.0;
        ship.velocity = 5.0;
        ship.rotation_velocity = -8;
        ship.reset();

        assert_eq!(ship.body.pos, SHIP_SPAWN);
        assert_eq!(ship.body.angle, 48.0);
        assert_eq!(ship.velocity, 0.0);
        assert_eq!(ship.rotation_velocity, 0);
        assert_eq!(ship.lives, 1);

        ship.reset();
        ship.reset();
        assert_eq!(ship.lives, 0);
    }

    #[test]
    fn test_rotated_body_aabb_grows() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(5.0, 20.0));
        let upright = body.aabb();
        assert!((upright.max.x - 2.5).abs() < 1e-4);
        assert!((upright.max.y - 10.0).abs() < 1e-4);

        body.angle = 90.0;
        let sideways = body.aabb();
        assert!((sideways.max.x - 10.0).abs() < 1e-4);
        assert!((sideways.max.y - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut world = World::new(9);
        world.spawn_item();
        let json = serde_json::to_string(&world.snapshot()).unwrap();
        assert!(json.contains("\"items\""));
        assert!(json.contains("\"Playing\""));
    }
}
