//! Game state and core simulation types
//!
//! One `GameState` per session; nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty;
use super::registry::EntityRegistry;
use crate::consts::*;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Spawn director phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPhase {
    /// Still feeding enemies into the level
    Spawning,
    /// Quota met, waiting for the field to clear
    Draining,
}

/// Numeral shown on a regular enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyValue {
    Six,
    Seven,
}

impl EnemyValue {
    pub fn label(&self) -> &'static str {
        match self {
            EnemyValue::Six => "6",
            EnemyValue::Seven => "7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Big,
    Small,
}

impl SizeClass {
    pub fn hit_radius(&self) -> f32 {
        match self {
            SizeClass::Big => BIG_HIT_RADIUS,
            SizeClass::Small => SMALL_HIT_RADIUS,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub half: Vec2,
    pub speed: f32,
    pub fire_cooldown: f32,
    /// Absolute time before which fire requests are ignored
    pub next_fire_at: f64,
    /// Rapid-fire active while `now < rapid_until`
    pub rapid_until: f64,
    /// Triple-shot active while `now < triple_until`
    pub triple_until: f64,
    /// Absorbs the next enemy bullet
    pub shield: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.width / 2.0, tuning.height - PLAYER_BOTTOM_OFFSET),
            half: Vec2::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT),
            speed: tuning.player_speed,
            fire_cooldown: tuning.fire_cooldown,
            next_fire_at: 0.0,
            rapid_until: 0.0,
            triple_until: 0.0,
            shield: false,
        }
    }

    /// Hit rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.half)
    }

    pub fn rapid_active(&self, now: f64) -> bool {
        now < self.rapid_until
    }

    pub fn triple_active(&self, now: f64) -> bool {
        now < self.triple_until
    }

    /// Horizontal move, kept inside the playfield
    pub fn move_horizontal(&mut self, dir: f32, dt: f32, width: f32) {
        self.pos.x = (self.pos.x + dir * self.speed * dt)
            .clamp(PLAYER_EDGE_MARGIN, width - PLAYER_EDGE_MARGIN);
    }
}

/// A bullet (player or enemy; they live in separate collections)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// A vertically oscillating numeral
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularEnemy {
    pub id: u32,
    pub value: EnemyValue,
    pub size: SizeClass,
    pub pos: Vec2,
    /// Vertical speed magnitude
    pub speed: f32,
    /// +1 moving down, -1 moving up
    pub dir: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub hit_radius: f32,
}

impl RegularEnemy {
    pub fn step(&mut self, dt: f32) {
        self.pos.y += self.dir * self.speed * dt;
        if self.pos.y >= self.max_y {
            self.dir = -1.0;
        }
        if self.pos.y <= self.min_y {
            self.dir = 1.0;
        }
    }
}

/// The "13"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub id: u32,
    pub pos: Vec2,
    /// Horizontal speed magnitude
    pub speed: f32,
    pub dir: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub hit_radius: f32,
    pub shoot_timer: f32,
    pub shoot_interval: f32,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
}

impl Boss {
    pub const LABEL: &'static str = "13";

    /// HP pips for display (1..=12)
    pub fn hp_pips(&self) -> u32 {
        self.hp.clamp(1, 12) as u32
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Enemy {
    Regular(RegularEnemy),
    Boss(Boss),
}

impl Enemy {
    pub fn id(&self) -> u32 {
        match self {
            Enemy::Regular(e) => e.id,
            Enemy::Boss(b) => b.id,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Enemy::Regular(e) => e.pos,
            Enemy::Boss(b) => b.pos,
        }
    }

    pub fn hit_radius(&self) -> f32 {
        match self {
            Enemy::Regular(e) => e.hit_radius,
            Enemy::Boss(b) => b.hit_radius,
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, Enemy::Boss(_))
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        match self {
            Enemy::Regular(e) => e.id = id,
            Enemy::Boss(b) => b.id = id,
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Rapid,
    Triple,
    Shield,
}

impl PowerUpKind {
    /// Pick a kind from a uniform roll in [0, 1): 45% rapid, 35% triple, 20% shield
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.45 {
            PowerUpKind::Rapid
        } else if roll < 0.80 {
            PowerUpKind::Triple
        } else {
            PowerUpKind::Shield
        }
    }

    pub fn letter(&self) -> char {
        match self {
            PowerUpKind::Rapid => 'R',
            PowerUpKind::Triple => 'T',
            PowerUpKind::Shield => 'S',
        }
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub fall_speed: f32,
    pub radius: f32,
}

/// Discrete things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { score: u64 },
    LifeLost { lives: u8 },
    ShieldConsumed,
    LevelAdvanced { level: u32 },
    BossSpawned { hp: i32 },
    BossDefeated { offspring: u32 },
    PowerUpCollected { kind: PowerUpKind },
    /// Lives ran out; the run restarted at level 1
    GameOver { final_score: u64, level: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    /// Seconds of simulated time
    pub time: f64,
    pub phase: SpawnPhase,
    pub spawn_timer: f32,
    pub spawned_this_level: u32,
    pub level_target: u32,
    pub registry: EntityRegistry,
    /// Events emitted during the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game with a custom tuning table, rejecting tables the
    /// simulation can't run with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(&tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            score: 0,
            lives: tuning.start_lives,
            time: 0.0,
            phase: SpawnPhase::Spawning,
            spawn_timer: 0.0,
            spawned_this_level: 0,
            level_target: 0,
            registry: EntityRegistry::new(player),
            events: Vec::new(),
            tuning,
        };
        state.start_level(1);
        state
    }

    pub fn player(&self) -> &Player {
        &self.registry.player
    }

    /// Reset per-level counters and begin spawning
    pub fn start_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.spawned_this_level = 0;
        self.level_target = difficulty::level_target(&self.tuning, self.level);
        self.phase = SpawnPhase::Spawning;
        self.spawn_timer = 0.0;
    }

    /// Lives exhausted: wipe the field and restart at level 1
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = self.tuning.start_lives;
        self.registry.clear();
        self.registry.player = Player::new(&self.tuning);
        self.start_level(1);
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events from the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
