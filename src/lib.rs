//! Number Rush - A numeric arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation engine (spawning, motion, collisions, scoring)
//! - `session`: Clock-driven driver around a single game state
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors

pub mod error;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use session::{Clock, ManualClock, MonotonicClock, Session};
pub use tuning::Tuning;

use glam::Vec2;

/// Fixed geometry and timing constants
pub mod consts {
    /// Step used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player ship half extents (hit rectangle)
    pub const PLAYER_HALF_WIDTH: f32 = 20.0;
    pub const PLAYER_HALF_HEIGHT: f32 = 7.0;
    /// Distance of the ship from the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
    /// Ship center can't get closer than this to either side
    pub const PLAYER_EDGE_MARGIN: f32 = 22.0;

    /// Player bullets
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_SPAWN_OFFSET: f32 = 8.0;
    /// Triple-shot spread from vertical (degrees)
    pub const TRIPLE_SPREAD_DEG: f32 = 12.0;

    /// Enemy bullets
    pub const ENEMY_BULLET_RADIUS: f32 = 4.0;
    pub const ENEMY_BULLET_SPAWN_OFFSET: f32 = 18.0;

    /// Regular enemies
    pub const BIG_HIT_RADIUS: f32 = 22.0;
    pub const SMALL_HIT_RADIUS: f32 = 16.0;
    pub const ENEMY_MIN_Y: f32 = 80.0;
    /// `max_y` is the playfield height minus this
    pub const ENEMY_MAX_Y_INSET: f32 = 170.0;
    pub const SPAWN_EDGE_MARGIN: f32 = 30.0;
    pub const SPAWN_Y: f32 = -30.0;
    /// Horizontal offset of the two halves of a split enemy
    pub const SPLIT_OFFSET_X: f32 = 18.0;
    pub const SPLIT_SPEED_FACTOR: f32 = 1.05;

    /// Boss
    pub const BOSS_START_Y: f32 = 120.0;
    pub const BOSS_HIT_RADIUS: f32 = 34.0;
    pub const BOSS_EDGE_MARGIN: f32 = 60.0;
    pub const BOSS_SPEED_FACTOR: f32 = 0.85;
    pub const REINFORCEMENT_SPREAD_X: f32 = 60.0;
    pub const REINFORCEMENT_OFFSET_Y: f32 = 35.0;
    pub const REINFORCEMENT_SPEED_FACTOR: f32 = 1.1;
    pub const BURST_SPREAD_Y: f32 = 20.0;
    pub const BURST_SPEED_FACTOR: f32 = 1.15;
    pub const BURST_MIN: u32 = 7;
    pub const BURST_MAX: u32 = 10;

    /// Power-ups
    pub const POWERUP_RADIUS: f32 = 14.0;
    pub const POWERUP_DROP_MARGIN_X: f32 = 40.0;
    pub const POWERUP_DROP_MIN_Y: f32 = 20.0;
    pub const POWERUP_DROP_MAX_Y: f32 = 80.0;

    /// Out-of-bounds tolerances
    pub const PLAYER_BULLET_MARGIN: f32 = 20.0;
    pub const FALLING_MARGIN: f32 = 30.0;
}

/// Unit heading for an angle measured in degrees from straight up
/// (positive turns right, screen y grows downward)
#[inline]
pub fn heading_from_vertical(angle_deg: f32) -> Vec2 {
    let ang = angle_deg.to_radians();
    Vec2::new(ang.sin(), -ang.cos())
}

/// Uniform sample in `[lo, hi)` that tolerates an empty range
#[inline]
pub fn rand_between<R: rand::Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}
