//! Game balance and tuning
//!
//! Every gameplay number that designers may want to tweak. Loaded from JSON;
//! any field missing from the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Complete tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    /// Horizontal ship speed (px/s)
    pub player_speed: f32,
    /// Base fire cooldown (seconds)
    pub fire_cooldown: f32,
    /// Cooldown multiplier while rapid-fire is active
    pub rapid_cooldown_factor: f32,
    pub bullet_speed: f32,
    pub enemy_bullet_speed: f32,

    // === Difficulty curve ===
    pub base_enemy_speed: f32,
    pub speed_per_level: f32,
    pub base_spawn: f32,
    pub spawn_decay: f32,
    pub min_spawn: f32,
    pub base_enemies: u32,
    pub enemies_growth: u32,
    pub max_on_screen_base: u32,
    pub max_on_screen_growth: u32,

    // === Boss ===
    pub boss_every: u32,
    pub boss_hp_base: i32,
    pub boss_hp_growth: i32,
    pub boss_shoot_interval: f32,
    pub boss_spawn_interval: f32,

    // === Power-ups ===
    pub powerup_chance_base: f32,
    pub powerup_chance_per_level: f32,
    pub powerup_chance_max: f32,
    pub powerup_fall_speed: f32,
    /// Rapid-fire duration (seconds)
    pub rapid_duration: f64,
    /// Triple-shot duration (seconds)
    pub triple_duration: f64,

    // === Scoring ===
    pub score_boss_hit: u64,
    pub score_boss_kill: u64,
    pub score_big: u64,
    pub score_small: u64,

    // === Run ===
    pub start_lives: u8,
    /// Largest step accepted by the simulation (seconds)
    pub max_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,

            player_speed: 420.0,
            fire_cooldown: 0.28,
            rapid_cooldown_factor: 0.45,
            bullet_speed: 520.0,
            enemy_bullet_speed: 360.0,

            base_enemy_speed: 85.0,
            speed_per_level: 10.0,
            base_spawn: 1.15,
            spawn_decay: 0.07,
            min_spawn: 0.32,
            base_enemies: 12,
            enemies_growth: 4,
            max_on_screen_base: 7,
            max_on_screen_growth: 1,

            boss_every: 5,
            boss_hp_base: 16,
            boss_hp_growth: 5,
            boss_shoot_interval: 1.05,
            boss_spawn_interval: 1.8,

            powerup_chance_base: 0.07,
            powerup_chance_per_level: 0.01,
            powerup_chance_max: 0.35,
            powerup_fall_speed: 140.0,
            rapid_duration: 6.0,
            triple_duration: 8.0,

            score_boss_hit: 15,
            score_boss_kill: 250,
            score_big: 10,
            score_small: 20,

            start_lives: 3,
            max_dt: 0.033,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (handy for dumping the defaults)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject tables the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let min_width = 2.0 * crate::consts::BOSS_EDGE_MARGIN.max(crate::consts::POWERUP_DROP_MARGIN_X);
        if !(self.width > min_width) {
            return Err(TuningError::Invalid(format!(
                "width must exceed {min_width}, got {}",
                self.width
            )));
        }
        if !(self.height > crate::consts::ENEMY_MAX_Y_INSET + crate::consts::ENEMY_MIN_Y) {
            return Err(TuningError::Invalid(format!(
                "height too small for enemy oscillation band: {}",
                self.height
            )));
        }
        if !(self.min_spawn > 0.0) {
            return Err(TuningError::Invalid("min_spawn must be positive".into()));
        }
        if self.boss_every == 0 {
            return Err(TuningError::Invalid("boss_every must be at least 1".into()));
        }
        if !(self.base_enemy_speed > 0.0) {
            return Err(TuningError::Invalid("base_enemy_speed must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.powerup_chance_max) {
            return Err(TuningError::Invalid(format!(
                "powerup_chance_max out of range: {}",
                self.powerup_chance_max
            )));
        }
        if !(self.max_dt > 0.0) {
            return Err(TuningError::Invalid("max_dt must be positive".into()));
        }
        if self.start_lives == 0 {
            return Err(TuningError::Invalid("start_lives must be at least 1".into()));
        }
        Ok(())
    }
}
