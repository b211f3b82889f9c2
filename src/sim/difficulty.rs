//! Difficulty curve
//!
//! Pure functions of the (1-based) level and the tuning table.

use crate::tuning::Tuning;

#[inline]
fn steps(level: u32) -> u32 {
    level.max(1) - 1
}

/// Base vertical speed of regular enemies
pub fn enemy_speed(t: &Tuning, level: u32) -> f32 {
    t.base_enemy_speed + t.speed_per_level * steps(level) as f32
}

/// Seconds between spawn attempts
pub fn spawn_interval(t: &Tuning, level: u32) -> f32 {
    (t.base_spawn - t.spawn_decay * steps(level) as f32).max(t.min_spawn)
}

/// Concurrent enemy cap (bosses and reinforcements included)
pub fn max_on_screen(t: &Tuning, level: u32) -> u32 {
    t.max_on_screen_base + t.max_on_screen_growth * steps(level)
}

/// Regular enemies the director spawns before the level can drain
pub fn level_target(t: &Tuning, level: u32) -> u32 {
    t.base_enemies + t.enemies_growth * steps(level)
}

/// Boss hit points; grows once per boss tier
pub fn boss_hp(t: &Tuning, level: u32) -> i32 {
    t.boss_hp_base + t.boss_hp_growth * (level / t.boss_every.max(1)) as i32
}

/// Chance that a regular spawn also drops a power-up
pub fn powerup_chance(t: &Tuning, level: u32) -> f32 {
    (t.powerup_chance_base + t.powerup_chance_per_level * level as f32)
        .clamp(0.0, t.powerup_chance_max)
}

pub fn is_boss_level(t: &Tuning, level: u32) -> bool {
    level.is_multiple_of(t.boss_every.max(1))
}
