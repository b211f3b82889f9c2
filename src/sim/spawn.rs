//! Spawn director
//!
//! Per-level state machine: feed regular enemies (and on boss levels the
//! boss) until the level quota is met, then drain and advance once the
//! field is empty.

use glam::Vec2;
use rand::Rng;

use super::difficulty;
use super::powerup;
use super::registry::Entity;
use super::state::{Boss, Enemy, EnemyValue, GameEvent, GameState, RegularEnemy, SizeClass, SpawnPhase};
use crate::consts::*;
use crate::rand_between;

/// What the director decided on a spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnDecision {
    Boss,
    Regular,
    Drain,
}

/// Pure decision rule; the boss check wins when both apply
pub fn decide(
    boss_level: bool,
    spawned: u32,
    target: u32,
    boss_alive: bool,
) -> SpawnDecision {
    if boss_level && spawned >= target.saturating_sub(1) && !boss_alive {
        SpawnDecision::Boss
    } else if spawned < target {
        SpawnDecision::Regular
    } else {
        SpawnDecision::Drain
    }
}

/// Coin flip between the two numerals
pub fn random_value<R: Rng>(rng: &mut R) -> EnemyValue {
    if rng.random_bool(0.5) {
        EnemyValue::Six
    } else {
        EnemyValue::Seven
    }
}

/// Spawn a regular enemy at `speed_mul` times the level's base speed.
/// Missing position means a random x along the top edge.
pub fn spawn_regular(
    state: &mut GameState,
    size: SizeClass,
    pos: Option<Vec2>,
    value: Option<EnemyValue>,
    speed_mul: f32,
) -> u32 {
    let t = &state.tuning;
    let speed = difficulty::enemy_speed(t, state.level) * speed_mul;
    let (width, max_y) = (t.width, t.height - ENEMY_MAX_Y_INSET);
    let value = value.unwrap_or_else(|| random_value(&mut state.rng));
    let pos = pos.unwrap_or_else(|| {
        let x = rand_between(&mut state.rng, SPAWN_EDGE_MARGIN, width - SPAWN_EDGE_MARGIN);
        Vec2::new(x, SPAWN_Y)
    });

    state.registry.add(Entity::Enemy(Enemy::Regular(RegularEnemy {
        id: 0,
        value,
        size,
        pos,
        speed,
        dir: 1.0,
        min_y: ENEMY_MIN_Y,
        max_y,
        hit_radius: size.hit_radius(),
    })))
}

/// Spawn the level's boss at the top center
pub fn spawn_boss(state: &mut GameState) -> u32 {
    let t = &state.tuning;
    let hp = difficulty::boss_hp(t, state.level);
    let boss = Boss {
        id: 0,
        pos: Vec2::new(t.width / 2.0, BOSS_START_Y),
        speed: difficulty::enemy_speed(t, state.level) * BOSS_SPEED_FACTOR,
        dir: 1.0,
        hp,
        max_hp: hp,
        hit_radius: BOSS_HIT_RADIUS,
        shoot_timer: 0.0,
        shoot_interval: t.boss_shoot_interval,
        spawn_timer: 0.0,
        spawn_interval: t.boss_spawn_interval,
    };
    let id = state.registry.add(Entity::Enemy(Enemy::Boss(boss)));
    log::info!("Boss 13 spawned on level {} with {} HP", state.level, hp);
    state.emit(GameEvent::BossSpawned { hp });
    id
}

/// Advance the spawn timer and act on it
pub fn update_spawner(state: &mut GameState, dt: f32) {
    let interval = difficulty::spawn_interval(&state.tuning, state.level);
    let cap = difficulty::max_on_screen(&state.tuning, state.level) as usize;

    state.spawn_timer += dt;
    if state.phase != SpawnPhase::Spawning || state.spawn_timer < interval {
        return;
    }
    state.spawn_timer = 0.0;

    if state.registry.enemies.len() >= cap {
        return;
    }

    let decision = decide(
        difficulty::is_boss_level(&state.tuning, state.level),
        state.spawned_this_level,
        state.level_target,
        state.registry.boss_alive(),
    );

    match decision {
        SpawnDecision::Boss => {
            spawn_boss(state);
            state.spawned_this_level += 1;
        }
        SpawnDecision::Regular => {
            spawn_regular(state, SizeClass::Big, None, None, 1.0);
            state.spawned_this_level += 1;

            let width = state.tuning.width;
            let x = rand_between(&mut state.rng, POWERUP_DROP_MARGIN_X, width - POWERUP_DROP_MARGIN_X);
            let y = rand_between(&mut state.rng, POWERUP_DROP_MIN_Y, POWERUP_DROP_MAX_Y);
            powerup::maybe_drop(state, Vec2::new(x, y));
        }
        SpawnDecision::Drain => {
            log::debug!(
                "Level {} quota met ({} spawned), draining",
                state.level,
                state.spawned_this_level
            );
            state.phase = SpawnPhase::Draining;
        }
    }
}

/// Advance to the next level once a drained field is empty
pub fn check_level_advance(state: &mut GameState) -> bool {
    if state.phase == SpawnPhase::Draining && state.registry.enemies.is_empty() {
        let next = state.level + 1;
        state.start_level(next);
        log::info!("Level {} started (target {})", next, state.level_target);
        state.emit(GameEvent::LevelAdvanced { level: next });
        return true;
    }
    false
}
