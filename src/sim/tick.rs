//! Simulation step
//!
//! Core game loop that advances the world by one frame. Order matters:
//! input, spawning, level advance, motion, cleanup, combat, events.

use super::autopilot;
use super::boss::{self, BossActions};
use super::combat;
use super::firing;
use super::powerup;
use super::spawn;
use super::state::{Enemy, GameEvent, GameState};

/// Input commands for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// -1 left, 0 idle, +1 right (anything else is clamped)
    pub move_dir: i8,
    /// Fire request (edge-triggered; cooldown makes repeats harmless)
    pub fire: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Sanitize a frame delta: NaN and negatives become 0, long pauses are capped
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt.min(max_dt) } else { 0.0 }
}

/// Advance the game by one frame. `now` is the monotonic clock reading used
/// for fire cooldowns and power-up deadlines.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64, dt: f32) {
    state.events.clear();
    let dt = clamp_dt(dt, state.tuning.max_dt);
    let score_before = state.score;
    state.time += dt as f64;

    let input = if input.idle_mode {
        autopilot::drive(state)
    } else {
        input.clone()
    };

    // Input
    let dir = input.move_dir.clamp(-1, 1) as f32;
    let width = state.tuning.width;
    state.registry.player.move_horizontal(dir, dt, width);
    if input.fire {
        firing::fire(state, now);
    }

    // Spawning and level flow
    spawn::update_spawner(state, dt);
    spawn::check_level_advance(state);

    // Motion
    for b in state.registry.player_bullets.iter_mut() {
        b.integrate(dt);
    }
    for b in state.registry.enemy_bullets.iter_mut() {
        b.integrate(dt);
    }
    powerup::integrate(&mut state.registry.power_ups, dt);

    let mut boss_actions = Vec::new();
    for enemy in state.registry.enemies.iter_mut().rev() {
        match enemy {
            Enemy::Regular(e) => e.step(dt),
            Enemy::Boss(b) => boss_actions.push(boss::step(b, dt, width)),
        }
    }
    for actions in boss_actions {
        if actions != BossActions::default() {
            boss::perform(state, actions);
        }
    }

    // Collisions
    combat::cleanup_out_of_bounds(state);
    let reset = combat::enemy_bullets_vs_player(state);
    if !reset {
        combat::power_ups_vs_player(state, now);
        combat::player_bullets_vs_enemies(state);
    }

    if state.score != score_before {
        let score = state.score;
        state.emit(GameEvent::ScoreChanged { score });
    }
}
