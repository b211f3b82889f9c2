//! Combat resolution
//!
//! Runs after motion each tick. All scans walk their collections back to
//! front so removals never skip or revisit an entity.

use glam::Vec2;

use super::boss;
use super::collision::{circle_overlap, circle_rect_overlap};
use super::difficulty;
use super::powerup;
use super::registry::CollectionKind;
use super::spawn::spawn_regular;
use super::state::{Enemy, GameEvent, GameState, SizeClass};
use crate::consts::*;

/// Outcome of a player hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    ShieldAbsorbed,
    LifeLost,
    GameOver,
}

/// Discard bullets and pickups that have left the playfield
pub fn cleanup_out_of_bounds(state: &mut GameState) {
    let (width, height) = (state.tuning.width, state.tuning.height);
    let reg = &mut state.registry;

    reg.player_bullets.retain(|b| {
        b.pos.y >= -PLAYER_BULLET_MARGIN
            && b.pos.x >= -PLAYER_BULLET_MARGIN
            && b.pos.x <= width + PLAYER_BULLET_MARGIN
    });
    reg.enemy_bullets.retain(|b| b.pos.y <= height + FALLING_MARGIN);
    reg.power_ups.retain(|p| p.pos.y <= height + FALLING_MARGIN);
}

/// Resolve one hit on the player: shield first, then a life
pub fn player_hit(state: &mut GameState) -> HitOutcome {
    let player = &mut state.registry.player;
    if player.shield {
        player.shield = false;
        log::debug!("Shield absorbed a hit");
        state.emit(GameEvent::ShieldConsumed);
        return HitOutcome::ShieldAbsorbed;
    }

    state.lives = state.lives.saturating_sub(1);
    log::debug!("Player hit, {} lives left", state.lives);
    state.emit(GameEvent::LifeLost { lives: state.lives });

    if state.lives == 0 {
        let (final_score, level) = (state.score, state.level);
        log::info!("Game over on level {} with score {}", level, final_score);
        state.reset_game();
        state.emit(GameEvent::GameOver { final_score, level });
        return HitOutcome::GameOver;
    }
    HitOutcome::LifeLost
}

/// Enemy bullets vs the ship. Returns true if the run was reset, in which
/// case the caller should stop processing this tick.
pub fn enemy_bullets_vs_player(state: &mut GameState) -> bool {
    for i in (0..state.registry.enemy_bullets.len()).rev() {
        let b = &state.registry.enemy_bullets[i];
        if !circle_rect_overlap(b.pos, b.radius, &state.registry.player.rect()) {
            continue;
        }
        state.registry.remove_at(CollectionKind::EnemyBullets, i);
        if player_hit(state) == HitOutcome::GameOver {
            return true;
        }
    }
    false
}

/// Pickups touching the ship are consumed and applied at `now`
pub fn power_ups_vs_player(state: &mut GameState, now: f64) {
    for i in (0..state.registry.power_ups.len()).rev() {
        let p = &state.registry.power_ups[i];
        if !circle_rect_overlap(p.pos, p.radius, &state.registry.player.rect()) {
            continue;
        }
        let kind = p.kind;
        state.registry.remove_at(CollectionKind::PowerUps, i);
        powerup::apply(&mut state.registry.player, kind, now, &state.tuning);
        log::debug!("Collected {:?} power-up", kind);
        state.emit(GameEvent::PowerUpCollected { kind });
    }
}

/// Big numerals split into two small ones of the same value. The speed
/// multiplier is the parent's boosted speed over the current level's base.
fn split(state: &mut GameState, parent: &super::state::RegularEnemy) {
    let boosted = parent.speed * SPLIT_SPEED_FACTOR;
    let speed_mul = boosted / difficulty::enemy_speed(&state.tuning, state.level);
    for dx in [-SPLIT_OFFSET_X, SPLIT_OFFSET_X] {
        spawn_regular(
            state,
            SizeClass::Small,
            Some(parent.pos + Vec2::new(dx, 0.0)),
            Some(parent.value),
            speed_mul,
        );
    }
}

/// Player bullets vs enemies and the boss. Each bullet hits at most one
/// enemy per tick and is always consumed by the hit.
pub fn player_bullets_vs_enemies(state: &mut GameState) {
    let mut bi = state.registry.player_bullets.len();
    while bi > 0 {
        bi -= 1;
        let Some(bullet) = state.registry.player_bullets.get(bi) else {
            continue;
        };
        let (b_pos, b_radius) = (bullet.pos, bullet.radius);

        let hit = state
            .registry
            .enemies
            .iter()
            .rposition(|e| circle_overlap(b_pos, b_radius, e.pos(), e.hit_radius()));
        let Some(ei) = hit else {
            continue;
        };

        state.registry.remove_at(CollectionKind::PlayerBullets, bi);

        match &mut state.registry.enemies[ei] {
            Enemy::Boss(b) => {
                b.hp -= 1;
                state.score += state.tuning.score_boss_hit;
                if b.is_dead() {
                    let last_pos = b.pos;
                    state.registry.remove_at(CollectionKind::Enemies, ei);
                    boss::resolve_death(state, last_pos);
                }
            }
            Enemy::Regular(e) => {
                let parent = e.clone();
                state.registry.remove_at(CollectionKind::Enemies, ei);
                match parent.size {
                    SizeClass::Big => {
                        state.score += state.tuning.score_big;
                        split(state, &parent);
                        log::debug!(
                            "Split a big {} at ({:.0}, {:.0})",
                            parent.value.label(),
                            parent.pos.x,
                            parent.pos.y
                        );
                    }
                    SizeClass::Small => {
                        state.score += state.tuning.score_small;
                    }
                }
            }
        }
    }
}
