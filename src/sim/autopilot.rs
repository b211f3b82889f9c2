//! Demo AI
//!
//! Produces the input a reasonable player would give: dodge incoming fire,
//! grab pickups, otherwise line up under the lowest enemy and shoot.

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::PLAYER_EDGE_MARGIN;

/// How far above the ship enemy bullets are considered a threat
const THREAT_RANGE: f32 = 160.0;
/// Extra horizontal clearance around the ship when dodging
const DODGE_CLEARANCE: f32 = 12.0;
/// Close enough to the target column to stop moving
const DEAD_ZONE: f32 = 4.0;

fn toward(from: f32, to: f32) -> i8 {
    let delta = to - from;
    if delta.abs() <= DEAD_ZONE {
        0
    } else if delta > 0.0 {
        1
    } else {
        -1
    }
}

/// Decide this frame's input from the current state
pub fn drive(state: &GameState) -> TickInput {
    let player = state.player();
    let (px, py) = (player.pos.x, player.pos.y);
    let reach = player.half.x + DODGE_CLEARANCE;

    let threat = state
        .registry
        .enemy_bullets
        .iter()
        .filter(|b| b.pos.y < py && py - b.pos.y < THREAT_RANGE && (b.pos.x - px).abs() < reach)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let move_dir = if let Some(bullet) = threat {
        let mut dir = if bullet.pos.x >= px { -1 } else { 1 };
        // Pinned against a wall: go the other way
        if (dir < 0 && px <= PLAYER_EDGE_MARGIN + 1.0)
            || (dir > 0 && px >= state.tuning.width - PLAYER_EDGE_MARGIN - 1.0)
        {
            dir = -dir;
        }
        dir
    } else if let Some(pickup) = state
        .registry
        .power_ups
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        toward(px, pickup.pos.x)
    } else if let Some(enemy) = state
        .registry
        .enemies
        .iter()
        .max_by(|a, b| a.pos().y.total_cmp(&b.pos().y))
    {
        toward(px, enemy.pos().x)
    } else {
        0
    };

    TickInput {
        move_dir,
        fire: !state.registry.enemies.is_empty(),
        idle_mode: false,
    }
}
