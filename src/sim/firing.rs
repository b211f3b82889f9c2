//! Player fire control

use super::registry::Entity;
use super::state::{Bullet, GameState};
use crate::consts::*;
use crate::heading_from_vertical;

/// Headings for a triple shot, in emission order
pub const TRIPLE_HEADINGS: [f32; 3] = [0.0, -TRIPLE_SPREAD_DEG, TRIPLE_SPREAD_DEG];

/// Cooldown that applies to a shot taken at `now`
pub fn effective_cooldown(state: &GameState, now: f64) -> f32 {
    let player = state.player();
    if player.rapid_active(now) {
        player.fire_cooldown * state.tuning.rapid_cooldown_factor
    } else {
        player.fire_cooldown
    }
}

/// Fire if the cooldown allows. Returns how many bullets left the ship.
pub fn fire(state: &mut GameState, now: f64) -> usize {
    if now < state.player().next_fire_at {
        return 0;
    }

    let cooldown = effective_cooldown(state, now);
    let speed = state.tuning.bullet_speed;
    let player = &mut state.registry.player;
    player.next_fire_at = now + cooldown as f64;

    let origin = player.pos - glam::Vec2::new(0.0, BULLET_SPAWN_OFFSET);
    let count = if player.triple_active(now) { TRIPLE_HEADINGS.len() } else { 1 };

    for &deg in &TRIPLE_HEADINGS[..count] {
        state.registry.add(Entity::PlayerBullet(Bullet {
            id: 0,
            pos: origin,
            vel: heading_from_vertical(deg) * speed,
            radius: BULLET_RADIUS,
        }));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_then_cooldown() {
        let mut state = GameState::new(1);
        assert_eq!(fire(&mut state, 0.0), 1);
        assert_eq!(state.registry.player_bullets.len(), 1);
        assert_eq!(fire(&mut state, 0.1), 0);
        assert_eq!(state.registry.player_bullets.len(), 1);
        assert_eq!(fire(&mut state, 0.3), 1);
        assert_eq!(state.registry.player_bullets.len(), 2);
    }

    #[test]
    fn test_straight_shot() {
        let mut state = GameState::new(1);
        fire(&mut state, 0.0);
        let b = &state.registry.player_bullets[0];
        assert!(b.vel.x.abs() < 1e-4);
        assert!((b.vel.y + 520.0).abs() < 1e-3);
        assert_eq!(b.pos.y, state.player().pos.y - BULLET_SPAWN_OFFSET);
    }

    #[test]
    fn test_rapid_fire_cooldown_window() {
        let mut state = GameState::new(1);
        state.registry.player.rapid_until = 6.0;
        let base = state.player().fire_cooldown;

        assert_eq!(effective_cooldown(&state, 5.99), base * 0.45);
        assert_eq!(effective_cooldown(&state, 6.0), base);

        fire(&mut state, 1.0);
        let expected = 1.0 + (base * 0.45) as f64;
        assert!((state.player().next_fire_at - expected).abs() < 1e-9);
    }

    #[test]
    fn test_triple_shot_headings() {
        let mut state = GameState::new(1);
        state.registry.player.triple_until = 8.0;
        assert_eq!(fire(&mut state, 0.0), 3);

        let angles: Vec<f32> = state
            .registry
            .player_bullets
            .iter()
            .map(|b| b.vel.x.atan2(-b.vel.y).to_degrees())
            .collect();
        assert!(angles[0].abs() < 1e-3);
        assert!((angles[1] + 12.0).abs() < 1e-3);
        assert!((angles[2] - 12.0).abs() < 1e-3);
        for b in &state.registry.player_bullets {
            assert!((b.vel.length() - 520.0).abs() < 1e-2);
        }

        // Expired: back to a single bullet
        assert_eq!(fire(&mut state, 8.0), 1);
    }
}
