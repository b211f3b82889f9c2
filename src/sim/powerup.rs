//! Power-up economy: drop rolls, falling pickups, and their effects

use glam::Vec2;
use rand::Rng;

use super::difficulty;
use super::registry::Entity;
use super::state::{GameState, Player, PowerUp, PowerUpKind};
use crate::consts::POWERUP_RADIUS;
use crate::tuning::Tuning;

/// Roll the level's drop chance and maybe place a pickup at `pos`.
/// Returns the kind dropped, if any.
pub fn maybe_drop(state: &mut GameState, pos: Vec2) -> Option<PowerUpKind> {
    let chance = difficulty::powerup_chance(&state.tuning, state.level);
    if state.rng.random::<f32>() > chance {
        return None;
    }

    let kind = PowerUpKind::from_roll(state.rng.random::<f32>());
    let fall_speed = state.tuning.powerup_fall_speed;
    state.registry.add(Entity::PowerUp(PowerUp {
        id: 0,
        kind,
        pos,
        fall_speed,
        radius: POWERUP_RADIUS,
    }));
    log::debug!("Dropped {:?} power-up at ({:.0}, {:.0})", kind, pos.x, pos.y);
    Some(kind)
}

/// Apply a pickup at time `now`. Timed effects are absolute deadlines, so
/// picking one up again restarts the window instead of stacking it.
pub fn apply(player: &mut Player, kind: PowerUpKind, now: f64, tuning: &Tuning) {
    match kind {
        PowerUpKind::Rapid => player.rapid_until = now + tuning.rapid_duration,
        PowerUpKind::Triple => player.triple_until = now + tuning.triple_duration,
        PowerUpKind::Shield => player.shield = true,
    }
}

/// Let pickups fall
pub fn integrate(power_ups: &mut [PowerUp], dt: f32) {
    for p in power_ups {
        p.pos.y += p.fall_speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_timed_effects_are_absolute() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        apply(&mut player, PowerUpKind::Rapid, 10.0, &tuning);
        assert_eq!(player.rapid_until, 16.0);
        // Re-pickup extends from now, no stacking
        apply(&mut player, PowerUpKind::Rapid, 12.0, &tuning);
        assert_eq!(player.rapid_until, 18.0);

        apply(&mut player, PowerUpKind::Triple, 10.0, &tuning);
        assert_eq!(player.triple_until, 18.0);
        assert!(player.triple_active(17.9));
        assert!(!player.triple_active(18.0));
    }

    #[test]
    fn test_shield_is_a_flag() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        apply(&mut player, PowerUpKind::Shield, 1.0, &tuning);
        assert!(player.shield);
        assert_eq!(player.rapid_until, 0.0);
    }

    #[test]
    fn test_guaranteed_drop() {
        let mut tuning = Tuning::default();
        tuning.powerup_chance_base = 1.0;
        tuning.powerup_chance_max = 1.0;
        let mut state = GameState::with_tuning(5, tuning).unwrap();
        let kind = maybe_drop(&mut state, Vec2::new(100.0, 50.0));
        assert!(kind.is_some());
        assert_eq!(state.registry.power_ups.len(), 1);
        assert_eq!(state.registry.power_ups[0].fall_speed, 140.0);
    }

    #[test]
    fn test_zero_chance_never_drops() {
        let mut tuning = Tuning::default();
        tuning.powerup_chance_base = -1.0;
        tuning.powerup_chance_per_level = 0.0;
        let mut state = GameState::with_tuning(5, tuning).unwrap();
        for _ in 0..200 {
            maybe_drop(&mut state, Vec2::ZERO);
        }
        assert!(state.registry.power_ups.is_empty());
    }

    #[test]
    fn test_falls() {
        let mut p = vec![PowerUp {
            id: 1,
            kind: PowerUpKind::Shield,
            pos: Vec2::new(10.0, 0.0),
            fall_speed: 140.0,
            radius: POWERUP_RADIUS,
        }];
        integrate(&mut p, 0.5);
        assert_eq!(p[0].pos.y, 70.0);
    }
}
