//! Boss behavior
//!
//! The boss strafes between the side margins and runs two independent
//! timers: one fires straight down, the other drops reinforcements.

use glam::Vec2;
use rand::Rng;

use super::registry::Entity;
use super::spawn::{random_value, spawn_regular};
use super::state::{Boss, Bullet, GameEvent, GameState, SizeClass};
use crate::consts::*;
use crate::rand_between;

/// Side effects requested by a boss during its update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BossActions {
    /// Enemy bullet origin
    pub shot: Option<Vec2>,
    /// Reinforcement anchor (the boss center)
    pub reinforce_at: Option<Vec2>,
}

/// Move the boss and tick its timers
pub fn step(boss: &mut Boss, dt: f32, width: f32) -> BossActions {
    boss.pos.x += boss.dir * boss.speed * dt;
    if boss.pos.x < BOSS_EDGE_MARGIN {
        boss.dir = 1.0;
    }
    if boss.pos.x > width - BOSS_EDGE_MARGIN {
        boss.dir = -1.0;
    }

    boss.shoot_timer += dt;
    boss.spawn_timer += dt;

    let mut actions = BossActions::default();
    if boss.shoot_timer >= boss.shoot_interval {
        boss.shoot_timer = 0.0;
        actions.shot = Some(boss.pos + Vec2::new(0.0, ENEMY_BULLET_SPAWN_OFFSET));
    }
    if boss.spawn_timer >= boss.spawn_interval {
        boss.spawn_timer = 0.0;
        actions.reinforce_at = Some(boss.pos);
    }
    actions
}

/// Carry out what `step` asked for. Reinforcements don't count toward the
/// level target.
pub fn perform(state: &mut GameState, actions: BossActions) {
    if let Some(origin) = actions.shot {
        let speed = state.tuning.enemy_bullet_speed;
        state.registry.add(Entity::EnemyBullet(Bullet {
            id: 0,
            pos: origin,
            vel: Vec2::new(0.0, speed),
            radius: ENEMY_BULLET_RADIUS,
        }));
    }
    if let Some(anchor) = actions.reinforce_at {
        let dx = rand_between(&mut state.rng, -REINFORCEMENT_SPREAD_X, REINFORCEMENT_SPREAD_X);
        let pos = anchor + Vec2::new(dx, REINFORCEMENT_OFFSET_Y);
        spawn_regular(state, SizeClass::Big, Some(pos), None, REINFORCEMENT_SPEED_FACTOR);
    }
}

/// Boss destroyed: bonus, then burst into 7..=10 big numerals around its
/// last position. The caller removes the boss itself.
pub fn resolve_death(state: &mut GameState, last_pos: Vec2) -> u32 {
    state.score += state.tuning.score_boss_kill;

    let count = state.rng.random_range(BURST_MIN..=BURST_MAX);
    for _ in 0..count {
        let dx = rand_between(&mut state.rng, -REINFORCEMENT_SPREAD_X, REINFORCEMENT_SPREAD_X);
        let dy = rand_between(&mut state.rng, -BURST_SPREAD_Y, BURST_SPREAD_Y);
        let value = random_value(&mut state.rng);
        spawn_regular(
            state,
            SizeClass::Big,
            Some(last_pos + Vec2::new(dx, dy)),
            Some(value),
            BURST_SPEED_FACTOR,
        );
    }

    log::info!("Boss 13 defeated on level {}, burst into {} numerals", state.level, count);
    state.emit(GameEvent::BossDefeated { offspring: count });
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::spawn_boss;
    use crate::sim::state::Enemy;

    fn test_boss() -> Boss {
        Boss {
            id: 1,
            pos: Vec2::new(240.0, BOSS_START_Y),
            speed: 100.0,
            dir: 1.0,
            hp: 16,
            max_hp: 16,
            hit_radius: BOSS_HIT_RADIUS,
            shoot_timer: 0.0,
            shoot_interval: 1.05,
            spawn_timer: 0.0,
            spawn_interval: 1.8,
        }
    }

    #[test]
    fn test_boss_bounces_at_margins() {
        let mut boss = test_boss();
        boss.pos.x = 415.0;
        step(&mut boss, 0.1, 480.0);
        assert_eq!(boss.pos.x, 425.0);
        assert_eq!(boss.dir, -1.0);
        assert_eq!(boss.pos.y, BOSS_START_Y);

        boss.pos.x = 65.0;
        step(&mut boss, 0.1, 480.0);
        assert_eq!(boss.dir, 1.0);
    }

    #[test]
    fn test_boss_timers_are_independent() {
        let mut boss = test_boss();
        let a = step(&mut boss, 1.1, 480.0);
        assert!(a.shot.is_some());
        assert!(a.reinforce_at.is_none());
        assert_eq!(boss.shoot_timer, 0.0);

        let b = step(&mut boss, 0.8, 480.0);
        assert!(b.shot.is_none());
        assert!(b.reinforce_at.is_some());
        assert_eq!(boss.spawn_timer, 0.0);
    }

    #[test]
    fn test_shot_goes_straight_down() {
        let mut state = GameState::new(9);
        perform(
            &mut state,
            BossActions { shot: Some(Vec2::new(200.0, 138.0)), reinforce_at: None },
        );
        let b = &state.registry.enemy_bullets[0];
        assert_eq!(b.vel, Vec2::new(0.0, 360.0));
        assert_eq!(b.radius, ENEMY_BULLET_RADIUS);
    }

    #[test]
    fn test_reinforcement_not_counted() {
        let mut state = GameState::new(9);
        perform(
            &mut state,
            BossActions { shot: None, reinforce_at: Some(Vec2::new(240.0, 120.0)) },
        );
        assert_eq!(state.spawned_this_level, 0);
        match &state.registry.enemies[0] {
            Enemy::Regular(e) => {
                assert_eq!(e.size, SizeClass::Big);
                assert_eq!(e.pos.y, 155.0);
                assert!((e.pos.x - 240.0).abs() <= REINFORCEMENT_SPREAD_X);
                assert!((e.speed - 85.0 * 1.1).abs() < 1e-4);
            }
            Enemy::Boss(_) => panic!("expected a regular enemy"),
        }
    }

    #[test]
    fn test_death_burst_size() {
        for seed in 0..50 {
            let mut state = GameState::new(seed);
            spawn_boss(&mut state);
            let before = state.registry.enemies.len();
            let n = resolve_death(&mut state, Vec2::new(240.0, 120.0));
            assert!((BURST_MIN..=BURST_MAX).contains(&n));
            assert_eq!(state.registry.enemies.len(), before + n as usize);
            assert_eq!(state.score, 250);
        }
    }

    #[test]
    fn test_death_burst_placement_and_speed() {
        let last = Vec2::new(240.0, 120.0);
        for seed in 0..20 {
            let mut state = GameState::new(seed);
            state.start_level(5);
            let base = crate::sim::difficulty::enemy_speed(&state.tuning, state.level);
            let n = resolve_death(&mut state, last);
            assert_eq!(state.registry.enemies.len(), n as usize);

            for enemy in &state.registry.enemies {
                let Enemy::Regular(e) = enemy else {
                    panic!("burst produced a boss");
                };
                assert_eq!(e.size, SizeClass::Big);
                assert!((e.speed - base * BURST_SPEED_FACTOR).abs() < 1e-3);
                assert!((e.pos.x - last.x).abs() <= REINFORCEMENT_SPREAD_X);
                assert!((e.pos.y - last.y).abs() <= BURST_SPREAD_Y);
            }
        }
    }
}
