//! Read-only view of the world for a renderer or HUD

use serde::Serialize;

use super::state::{Bullet, Enemy, GameState, Player, PowerUp, SpawnPhase};

/// Boss health as the HUD shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BossStatus {
    pub hp: i32,
    pub max_hp: i32,
    /// Pips drawn next to the "13" (1..=12)
    pub pips: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    pub shield: bool,
    pub phase: SpawnPhase,
    pub player: &'a Player,
    pub player_bullets: &'a [Bullet],
    pub enemy_bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub power_ups: &'a [PowerUp],
    pub boss: Option<BossStatus>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let reg = &self.registry;
        let boss = reg.enemies.iter().find_map(|e| match e {
            Enemy::Boss(b) => Some(BossStatus { hp: b.hp, max_hp: b.max_hp, pips: b.hp_pips() }),
            Enemy::Regular(_) => None,
        });
        Snapshot {
            level: self.level,
            score: self.score,
            lives: self.lives,
            shield: reg.player.shield,
            phase: self.phase,
            player: &reg.player,
            player_bullets: &reg.player_bullets,
            enemy_bullets: &reg.enemy_bullets,
            enemies: &reg.enemies,
            power_ups: &reg.power_ups,
            boss,
        }
    }
}
