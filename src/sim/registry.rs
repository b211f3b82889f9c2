//! Entity registry
//!
//! Sole owner of the player and every entity collection. Entities enter
//! through [`EntityRegistry::add`], which routes them by variant, so one
//! entity can never sit in two collections.

use serde::Serialize;

use super::state::{Bullet, Enemy, Player, PowerUp};

/// Which collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    PlayerBullets,
    EnemyBullets,
    Enemies,
    PowerUps,
}

/// An entity on its way into (or out of) the registry
#[derive(Debug, Clone)]
pub enum Entity {
    PlayerBullet(Bullet),
    EnemyBullet(Bullet),
    Enemy(Enemy),
    PowerUp(PowerUp),
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityRegistry {
    pub player: Player,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            next_id: 1,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Insert an entity, assigning it a fresh id. Returns the id.
    pub fn add(&mut self, entity: Entity) -> u32 {
        let id = self.next_entity_id();
        match entity {
            Entity::PlayerBullet(mut b) => {
                b.id = id;
                self.player_bullets.push(b);
            }
            Entity::EnemyBullet(mut b) => {
                b.id = id;
                self.enemy_bullets.push(b);
            }
            Entity::Enemy(mut e) => {
                e.set_id(id);
                self.enemies.push(e);
            }
            Entity::PowerUp(mut p) => {
                p.id = id;
                self.power_ups.push(p);
            }
        }
        id
    }

    /// Remove by index, preserving the order of the remaining entities
    pub fn remove_at(&mut self, kind: CollectionKind, index: usize) -> Option<Entity> {
        match kind {
            CollectionKind::PlayerBullets => (index < self.player_bullets.len())
                .then(|| Entity::PlayerBullet(self.player_bullets.remove(index))),
            CollectionKind::EnemyBullets => (index < self.enemy_bullets.len())
                .then(|| Entity::EnemyBullet(self.enemy_bullets.remove(index))),
            CollectionKind::Enemies => {
                (index < self.enemies.len()).then(|| Entity::Enemy(self.enemies.remove(index)))
            }
            CollectionKind::PowerUps => {
                (index < self.power_ups.len()).then(|| Entity::PowerUp(self.power_ups.remove(index)))
            }
        }
    }

    pub fn count(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::PlayerBullets => self.player_bullets.len(),
            CollectionKind::EnemyBullets => self.enemy_bullets.len(),
            CollectionKind::Enemies => self.enemies.len(),
            CollectionKind::PowerUps => self.power_ups.len(),
        }
    }

    pub fn boss_alive(&self) -> bool {
        self.enemies.iter().any(Enemy::is_boss)
    }

    /// Drop every entity (the player is reset by the caller)
    pub fn clear(&mut self) {
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
    }

    /// Total live entities, player excluded
    pub fn total(&self) -> usize {
        self.player_bullets.len() + self.enemy_bullets.len() + self.enemies.len() + self.power_ups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use glam::Vec2;

    fn bullet(x: f32) -> Bullet {
        Bullet { id: 0, pos: Vec2::new(x, 0.0), vel: Vec2::ZERO, radius: 3.0 }
    }

    #[test]
    fn test_add_routes_and_assigns_ids() {
        let mut reg = EntityRegistry::new(Player::new(&Tuning::default()));
        let a = reg.add(Entity::PlayerBullet(bullet(1.0)));
        let b = reg.add(Entity::EnemyBullet(bullet(2.0)));
        assert_ne!(a, b);
        assert_eq!(reg.count(CollectionKind::PlayerBullets), 1);
        assert_eq!(reg.count(CollectionKind::EnemyBullets), 1);
        assert_eq!(reg.player_bullets[0].id, a);
        assert_eq!(reg.total(), 2);
    }

    #[test]
    fn test_reverse_removal_visits_each_once() {
        let mut reg = EntityRegistry::new(Player::new(&Tuning::default()));
        for i in 0..6 {
            reg.add(Entity::PlayerBullet(bullet(i as f32)));
        }
        let mut visited = Vec::new();
        for i in (0..reg.player_bullets.len()).rev() {
            visited.push(reg.player_bullets[i].pos.x as i32);
            if i % 2 == 0 {
                reg.remove_at(CollectionKind::PlayerBullets, i);
            }
        }
        assert_eq!(visited, vec![5, 4, 3, 2, 1, 0]);
        let left: Vec<i32> = reg.player_bullets.iter().map(|b| b.pos.x as i32).collect();
        assert_eq!(left, vec![1, 3, 5]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut reg = EntityRegistry::new(Player::new(&Tuning::default()));
        assert!(reg.remove_at(CollectionKind::Enemies, 0).is_none());
    }
}
