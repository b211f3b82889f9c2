//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform concerns:
//! - Caller-supplied delta time and clock readings only
//! - Seeded RNG only
//! - Stable iteration order (collections keep insertion order)

pub mod autopilot;
pub mod boss;
pub mod collision;
pub mod combat;
pub mod difficulty;
pub mod firing;
pub mod powerup;
pub mod registry;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_overlap, circle_rect_overlap, rect_overlap};
pub use firing::fire;
pub use registry::{CollectionKind, Entity, EntityRegistry};
pub use snapshot::Snapshot;
pub use state::{
    Boss, Bullet, Enemy, EnemyValue, GameEvent, GameState, Player, PowerUp, PowerUpKind,
    RegularEnemy, SizeClass, SpawnPhase,
};
pub use tick::{TickInput, clamp_dt, tick};
