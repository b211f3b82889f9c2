//! Session driver
//!
//! Owns one game plus a clock. The clock is injected so tests and headless
//! runs can step time by hand.

use std::cell::Cell;
use std::time::Instant;

use crate::sim::{GameEvent, GameState, Snapshot, TickInput, fire, tick};
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Monotonic time source in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock
#[derive(Debug, Default)]
pub struct ManualClock {
    t: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { t: Cell::new(start) }
    }

    pub fn advance(&self, secs: f64) {
        self.t.set(self.t.get() + secs);
    }

    pub fn set(&self, t: f64) {
        self.t.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.t.get()
    }
}

/// A running game bound to a clock
pub struct Session<C: Clock> {
    state: GameState,
    clock: C,
    last: f64,
}

impl<C: Clock> Session<C> {
    pub fn new(seed: u64, tuning: Tuning, clock: C) -> Result<Self, TuningError> {
        let state = GameState::with_tuning(seed, tuning)?;
        let last = clock.now();
        log::info!("New session (seed {})", seed);
        Ok(Self { state, clock, last })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// Edge-triggered fire request. Returns bullets emitted (0 on cooldown).
    pub fn fire(&mut self) -> usize {
        let now = self.clock.now();
        fire(&mut self.state, now)
    }

    /// Run one frame with the time elapsed since the previous step
    pub fn step(&mut self, input: &TickInput) -> &[GameEvent] {
        let now = self.clock.now();
        let dt = (now - self.last) as f32;
        self.last = now;
        tick(&mut self.state, input, now, dt);
        &self.state.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1.0);
        clock.advance(0.5);
        assert_eq!(clock.now(), 1.5);
        clock.set(10.0);
        assert_eq!(clock.now(), 10.0);
    }

    #[test]
    fn test_step_uses_clock_delta() {
        let mut session = Session::new(1, Tuning::default(), ManualClock::new(0.0)).unwrap();
        session.clock().advance(0.01);
        session.step(&TickInput { move_dir: 1, ..Default::default() });
        let x = session.state().player().pos.x;
        assert!((x - (240.0 + 4.2)).abs() < 1e-3);
    }

    #[test]
    fn test_backwards_clock_is_zero_dt() {
        let mut session = Session::new(1, Tuning::default(), ManualClock::new(5.0)).unwrap();
        session.clock().set(4.0);
        session.step(&TickInput { move_dir: 1, ..Default::default() });
        assert_eq!(session.state().player().pos.x, 240.0);
    }

    #[test]
    fn test_invalid_tuning_is_an_error() {
        let mut tuning = Tuning::default();
        tuning.width = 30.0;
        assert!(Session::new(1, tuning, ManualClock::new(0.0)).is_err());
    }
}
