//! Game state and core simulation types
//!
//! One live `SimState` per session, owned by the host and mutated only inside
//! `advance` and `impulse`.

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Reset done, ball not yet placed (waiting for the first frame)
    Ready,
    /// Active gameplay
    Playing,
    /// Session ended; all further calls are no-ops
    GameOver,
}

/// Events raised toward the host, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Successful tap; the host displays the score and may run its
    /// every-10th-point celebration off this
    ScoreChanged { score: u32 },
    /// Second un-tapped floor contact; fires exactly once per session
    GameOver { score: u32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// World-space ball center; meaningless until the first `advance`
    pub position: DVec3,
    /// World-space linear velocity (units/second)
    pub velocity: DVec3,
    /// Current downward acceleration magnitude
    pub gravity: f64,
    /// Consecutive floor contacts since the last successful tap
    pub bounce_count: u8,
    /// Successful taps this session
    pub score: u32,
    pub phase: GamePhase,
    /// One-shot latch for the place-in-front-of-camera step
    pub spawned: bool,
    /// Cosmetic rotation (radians per axis), no physical coupling
    pub rotation: DVec3,
    /// Cosmetic angular velocity, damped each frame
    pub spin: DVec3,
    /// Seeded RNG driving the tap kicks
    pub rng: Pcg32,
    /// Pending events for the host
    pub events: Vec<GameEvent>,
}

impl SimState {
    /// Start a fresh session: gravity back to default, zero velocity except
    /// a small random horizontal kick, ball placed on the next frame.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let velocity = DVec3::new(
            rng.random_range(-START_KICK..START_KICK),
            0.0,
            rng.random_range(-START_KICK..START_KICK),
        );
        log::info!("session start (seed {seed})");
        Self {
            seed,
            position: DVec3::ZERO,
            velocity,
            gravity: DEFAULT_GRAVITY,
            bounce_count: 0,
            score: 0,
            phase: GamePhase::Ready,
            spawned: false,
            rotation: DVec3::ZERO,
            spin: DVec3::ZERO,
            rng,
            events: Vec::new(),
        }
    }

    /// Replace this session with a fresh one under a new seed
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// True until the terminal transition has fired
    pub fn is_active(&self) -> bool {
        self.phase != GamePhase::GameOver
    }

    /// Hand pending events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
