//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-driven only (`advance` takes the elapsed `dt`, nothing reads clocks)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host calls `advance` once per rendering frame and `handle_tap` once
//! per raw touch event; both run on the host's event loop, never concurrently.

pub mod advance;
pub mod project;
pub mod state;
pub mod tap;

pub use advance::advance;
pub use project::project;
pub use state::{GameEvent, GamePhase, SimState};
pub use tap::{handle_tap, impulse, resolve_tap};
