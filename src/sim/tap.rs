//! Tap hit-testing and the tap impulse
//!
//! The hit test is a fixed-radius disc around the ball's projected center,
//! an accepted approximation of the projected sphere size rather than an
//! exact sphere-ray intersection. Keep it that way; the game is tuned
//! around it.

use glam::{DVec2, DVec3};
use rand::Rng;

use crate::camera::{CameraPose, Viewport};
use crate::consts::*;

use super::project::project;
use super::state::{GameEvent, GamePhase, SimState};

/// Decide whether a raw touch registers as a hit on the ball.
///
/// True iff the ball is on screen and the touch is strictly within
/// `hit_radius_px` of its projected center. An off-screen ball
/// (`ball_screen == None`) is a guaranteed miss.
pub fn resolve_tap(touch: DVec2, ball_screen: Option<DVec2>, hit_radius_px: f64) -> bool {
    match ball_screen {
        Some(center) => touch.distance(center) < hit_radius_px,
        None => false,
    }
}

/// Apply a successful tap: bounce the ball upward with a random horizontal
/// kick and a fresh spin, score the point, and step the difficulty.
///
/// Gravity ramps by `GRAVITY_STEP` per tap and wraps back to `MIN_GRAVITY`
/// once it exceeds `MAX_GRAVITY`; the ramp is cyclic on purpose so the game
/// never becomes unwinnable. No-op after game over.
pub fn impulse(state: &mut SimState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.velocity.y = TAP_BOUNCE_SPEED;
    state.velocity.x = state.rng.random_range(-TAP_KICK_X..TAP_KICK_X);
    state.velocity.z = state.rng.random_range(-TAP_KICK_Z..TAP_KICK_Z);
    state.spin = DVec3::new(
        state.rng.random_range(-SPIN_KICK..SPIN_KICK),
        state.rng.random_range(-SPIN_KICK..SPIN_KICK),
        state.rng.random_range(-SPIN_KICK..SPIN_KICK),
    );

    state.gravity += GRAVITY_STEP;
    if state.gravity > MAX_GRAVITY {
        state.gravity = MIN_GRAVITY;
    }

    state.bounce_count = 0;
    state.score += 1;
    state.events.push(GameEvent::ScoreChanged { score: state.score });
    log::debug!("tap hit, score {} gravity {}", state.score, state.gravity);
}

/// The host's touch-event flow in one call: project the ball, resolve the
/// tap against it, and apply the impulse on a hit. Returns whether the tap
/// landed.
pub fn handle_tap(
    state: &mut SimState,
    touch: DVec2,
    camera: &CameraPose,
    viewport: &Viewport,
) -> bool {
    if state.phase == GamePhase::GameOver {
        return false;
    }
    let ball_screen = if state.spawned {
        project(state.position, camera, viewport)
    } else {
        None
    };
    let hit = resolve_tap(touch, ball_screen, HIT_RADIUS_PX);
    if hit {
        impulse(state);
    }
    hit
}
