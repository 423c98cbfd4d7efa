//! Per-frame simulation step
//!
//! The tricky part of tapball: the viewport edges are not static walls but
//! planes recomputed every frame from the camera pose and the ball's forward
//! distance, so a phone waving around keeps the ball on screen. Explicit
//! Euler integration is fine here; `dt` is a frame interval and the game is
//! not physics-critical.

use crate::camera::{CameraPose, Viewport};
use crate::consts::*;

use super::state::{GameEvent, GamePhase, SimState};

/// Advance the session by one frame.
///
/// No-op after game over. A non-finite `dt`, negative `dt`, or degenerate
/// camera pose skips the frame entirely; a single bad sensor frame must
/// never corrupt or crash an interactive session.
pub fn advance(state: &mut SimState, dt: f64, camera: &CameraPose, viewport: &Viewport) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    if !dt.is_finite() || dt < 0.0 || !camera.is_finite() {
        log::debug!("skipping frame: bad dt or camera pose");
        return;
    }

    // Place the ball in front of the camera on the first frame after reset
    if !state.spawned {
        state.position = camera.position + camera.forward() * SPAWN_DISTANCE;
        state.position.y += SPAWN_LIFT;
        state.spawned = true;
        state.phase = GamePhase::Playing;
        log::debug!("ball spawned at {:?}", state.position);
    }

    // Gravity acts on Y only, then explicit Euler position update
    state.velocity.y -= state.gravity * dt;
    state.position += state.velocity * dt;

    // Camera-relative basis and the ball's projection onto it
    let forward = camera.forward();
    let right = camera.right();
    let up = camera.up();
    let relative = state.position - camera.position;
    let forward_dist = relative.dot(forward);
    let right_dist = relative.dot(right);
    let up_dist = relative.dot(up);

    // Viewport-edge bounces. The half-extents scale with forward distance,
    // so these are the world-space edges of what the player can see. Skipped
    // when the ball is at or behind the camera plane: the extents would be
    // degenerate and the floor rule below recovers the session anyway.
    if forward_dist > 0.0 && viewport.is_valid() {
        let height_half = (viewport.fov_deg.to_radians() / 2.0).tan() * forward_dist;
        let width_half = height_half * viewport.aspect();
        let edge_right = width_half * EDGE_MARGIN;
        let edge_top = height_half * EDGE_MARGIN;

        if right_dist > edge_right {
            state.velocity.x = -state.velocity.x.abs() * RESTITUTION;
            state.position -= right * (right_dist - edge_right);
        } else if right_dist < -edge_right {
            state.velocity.x = state.velocity.x.abs() * RESTITUTION;
            state.position += right * (-edge_right - right_dist);
        }

        // Top edge only; there is no bottom viewport bound, the floor rule
        // supersedes it
        if up_dist > edge_top {
            state.velocity.y = -state.velocity.y.abs() * RESTITUTION;
            state.position -= up * (up_dist - edge_top);
        }

        if forward_dist > MAX_FORWARD_DIST {
            state.velocity.z = -state.velocity.z.abs() * RESTITUTION;
            state.position -= forward * (forward_dist - MAX_FORWARD_DIST);
        } else if forward_dist < MIN_FORWARD_DIST {
            state.velocity.z = state.velocity.z.abs() * RESTITUTION;
            state.position += forward * (MIN_FORWARD_DIST - forward_dist);
        }
    }

    // Floor: first contact bounces, second ends the session
    let floor_level = camera.position.y - FLOOR_DROP;
    if state.position.y < floor_level {
        if state.bounce_count < MAX_FLOOR_BOUNCES {
            state.velocity.y = FLOOR_BOUNCE_SPEED;
            state.velocity.x *= FLOOR_FRICTION;
            state.velocity.z *= FLOOR_FRICTION;
            state.position.y = floor_level;
            state.bounce_count += 1;
            log::debug!("floor bounce {} of {}", state.bounce_count, MAX_FLOOR_BOUNCES + 1);
        } else {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver { score: state.score });
            log::info!("game over, final score {}", state.score);
            return;
        }
    }

    // Cosmetic spin integrator, purely presentational
    state.rotation += state.spin * dt;
    state.spin *= SPIN_DAMPING;
}
