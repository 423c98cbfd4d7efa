//! Tapball headless demo
//!
//! Runs a scripted session with a fixed camera: the simulation advances at
//! 60 Hz and a synthetic player taps the ball wherever it projects every 40
//! frames until the session ends. Useful for eyeballing the physics tuning
//! without a host application.

use glam::{DQuat, DVec3};
use serde::Serialize;

use tapball::sim::{GameEvent, SimState, advance, handle_tap, project};
use tapball::{CameraPose, Viewport};

#[derive(Serialize)]
struct SessionSummary {
    seed: u64,
    frames: u64,
    score: u32,
    final_gravity: f64,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xBA11);

    // The host app holds the phone slightly tilted toward the floor
    let camera = CameraPose::new(
        DVec3::new(0.0, 0.0, 5.0),
        DQuat::from_rotation_x(-std::f64::consts::FRAC_PI_6),
    );
    let viewport = Viewport::new(390.0, 844.0);
    let dt = 1.0 / 60.0;
    // Hard stop in case the synthetic player never loses
    let max_frames: u64 = 60 * 600;

    let mut state = SimState::new(seed);
    let mut frames: u64 = 0;
    'session: loop {
        advance(&mut state, dt, &camera, &viewport);
        frames += 1;

        // Synthetic player: tap dead center on the ball every 40 frames
        if frames % 40 == 0 {
            if let Some(ball_screen) = project(state.position, &camera, &viewport) {
                handle_tap(&mut state, ball_screen, &camera, &viewport);
            }
        }

        for event in state.drain_events() {
            match event {
                GameEvent::ScoreChanged { score } => log::info!("score {score}"),
                GameEvent::GameOver { score } => {
                    log::info!("game over after {frames} frames, score {score}");
                    break 'session;
                }
            }
        }

        if frames >= max_frames {
            log::warn!("frame cap reached with score {}", state.score);
            break;
        }
    }

    let summary = SessionSummary {
        seed,
        frames,
        score: state.score,
        final_gravity: state.gravity,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}
