//! Tilt Maze entry point
//!
//! Headless native run: feeds a scripted, noisy tilt stream through the game
//! and reports whether the ball reached the goal.
//!
//! Usage: `tilt-maze [settings.json] [seed]`

use std::process::ExitCode;

use tilt_maze::sensor::{NoisyTilt, ScriptedTilt, TiltSource};
use tilt_maze::{Game, Settings};

/// Playfield the scripted route was laid out for
const FIELD_WIDTH: f32 = 1080.0;
const FIELD_HEIGHT: f32 = 2400.0;

/// Sensor noise for the demo feed
const JITTER: f32 = 0.3;
const DROP_CHANCE: f64 = 0.05;
const DUPLICATE_CHANCE: f64 = 0.05;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tilt Maze (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => 12345,
    };
    log::info!("Sensor noise seed: {}", seed);

    let mut game = Game::new(settings);
    game.resize(FIELD_WIDTH, FIELD_HEIGHT);

    let mut sensor = NoisyTilt::new(
        ScriptedTilt::maze_route(),
        seed,
        JITTER,
        DROP_CHANCE,
        DUPLICATE_CHANCE,
    );
    while let Some(sample) = sensor.next_sample() {
        let state = game.on_tilt(sample);
        log::debug!("ball=({:.1}, {:.1})", state.ball.x, state.ball.y);
        if state.won {
            break;
        }
    }

    let state = game.state();
    if state.won {
        println!(
            "Goal reached in {} samples at ({:.1}, {:.1})",
            game.samples(),
            state.ball.x,
            state.ball.y
        );
        ExitCode::SUCCESS
    } else {
        println!(
            "Route ended without reaching the goal; ball at ({:.1}, {:.1})",
            state.ball.x, state.ball.y
        );
        ExitCode::FAILURE
    }
}
