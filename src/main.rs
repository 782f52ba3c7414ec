//! Headless demo driver: runs a scripted session at a fixed 60 Hz and
//! logs what the core does. Useful for smoke-testing the simulation
//! without a rendering backend.

use std::time::Instant;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use poobear::constants::LOOP_TIME;
use poobear::game::Game;
use poobear::input::{Buttons, ScriptedInput};
use poobear::render::NullRenderer;

/// A few seconds of canned play: start the game, wander the map in a
/// loop, head back to the title.
fn demo_script() -> ScriptedInput {
    let mut frames = vec![Buttons::empty(); 5];
    frames.push(Buttons::START);
    for _ in 0..4 {
        frames.extend(std::iter::repeat_n(Buttons::RIGHT, 40));
        frames.extend(std::iter::repeat_n(Buttons::DOWN | Buttons::RIGHT, 30));
        frames.extend(std::iter::repeat_n(Buttons::LEFT, 40));
        frames.extend(std::iter::repeat_n(Buttons::UP | Buttons::LEFT, 30));
    }
    frames.push(Buttons::START);
    ScriptedInput::new(frames)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut game = Game::new().context("could not build game")?;
    let mut input = demo_script();
    let mut renderer = NullRenderer;

    info!(loop_time = ?LOOP_TIME, "starting demo loop");

    while !input.finished() {
        let start = Instant::now();

        game.update(&input, &mut renderer);
        input.advance();

        if let Some(remaining) = LOOP_TIME.checked_sub(start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!(
        scene = game.scene_kind().as_ref(),
        frames = game.state.frame,
        "demo finished"
    );
    Ok(())
}
