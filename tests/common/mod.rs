//! Shared setup for integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use poobear::game::Game;
use poobear::input::{Buttons, ScriptedInput};
use poobear::render::NullRenderer;
use poobear::scene::SceneKind;

/// A seeded game that has left the title screen and run its first
/// overworld frame, so the world is populated.
pub fn overworld_game(seed: u64) -> Game {
    let mut game = Game::with_seed(seed).expect("shipped level must validate");
    let mut renderer = NullRenderer;

    press_start(&mut game);
    assert_eq!(game.scene_kind(), SceneKind::Overworld);

    // The first overworld frame seeds the world.
    game.update(&ScriptedInput::default(), &mut renderer);
    game
}

/// Runs `count` frames against a fixed held-button set.
pub fn hold_buttons(game: &mut Game, buttons: Buttons, count: usize) {
    let mut renderer = NullRenderer;
    let mut input = ScriptedInput::new(vec![buttons; count]);
    for _ in 0..count {
        game.update(&input, &mut renderer);
        input.advance();
    }
}

/// Runs `count` frames with nothing held.
pub fn idle_frames(game: &mut Game, count: usize) {
    hold_buttons(game, Buttons::empty(), count);
}

/// Runs one frame with a fresh Start edge.
pub fn press_start(game: &mut Game) {
    let input = ScriptedInput::new(vec![Buttons::START]);
    let mut renderer = NullRenderer;
    game.update(&input, &mut renderer);
}
