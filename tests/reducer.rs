mod common;

use glam::Vec2;
use poobear::constants::PLAYER_START;
use poobear::input::Buttons;
use speculoos::prelude::*;

#[test]
fn test_walking_right_moves_one_pixel_per_frame() {
    let mut game = common::overworld_game(3);

    common::hold_buttons(&mut game, Buttons::RIGHT, 10);

    let player = game.state.entities.get(game.state.player_id).unwrap();
    assert_that(&player.position).is_equal_to(PLAYER_START + Vec2::new(10.0, 0.0));
}

#[test]
fn test_follow_history_caps_at_sixteen() {
    let mut game = common::overworld_game(3);

    common::hold_buttons(&mut game, Buttons::RIGHT, 17);

    assert_that(&game.state.follow_history.len()).is_equal_to(16);
    // Snapshots are pre-move states: the 1st (x = 128) was evicted by the
    // 17th move, leaving the 2nd (x = 129) as the oldest.
    let oldest = game.state.follow_history.front().unwrap();
    assert_that(&oldest.position.x).is_equal_to(PLAYER_START.x + 1.0);
}

#[test]
fn test_idle_frames_record_no_history() {
    let mut game = common::overworld_game(3);

    common::idle_frames(&mut game, 8);
    assert_that(&game.state.follow_history.len()).is_equal_to(0);

    common::hold_buttons(&mut game, Buttons::RIGHT, 3);
    common::idle_frames(&mut game, 8);
    assert_that(&game.state.follow_history.len()).is_equal_to(3);
}

#[test]
fn test_diagonal_sideways_fires_three_in_five() {
    let mut game = common::overworld_game(3);

    common::hold_buttons(&mut game, Buttons::DOWN | Buttons::RIGHT, 5);

    let player = game.state.entities.get(game.state.player_id).unwrap();
    // Vertical runs at full speed; sideways steps land on the 2nd, 4th
    // and 5th frames via the fractional bank.
    assert_that(&player.position).is_equal_to(PLAYER_START + Vec2::new(3.0, 5.0));
}

#[test]
fn test_pet_trails_the_player() {
    let mut game = common::overworld_game(3);

    common::hold_buttons(&mut game, Buttons::RIGHT, 20);

    let player = game.state.entities.get(game.state.player_id).unwrap().position;
    let pet = game.state.entities.get(game.state.pet_id).unwrap().position;
    // The pet sits on an old snapshot of the player's path.
    assert_that(&pet.y).is_equal_to(player.y);
    assert_that(&pet.x).is_less_than(player.x);
}
