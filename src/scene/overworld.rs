//! The overworld: walking, the lag-following pet, food and the round
//! outcome checks.

use glam::Vec2;
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use tracing::debug;

use rand::seq::SliceRandom;

use crate::actions::{self, Action};
use crate::collision::{self, CollisionDirection};
use crate::constants::{mechanics, CANVAS_SIZE, FOOD_SPAWN_TILES, PLAYER_START, TILE_SIZE};
use crate::entity::{food, obstacle, pet, player, EntityKind};
use crate::events::{Event, EventQueue};
use crate::game::{GameState, PlayerSnapshot};
use crate::input::{Button, InputSource};
use crate::map::Direction;
use crate::render::{Color, Rect, Renderer, Spritesheet};
use crate::scene::SceneKind;
use crate::sprite::FoodKind;
use crate::wants;

/// Atlas column of the speech-bubble frame in the food sheet.
const BUBBLE_COL: u32 = 22;

pub fn update(state: &mut GameState, queue: &mut EventQueue, input: &dyn InputSource, renderer: &mut dyn Renderer) {
    if state.scene.entered == 0 {
        seed_world(state);
    }

    state.tilemap.draw(renderer, Vec2::ZERO);

    for entity in state.entities.iter_mut() {
        entity.sprite.tick();
    }
    draw_entities(state, renderer);
    draw_hp_bar(state, renderer);

    let resolved = resolve_movement(state, input);
    if let Some(direction) = resolved.facing {
        if let Some(player) = state.entities.get(state.player_id) {
            state.follow_history.push_back(PlayerSnapshot {
                position: player.position,
                direction,
                walking: true,
            });
        }
        actions::apply_all(state, resolved.actions);
    } else {
        actions::apply(state, Action::StopPlayerMovement { id: state.player_id });
    }

    // The pet moves at half the player's cadence.
    if state.frame % 2 == 0 {
        actions::apply(state, Action::MovePet { id: state.pet_id });
    }

    wants::handle_eating(state);
    wants::decay_hp(state);
    wants::check_outcome(state, queue);

    if input.is_pressed(Button::Start) {
        queue.push(Event::ChangeScene(SceneKind::Title));
    }
}

/// Rebuilds the world for a fresh round: player at the fixed start, pet
/// above it, and three foods at randomized open tiles.
///
/// Both the food kinds and their tiles are drawn without replacement, so
/// a round never asks for the same fruit twice or stacks two pickups.
pub fn seed_world(state: &mut GameState) {
    state.entities.clear();
    state.follow_history.clear();
    state.diagonal_bank = 0.0;

    let mut kinds: Vec<FoodKind> = FoodKind::iter().collect();
    let (picked_kinds, _) = kinds.partial_shuffle(&mut state.rng, mechanics::WANTS_COUNT);
    let wants: SmallVec<[FoodKind; 3]> = picked_kinds.iter().copied().collect();

    let mut tiles = FOOD_SPAWN_TILES.to_vec();
    let (spots, _) = tiles.partial_shuffle(&mut state.rng, mechanics::WANTS_COUNT);

    for (i, (&kind, &tile)) in wants.iter().zip(spots.iter()).enumerate() {
        let position = (tile * TILE_SIZE as i32).as_vec2();
        food::spawn(&mut state.entities, position, kind, i == 0);
    }

    // The level's grass runs to the canvas edge; fence it so nobody
    // wanders offscreen.
    obstacle::spawn_border(&mut state.entities, state.tilemap.size());

    state.player_id = player::spawn(&mut state.entities, PLAYER_START);
    state.pet_id = pet::spawn(&mut state.entities, PLAYER_START, wants);

    debug!(player = state.player_id, pet = state.pet_id, "seeded overworld");
}

struct ResolvedInput {
    actions: SmallVec<[Action; 2]>,
    /// The player's facing this frame; `None` when no step was taken.
    facing: Option<Direction>,
}

/// Turns held directions into movement actions.
///
/// Diagonal pairs outrank single directions. The vertical axis moves at
/// full speed; the horizontal axis of a diagonal runs through the
/// fractional step bank, firing on three frames out of five. Each axis is
/// gated independently on terrain and entity collision, so the player
/// slides along walls.
fn resolve_movement(state: &mut GameState, input: &dyn InputSource) -> ResolvedInput {
    let id = state.player_id;
    let Some(player) = state.entities.get(id) else {
        return ResolvedInput {
            actions: SmallVec::new(),
            facing: None,
        };
    };
    let bounds = player.bounds();
    let blocked = collision::blocked_direction(&state.entities, id);

    let up = input.is_down(Button::Up);
    let down = input.is_down(Button::Down);
    let left = input.is_down(Button::Left);
    let right = input.is_down(Button::Right);

    let (vertical, horizontal) = match (up, down, left, right) {
        (true, _, _, true) => (Some(Direction::Up), Some(Direction::Right)),
        (true, _, true, _) => (Some(Direction::Up), Some(Direction::Left)),
        (_, true, _, true) => (Some(Direction::Down), Some(Direction::Right)),
        (_, true, true, _) => (Some(Direction::Down), Some(Direction::Left)),
        (true, _, _, _) => (Some(Direction::Up), None),
        (_, true, _, _) => (Some(Direction::Down), None),
        (_, _, true, _) => (None, Some(Direction::Left)),
        (_, _, _, true) => (None, Some(Direction::Right)),
        _ => (None, None),
    };
    let diagonal = vertical.is_some() && horizontal.is_some();

    let mut actions: SmallVec<[Action; 2]> = SmallVec::new();
    let mut facing = None;

    if let Some(direction) = vertical {
        if step_allowed(state, bounds, blocked, direction) {
            actions.push(move_action(direction, id));
            facing = Some(direction);
        }
    }

    if let Some(direction) = horizontal {
        let stepping = if diagonal {
            state.diagonal_bank += mechanics::DIAGONAL_FACTOR;
            if state.diagonal_bank >= 1.0 {
                state.diagonal_bank -= 1.0;
                true
            } else {
                false
            }
        } else {
            true
        };
        if stepping && step_allowed(state, bounds, blocked, direction) {
            actions.push(move_action(direction, id));
            facing = Some(direction);
        }
    }

    ResolvedInput { actions, facing }
}

fn step_allowed(state: &GameState, bounds: Rect, blocked: Option<CollisionDirection>, direction: Direction) -> bool {
    let delta = direction.as_ivec2().as_vec2();
    !state.tilemap.predict_collision(bounds, delta) && !blocked.is_some_and(|side| side.blocks(direction))
}

const fn move_action(direction: Direction, id: u32) -> Action {
    match direction {
        Direction::Up => Action::MovePlayerUp { id },
        Direction::Down => Action::MovePlayerDown { id },
        Direction::Left => Action::MovePlayerLeft { id },
        Direction::Right => Action::MovePlayerRight { id },
    }
}

/// Draws foods, then the pet and its want bubble, then the player on top.
fn draw_entities(state: &GameState, renderer: &mut dyn Renderer) {
    for entity in state.entities.iter() {
        match entity.kind {
            EntityKind::Environment { .. } => {
                renderer.draw_sprite(Spritesheet::Environment, entity.sprite.current(), entity.position);
            }
            EntityKind::Food { visible: true, .. } => {
                renderer.draw_sprite(Spritesheet::Food, entity.sprite.current(), entity.position);
            }
            _ => {}
        }
    }

    if let Some(pet) = state.entities.get(state.pet_id) {
        renderer.draw_sprite(Spritesheet::Pet, pet.sprite.current(), pet.position);
        if let Some(want) = wants::front_want(state) {
            let tile = TILE_SIZE as f32;
            let bubble = Rect::new((BUBBLE_COL * TILE_SIZE) as f32, 0.0, tile, tile);
            renderer.draw_sprite(Spritesheet::Food, bubble, pet.position - Vec2::new(0.0, 16.0));
            let icon = Rect::new((want.atlas_col() * TILE_SIZE) as f32, 0.0, tile, tile);
            renderer.draw_sprite(Spritesheet::Food, icon, pet.position - Vec2::new(0.0, 17.0));
        }
    }

    if let Some(player) = state.entities.get(state.player_id) {
        renderer.draw_sprite(Spritesheet::Player, player.sprite.current(), player.position);
    }
}

/// Black backing bar with a red fill proportional to happiness, centered
/// at the bottom of the canvas.
fn draw_hp_bar(state: &GameState, renderer: &mut dyn Renderer) {
    let Some((hp, max_hp)) = state.entities.get(state.pet_id).and_then(|pet| pet.happiness()) else {
        return;
    };
    let (width, height) = (64.0, 16.0);
    let x = CANVAS_SIZE.x as f32 / 2.0 - width / 2.0;
    let y = CANVAS_SIZE.y as f32 - height;

    renderer.fill_rect(Rect::new(x, y, width, height), Color::BLACK);
    renderer.fill_rect(
        Rect::new(x + 4.0, y + 4.0, (width - 8.0) * (hp / max_hp), height - 8.0),
        Color::RED,
    );
}
