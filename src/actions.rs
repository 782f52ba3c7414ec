//! The action reducer: typed, id-addressed mutations of the entity store.
//!
//! Actions referencing an id absent from the store are silent no-ops.
//! Every directional step moves exactly one pixel; speed comes from how
//! many actions a scene dispatches per frame, not from the step size.

use crate::game::{GameState, PlayerSnapshot};
use crate::map::Direction;
use crate::sprite::AnimationName;

/// The closed set of mutations scenes may dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MovePlayerUp { id: u32 },
    MovePlayerDown { id: u32 },
    MovePlayerLeft { id: u32 },
    MovePlayerRight { id: u32 },
    StopPlayerMovement { id: u32 },
    MovePet { id: u32 },
}

/// Applies one action against the live state.
pub fn apply(state: &mut GameState, action: Action) {
    match action {
        Action::MovePlayerUp { id } => step(state, id, Direction::Up),
        Action::MovePlayerDown { id } => step(state, id, Direction::Down),
        Action::MovePlayerLeft { id } => step(state, id, Direction::Left),
        Action::MovePlayerRight { id } => step(state, id, Direction::Right),
        Action::StopPlayerMovement { id } => {
            if let Some(entity) = state.entities.get_mut(id) {
                entity.sprite.stop();
            }
        }
        Action::MovePet { id } => move_pet(state, id),
    }
}

/// Applies a batch in dispatch order.
pub fn apply_all(state: &mut GameState, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        apply(state, action);
    }
}

fn step(state: &mut GameState, id: u32, direction: Direction) {
    let Some(entity) = state.entities.get_mut(id) else {
        return;
    };
    entity.sprite.set_walk(direction);
    entity.position += direction.as_ivec2().as_vec2();
    state.has_moved = true;
}

/// Snaps the pet to the oldest recorded player state, or the player's
/// current state when the history is empty. The snapshot is copied, not
/// popped; old entries leave only by eviction as new moves are recorded.
fn move_pet(state: &mut GameState, id: u32) {
    let snapshot = state.follow_history.front().copied().or_else(|| {
        let player = state.entities.get(state.player_id)?;
        Some(PlayerSnapshot {
            position: player.position,
            direction: player.sprite.animation.direction(),
            walking: player.sprite.animation.is_walk(),
        })
    });

    let (Some(snapshot), Some(pet)) = (snapshot, state.entities.get_mut(id)) else {
        return;
    };

    pet.position = snapshot.position;
    if snapshot.walking {
        pet.sprite.set_walk(snapshot.direction);
    } else {
        pet.sprite.animation = AnimationName::idle(snapshot.direction);
        pet.sprite.next_idle = None;
    }
}
