//! The pet's wants queue: eating, happiness decay and round outcomes.

use tracing::info;

use crate::collision::overlaps;
use crate::constants::mechanics;
use crate::entity::{EntityId, EntityKind};
use crate::events::{Event, EventQueue};
use crate::game::GameState;
use crate::scene::SceneKind;
use crate::sprite::FoodKind;

/// The food kind at the front of the pet's wants queue.
pub fn front_want(state: &GameState) -> Option<FoodKind> {
    state
        .entities
        .get(state.pet_id)
        .and_then(|pet| pet.wants())
        .and_then(|wants| wants.first().copied())
}

/// Feeds the pet if the player is standing on the right food.
///
/// Only a *visible* food whose kind matches the front of the wants queue
/// counts. Eating removes the food entity, pops the queue, restores the
/// pet to full happiness and reveals the food for the next want, if one
/// was placed.
pub fn handle_eating(state: &mut GameState) {
    let Some(want) = front_want(state) else {
        return;
    };
    let Some(player_bounds) = state.entities.get(state.player_id).map(|p| p.bounds()) else {
        return;
    };

    let eaten: Option<EntityId> = state
        .entities
        .iter()
        .find(|entity| match entity.kind {
            EntityKind::Food { kind, visible } => {
                visible && kind == want && overlaps(player_bounds, entity.bounds())
            }
            _ => false,
        })
        .map(|entity| entity.id);

    let Some(food_id) = eaten else {
        return;
    };
    state.entities.remove(food_id);

    let mut next_want = None;
    let mut remaining = 0;
    if let Some(pet) = state.entities.get_mut(state.pet_id) {
        if let EntityKind::Pet { wants, hp, max_hp } = &mut pet.kind {
            if !wants.is_empty() {
                wants.remove(0);
            }
            *hp = *max_hp;
            next_want = wants.first().copied();
            remaining = wants.len();
        }
    }
    info!(kind = want.as_ref(), remaining, "pet fed");

    if let Some(next) = next_want {
        reveal_food(state, next);
    }
}

/// Marks the first hidden food of `kind` visible.
fn reveal_food(state: &mut GameState, kind: FoodKind) {
    let target = state.entities.iter_mut().find_map(|entity| match &mut entity.kind {
        EntityKind::Food { kind: k, visible } if *k == kind && !*visible => Some(visible),
        _ => None,
    });
    if let Some(visible) = target {
        *visible = true;
    }
}

/// Drains happiness while the pet is still hungry.
///
/// Decay ticks on alternating frames, only on frames where the player
/// actually moved, and never below zero.
pub fn decay_hp(state: &mut GameState) {
    if state.frame % mechanics::HP_DECAY_INTERVAL != 0 || !state.has_moved {
        return;
    }
    if let Some(pet) = state.entities.get_mut(state.pet_id) {
        if let EntityKind::Pet { wants, hp, .. } = &mut pet.kind {
            if !wants.is_empty() {
                *hp = (*hp - mechanics::HP_DECAY).max(0.0);
            }
        }
    }
}

/// Fires the round's outcome, if it was decided this frame.
///
/// An empty wants queue wins; zero happiness loses. The transition leaves
/// the overworld the same tick, so each outcome fires at most once per
/// round.
pub fn check_outcome(state: &GameState, queue: &mut EventQueue) {
    let Some(pet) = state.entities.get(state.pet_id) else {
        return;
    };
    if let EntityKind::Pet { wants, hp, .. } = &pet.kind {
        if wants.is_empty() {
            queue.push(Event::ChangeScene(SceneKind::Victory));
        } else if *hp <= 0.0 {
            queue.push(Event::ChangeScene(SceneKind::GameOver));
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;
    use crate::entity::{food, pet, player};
    use crate::game::Game;

    fn setup(wants: smallvec::SmallVec<[FoodKind; 3]>) -> Game {
        let mut game = Game::with_seed(11).unwrap();
        game.state.player_id = player::spawn(&mut game.state.entities, Vec2::new(64.0, 64.0));
        game.state.pet_id = pet::spawn(&mut game.state.entities, Vec2::new(64.0, 64.0), wants);
        game
    }

    fn pet_hp(game: &Game) -> f32 {
        game.state.entities.get(game.state.pet_id).unwrap().happiness().unwrap().0
    }

    fn set_pet_hp(game: &mut Game, value: f32) {
        if let EntityKind::Pet { hp, .. } = &mut game.state.entities.get_mut(game.state.pet_id).unwrap().kind {
            *hp = value;
        }
    }

    #[test]
    fn test_eating_front_want_restores_hp_and_reveals_next() {
        let mut game = setup(smallvec![FoodKind::Apple, FoodKind::Plum]);
        set_pet_hp(&mut game, 10.0);

        // Apple under the player, plum hidden elsewhere.
        food::spawn(&mut game.state.entities, Vec2::new(64.0, 64.0), FoodKind::Apple, true);
        let plum = food::spawn(&mut game.state.entities, Vec2::new(0.0, 0.0), FoodKind::Plum, false);

        handle_eating(&mut game.state);

        assert_eq!(pet_hp(&game), mechanics::PET_MAX_HP);
        let wants = game.state.entities.get(game.state.pet_id).unwrap().wants().unwrap().clone();
        assert_eq!(wants.as_slice(), &[FoodKind::Plum]);
        assert!(matches!(
            game.state.entities.get(plum).unwrap().kind,
            EntityKind::Food { visible: true, .. }
        ));
    }

    #[test]
    fn test_wrong_or_hidden_food_is_ignored() {
        let mut game = setup(smallvec![FoodKind::Apple]);
        set_pet_hp(&mut game, 10.0);

        // A visible non-matching food and a hidden matching one, both
        // under the player.
        food::spawn(&mut game.state.entities, Vec2::new(64.0, 64.0), FoodKind::Banana, true);
        food::spawn(&mut game.state.entities, Vec2::new(64.0, 64.0), FoodKind::Apple, false);

        handle_eating(&mut game.state);

        assert_eq!(pet_hp(&game), 10.0);
        let wants = game.state.entities.get(game.state.pet_id).unwrap().wants().unwrap().clone();
        assert_eq!(wants.as_slice(), &[FoodKind::Apple]);
    }

    #[test]
    fn test_decay_gating() {
        let mut game = setup(smallvec![FoodKind::Cherry]);

        // Odd frame: no decay even though the player moved.
        game.state.frame = 1;
        game.state.has_moved = true;
        decay_hp(&mut game.state);
        assert_eq!(pet_hp(&game), mechanics::PET_MAX_HP);

        // Even frame without movement: no decay.
        game.state.frame = 2;
        game.state.has_moved = false;
        decay_hp(&mut game.state);
        assert_eq!(pet_hp(&game), mechanics::PET_MAX_HP);

        // Even frame with movement: decay.
        game.state.has_moved = true;
        decay_hp(&mut game.state);
        assert_eq!(pet_hp(&game), mechanics::PET_MAX_HP - mechanics::HP_DECAY);
    }

    #[test]
    fn test_hp_never_goes_negative() {
        let mut game = setup(smallvec![FoodKind::Cherry]);
        set_pet_hp(&mut game, 0.25);
        game.state.frame = 4;
        game.state.has_moved = true;

        decay_hp(&mut game.state);
        assert_eq!(pet_hp(&game), 0.0);
        decay_hp(&mut game.state);
        assert_eq!(pet_hp(&game), 0.0);
    }

    #[test]
    fn test_satisfied_pet_stops_decaying() {
        let mut game = setup(smallvec::SmallVec::new());
        game.state.frame = 2;
        game.state.has_moved = true;
        decay_hp(&mut game.state);
        assert_eq!(pet_hp(&game), mechanics::PET_MAX_HP);
    }

    #[test]
    fn test_outcomes() {
        // Empty wants queue wins.
        let game = setup(smallvec::SmallVec::new());
        let mut queue = EventQueue::default();
        check_outcome(&game.state, &mut queue);
        assert_eq!(
            queue.drain().into_iter().collect::<Vec<_>>(),
            vec![Event::ChangeScene(SceneKind::Victory)]
        );

        // Zero happiness with remaining wants loses.
        let mut game = setup(smallvec![FoodKind::Plum]);
        set_pet_hp(&mut game, 0.0);
        let mut queue = EventQueue::default();
        check_outcome(&game.state, &mut queue);
        assert_eq!(
            queue.drain().into_iter().collect::<Vec<_>>(),
            vec![Event::ChangeScene(SceneKind::GameOver)]
        );
    }
}
