//! The scene state machine: Title, Overworld, GameOver and Victory.

pub mod game_over;
pub mod overworld;
pub mod title;
pub mod victory;

use strum_macros::AsRefStr;

use crate::events::EventQueue;
use crate::game::GameState;
use crate::input::InputSource;
use crate::render::Renderer;

/// The top-level game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SceneKind {
    Title,
    Overworld,
    GameOver,
    Victory,
}

/// The active scene plus its entry timer.
///
/// `entered` is 0 for the whole first frame after a transition and
/// increments once per frame thereafter; scenes key one-time entry work
/// off `entered == 0` and blink effects off its low bits. `leaving`
/// counts down to a scheduled exit; `None` means the scene stays until
/// an event says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub kind: SceneKind,
    pub entered: u64,
    pub leaving: Option<u64>,
}

impl Scene {
    pub fn new(kind: SceneKind) -> Self {
        Self {
            kind,
            entered: 0,
            leaving: None,
        }
    }
}

/// Runs the active scene's update routine for this frame.
pub fn update(state: &mut GameState, queue: &mut EventQueue, input: &dyn InputSource, renderer: &mut dyn Renderer) {
    match state.scene.kind {
        SceneKind::Title => title::update(state, queue, input, renderer),
        SceneKind::Overworld => overworld::update(state, queue, input, renderer),
        SceneKind::GameOver => game_over::update(state, queue, input, renderer),
        SceneKind::Victory => victory::update(state, queue, input, renderer),
    }
}
