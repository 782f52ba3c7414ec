//! The title screen: instructions and the "press start" prompt.

use glam::Vec2;

use crate::constants::{animation, CANVAS_SIZE};
use crate::events::{Event, EventQueue};
use crate::game::GameState;
use crate::input::{Button, InputSource};
use crate::render::{print_shadowed, Font, Renderer};
use crate::scene::SceneKind;

const HEADER: &str = "POO BEAR LOVES YOU <3";

const INSTRUCTIONS: &str = "
INSTRUCTIONS:

 Poo Bear is hungry. You must feed Poo Bear.
 Bring him food he likes, and he will love you.


CONTROLS:

 - UP:    move up
 - DOWN:  move down
 - LEFT:  move left
 - RIGHT: move right
";

pub fn update(state: &mut GameState, queue: &mut EventQueue, input: &dyn InputSource, renderer: &mut dyn Renderer) {
    print_shadowed(renderer, Font::Medium, HEADER, Vec2::new(8.0, 8.0));
    print_shadowed(renderer, Font::Small, INSTRUCTIONS, Vec2::new(8.0, 24.0));

    if state.scene.entered % animation::BLINK_PERIOD < animation::BLINK_PERIOD / 2 {
        let pos = Vec2::new(86.0, (CANVAS_SIZE.y - 24) as f32);
        print_shadowed(renderer, Font::Medium, "press start", pos);
    }

    if input.is_pressed(Button::Start) {
        queue.push(Event::ChangeScene(SceneKind::Overworld));
    }
}
