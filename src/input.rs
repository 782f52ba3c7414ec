//! Gamepad-style input: held/pressed button state and test drivers.

use bitflags::bitflags;

/// The eight face buttons of the virtual console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Start,
    Select,
}

bitflags! {
    /// A set of buttons packed into one byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const A = 1 << 4;
        const B = 1 << 5;
        const START = 1 << 6;
        const SELECT = 1 << 7;
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        match button {
            Button::Up => Buttons::UP,
            Button::Down => Buttons::DOWN,
            Button::Left => Buttons::LEFT,
            Button::Right => Buttons::RIGHT,
            Button::A => Buttons::A,
            Button::B => Buttons::B,
            Button::Start => Buttons::START,
            Button::Select => Buttons::SELECT,
        }
    }
}

/// What the simulation reads each frame.
///
/// `is_down` is level-triggered (true for every frame the button is held);
/// `is_pressed` is edge-triggered (true only on the frame the button went
/// down).
pub trait InputSource {
    fn is_down(&self, button: Button) -> bool;
    fn is_pressed(&self, button: Button) -> bool;
}

/// Held/pressed state maintained by a live event-driven backend.
#[derive(Debug, Default)]
pub struct ButtonState {
    held: Buttons,
    pressed: Buttons,
}

impl ButtonState {
    /// Clears the edge-triggered set. Call once at the top of each frame,
    /// before feeding this frame's events.
    pub fn begin_frame(&mut self) {
        self.pressed = Buttons::empty();
    }

    pub fn press(&mut self, button: Button) {
        let flag = Buttons::from(button);
        if !self.held.contains(flag) {
            self.pressed |= flag;
        }
        self.held |= flag;
    }

    pub fn release(&mut self, button: Button) {
        self.held -= Buttons::from(button);
    }
}

impl InputSource for ButtonState {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(button.into())
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button.into())
    }
}

/// A pre-recorded input track, one button set per frame.
///
/// Frames past the end of the script read as nothing held. Used by the
/// headless driver and integration tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<Buttons>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Buttons>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Moves to the next scripted frame.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    fn at(&self, index: usize) -> Buttons {
        self.frames.get(index).copied().unwrap_or_default()
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, button: Button) -> bool {
        self.at(self.cursor).contains(button.into())
    }

    fn is_pressed(&self, button: Button) -> bool {
        let now = self.at(self.cursor).contains(button.into());
        let before = self.cursor > 0 && self.at(self.cursor - 1).contains(button.into());
        now && !before
    }
}
