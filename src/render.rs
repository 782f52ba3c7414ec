//! The draw-call seam between the simulation core and a rendering backend.
//!
//! The core never owns a framebuffer; it issues fire-and-forget draw calls
//! through [`Renderer`] and consumes no return values. Backends clip, cull
//! and batch however they like.

use glam::Vec2;

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The sprite sheets the game draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spritesheet {
    Environment,
    Food,
    Pet,
    Player,
}

/// The bitmap fonts the game prints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Small,
    Medium,
}

/// Side-effect surface the scenes draw through.
pub trait Renderer {
    /// Clears the whole canvas to black.
    fn clear(&mut self);
    /// Copies `src` out of `sheet` to `pos` (top-left, pixels).
    fn draw_sprite(&mut self, sheet: Spritesheet, src: Rect, pos: Vec2);
    /// Prints `text` at `pos` in the given font and color.
    fn draw_text(&mut self, font: Font, text: &str, pos: Vec2, color: Color);
    /// Fills a rectangle with a flat color.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A renderer that discards every call. Used by headless drivers and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}
    fn draw_sprite(&mut self, _sheet: Spritesheet, _src: Rect, _pos: Vec2) {}
    fn draw_text(&mut self, _font: Font, _text: &str, _pos: Vec2, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
}

/// Prints `text` twice, offset by a pixel, for a cheap drop shadow.
pub(crate) fn print_shadowed(renderer: &mut dyn Renderer, font: Font, text: &str, pos: Vec2) {
    renderer.draw_text(font, text, pos - Vec2::ONE, Color::BLACK);
    renderer.draw_text(font, text, pos, Color::WHITE);
}
