//! Simulation core for a small tile-based pet-feeding game.
//!
//! Everything here is headless and deterministic per tick: the driver
//! calls [`game::Game::update`] at 60 Hz with an [`input::InputSource`]
//! and a [`render::Renderer`], and the core does the rest. There is no
//! windowing, audio or asset loading in this crate.

pub mod actions;
pub mod collision;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod map;
pub mod render;
pub mod scene;
pub mod sprite;
pub mod wants;
