//! Input port/adapter module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. The game
//! logic consumes movement commands through the [`InputPort`] trait, and the
//! only concrete adapter here, [`KeyboardInputAdapter`], produces them from
//! key events on an injected [`InputSurface`]. Neither side knows about the
//! other's concrete type, so the movement-handling policy stays independent
//! of the input device and of the event system underneath.
//!
//! Key-to-direction mapping policy lives in [`map`].

pub mod keyboard;
pub mod map;
pub mod port;
pub mod surface;

pub use tui_gridwalk_types as types;

pub use keyboard::KeyboardInputAdapter;
pub use map::{map_key, should_quit};
pub use port::{InputPort, MovementCallback};
pub use surface::{ClickHandler, InputSurface, KeyHandler, KeyPress, ListenerId};
