//! Terminal integration: the concrete event surface and the renderer.
//!
//! [`TerminalSurface`] adapts crossterm's event stream to the
//! [`InputSurface`](tui_gridwalk_input::InputSurface) contract so the input
//! adapter stays terminal-agnostic. [`GameView`] turns game state into rows
//! of text (pure, unit-testable), and [`TerminalRenderer`] owns raw mode and
//! flushes those rows to the real terminal.

pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_gridwalk_core as core;
pub use tui_gridwalk_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use surface::TerminalSurface;
