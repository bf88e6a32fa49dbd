//! Core game logic module - pure, deterministic, and testable
//!
//! All the game rules live here: the tile board, cursor movement legality,
//! and level progression. The module has zero dependencies on UI or I/O,
//! so it runs identically in the terminal game, in tests, and in benches.
//!
//! Movement legality is decided here and only here. Input adapters produce
//! bare [`Direction`](tui_gridwalk_types::Direction) commands without any
//! knowledge of walls, edges, or goals.
//!
//! # Module Structure
//!
//! - [`board`]: rectangular tile grid parsed from ASCII level layouts
//! - [`game_state`]: cursor position, move counting, and win detection
//! - [`levels`]: the built-in level set
//!
//! # Example
//!
//! ```
//! use tui_gridwalk_core::GameState;
//! use tui_gridwalk_types::Direction;
//!
//! let mut game = GameState::from_layout(tui_gridwalk_core::levels::LEVELS[0]).unwrap();
//! game.apply_move(Direction::Right);
//! assert!(game.moves() <= 1);
//! ```

pub mod board;
pub mod game_state;
pub mod levels;

pub use tui_gridwalk_types as types;

pub use board::Board;
pub use game_state::GameState;
pub use levels::LEVELS;
