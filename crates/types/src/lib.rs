//! Shared types module - data structures used across the workspace
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (game logic, input handling, rendering).
//!
//! # Coordinate System
//!
//! The board uses screen-style coordinates: `x` grows rightward, `y` grows
//! downward, with `(0, 0)` at the top-left tile. Positions are signed so that
//! a single step off any edge is representable (and rejected by the game
//! logic) without underflow.
//!
//! # Examples
//!
//! ```
//! use tui_gridwalk_types::{Direction, Position};
//!
//! // Parse a direction from a string (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Step a position
//! let pos = Position::new(3, 3);
//! assert_eq!(pos.step(Direction::Up), Position::new(3, 2));
//! ```

/// Maximum board width in tiles; views size themselves against this.
pub const BOARD_WIDTH: u8 = 12;

/// Maximum board height in tiles.
pub const BOARD_HEIGHT: u8 = 8;

/// Event poll interval for the main loop, in milliseconds.
pub const POLL_MS: u64 = 33;

/// A movement command produced by an input adapter.
///
/// This is the entire vocabulary the game logic consumes; input devices of
/// any kind reduce their events to these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (dx, dy) step this direction takes on the board.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Lower-case name of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parse from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A tile position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring position one step in `direction`.
    ///
    /// Does not clamp; legality is the game logic's concern.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Walkable floor.
    Floor,
    /// Impassable wall.
    Wall,
    /// Level exit; walking onto it completes the level.
    Goal,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}
