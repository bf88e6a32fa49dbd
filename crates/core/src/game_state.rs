//! Cursor state and movement rules for a single level.

use crate::board::{Board, LayoutError};
use crate::types::{Direction, Position, Tile};

/// State of one level in progress.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cursor: Position,
    moves: u32,
    completed: bool,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        let cursor = board.start();
        Self {
            board,
            cursor,
            moves: 0,
            completed: false,
        }
    }

    /// Parse a level layout and spawn the cursor at its start tile.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        Board::parse(layout).map(Self::new)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Successful moves so far on this level.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the cursor has reached the goal tile.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Try to move the cursor one step.
    ///
    /// Returns `true` if the move was legal and taken. Moves into walls or
    /// off the board are rejected and do not count. After completion the
    /// cursor is frozen until the next level loads.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.completed {
            return false;
        }

        let target = self.cursor.step(direction);
        if !self.board.is_walkable(target) {
            return false;
        }

        self.cursor = target;
        self.moves += 1;
        if self.board.tile(target) == Tile::Goal {
            self.completed = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
#####
#@.G#
#.#.#
#####";

    fn game() -> GameState {
        GameState::from_layout(LAYOUT).unwrap()
    }

    #[test]
    fn test_spawns_at_start() {
        let game = game();
        assert_eq!(game.cursor(), Position::new(1, 1));
        assert_eq!(game.moves(), 0);
        assert!(!game.completed());
    }

    #[test]
    fn test_legal_move_advances_cursor() {
        let mut game = game();
        assert!(game.apply_move(Direction::Right));
        assert_eq!(game.cursor(), Position::new(2, 1));
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_wall_and_edge_moves_are_rejected() {
        let mut game = game();
        assert!(!game.apply_move(Direction::Up));
        assert!(!game.apply_move(Direction::Left));
        assert_eq!(game.cursor(), Position::new(1, 1));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_reaching_goal_completes_level() {
        let mut game = game();
        assert!(game.apply_move(Direction::Right));
        assert!(game.apply_move(Direction::Right));
        assert!(game.completed());
        assert_eq!(game.moves(), 2);

        // Frozen after completion.
        assert!(!game.apply_move(Direction::Down));
        assert_eq!(game.moves(), 2);
    }
}
