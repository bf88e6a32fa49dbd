//! GameView: maps `core::GameState` into terminal rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::types::{Position, Tile};

/// Glyphs used for each board element.
const CURSOR_CH: char = '@';
const WALL_CH: char = '#';
const FLOOR_CH: char = '·';
const GOAL_CH: char = 'G';

/// A lightweight text view of the game.
///
/// Each board tile renders as two columns to compensate for typical terminal
/// glyph aspect ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    /// Level number shown in the status line (1-based).
    pub level: usize,
    /// Total number of levels, for the status line.
    pub level_count: usize,
}

impl GameView {
    pub fn new(level: usize, level_count: usize) -> Self {
        Self { level, level_count }
    }

    /// Render the board and status line as rows of text.
    pub fn render(&self, state: &GameState, focused: bool) -> Vec<String> {
        let board = state.board();
        let mut rows = Vec::with_capacity(board.height() as usize + 2);

        for y in 0..board.height() as i16 {
            let mut row = String::with_capacity(board.width() as usize * 2);
            for x in 0..board.width() as i16 {
                let pos = Position::new(x, y);
                let ch = if pos == state.cursor() {
                    CURSOR_CH
                } else {
                    match board.tile(pos) {
                        Tile::Wall => WALL_CH,
                        Tile::Floor => FLOOR_CH,
                        Tile::Goal => GOAL_CH,
                    }
                };
                row.push(ch);
                row.push(' ');
            }
            rows.push(row);
        }

        rows.push(String::new());
        rows.push(self.status_line(state, focused));
        rows
    }

    fn status_line(&self, state: &GameState, focused: bool) -> String {
        let mut line = format!(
            "level {}/{}  moves {}  (arrows or hjkl, q quits)",
            self.level, self.level_count, state.moves(),
        );
        if state.completed() {
            line.push_str("  - solved!");
        }
        if !focused {
            line.push_str("  [unfocused - click to focus]");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    const LAYOUT: &str = "\
####
#@G#
####";

    #[test]
    fn test_cursor_glyph_over_start_tile() {
        let state = GameState::from_layout(LAYOUT).unwrap();
        let rows = GameView::new(1, 1).render(&state, true);
        assert_eq!(rows[1], "# @ G # ");
    }

    #[test]
    fn test_status_line_reports_progress() {
        let mut state = GameState::from_layout(LAYOUT).unwrap();
        state.apply_move(Direction::Right);

        let rows = GameView::new(2, 3).render(&state, true);
        let status = rows.last().unwrap();
        assert!(status.contains("level 2/3"));
        assert!(status.contains("moves 1"));
        assert!(status.contains("solved"));
    }

    #[test]
    fn test_unfocused_hint() {
        let state = GameState::from_layout(LAYOUT).unwrap();
        let rows = GameView::new(1, 1).render(&state, false);
        assert!(rows.last().unwrap().contains("click to focus"));
    }
}
