//! Built-in level set.
//!
//! Levels are ordered by difficulty: the first teaches plain arrow movement,
//! later ones add walls that force deliberate hjkl navigation.

/// ASCII layouts, in play order. See [`crate::board::Board::parse`] for the
/// character legend.
pub const LEVELS: &[&str] = &[
    "\
############
#@.........#
#..........#
#.........G#
############",
    "\
############
#@...#.....#
#....#..#..#
#.##.#..#..#
#.#..#..#..#
#.#.....#.G#
############",
    "\
############
#@.#....#..#
##.#.##.#.##
#..#..#.#..#
#.###.#.##.#
#.....#...G#
############",
];

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_all_levels_parse_and_fit() {
        use tui_gridwalk_types::{BOARD_HEIGHT, BOARD_WIDTH};

        for (i, layout) in super::LEVELS.iter().enumerate() {
            let board = Board::parse(layout).unwrap_or_else(|e| panic!("level {}: {}", i, e));
            assert!(board.width() <= BOARD_WIDTH);
            assert!(board.height() <= BOARD_HEIGHT);
        }
    }

    #[test]
    fn test_all_levels_have_goal() {
        use tui_gridwalk_types::{Position, Tile};

        for layout in super::LEVELS {
            let board = Board::parse(layout).unwrap();
            let mut goals = 0;
            for y in 0..board.height() as i16 {
                for x in 0..board.width() as i16 {
                    if board.tile(Position::new(x, y)) == Tile::Goal {
                        goals += 1;
                    }
                }
            }
            assert_eq!(goals, 1);
        }
    }
}
