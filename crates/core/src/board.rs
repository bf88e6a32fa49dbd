//! Tile board parsed from an ASCII level layout.

use crate::types::{Position, Tile};

/// Rectangular grid of tiles.
///
/// Layout characters: `#` wall, `.` or space floor, `G` goal, `@` start
/// (a floor tile that also fixes the cursor spawn). Rows may have uneven
/// lengths in the source text; short rows are padded with floor.
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    tiles: Vec<Tile>,
    start: Position,
}

/// Error describing why a level layout is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    UnknownChar(char),
    MissingStart,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no rows"),
            LayoutError::UnknownChar(c) => write!(f, "unknown layout character {:?}", c),
            LayoutError::MissingStart => write!(f, "layout has no '@' start tile"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl Board {
    /// Parse a board from an ASCII layout.
    pub fn parse(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u8;
        let height = rows.len() as u8;
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        let mut start = None;

        for (y, row) in rows.iter().enumerate() {
            for x in 0..width as usize {
                let tile = match row.chars().nth(x) {
                    Some('#') => Tile::Wall,
                    Some('.') | Some(' ') | None => Tile::Floor,
                    Some('G') => Tile::Goal,
                    Some('@') => {
                        start = Some(Position::new(x as i16, y as i16));
                        Tile::Floor
                    }
                    Some(other) => return Err(LayoutError::UnknownChar(other)),
                };
                tiles.push(tile);
            }
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        Ok(Board {
            width,
            height,
            tiles,
            start,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Where the cursor spawns on this board.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Tile at `pos`. Out-of-bounds positions read as walls, so edge
    /// handling and wall handling share one code path.
    pub fn tile(&self, pos: Position) -> Tile {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width as i16 || pos.y >= self.height as i16 {
            return Tile::Wall;
        }
        self.tiles[pos.y as usize * self.width as usize + pos.x as usize]
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile(pos).is_walkable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
####
#@G#
####";

    #[test]
    fn test_parse_layout() {
        let board = Board::parse(LAYOUT).unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.start(), Position::new(1, 1));
        assert_eq!(board.tile(Position::new(0, 0)), Tile::Wall);
        assert_eq!(board.tile(Position::new(1, 1)), Tile::Floor);
        assert_eq!(board.tile(Position::new(2, 1)), Tile::Goal);
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let board = Board::parse(LAYOUT).unwrap();
        assert_eq!(board.tile(Position::new(-1, 0)), Tile::Wall);
        assert_eq!(board.tile(Position::new(0, -1)), Tile::Wall);
        assert_eq!(board.tile(Position::new(4, 1)), Tile::Wall);
        assert_eq!(board.tile(Position::new(1, 3)), Tile::Wall);
    }

    #[test]
    fn test_short_rows_pad_with_floor() {
        let board = Board::parse("@.\n#\nG.").unwrap();
        assert_eq!(board.width(), 2);
        assert_eq!(board.tile(Position::new(1, 1)), Tile::Floor);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Board::parse("").unwrap_err(), LayoutError::Empty);
        assert_eq!(Board::parse("..G").unwrap_err(), LayoutError::MissingStart);
        assert_eq!(Board::parse("@x").unwrap_err(), LayoutError::UnknownChar('x'));
    }
}
