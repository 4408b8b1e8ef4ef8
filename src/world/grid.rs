//! Static occupancy grid.
//!
//! Cells are stored row-major.  The perimeter must be solid, and every query
//! outside the grid answers [`Cell::Wall`], so traversals never need their own
//! bounds checks.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

impl Cell {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character `{ch}` at row {row}, column {col}")]
    BadCell { row: usize, col: usize, ch: char },

    #[error("perimeter cell ({x}, {y}) is open")]
    OpenPerimeter { x: usize, y: usize },
}

/// Built-in 8×7 map with three interior pillars.
const DEFAULT_MAP: [[u8; 8]; 7] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// Every character that is not a separator (`,` `[` `]` or whitespace).
static CELL_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s,\[\]]").unwrap());

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    tile: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /*──────────────────────── constructors ───────────────────────────*/

    /// Build a grid from rows of `0` (open) / non-zero (wall) values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], tile: f32) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(
                r.iter()
                    .map(|&v| if v == 0 { Cell::Empty } else { Cell::Wall }),
            );
        }

        let grid = Self {
            width,
            height,
            tile,
            cells,
        };
        grid.check_perimeter()?;
        Ok(grid)
    }

    /// Parse a text map: one row per line, `1` = wall, `0` = open.
    ///
    /// Commas, brackets and whitespace between cells are ignored, as are
    /// blank lines and lines starting with `#`.
    pub fn parse(text: &str, tile: f32) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let row = rows.len();
            let mut cells = Vec::new();
            for (col, m) in CELL_TOKEN.find_iter(trimmed).enumerate() {
                match m.as_str() {
                    "0" => cells.push(0),
                    "1" => cells.push(1),
                    other => {
                        return Err(GridError::BadCell {
                            row,
                            col,
                            ch: other.chars().next().unwrap_or('?'),
                        });
                    }
                }
            }
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        Self::from_rows(&rows, tile)
    }

    pub fn default_map(tile: f32) -> Self {
        let cells = DEFAULT_MAP
            .iter()
            .flatten()
            .map(|&v| if v == 0 { Cell::Empty } else { Cell::Wall })
            .collect();
        Self {
            width: DEFAULT_MAP[0].len(),
            height: DEFAULT_MAP.len(),
            tile,
            cells,
        }
    }

    fn check_perimeter(&self) -> Result<(), GridError> {
        for (x, y, cell) in self.iter() {
            let edge = x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height;
            if edge && !cell.is_wall() {
                return Err(GridError::OpenPerimeter { x, y });
            }
        }
        Ok(())
    }

    /*──────────────────────── queries ────────────────────────────────*/

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile(&self) -> f32 {
        self.tile
    }

    /// Cell at integer indices; anything outside the grid is a wall.
    #[inline]
    pub fn cell(&self, ix: i64, iy: i64) -> Cell {
        if ix < 0 || iy < 0 || ix >= self.width as i64 || iy >= self.height as i64 {
            return Cell::Wall;
        }
        self.cells[iy as usize * self.width + ix as usize]
    }

    /// Map a world-space point to its cell indices (floor division by tile).
    #[inline]
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(i64, i64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some((
            (x / self.tile).floor() as i64,
            (y / self.tile).floor() as i64,
        ))
    }

    /// Cell under a world-space point.
    #[inline]
    pub fn cell_at(&self, x: f32, y: f32) -> Cell {
        match self.to_cell(x, y) {
            Some((ix, iy)) => self.cell(ix, iy),
            None => Cell::Wall,
        }
    }

    #[inline]
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        self.cell_at(x, y).is_wall()
    }

    /// Every cell as `(column, row, cell)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % self.width, i / self.width, c))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    const T: f32 = 64.0;

    #[test]
    fn outside_queries_are_walls() {
        let g = Grid::default_map(T);
        for &(x, y) in &[
            (-0.5, 100.0),
            (100.0, -0.5),
            (8.0 * T, 100.0),
            (100.0, 7.0 * T),
            (1e9, 1e9),
            (-1e9, -1e9),
            (f32::NAN, 10.0),
            (f32::INFINITY, 10.0),
        ] {
            assert_eq!(g.cell_at(x, y), Cell::Wall, "({x}, {y})");
        }
        assert_eq!(g.cell(-1, 3), Cell::Wall);
        assert_eq!(g.cell(8, 3), Cell::Wall);
        assert_eq!(g.cell(3, 7), Cell::Wall);
    }

    #[test]
    fn floor_division_maps_points() {
        let g = Grid::default_map(T);
        // (100, 100) → cell (1, 1), open
        assert_eq!(g.to_cell(100.0, 100.0), Some((1, 1)));
        assert_eq!(g.cell_at(100.0, 100.0), Cell::Empty);
        // interior pillar at column 3, row 2
        assert_eq!(g.cell_at(3.0 * T + 1.0, 2.0 * T + 63.9), Cell::Wall);
        assert_eq!(g.cell_at(3.0 * T - 0.01, 2.0 * T + 1.0), Cell::Empty);
    }

    #[test]
    fn parse_accepts_list_syntax_and_comments() {
        let text = "# corridor\n[1,1,1,1]\n[1,0,0,1]\n\n1 1 1 1\n";
        let g = Grid::parse(text, T).unwrap();
        assert_eq!((g.width(), g.height()), (4, 3));
        assert_eq!(g.cell(1, 1), Cell::Empty);
        assert_eq!(g.cell(0, 1), Cell::Wall);
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert_eq!(Grid::parse("", T).unwrap_err(), GridError::Empty);
        assert_eq!(
            Grid::parse("111\n11\n111", T).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            Grid::parse("111\n1x1\n111", T).unwrap_err(),
            GridError::BadCell {
                row: 1,
                col: 1,
                ch: 'x'
            }
        );
        assert_eq!(
            Grid::parse("111\n100\n111", T).unwrap_err(),
            GridError::OpenPerimeter { x: 2, y: 1 }
        );
    }

    #[test]
    fn default_map_is_closed() {
        let g = Grid::default_map(T);
        assert_eq!((g.width(), g.height()), (8, 7));
        assert!(g.check_perimeter().is_ok());
        assert_eq!(g.iter().filter(|(_, _, c)| c.is_wall()).count(), 29);
    }
}
