//! Rectangular byte grids parsed from puzzle input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("line {line}: expected {expected} columns, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Offsets of the eight cells around a position, row-major.
pub const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A row-major grid of ASCII cells, addressed as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse one row per line. Trailing blank lines are ignored; every other
    /// row must be the same width as the first.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = input.trim_end_matches(['\n', '\r']).lines().collect();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    line: idx + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row.as_bytes());
        }

        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    /// [`Grid::get`] for signed coordinates; anything negative is out of bounds.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<u8> {
        self.get(usize::try_from(row).ok()?, usize::try_from(col).ok()?)
    }

    /// Overwrite a cell. Returns `false` if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = value;
            true
        } else {
            false
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    /// First position holding `value`, row-major.
    pub fn find(&self, value: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&cell| cell == value)
            .map(|idx| (idx / self.width, idx % self.width))
    }

    /// In-bounds positions among the eight around `(row, col)`.
    pub fn neighbours_8(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOURS_8.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let grid = Grid::parse("ab.\n.c@\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(1, 2), Some(b'@'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.row(0), Some(&b"ab."[..]));
        assert_eq!(grid.find(b'c'), Some((1, 1)));
        assert_eq!(grid.find(b'z'), None);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        assert_eq!(
            Grid::parse("...\n..\n"),
            Err(GridError::Ragged {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn test_neighbours_are_clipped_at_edges() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        assert_eq!(grid.neighbours_8(1, 1).count(), 8);
        assert_eq!(grid.neighbours_8(0, 0).collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.neighbours_8(2, 1).count(), 5);
    }

    #[test]
    fn test_set_and_positions() {
        let mut grid = Grid::parse("..\n..").unwrap();
        assert!(grid.set(1, 0, b'#'));
        assert!(!grid.set(2, 0, b'#'));
        let marked: Vec<_> = grid.positions().filter(|&(r, c)| grid.get(r, c) == Some(b'#')).collect();
        assert_eq!(marked, vec![(1, 0)]);
    }
}
