use serde::{Deserialize, Serialize};

/// A cell coordinate in the grid. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

/// Normalized text laid out row by row with a fixed width.
///
/// Every row holds `width` letters except possibly the last one. Cell
/// `(x, y)` is the letter at linear index `y * width + x`.
#[derive(Debug, Clone)]
pub struct Grid {
    letters: Vec<u8>,
    width: usize,
}

/// Row width used for a text of `len` letters: `ceil(sqrt(len))`, at least 1.
pub fn grid_width(len: usize) -> usize {
    let mut w = (len as f64).sqrt() as usize;
    // Float sqrt can be off by one for large inputs.
    while w * w < len {
        w += 1;
    }
    while w > 1 && (w - 1) * (w - 1) >= len {
        w -= 1;
    }
    w.max(1)
}

impl Grid {
    /// Lay `normalized` out in rows of `width` letters.
    ///
    /// `normalized` must already be in the `A`-`Z` alphabet.
    pub fn new(normalized: &str, width: usize) -> Self {
        Grid {
            letters: normalized.as_bytes().to_vec(),
            width: width.max(1),
        }
    }

    /// Build a grid with the default square-ish width.
    pub fn square(normalized: &str) -> Self {
        Self::new(normalized, grid_width(normalized.len()))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.letters.len().div_ceil(self.width)
    }

    /// Rows in order; the last may be shorter than `width`.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.letters
            .chunks(self.width)
            .map(|row| std::str::from_utf8(row).unwrap_or_default())
    }

    /// Linear index of a cell in the normalized text.
    pub fn linear_index(&self, cell: Cell) -> usize {
        cell.y * self.width + cell.x
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        Cell {
            x: index % self.width,
            y: index / self.width,
        }
    }

    /// Resolve a signed coordinate, respecting the ragged last row.
    pub fn resolve(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width {
            return None;
        }
        let index = y.checked_mul(self.width)?.checked_add(x)?;
        (index < self.letters.len()).then_some(Cell { x, y })
    }

    pub fn letter(&self, cell: Cell) -> u8 {
        self.letters[self.linear_index(cell)]
    }

    /// Letter at a signed coordinate, or `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        self.resolve(x, y).map(|cell| self.letter(cell))
    }

    /// All cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, &b)| (self.cell_at(i), b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_width_is_ceil_sqrt() {
        assert_eq!(grid_width(0), 1);
        assert_eq!(grid_width(1), 1);
        assert_eq!(grid_width(2), 2);
        assert_eq!(grid_width(4), 2);
        assert_eq!(grid_width(5), 3);
        assert_eq!(grid_width(9), 3);
        assert_eq!(grid_width(10), 4);
        assert_eq!(grid_width(1_000_001), 1001);
    }

    #[test]
    fn test_rows_reassemble_text() {
        let text = "ABCDEFGHIJK";
        let grid = Grid::square(text);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.row_count(), 3);
        let rows: Vec<&str> = grid.rows().collect();
        assert_eq!(rows, vec!["ABCD", "EFGH", "IJK"]);
        assert_eq!(rows.concat(), text);
    }

    #[test]
    fn test_row_count_for_various_widths() {
        let text = "ABCDEFGHIJ";
        for w in 1..=12 {
            let grid = Grid::new(text, w);
            assert_eq!(grid.row_count(), text.len().div_ceil(w));
            assert_eq!(grid.rows().collect::<String>(), text);
        }
    }

    #[test]
    fn test_ragged_last_row_bounds() {
        let grid = Grid::new("ABCDEFG", 3);
        assert_eq!(grid.get(0, 2), Some(b'G'));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(2, 1), Some(b'F'));
    }

    #[test]
    fn test_far_coordinates_resolve_to_none() {
        let grid = Grid::new("ABCDEFGHIJKLMNOP", 4);
        assert_eq!(grid.resolve(0, i64::MAX), None);
        assert_eq!(grid.resolve(3, i64::MAX / 2), None);
        assert_eq!(grid.get(i64::MAX, 0), None);
    }

    #[test]
    fn test_linear_index_round_trip() {
        let grid = Grid::new("ABCDEFGHIJ", 4);
        let cell = Cell { x: 1, y: 2 };
        assert_eq!(grid.linear_index(cell), 9);
        assert_eq!(grid.cell_at(9), cell);
        assert_eq!(grid.letter(cell), b'J');
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::square("");
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.get(0, 0), None);
    }
}
