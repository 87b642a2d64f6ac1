use crate::error::GridError;

/// Number of pixel rows on the matrix.
pub const ROWS: usize = 8;
/// Number of pixel columns on the matrix.
pub const COLS: usize = 16;

/// The on/off state of every pixel on an 8x16 LED matrix.
///
/// Cells are stored row-major. The dimensions are fixed at compile time, so
/// the only way to address a cell outside the grid is through an index that
/// `toggle` and `get` reject with [`GridError::OutOfRange`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
    cells: [[bool; COLS]; ROWS],
}

impl PixelGrid {
    /// Create a grid with every pixel off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a pixel and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let cell = self.cell_mut(row, col)?;
        *cell = !*cell;
        Ok(*cell)
    }

    /// Read the state of a pixel.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GridError::OutOfRange { row, col })
    }

    /// Turn every pixel off.
    pub fn reset(&mut self) {
        self.cells = [[false; COLS]; ROWS];
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool; COLS]> {
        self.cells.iter()
    }

    /// Number of pixels currently on.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&on| on).count()
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut bool, GridError> {
        self.cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::OutOfRange { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_off() {
        let grid = PixelGrid::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert!(!grid.get(row, col).unwrap(), "({row}, {col})");
            }
        }
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn toggle_returns_new_state() {
        let mut grid = PixelGrid::new();
        assert!(grid.toggle(2, 5).unwrap());
        assert!(grid.get(2, 5).unwrap());
        assert!(!grid.toggle(2, 5).unwrap());
        assert!(!grid.get(2, 5).unwrap());
    }

    #[test]
    fn toggle_twice_restores_every_cell() {
        let mut grid = PixelGrid::new();
        grid.toggle(0, 0).unwrap();
        grid.toggle(7, 15).unwrap();
        let before = grid.clone();

        for row in 0..ROWS {
            for col in 0..COLS {
                grid.toggle(row, col).unwrap();
                grid.toggle(row, col).unwrap();
                assert_eq!(grid, before, "({row}, {col})");
            }
        }
    }

    #[test]
    fn toggle_only_touches_one_cell() {
        let mut grid = PixelGrid::new();
        grid.toggle(4, 9).unwrap();
        assert_eq!(grid.lit_count(), 1);
        assert!(!grid.get(4, 8).unwrap());
        assert!(!grid.get(3, 9).unwrap());
    }

    #[test]
    fn out_of_range_row_is_rejected() {
        let mut grid = PixelGrid::new();
        grid.toggle(1, 1).unwrap();
        let before = grid.clone();

        assert_eq!(
            grid.toggle(ROWS, 0),
            Err(GridError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            grid.get(ROWS, 0),
            Err(GridError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn out_of_range_col_is_rejected() {
        let mut grid = PixelGrid::new();
        let before = grid.clone();

        assert_eq!(
            grid.toggle(0, COLS),
            Err(GridError::OutOfRange { row: 0, col: 16 })
        );
        assert_eq!(
            grid.get(0, COLS),
            Err(GridError::OutOfRange { row: 0, col: 16 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn reset_clears_all_pixels() {
        let mut grid = PixelGrid::new();
        for col in 0..COLS {
            grid.toggle(3, col).unwrap();
        }
        assert_eq!(grid.lit_count(), COLS);

        grid.reset();
        assert_eq!(grid, PixelGrid::new());
    }

    #[test]
    fn rows_are_top_to_bottom() {
        let mut grid = PixelGrid::new();
        grid.toggle(6, 2).unwrap();
        let rows: Vec<&[bool; COLS]> = grid.rows().collect();
        assert_eq!(rows.len(), ROWS);
        assert!(rows[6][2]);
        assert!(!rows[1][2]);
    }
}
