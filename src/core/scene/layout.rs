//=========================================================================
// Grid Layout
//=========================================================================
//
// Maps a record's index in the catalog to a fixed position in the scene.
//
//   col = index % columns          x = (col - (columns - 1) / 2) * spacing_x
//   row = index / columns          y = ((rows - 1) / 2 - row) * row_pitch
//                                  z = depth
//
// Rows are stacked top to bottom and the block of rows is centred on
// y = 0, so two rows land at +row_pitch/2 and -row_pitch/2.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== GridLayout ==========================================================

/// Row-major grid placement. Pure; holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub spacing_x: f32,
    pub row_pitch: f32,
    pub depth: f32,
}

impl GridLayout {
    pub const DEFAULT_COLUMNS: usize = 10;
    pub const DEFAULT_SPACING_X: f32 = 6.0;
    pub const DEFAULT_ROW_PITCH: f32 = 16.0;

    /// # Panics
    ///
    /// Panics if `columns == 0`.
    pub fn new(columns: usize, spacing_x: f32, row_pitch: f32) -> Self {
        assert!(columns > 0, "Grid layout needs at least one column");
        Self {
            columns,
            spacing_x,
            row_pitch,
            depth: 0.0,
        }
    }

    /// Position of the `index`-th object out of `total_count`.
    ///
    /// An index at or past `total_count` is placed as if the grid had
    /// grown to hold it.
    pub fn place(&self, index: usize, total_count: usize) -> Vec3 {
        let count = total_count.max(index + 1);
        let rows = count.div_ceil(self.columns);

        let row = index / self.columns;
        let col = index % self.columns;

        let x = (col as f32 - (self.columns - 1) as f32 / 2.0) * self.spacing_x;
        let y = ((rows - 1) as f32 / 2.0 - row as f32) * self.row_pitch;

        Vec3::new(x, y, self.depth)
    }

    /// `(row, column)` for an index.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLUMNS, Self::DEFAULT_SPACING_X, Self::DEFAULT_ROW_PITCH)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
