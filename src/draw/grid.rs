//! Bounded cell grid that rasterized shapes are painted into.

use super::raster::Cell;

/// A `width × height` grid of optional cell values.
///
/// Reads outside the grid return `None` and writes outside it are ignored, so
/// callers can paint raster output without clipping it first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<T: Clone + PartialEq> PixelGrid<T> {
    /// Creates an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<&T> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Writes `value` (or clears the cell with `None`). Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: i32, col: i32, value: Option<T>) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = value;
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Number of non-empty cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Writes `value` into every in-bounds cell of `cells`. Repeated cells are harmless.
    pub fn paint(&mut self, cells: &[Cell], value: T) {
        for &(row, col) in cells {
            self.set(row, col, Some(value.clone()));
        }
    }

    /// Replaces the 4-connected region around `(row, col)` with `value`.
    ///
    /// The region is every cell reachable through neighbours holding the same
    /// contents as the seed (empty cells included). Returns the number of cells
    /// changed; zero when the seed is out of bounds or already holds `value`.
    pub fn flood_fill(&mut self, row: i32, col: i32, value: T) -> usize {
        let Some(seed) = self.index(row, col) else {
            return 0;
        };
        let target = self.cells[seed].clone();
        if target.as_ref() == Some(&value) {
            return 0;
        }

        let mut filled = 0;
        let mut stack = vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            let Some(i) = self.index(r, c) else {
                continue;
            };
            if self.cells[i] != target {
                continue;
            }

            self.cells[i] = Some(value.clone());
            filled += 1;
            stack.extend([(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]);
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::raster;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut grid = PixelGrid::new(4, 3);
        grid.set(-1, 0, Some(1u8));
        grid.set(3, 0, Some(1));
        grid.set(0, 4, Some(1));
        assert_eq!(grid.painted_count(), 0);
        assert_eq!(grid.get(-1, -1), None);
        assert_eq!((grid.width(), grid.height()), (4, 3));
    }

    #[test]
    fn paint_is_idempotent_per_cell() {
        let mut grid = PixelGrid::new(10, 10);
        let cells = raster::rectangle(1, 1, 5, 5, false);
        grid.paint(&cells, 'x');
        let once = grid.clone();
        grid.paint(&cells, 'x');
        assert_eq!(grid, once);
        assert_eq!(grid.painted_count(), 16);
    }

    #[test]
    fn flood_fill_stays_inside_outline() {
        let mut grid = PixelGrid::new(12, 12);
        grid.paint(&raster::rectangle(2, 2, 8, 8, false), 1u8);

        let filled = grid.flood_fill(5, 5, 2);
        assert_eq!(filled, 25);
        assert_eq!(grid.get(5, 5), Some(&2));
        assert_eq!(grid.get(2, 2), Some(&1));
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn flood_fill_replaces_matching_color_region() {
        let mut grid = PixelGrid::new(5, 1);
        grid.paint(&[(0, 0), (0, 1), (0, 3)], 7u8);

        assert_eq!(grid.flood_fill(0, 0, 9), 2);
        assert_eq!(grid.get(0, 3), Some(&7));
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn flood_fill_noops_on_same_value_or_outside() {
        let mut grid = PixelGrid::new(3, 3);
        grid.paint(&[(1, 1)], 4u8);
        assert_eq!(grid.flood_fill(1, 1, 4), 0);
        assert_eq!(grid.flood_fill(5, 5, 4), 0);
    }

    #[test]
    fn clear_empties_grid() {
        let mut grid = PixelGrid::new(3, 3);
        grid.flood_fill(0, 0, true);
        assert_eq!(grid.painted_count(), 9);
        grid.clear();
        assert_eq!(grid.painted_count(), 0);
    }
}
