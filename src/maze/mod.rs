pub mod cell;
pub(crate) mod grid;

pub use cell::MazeCell;
use grid::Grid;

use crate::carver;

/// Smallest accepted value for either dimension.
const MIN_DIMENSION: i32 = 3;
/// Largest accepted value for the sum of both dimensions.
const MAX_DIMENSION_SUM: i32 = 150;

/// Generates perfect mazes and holds the most recently generated grid.
///
/// A carver owns at most one grid at a time; every call to [`generate`]
/// replaces the previous grid and its random source wholesale. The carved
/// floor cells always form a single corridor tree: every floor cell is
/// reachable from every other by exactly one path, and no 2x2 block of the
/// grid is ever fully open.
///
/// [`generate`]: MazeCarver::generate
pub struct MazeCarver {
    grid: Grid,
}

impl MazeCarver {
    /// Creates a carver with no grid. All queries and exports treat this the
    /// same as a rejected generation: zero-size results everywhere.
    pub fn new() -> Self {
        MazeCarver {
            grid: Grid::empty(),
        }
    }

    /// Generates a `height` x `width` maze, replacing any previous grid.
    ///
    /// Dimensions are accepted when both are at least 3 and their sum is at
    /// most 150. Anything else (including negative values) produces a
    /// zero-size grid instead of an error; callers detect that case through
    /// [`is_empty`](MazeCarver::is_empty) or the export sizes.
    ///
    /// The random source is created fresh per call, so repeated generations
    /// are independent.
    pub fn generate(&mut self, height: i32, width: i32) {
        self.generate_with_seed(height, width, None);
    }

    /// Like [`generate`](MazeCarver::generate), but with an optionally seeded
    /// random source for reproducible mazes.
    pub fn generate_with_seed(&mut self, height: i32, width: i32, seed: Option<u64>) {
        if height < MIN_DIMENSION
            || width < MIN_DIMENSION
            || height.saturating_add(width) > MAX_DIMENSION_SUM
        {
            tracing::debug!(height, width, "dimensions out of range, grid left empty");
            self.grid = Grid::empty();
            return;
        }

        // The checks above bound both dimensions well inside u16 range.
        let mut grid = Grid::new(height as u16, width as u16, MazeCell::Wall);
        let mut rng = carver::get_rng(seed);
        carver::carve(&mut grid, &mut rng);
        self.grid = grid;
        tracing::debug!(height, width, "maze carved");
    }

    /// Number of rows in the current grid; 0 when no maze is held.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Number of columns in the current grid; 0 when no maze is held.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Whether the carver currently holds no maze, either because nothing was
    /// generated yet or because the last requested dimensions were rejected.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// The coordinates of every floor cell, in row-major order.
    pub fn floor_coordinates(&self) -> Vec<(u16, u16)> {
        self.grid
            .cells()
            .filter(|(_, cell)| cell.is_floor())
            .map(|(coord, _)| coord)
            .collect()
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Default for MazeCarver {
    fn default() -> Self {
        MazeCarver::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_carver_is_empty() {
        let carver = MazeCarver::new();
        assert!(carver.is_empty());
        assert_eq!(carver.height(), 0);
        assert_eq!(carver.width(), 0);
        assert!(carver.floor_coordinates().is_empty());
    }

    #[test]
    fn test_rejects_dimensions_below_lower_limit() {
        let mut carver = MazeCarver::new();
        for dim in -3..3 {
            carver.generate(dim, 9);
            assert!(carver.is_empty(), "height {dim} should be rejected");
            carver.generate(9, dim);
            assert!(carver.is_empty(), "width {dim} should be rejected");
        }
    }

    #[test]
    fn test_rejects_dimension_sum_above_upper_limit() {
        let mut carver = MazeCarver::new();
        carver.generate(100, 60);
        assert!(carver.is_empty());
        carver.generate(148, 3);
        assert!(carver.is_empty());
        // Extreme values must not overflow the sum check
        carver.generate(i32::MAX, i32::MAX);
        assert!(carver.is_empty());
    }

    #[test]
    fn test_accepts_boundary_dimensions() {
        let mut carver = MazeCarver::new();
        carver.generate_with_seed(3, 3, Some(1));
        assert_eq!((carver.height(), carver.width()), (3, 3));
        carver.generate_with_seed(147, 3, Some(1));
        assert_eq!((carver.height(), carver.width()), (147, 3));
        carver.generate_with_seed(3, 147, Some(1));
        assert_eq!((carver.height(), carver.width()), (3, 147));
    }

    #[test]
    fn test_six_by_six_scenario() {
        let mut carver = MazeCarver::new();
        carver.generate(6, 6);
        assert_eq!((carver.height(), carver.width()), (6, 6));

        let floors = carver.floor_coordinates();
        assert!(floors.contains(&(1, 1)), "start cell must be open");

        let mut walls = 0;
        for ((row, col), cell) in carver.grid().cells() {
            if carver.grid().is_boundary(row, col) {
                assert_eq!(cell, MazeCell::Wall, "border cell ({row}, {col}) is open");
            }
            if !cell.is_floor() {
                walls += 1;
            }
        }
        assert_eq!(floors.len() + walls, 36);
    }

    #[test]
    fn test_generate_replaces_previous_grid() {
        let mut carver = MazeCarver::new();
        carver.generate(10, 12);
        assert_eq!((carver.height(), carver.width()), (10, 12));

        carver.generate(5, 4);
        assert_eq!((carver.height(), carver.width()), (5, 4));
        assert!(
            carver
                .floor_coordinates()
                .iter()
                .all(|&(row, col)| row < 5 && col < 4),
            "stale coordinates survived regeneration"
        );

        carver.generate(2, 9);
        assert!(carver.is_empty());
        assert!(carver.floor_coordinates().is_empty());
    }

    #[test]
    fn test_floor_coordinates_row_major() {
        let mut carver = MazeCarver::new();
        carver.generate_with_seed(9, 9, Some(7));
        let floors = carver.floor_coordinates();
        assert!(!floors.is_empty());
        assert!(
            floors.windows(2).all(|pair| pair[0] < pair[1]),
            "coordinates are not in row-major order"
        );
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut first = MazeCarver::new();
        let mut second = MazeCarver::new();
        first.generate_with_seed(11, 13, Some(99));
        second.generate_with_seed(11, 13, Some(99));
        assert_eq!(first.floor_coordinates(), second.floor_coordinates());
    }
}
