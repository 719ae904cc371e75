//! Randomized recursive carving of a perfect maze.
//!
//! Corridors are carved one cell at a time, depth first. Instead of keeping a
//! visited set, every candidate move inspects a small window of cells around
//! the would-be corridor cell: if any of them is already floor, accepting the
//! move would either merge two corridors or close a loop, so the move is
//! skipped. The window sizes and offsets are what keep the carved maze a
//! spanning tree; change them and the result silently stops being one.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::maze::{MazeCell, grid::Grid};

/// Carving always starts at the top-left interior cell.
pub(crate) const CARVE_START: (u16, u16) = (1, 1);

/// Lookahead window for moves along a column (up/down): 2 rows of 3 cells
/// centered on the candidate cell's column.
const HORIZONTAL_CHECK_ROWS: u16 = 2;
const HORIZONTAL_CHECK_COLS: u16 = 3;

/// Lookahead window for moves along a row (left/right): 3 rows of 2 cells
/// centered on the candidate cell's row.
const VERTICAL_CHECK_ROWS: u16 = 3;
const VERTICAL_CHECK_COLS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The coordinate one step away in this direction.
    /// Callers only step from interior cells, so the subtractions cannot wrap.
    fn step(self, (row, col): (u16, u16)) -> (u16, u16) {
        match self {
            Direction::Up => (row - 1, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
        }
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves a maze into `grid`, which must be non-empty, at least 3x3, and
/// filled with walls. After this returns, the floor cells form a single
/// corridor tree rooted at the fixed start cell.
pub(crate) fn carve(grid: &mut Grid, rng: &mut StdRng) {
    carve_from(grid, CARVE_START, rng);
}

/// One recursion step: open the current cell, then try every direction once
/// in a uniformly random order, descending into each accepted neighbor.
/// Returning from the recursion is the backtracking; the call stack is the
/// only carving state besides the grid itself. Depth is bounded by the
/// interior cell count, which the dimension cap in `generate` keeps in the
/// low thousands.
fn carve_from(grid: &mut Grid, (row, col): (u16, u16), rng: &mut StdRng) {
    grid[(row, col)] = MazeCell::Floor;

    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    for direction in directions {
        let next = direction.step((row, col));
        if can_move(grid, direction, next) {
            carve_from(grid, next, rng);
        }
    }
}

/// Whether the carving may advance into the candidate cell `(row, col)`.
/// Border cells are never entered. Otherwise the move is allowed only when
/// the direction's lookahead window contains no floor at all; the window
/// covers the candidate cell plus every cell that would become adjacent to
/// it from either side, so a clean window means the new corridor cell will
/// touch exactly one existing floor cell: the one it was carved from.
fn can_move(grid: &Grid, direction: Direction, (row, col): (u16, u16)) -> bool {
    if grid.is_boundary(row, col) {
        return false;
    }

    // Window anchors are relative to the candidate cell. The candidate is
    // interior here, so row and col are both at least 1 and the anchor
    // subtractions cannot wrap.
    match direction {
        Direction::Up => is_all_wall(
            grid,
            (row - 1, col - 1),
            HORIZONTAL_CHECK_ROWS,
            HORIZONTAL_CHECK_COLS,
        ),
        Direction::Down => is_all_wall(
            grid,
            (row, col - 1),
            HORIZONTAL_CHECK_ROWS,
            HORIZONTAL_CHECK_COLS,
        ),
        Direction::Left => is_all_wall(
            grid,
            (row - 1, col - 1),
            VERTICAL_CHECK_ROWS,
            VERTICAL_CHECK_COLS,
        ),
        Direction::Right => is_all_wall(
            grid,
            (row - 1, col),
            VERTICAL_CHECK_ROWS,
            VERTICAL_CHECK_COLS,
        ),
    }
}

/// Whether the `rows` x `cols` window anchored at `top_left` holds no floor.
fn is_all_wall(grid: &Grid, top_left: (u16, u16), rows: u16, cols: u16) -> bool {
    let (top, left) = top_left;
    (top..top + rows)
        .flat_map(|row| (left..left + cols).map(move |col| (row, col)))
        .all(|coord| !grid[coord].is_floor())
}
