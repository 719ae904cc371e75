//! Perfect-maze generation on a 2D grid.
//!
//! A [`MazeCarver`] carves a randomized maze whose floor cells form a single
//! spanning tree (connected, acyclic, unique path between any two cells) and
//! exports it as nested rows, a flat addressable grid, or a list of floor
//! coordinates. The [`printer`] module renders an export to the terminal with
//! distinct colors for walls and floors.

mod carver;
pub mod export;
pub mod maze;
pub mod printer;

pub use export::{CodeGrid, DEFAULT_FLOOR_CODE, DEFAULT_WALL_CODE};
pub use maze::{MazeCarver, MazeCell};
