/// Represents a cell in the maze grid, which is either a wall or a floor.
///
/// These are the only two states a cell ever takes. The carving algorithm
/// derives "have I been here" information from the cell value itself, so no
/// separate visited marker exists.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeCell {
    /// A solid cell. Freshly allocated grids are all walls.
    #[default]
    Wall,
    /// A carved-out corridor cell.
    Floor,
}

impl MazeCell {
    pub fn is_floor(self) -> bool {
        self == MazeCell::Floor
    }

    /// Maps the cell to its caller-facing integer code.
    pub fn code(self, floor_code: i32, wall_code: i32) -> i32 {
        match self {
            MazeCell::Wall => wall_code,
            MazeCell::Floor => floor_code,
        }
    }
}
