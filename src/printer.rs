//! Colored terminal output for exported mazes.
//!
//! The printer works on exported code grids, not on the carver itself: the
//! wall code is whatever value sits at cell (0, 0) (the border is always
//! wall), and every other value gets the floor treatment. A zero-size export
//! prints nothing.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::export::CodeGrid;

/// Background color for wall cells when the caller has no preference.
pub const DEFAULT_WALL_COLOR: Color = Color::Red;
/// Background color for floor cells when the caller has no preference.
pub const DEFAULT_FLOOR_COLOR: Color = Color::Green;

/// Prints a nested-rows export, one styled row per line.
pub fn print_nested(
    out: &mut impl Write,
    maze: &[Vec<i32>],
    wall_color: Color,
    floor_color: Color,
) -> io::Result<()> {
    let Some(&wall_code) = maze.first().and_then(|row| row.first()) else {
        return Ok(());
    };
    let cell_width = max_code_width(maze.iter().flatten());
    for row in maze {
        print_row(out, row, wall_code, cell_width, wall_color, floor_color)?;
    }
    out.flush()
}

/// Prints a flat-grid export, one styled row per line.
pub fn print_flat(
    out: &mut impl Write,
    maze: &CodeGrid,
    wall_color: Color,
    floor_color: Color,
) -> io::Result<()> {
    if maze.is_empty() {
        return Ok(());
    }
    let wall_code = maze[(0, 0)];
    let cell_width = max_code_width(maze.rows().flatten());
    for row in maze.rows() {
        print_row(out, row, wall_code, cell_width, wall_color, floor_color)?;
    }
    out.flush()
}

/// Widest decimal rendering among the grid's codes, so that every cell
/// occupies the same number of columns.
fn max_code_width<'a>(values: impl Iterator<Item = &'a i32>) -> usize {
    values.map(|v| v.to_string().len()).max().unwrap_or(1)
}

fn print_row(
    out: &mut impl Write,
    row: &[i32],
    wall_code: i32,
    cell_width: usize,
    wall_color: Color,
    floor_color: Color,
) -> io::Result<()> {
    for &value in row {
        let text = format!("{value:>cell_width$} ");

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                text.width(),
                cell_width + 1,
                "Each cell must occupy the same number of character widths."
            );
        }

        let color = if value == wall_code {
            wall_color
        } else {
            floor_color
        };
        queue!(out, style::PrintStyledContent(text.on(color)))?;
    }
    queue!(out, style::Print("\n"))?;
    Ok(())
}
