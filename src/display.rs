//! Terminal rendering of search results: the annotated grid and the
//! arrow-joined coordinate trail.
use crate::ObstacleGrid;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::Itertools;

/// Renders the grid one row per line with ` 1 ` for obstacle cells, ` * `
/// for path cells and ` 0 ` for the rest.
pub fn render_path_grid(grid: &ObstacleGrid, path: &[Point]) -> String {
    let mut marks = BoolGrid::new(grid.grid.width, grid.grid.height, false);
    for p in path {
        marks.set(p.x as usize, p.y as usize, true);
    }
    let mut out = String::new();
    for y in 0..grid.grid.height {
        for x in 0..grid.grid.width {
            if grid.grid.get(x, y) {
                out.push_str(" 1 ");
            } else if marks.get(x, y) {
                out.push_str(" * ");
            } else {
                out.push_str(" 0 ");
            }
        }
        out.push('\n');
    }
    out
}

/// Renders the path coordinates in start-to-goal order as
/// `(x, y) -> (x, y) -> ... -> Goal`.
pub fn render_path_trail(path: &[Point]) -> String {
    let coordinates = path
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .join(" -> ");
    format!("{} -> Goal", coordinates)
}
