use grid_astar::display::{render_path_grid, render_path_trail};
use grid_astar::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this demo a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ---
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Cells have an 8-neighbourhood and every move costs one step.

fn main() {
    let mut grid: ObstacleGrid = ObstacleGrid::new(3, 3, false);
    grid.set(1, 1, true);
    grid.generate_components();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let goal = Point::new(2, 2);
    match grid.get_path(start, goal) {
        Some(path) => {
            println!("Path:");
            print!("{}", render_path_grid(&grid, &path));
            println!("\nPath: {}", render_path_trail(&path));
        }
        None => println!("No path found!"),
    }
}
