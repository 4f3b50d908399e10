use grid_astar::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this demo the goal is walled off on all 8 sides:
//  _____
// |S    |
// | ### |
// | #G# |
// | ### |
// |_____|
// so the search reports that no path exists. The connected-component
// pre-check answers this without expanding a single node.

fn main() {
    let mut grid: ObstacleGrid = ObstacleGrid::new(5, 5, false);
    let goal = Point::new(2, 2);
    for n in goal.moore_neighborhood() {
        grid.set(n.x as usize, n.y as usize, true);
    }
    grid.generate_components();
    println!("{}", grid);
    match grid.get_path(Point::new(0, 0), goal) {
        Some(path) => println!("Path: {:?}", path),
        None => println!("No path found!"),
    }
}
