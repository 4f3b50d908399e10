use grid_astar::display::{render_path_grid, render_path_trail};
use grid_astar::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use std::io::{self, BufRead, Write};

// Interactive terminal front-end: reads grid dimensions, obstacle positions
// and the two endpoints from stdin, then prints the annotated grid and the
// coordinate trail of the found path. All validation happens here; the
// search itself only ever sees in-bounds coordinates.

fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }
    Ok(line)
}

/// Prompts until a single non-negative integer is entered.
fn prompt_number(input: &mut impl BufRead, prompt: &str) -> io::Result<usize> {
    loop {
        let line = read_line(input, prompt)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid number, try again."),
        }
    }
}

/// Prompts until a pair of integers separated by whitespace is entered.
fn prompt_pair(input: &mut impl BufRead, prompt: &str) -> io::Result<(i32, i32)> {
    loop {
        let line = read_line(input, prompt)?;
        let fields = line
            .split_whitespace()
            .map(|field| field.parse::<i32>())
            .collect::<Result<Vec<i32>, _>>();
        match fields.as_deref() {
            Ok([x, y]) => return Ok((*x, *y)),
            _ => println!("Invalid position, expected two numbers (x y)."),
        }
    }
}

/// Prompts until the entered pair lies within the grid bounds.
fn prompt_point(input: &mut impl BufRead, prompt: &str, grid: &ObstacleGrid) -> io::Result<Point> {
    loop {
        let (x, y) = prompt_pair(input, prompt)?;
        if grid.in_bounds(x, y) {
            return Ok(Point::new(x, y));
        }
        println!("Position out of bounds, try again.");
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let width = prompt_number(&mut input, "Enter the width of the grid: ")?;
    let height = prompt_number(&mut input, "Enter the height of the grid: ")?;
    let mut grid: ObstacleGrid = ObstacleGrid::new(width, height, false);

    let num_obstacles = prompt_number(&mut input, "Enter the number of obstacles: ")?;
    let mut placed = 0;
    while placed < num_obstacles {
        let prompt = format!("Enter the position of obstacle {} (x y): ", placed + 1);
        let (x, y) = prompt_pair(&mut input, &prompt)?;
        if grid.in_bounds(x, y) {
            grid.set(x as usize, y as usize, true);
            placed += 1;
        } else {
            println!("Invalid obstacle position. Ignoring obstacle.");
        }
    }
    grid.generate_components();

    let start = prompt_point(&mut input, "Enter the start position (x y): ", &grid)?;
    let goal = prompt_point(&mut input, "Enter the goal position (x y): ", &grid)?;

    match grid.get_path(start, goal) {
        Some(path) => {
            println!("Path:");
            print!("{}", render_path_grid(&grid, &path));
            println!("\nPath: {}", render_path_trail(&path));
        }
        None => println!("No path found!"),
    }
    Ok(())
}
