/// Fuzzes the search by checking for many random grids that a path is found
/// exactly when start and goal share a connected component, and that every
/// found path is valid and never shorter than an exact breadth-first search
/// reference. The Manhattan heuristic overestimates under unit-cost diagonal
/// movement, so the search may settle on a slightly longer path than the
/// reference; it must never produce a shorter one.
use grid_astar::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(n: usize, rng: &mut StdRng) -> ObstacleGrid {
    let mut grid: ObstacleGrid = ObstacleGrid::new(n, n, false);
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            grid.set(x, y, rng.gen_bool(0.4))
        }
    }
    grid.generate_components();
    grid
}

fn visualize_grid(grid: &ObstacleGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x as usize, y as usize) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Exact reference distance in moves. Breadth-first search is optimal here
/// because every move costs one step, diagonal or not.
fn bfs_distance(grid: &ObstacleGrid, start: Point, goal: Point) -> Option<usize> {
    let mut distances = vec![usize::MAX; grid.width() * grid.height()];
    let ix = |p: &Point| p.y as usize * grid.width() + p.x as usize;
    distances[ix(&start)] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        if p == goal {
            return Some(distances[ix(&p)]);
        }
        for n in p.moore_neighborhood() {
            if grid.in_bounds(n.x, n.y)
                && !grid.get(n.x as usize, n.y as usize)
                && distances[ix(&n)] == usize::MAX
            {
                distances[ix(&n)] = distances[ix(&p)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn assert_valid_path(grid: &ObstacleGrid, path: &[Point], start: Point, goal: Point) {
    assert_eq!(*path.first().unwrap(), start);
    assert_eq!(*path.last().unwrap(), goal);
    for p in path {
        assert!(!grid.get(p.x as usize, p.y as usize));
    }
    for pair in path.windows(2) {
        let dx = (pair[0].x - pair[1].x).abs();
        let dy = (pair[0].y - pair[1].y).abs();
        assert!(dx <= 1 && dy <= 1 && dx + dy > 0);
    }
}

#[test]
fn fuzz_reachability() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set(0, 0, false);
        grid.set(N - 1, N - 1, false);
        let reachable = !grid.unreachable(&start, &end);
        let path = grid.get_path(start, end);
        // Show the grid if search and components disagree
        if path.is_some() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert!(path.is_some() == reachable);
        if let Some(path) = path {
            assert_valid_path(&grid, &path, start, end);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 5;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set(0, 0, false);
        grid.set(N - 1, N - 1, false);
        let reference = bfs_distance(&grid, start, end);
        let result = grid.get_path_with_cost(start, end);
        if let Some((path, cost)) = result {
            assert_valid_path(&grid, &path, start, end);
            let reference = reference.unwrap();
            // Show the grid if the search beats the exact reference, which
            // would mean the reported cost or the reference is broken
            if (cost as usize) < reference {
                println!("A* cost: {cost}; BFS distance: {reference}");
                println!("A* path: {path:?}");
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(path.len() - 1, cost as usize);
            assert!(cost as usize >= reference);
        } else {
            assert_eq!(reference, None);
        }
    }
}
