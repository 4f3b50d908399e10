//! # grid_astar
//!
//! A grid-based shortest-path system. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search over a 2D
//! obstacle grid with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! heuristic. Movement is 8-directional and every step costs one unit,
//! diagonal or not. A diagonal step closes both coordinate gaps for that
//! single unit, so Manhattan distance can overestimate the remaining cost:
//! returned paths are valid and typically minimal, but minimality is not
//! guaranteed. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists. Terminal rendering of
//! found paths lives in [display].
mod astar;
pub mod display;

use crate::astar::astar;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::{info, warn};
use petgraph::unionfind::UnionFind;

/// Manhattan distance between two cells. A diagonal step shortens both
/// coordinate differences at the cost of a single unit, so for the
/// 8-neighbourhood used here this can overestimate the true remaining cost
/// by up to a factor of two and the guided search may settle on a path
/// slightly longer than the minimum.
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// [ObstacleGrid] holds the raw [bool] grid values in a [BoolGrid] that
/// determine whether a cell is an obstacle ([true]) or free ([false]),
/// together with a [UnionFind] structure over cell indices tracking which
/// free cells are mutually reachable. Implements [Grid] by building on
/// [BoolGrid].
///
/// Obstacle placement via [set](Grid::set) is a setup step; a running search
/// only reads the grid. Call [generate_components](Self::generate_components)
/// (or [update](Self::update)) after the last obstacle change and before
/// searching.
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for ObstacleGrid {
    fn default() -> ObstacleGrid {
        ObstacleGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl ObstacleGrid {
    /// Whether (x, y) lies within the grid bounds.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }
    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }
    fn get_neighbours(&self, point: Point) -> Vec<Point> {
        point
            .moore_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect::<Vec<Point>>()
    }
    /// The free neighbours of a cell with their move cost, which is a single
    /// unit step regardless of direction.
    fn successors(&self, pos: &Point) -> Vec<(Point, i32)> {
        pos.moore_neighborhood()
            .into_iter()
            .filter(|&position| self.can_move_to(position))
            .map(|p| (p, 1))
            .collect::<Vec<_>>()
    }
    fn point_ix(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.point_ix(point))
    }
    /// Checks if start and goal are on different components, meaning no path
    /// can exist between them.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.point_ix(start);
            let goal_ix = self.point_ix(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not equivalent components", start_ix, goal_ix);
                true
            }
        } else {
            true
        }
    }
    /// Computes a path from start to goal, guided by [manhattan_distance].
    /// Both endpoints must lie within bounds. Returns [None] if the goal is
    /// not reachable.
    pub fn get_path(&self, start: Point, goal: Point) -> Option<Vec<Point>> {
        self.get_path_with_cost(start, goal).map(|(path, _cost)| path)
    }
    /// Computes a path from start to goal together with its cost in unit
    /// steps, which equals the number of moves made.
    pub fn get_path_with_cost(&self, start: Point, goal: Point) -> Option<(Vec<Point>, i32)> {
        if self.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let result = astar(
            &start,
            |node| self.successors(node),
            |point| manhattan_distance(point, &goal),
            |point| *point == goal,
        );
        if result.is_none() {
            warn!("Reachable goal could not be pathed to, are the components up to date?");
        }
        result
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up neighbouring free
    /// cells to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.point_ix(&point);
                // Forward half of the 8-neighbourhood; together with the
                // sweep this links every adjacent pair of free cells once.
                let neighbours = [
                    Point::new(x + 1, y),
                    Point::new(x - 1, y + 1),
                    Point::new(x, y + 1),
                    Point::new(x + 1, y + 1),
                ]
                .into_iter()
                .filter(|p| self.can_move_to(*p))
                .map(|p| self.point_ix(&p))
                .collect::<Vec<usize>>();
                for ix in neighbours {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for ObstacleGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        ObstacleGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a cell on the grid. Joins newly connected components and
    /// flags the components as dirty if placing an obstacle (potentially)
    /// breaks a component apart.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p = Point::new(x as i32, y as i32);
            for n in self.get_neighbours(p) {
                self.components
                    .union(self.grid.get_ix(x, y), self.point_ix(&n));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
