use super::MazeGenerator;
use crate::{
    array::Array2D,
    dims::Dims,
    error::GenError,
    grid::{Direction, Grid},
    random::RandomSource,
};

/// Order in which the neighbors of a newly joined cell enter the frontier.
const FRONTIER_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

/// Randomized Prim's algorithm.
///
/// The frontier holds `(cell, direction)` pairs, where `cell` is outside the maze and
/// `direction` points from it to the maze cell that discovered it. Walls are only removed
/// when an edge is carved, the seed cell keeps its walls until then, so a 1x1 grid stays
/// fully enclosed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RndPrims;

impl RndPrims {
    fn push_frontier(
        grid: &Grid,
        in_maze: &Array2D<bool>,
        from: Dims,
        frontier: &mut Vec<(Dims, Direction)>,
    ) {
        for dir in FRONTIER_ORDER {
            if let Some(next) = grid.neighbor(from, dir) {
                if !in_maze[next] {
                    frontier.push((next, dir.opposite()));
                }
            }
        }
    }
}

impl MazeGenerator for RndPrims {
    fn generate(&self, size: usize, rng: &mut dyn RandomSource) -> Result<Grid, GenError> {
        let mut grid = Grid::new(size)?;
        let mut in_maze = Array2D::new(false, size, size);

        let seed = Dims(rng.below(size) as i32, rng.below(size) as i32);
        log::trace!("Prim's seed cell {:?}", seed);
        in_maze[seed] = true;

        let mut frontier = Vec::with_capacity(4 * size);
        Self::push_frontier(&grid, &in_maze, seed, &mut frontier);

        while !frontier.is_empty() {
            let (pos, dir) = frontier.swap_remove(rng.below(frontier.len()));

            // already reached through another wall
            if in_maze[pos] {
                continue;
            }

            grid.carve(pos, dir);
            in_maze[pos] = true;
            Self::push_frontier(&grid, &in_maze, pos, &mut frontier);
        }

        Ok(grid)
    }
}
