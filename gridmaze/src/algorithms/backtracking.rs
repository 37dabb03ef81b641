use super::MazeGenerator;
use crate::{
    array::Array2D,
    dims::Dims,
    error::GenError,
    grid::{Direction, Grid},
    random::{shuffle, RandomSource},
};

/// Candidate order before shuffling.
const CANDIDATES: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// One level of the depth-first descent.
#[derive(Debug)]
struct Frame {
    pos: Dims,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter(pos: Dims, rng: &mut dyn RandomSource) -> Self {
        let mut dirs = CANDIDATES;
        shuffle(&mut dirs, rng);
        Frame { pos, dirs, next: 0 }
    }

    fn next_dir(&mut self) -> Option<Direction> {
        let dir = self.dirs.get(self.next).copied();
        self.next += 1;
        dir
    }
}

/// Depth-first carve with shuffled direction order.
///
/// Uses an explicit stack of frames instead of recursion, a cell's directions are shuffled
/// when it is entered, so draws and carve order match the recursive formulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveBacktracker {
    /// Start cell, the grid center when `None`.
    pub start: Option<Dims>,
}

impl RecursiveBacktracker {
    pub fn starting_at(start: Dims) -> Self {
        Self { start: Some(start) }
    }
}

impl MazeGenerator for RecursiveBacktracker {
    fn generate(&self, size: usize, rng: &mut dyn RandomSource) -> Result<Grid, GenError> {
        let mut grid = Grid::new(size)?;
        let start = self.start.unwrap_or_else(|| grid.center());
        if !grid.is_in_bounds(start) {
            return Err(GenError::StartOutOfBounds(start));
        }

        let mut visited = Array2D::new(false, size, size);
        let mut stack = Vec::with_capacity(grid.cell_count());
        let mut deepest = 0;

        visited[start] = true;
        stack.push(Frame::enter(start, rng));

        while let Some(frame) = stack.last_mut() {
            let Some(dir) = frame.next_dir() else {
                stack.pop();
                continue;
            };

            let pos = frame.pos;
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            if visited[next] {
                continue;
            }

            grid.carve(pos, dir);
            visited[next] = true;
            stack.push(Frame::enter(next, rng));
            deepest = deepest.max(stack.len());
        }

        log::trace!("Backtracking from {:?} reached depth {}", start, deepest);

        Ok(grid)
    }
}
