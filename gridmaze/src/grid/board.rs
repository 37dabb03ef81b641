use smallvec::SmallVec;

use super::{Cell, Direction};
use crate::{array::Array2D, dims::Dims, error::GenError};

/// Largest accepted side length.
pub const MAX_SIZE: usize = 4096;

/// Square maze grid. Every cell keeps its own copy of the flag for each shared edge,
/// [`Grid::carve`] keeps both copies in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
    size: usize,
}

impl Grid {
    /// Allocates a `size × size` grid of fully enclosed cells.
    pub fn new(size: usize) -> Result<Self, GenError> {
        if size == 0 || size > MAX_SIZE {
            return Err(GenError::InvalidSize(size));
        }

        Ok(Grid {
            cells: Array2D::new(Cell::new(), size, size),
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn center(&self) -> Dims {
        let half = (self.size / 2) as i32;
        Dims(half, half)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Wall flag of `pos` on side `dir`, `None` when `pos` is outside the grid.
    pub fn has_wall(&self, pos: Dims, dir: Direction) -> Option<bool> {
        self.cell(pos).map(|cell| cell.has_wall(dir))
    }

    pub fn neighbor(&self, pos: Dims, dir: Direction) -> Option<Dims> {
        if !self.is_in_bounds(pos) {
            return None;
        }

        let next = pos + dir.offset();
        self.is_in_bounds(next).then_some(next)
    }

    pub fn neighbors(&self, pos: Dims) -> SmallVec<[(Dims, Direction); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor(pos, dir).map(|n| (n, dir)))
            .collect()
    }

    /// `true` if `a` and `b` are adjacent and the passage between them is open on both sides.
    pub fn is_open_between(&self, a: Dims, b: Dims) -> bool {
        let Some(dir) = Direction::between(a, b) else {
            return false;
        };

        match (self.has_wall(a, dir), self.has_wall(b, dir.opposite())) {
            (Some(wa), Some(wb)) => !wa && !wb,
            _ => false,
        }
    }

    /// Removes the wall between `pos` and its neighbor in `dir` from both cells.
    ///
    /// Does nothing if `pos` has no neighbor in that direction.
    pub(crate) fn carve(&mut self, pos: Dims, dir: Direction) {
        let Some(next) = self.neighbor(pos, dir) else {
            return;
        };

        self.cells[pos].remove_wall(dir);
        self.cells[next].remove_wall(dir.opposite());
    }

    /// Number of shared edges that are open.
    pub fn open_edge_count(&self) -> usize {
        self.iter_pos()
            .flat_map(|pos| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter_map(move |dir| self.neighbor(pos, dir).map(|n| (pos, n)))
            })
            .filter(|&(a, b)| self.is_open_between(a, b))
            .count()
    }

    /// `true` if both cells of every shared edge agree on the wall flag.
    pub fn is_consistent(&self) -> bool {
        self.iter_pos().all(|pos| {
            self.neighbors(pos).into_iter().all(|(n, dir)| {
                self.has_wall(pos, dir) == self.has_wall(n, dir.opposite())
            })
        })
    }

    /// Cells reachable from `start` through open passages.
    pub fn reachable_from(&self, start: Dims) -> Array2D<bool> {
        let mut seen = Array2D::new(false, self.size, self.size);
        if !self.is_in_bounds(start) {
            return seen;
        }

        let mut stack = vec![start];
        seen[start] = true;
        while let Some(pos) = stack.pop() {
            for (next, _) in self.neighbors(pos) {
                if !seen[next] && self.is_open_between(pos, next) {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }

        seen
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from(Dims::ZERO).all(|&b| b)
    }

    /// Connected, consistent and free of cycles, so there is exactly one path between
    /// any two cells.
    pub fn is_perfect(&self) -> bool {
        self.is_consistent()
            && self.is_connected()
            && self.open_edge_count() == self.cell_count() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_bad_sizes() {
        assert_eq!(Grid::new(0), Err(GenError::InvalidSize(0)));
        assert_eq!(
            Grid::new(MAX_SIZE + 1),
            Err(GenError::InvalidSize(MAX_SIZE + 1))
        );
        assert!(Grid::new(1).is_ok());
    }

    #[test]
    fn new_grid_is_enclosed() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.cell_count(), 16);
        assert!(grid.cells.all(|c| c.is_enclosed()));
        assert_eq!(grid.open_edge_count(), 0);
        assert!(grid.is_consistent());
        assert!(!grid.is_connected());
    }

    #[test]
    fn neighbor_bounds() {
        let grid = Grid::new(3).unwrap();

        assert_eq!(grid.neighbor(Dims(0, 0), Direction::North), None);
        assert_eq!(grid.neighbor(Dims(0, 0), Direction::West), None);
        assert_eq!(grid.neighbor(Dims(0, 0), Direction::East), Some(Dims(1, 0)));
        assert_eq!(grid.neighbor(Dims(0, 0), Direction::South), Some(Dims(0, 1)));
        assert_eq!(grid.neighbor(Dims(2, 2), Direction::East), None);
        assert_eq!(grid.neighbor(Dims(2, 2), Direction::South), None);
        assert_eq!(grid.neighbor(Dims(3, 0), Direction::West), None);

        assert_eq!(grid.neighbors(Dims(1, 1)).len(), 4);
        assert_eq!(grid.neighbors(Dims(0, 1)).len(), 3);
        assert_eq!(grid.neighbors(Dims(2, 0)).len(), 2);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid = Grid::new(1).unwrap();
        assert!(grid.neighbors(Dims::ZERO).is_empty());
        assert!(grid.is_perfect());
    }

    #[test]
    fn carve_is_mutual() {
        let mut grid = Grid::new(2).unwrap();
        grid.carve(Dims(0, 0), Direction::East);

        assert_eq!(grid.has_wall(Dims(0, 0), Direction::East), Some(false));
        assert_eq!(grid.has_wall(Dims(1, 0), Direction::West), Some(false));
        assert!(grid.is_open_between(Dims(0, 0), Dims(1, 0)));
        assert!(grid.is_open_between(Dims(1, 0), Dims(0, 0)));
        assert!(grid.is_consistent());
        assert_eq!(grid.open_edge_count(), 1);
    }

    #[test]
    fn carve_at_border_is_ignored() {
        let mut grid = Grid::new(2).unwrap();
        grid.carve(Dims(0, 0), Direction::North);
        assert_eq!(grid.has_wall(Dims(0, 0), Direction::North), Some(true));
    }

    #[test]
    fn cycle_is_not_perfect() {
        let mut grid = Grid::new(2).unwrap();
        grid.carve(Dims(0, 0), Direction::East);
        grid.carve(Dims(1, 0), Direction::South);
        grid.carve(Dims(1, 1), Direction::West);
        assert!(grid.is_perfect());

        grid.carve(Dims(0, 1), Direction::North);
        assert!(grid.is_connected());
        assert!(!grid.is_perfect());
    }
}
