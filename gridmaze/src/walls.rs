//! Turns a finished [`Grid`] into wall segments for a renderer.
//!
//! Cell `(x, y)` is centered at `(x, y)`, its walls lie half a unit away from the center.

use serde::{Deserialize, Serialize};

use crate::{
    dims::Dims,
    grid::{Direction, Grid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Runs along the x axis (north and south walls).
    Horizontal,
    /// Runs along the y axis (east and west walls).
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitMode {
    /// One segment per shared edge.
    #[default]
    Deduplicated,
    /// One segment per present flag, shared edges come out twice.
    PerCell,
}

/// Unit-length wall segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Cell that emitted the segment.
    pub cell: Dims,
    /// Side of `cell` the segment lies on.
    pub side: Direction,
    pub center: (f32, f32),
    pub orientation: Orientation,
}

impl WallSegment {
    pub fn new(cell: Dims, side: Direction) -> Self {
        let (x, y) = (cell.0 as f32, cell.1 as f32);
        let center = match side {
            Direction::North => (x, y - 0.5),
            Direction::South => (x, y + 0.5),
            Direction::West => (x - 0.5, y),
            Direction::East => (x + 0.5, y),
        };
        let orientation = if side.is_horizontal() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };

        WallSegment {
            cell,
            side,
            center,
            orientation,
        }
    }
}

/// `true` if either side of the edge `pos`/`dir` still has the wall.
fn edge_closed(grid: &Grid, pos: Dims, dir: Direction) -> bool {
    let own = grid.has_wall(pos, dir).unwrap_or(false);
    let other = grid
        .neighbor(pos, dir)
        .and_then(|n| grid.has_wall(n, dir.opposite()))
        .unwrap_or(false);

    own || other
}

/// Sides whose edge is owned by `pos`: north and west always, south on the last row and
/// east on the last column.
fn owned_sides(grid: &Grid, pos: Dims) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL.into_iter().filter(move |&dir| match dir {
        Direction::North | Direction::West => true,
        Direction::South | Direction::East => grid.neighbor(pos, dir).is_none(),
    })
}

pub fn emit(grid: &Grid, mode: EmitMode) -> Vec<WallSegment> {
    let segments: Vec<_> = match mode {
        EmitMode::PerCell => grid
            .iter_pos()
            .flat_map(|pos| {
                Direction::ALL
                    .into_iter()
                    .filter(move |&dir| grid.has_wall(pos, dir) == Some(true))
                    .map(move |dir| WallSegment::new(pos, dir))
            })
            .collect(),
        EmitMode::Deduplicated => grid
            .iter_pos()
            .flat_map(|pos| {
                owned_sides(grid, pos)
                    .filter(move |&dir| edge_closed(grid, pos, dir))
                    .map(move |dir| WallSegment::new(pos, dir))
            })
            .collect(),
    };

    log::debug!("Emitted {} wall segments ({:?})", segments.len(), mode);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Algorithm, Generator};

    fn same_point(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    fn covers(segments: &[WallSegment], pos: Dims, dir: Direction) -> bool {
        let expected = WallSegment::new(pos, dir);
        segments
            .iter()
            .any(|s| same_point(s.center, expected.center) && s.orientation == expected.orientation)
    }

    #[test]
    fn segment_positions() {
        let pos = Dims(2, 5);
        let n = WallSegment::new(pos, Direction::North);
        assert_eq!(n.center, (2.0, 4.5));
        assert_eq!(n.orientation, Orientation::Horizontal);

        let s = WallSegment::new(pos, Direction::South);
        assert_eq!(s.center, (2.0, 5.5));
        assert_eq!(s.orientation, Orientation::Horizontal);

        let w = WallSegment::new(pos, Direction::West);
        assert_eq!(w.center, (1.5, 5.0));
        assert_eq!(w.orientation, Orientation::Vertical);

        let e = WallSegment::new(pos, Direction::East);
        assert_eq!(e.center, (2.5, 5.0));
        assert_eq!(e.orientation, Orientation::Vertical);
    }

    #[test]
    fn shared_edges_meet() {
        let a = WallSegment::new(Dims(0, 0), Direction::East);
        let b = WallSegment::new(Dims(1, 0), Direction::West);
        assert!(same_point(a.center, b.center));
    }

    #[test]
    fn enclosed_grid_counts() {
        let grid = Grid::new(3).unwrap();
        // 2 * n * (n + 1) edges in an n x n grid
        assert_eq!(emit(&grid, EmitMode::Deduplicated).len(), 24);
        assert_eq!(emit(&grid, EmitMode::PerCell).len(), 36);
    }

    #[test]
    fn single_cell_has_four_walls() {
        let grid = Grid::new(1).unwrap();
        assert_eq!(emit(&grid, EmitMode::Deduplicated).len(), 4);
        assert_eq!(emit(&grid, EmitMode::PerCell).len(), 4);
    }

    #[test]
    fn every_wall_is_covered_and_no_passage_is_blocked() {
        for algo in Algorithm::ALL {
            let maze = Generator::new(algo).with_seed(Some(77)).generate(8).unwrap();
            let grid = &maze.grid;

            for mode in [EmitMode::Deduplicated, EmitMode::PerCell] {
                let segments = emit(grid, mode);

                for pos in grid.iter_pos() {
                    for dir in Direction::ALL {
                        if grid.has_wall(pos, dir) == Some(true) {
                            assert!(covers(&segments, pos, dir), "{algo} {mode:?} {pos:?} {dir:?}");
                        }
                    }
                }

                for segment in &segments {
                    if let Some(next) = grid.neighbor(segment.cell, segment.side) {
                        assert!(!grid.is_open_between(segment.cell, next));
                    }
                }
            }
        }
    }

    #[test]
    fn dedup_emits_each_closed_edge_once() {
        let maze = Generator::new(Algorithm::Prim)
            .with_seed(Some(3))
            .generate(10)
            .unwrap();
        let segments = emit(&maze.grid, EmitMode::Deduplicated);

        // all edges minus the open ones
        let total_edges = 2 * 10 * 11;
        assert_eq!(segments.len(), total_edges - maze.grid.open_edge_count());

        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                assert!(
                    !(same_point(a.center, b.center) && a.orientation == b.orientation),
                    "{a:?} duplicates {b:?}"
                );
            }
        }
    }
}
