//! Square-grid maze generation: randomized Prim's and recursive backtracking over cells
//! with per-side wall flags, plus the wall segments a renderer needs.

pub mod algorithms;
pub mod array;
pub mod difficulty;
pub mod dims;
pub mod error;
pub mod game;
pub mod grid;
pub mod random;
pub mod walls;

pub use algorithms::{Algorithm, Generator, Maze, MazeGenerator};
pub use dims::Dims;
pub use error::GenError;
pub use grid::{Cell, Direction, Grid};
