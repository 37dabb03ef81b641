pub mod board;
pub use board::{Grid, MAX_SIZE};
pub mod cell;
pub use cell::{Cell, Direction};
