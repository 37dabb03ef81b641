use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("invalid maze size {0}, expected 1..={}", crate::grid::MAX_SIZE)]
    InvalidSize(usize),
    #[error("start cell {0:?} lies outside the grid")]
    StartOutOfBounds(Dims),
}
