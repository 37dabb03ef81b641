pub mod backtracking;
pub mod prim;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::GenError,
    grid::Grid,
    random::{self, RandomSource},
};
pub use backtracking::RecursiveBacktracker;
pub use prim::RndPrims;

/// Carves a perfect maze into a fresh grid.
pub trait MazeGenerator: fmt::Debug {
    fn generate(&self, size: usize, rng: &mut dyn RandomSource) -> Result<Grid, GenError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Prim,
    Backtracking,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Backtracking];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Backtracking => "backtracking",
        }
    }

    pub fn generator(self) -> Box<dyn MazeGenerator> {
        match self {
            Algorithm::Prim => Box::new(RndPrims),
            Algorithm::Backtracking => Box::new(RecursiveBacktracker::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}', expected one of: prim, backtracking")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Finished maze together with everything needed to regenerate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pub seed: u64,
}

impl Maze {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Main entry point: picks the algorithm and owns the seeded random generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    algorithm: Algorithm,
    seed: Option<u64>,
}

impl Generator {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn generate(&self, size: usize) -> Result<Maze, GenError> {
        let (mut rng, seed) = random::seeded(self.seed);
        log::debug!(
            "Generating {size}x{size} maze with {} (seed {seed})",
            self.algorithm
        );

        let grid = self.algorithm.generator().generate(size, &mut rng)?;

        Ok(Maze {
            grid,
            algorithm: self.algorithm,
            seed,
        })
    }
}
