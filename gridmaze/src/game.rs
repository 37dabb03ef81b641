use std::collections::VecDeque;

use crate::{algorithms::Maze, difficulty::Difficulty, dims::Dims};

/// Discrete movement request, `Up` moves toward smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
}

impl Input {
    pub fn delta(self) -> (f32, f32) {
        match self {
            Input::Up => (0.0, -1.0),
            Input::Down => (0.0, 1.0),
            Input::Left => (-1.0, 0.0),
            Input::Right => (1.0, 0.0),
        }
    }
}

/// Simulation context of one level: the maze, the player and the pending inputs.
///
/// Inputs are queued as they arrive and applied together on [`GameState::tick`]. The
/// player is kept inside the grid bounds, walls are not collided with.
#[derive(Debug, Clone)]
pub struct GameState {
    maze: Maze,
    difficulty: Difficulty,
    player: (f32, f32),
    inputs: VecDeque<Input>,
    moves: usize,
    ticks: u64,
}

impl GameState {
    pub fn new(maze: Maze) -> Self {
        let difficulty = Difficulty::from_size(maze.size());
        let player = Self::start_pos(&maze);

        GameState {
            maze,
            difficulty,
            player,
            inputs: VecDeque::new(),
            moves: 0,
            ticks: 0,
        }
    }

    fn start_pos(maze: &Maze) -> (f32, f32) {
        let half = (maze.size() as f32 / 2.0).min((maze.size() - 1) as f32);
        (half, half)
    }

    /// Swaps in the next level, resetting the player and dropping queued inputs.
    pub fn replace_maze(&mut self, maze: Maze) {
        log::info!("New {}x{} maze, seed {}", maze.size(), maze.size(), maze.seed);
        *self = Self::new(maze);
    }

    pub fn push_input(&mut self, input: Input) {
        self.inputs.push_back(input);
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Applies every queued input in arrival order. Returns how many were applied.
    pub fn tick(&mut self) -> usize {
        let speed = self.difficulty.move_speed();
        let max = (self.maze.size() - 1) as f32;
        let applied = self.inputs.len();

        while let Some(input) = self.inputs.pop_front() {
            let (dx, dy) = input.delta();
            let (x, y) = self.player;
            self.player = (
                (x + dx * speed).clamp(0.0, max),
                (y + dy * speed).clamp(0.0, max),
            );
        }

        self.moves += applied;
        self.ticks += 1;
        applied
    }

    pub fn get_maze(&self) -> &Maze {
        &self.maze
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_pos(&self) -> (f32, f32) {
        self.player
    }

    /// Cell the player currently stands in.
    pub fn player_cell(&self) -> Dims {
        let (x, y) = self.player;
        Dims(x.round() as i32, y.round() as i32)
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
