use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// `(d + 2) mod 4`, north pairs with south and east with west.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    pub fn offset(self) -> Dims {
        match self {
            Direction::North => Dims(0, -1),
            Direction::East => Dims(1, 0),
            Direction::South => Dims(0, 1),
            Direction::West => Dims(-1, 0),
        }
    }

    /// Direction leading from `from` to the adjacent `to`, `None` if they are not adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<Self> {
        match to - from {
            Dims(0, -1) => Some(Direction::North),
            Dims(1, 0) => Some(Direction::East),
            Dims(0, 1) => Some(Direction::South),
            Dims(-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

/// Wall flags of a single cell, indexed by [`Direction::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    /// Fully enclosed cell.
    pub fn new() -> Self {
        Cell { walls: [true; 4] }
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        !self.has_wall(dir)
    }

    pub fn is_enclosed(&self) -> bool {
        self.walls.iter().all(|&w| w)
    }

    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&dir| self.is_open(dir))
    }

    pub(crate) fn remove_wall(&mut self, dir: Direction) {
        self.walls[dir.index()] = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
