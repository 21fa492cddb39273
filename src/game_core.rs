use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Smallest grid that fits the 3-segment start body plus one food cell.
pub const MIN_COLUMNS: i32 = 4;
pub const MIN_ROWS: i32 = 1;
pub const START_LENGTH: usize = 3;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell in `dir`. No wrapping: the result may lie off the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dc, dr) = dir.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.col - other.col).abs() + (self.row - other.row).abs() == 1
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum Phase {
    #[default]
    Running,
    Over,
}

/// What ended the game.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Validated grid dimensions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GridSize {
    columns: i32,
    rows: i32,
}

impl GridSize {
    pub fn new(columns: i32, rows: i32) -> Result<Self, ConfigError> {
        if columns < MIN_COLUMNS || rows < MIN_ROWS {
            return Err(ConfigError::GridTooSmall {
                columns,
                rows,
                min_columns: MIN_COLUMNS,
                min_rows: MIN_ROWS,
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.columns && cell.row >= 0 && cell.row < self.rows
    }

    /// Start body: three horizontal segments around the centre, head rightmost.
    pub fn start_body(&self) -> [Cell; START_LENGTH] {
        let (col, row) = (self.columns / 2, self.rows / 2);
        [
            Cell::new(col, row),
            Cell::new(col - 1, row),
            Cell::new(col - 2, row),
        ]
    }
}
