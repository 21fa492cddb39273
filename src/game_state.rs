use std::collections::VecDeque;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::game_core::{Cell, Collision, Direction, GridSize, Phase, START_LENGTH};
use crate::rng::{RandomSource, SessionRng};

/// What a single `tick()` did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// The game was already over; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(Collision),
}

/// Owned copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub body: Vec<Cell>,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
    pub collision: Option<Collision>,
}

/// A single snake game.
///
/// Mutated only through [`tick`](Self::tick), [`request_direction`](Self::request_direction)
/// and [`reset`](Self::reset).
///
/// Food placement resamples until it hits a free cell with no attempt limit.
/// If the body ever covers the whole grid, spawning never returns.
#[derive(Clone, Debug)]
pub struct GameState<R = SessionRng> {
    grid: GridSize,
    body: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    food: Cell,
    score: u32,
    phase: Phase,
    collision: Option<Collision>,
    ticks: u64,
    rng: R,
}

impl<R: RandomSource> GameState<R> {
    /// A fresh game in the start position.
    pub fn new(grid: GridSize, rng: R) -> Self {
        let mut state = Self {
            grid,
            body: VecDeque::with_capacity(START_LENGTH),
            direction: Direction::Right,
            pending: None,
            food: Cell::default(),
            score: 0,
            phase: Phase::Running,
            collision: None,
            ticks: 0,
            rng,
        };
        state.reset();
        state
    }

    /// A running game with an explicit body (head first), heading and food.
    /// `food: None` spawns food as usual.
    pub fn with_layout(
        grid: GridSize,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
        food: Option<Cell>,
        rng: R,
    ) -> Result<Self, LayoutError> {
        let body: VecDeque<Cell> = body.into_iter().collect();
        if body.is_empty() {
            return Err(LayoutError::EmptyBody);
        }
        for (index, &cell) in body.iter().enumerate() {
            if !grid.contains(cell) {
                return Err(LayoutError::SegmentOutOfBounds { index, cell });
            }
            if body.iter().take(index).any(|&earlier| earlier == cell) {
                return Err(LayoutError::DuplicateSegment { index, cell });
            }
            if index > 0 && !body[index - 1].is_adjacent(cell) {
                return Err(LayoutError::Disconnected { index });
            }
        }
        if let Some(food) = food {
            if !grid.contains(food) {
                return Err(LayoutError::FoodOutOfBounds(food));
            }
            if body.contains(&food) {
                return Err(LayoutError::FoodOnBody(food));
            }
        }

        let mut state = Self {
            grid,
            body,
            direction,
            pending: None,
            food: food.unwrap_or_default(),
            score: 0,
            phase: Phase::Running,
            collision: None,
            ticks: 0,
            rng,
        };
        if food.is_none() {
            state.spawn_food();
        }
        Ok(state)
    }

    /// Back to the start position. Valid in any phase.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(self.grid.start_body());
        self.direction = Direction::Right;
        self.pending = None;
        self.score = 0;
        self.phase = Phase::Running;
        self.collision = None;
        self.ticks = 0;
        self.spawn_food();
        info!(
            "new game on {}x{} grid, food at ({}, {})",
            self.grid.columns(),
            self.grid.rows(),
            self.food.col,
            self.food.row
        );
    }

    /// Buffers `dir` for the next tick unless it reverses the committed heading.
    /// A later legal request replaces an earlier one. Inert once the game is over.
    pub fn request_direction(&mut self, dir: Direction) {
        if self.phase == Phase::Over {
            return;
        }
        if dir.is_opposite(self.direction) {
            debug!("dropped reversal {:?} while heading {:?}", dir, self.direction);
            return;
        }
        self.pending = Some(dir);
    }

    /// Advances the game by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::Over {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let new_head = self.head().step(self.direction);
        if let Some(kind) = self.collision_at(new_head) {
            self.phase = Phase::Over;
            self.collision = Some(kind);
            info!(
                "game over at tick {}: {:?} at ({}, {}), score {}",
                self.ticks, kind, new_head.col, new_head.row, self.score
            );
            return TickOutcome::Collided(kind);
        }

        self.body.push_front(new_head);
        if new_head == self.food {
            self.score += 1;
            self.spawn_food();
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    // The tail still counts as occupied even though it moves away this tick.
    fn collision_at(&self, cell: Cell) -> Option<Collision> {
        if !self.grid.contains(cell) {
            Some(Collision::Wall)
        } else if self.body.contains(&cell) {
            Some(Collision::SelfCollision)
        } else {
            None
        }
    }

    fn spawn_food(&mut self) {
        if self.body.len() >= self.grid.cell_count() {
            warn!("body fills the grid, food spawn cannot finish");
        }
        loop {
            let cell = Cell::new(
                self.rng.below(self.grid.columns()),
                self.rng.below(self.grid.rows()),
            );
            if !self.body.contains(&cell) {
                self.food = cell;
                debug!("food spawned at ({}, {})", cell.col, cell.row);
                return;
            }
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<R> GameState<R> {
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Body cells, head first.
    pub fn body(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.ticks,
            body: self.body(),
            direction: self.direction,
            food: self.food,
            score: self.score,
            phase: self.phase,
            collision: self.collision,
        }
    }
}
