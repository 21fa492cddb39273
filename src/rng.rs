use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random numbers for food placement.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. Callers always pass a positive `bound`.
    fn below(&mut self, bound: i32) -> i32;
}

/// Seeded `StdRng`; the seed is kept so a game can be reproduced.
#[derive(Clone, Debug)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn below(&mut self, bound: i32) -> i32 {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of values in a cycle, reduced modulo the requested bound.
///
/// Food spawning draws the column first and then the row, so a script of
/// `[c0, r0, c1, r1, ..]` places successive food at `(c0, r0)`, `(c1, r1)`.
/// If every scripted cell is occupied the spawn loop never ends, so scripts
/// should include a free cell.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: Vec<i32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, bound: i32) -> i32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        value.rem_euclid(bound)
    }
}
