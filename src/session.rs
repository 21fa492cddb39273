use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::game_core::Direction;
use crate::game_state::{GameState, Snapshot, TickOutcome};
use crate::rng::{RandomSource, SessionRng};

/// Cloneable handle for driving one game from several threads.
/// Every call holds the lock for its whole duration.
pub struct SharedGame<R = SessionRng> {
    inner: Arc<Mutex<GameState<R>>>,
}

impl<R> Clone for SharedGame<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedGame<R> {
    pub fn new(state: GameState<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn tick(&self) -> TickOutcome {
        self.lock().tick()
    }

    pub fn request_direction(&self, dir: Direction) {
        self.lock().request_direction(dir);
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, GameState<R>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("game lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

/// Background thread that ticks a [`SharedGame`] at a fixed interval.
/// Stops on [`stop`](Self::stop) or when dropped.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<R>(game: SharedGame<R>, interval: Duration) -> Self
    where
        R: RandomSource + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let mut next_tick = Instant::now() + interval;
            while !stop_flag.load(Ordering::Relaxed) {
                let now = Instant::now();
                if now >= next_tick {
                    game.tick();
                    next_tick += interval;
                    // After a stall, resume the cadence instead of replaying missed ticks.
                    let after = Instant::now();
                    if after >= next_tick {
                        next_tick = after + interval;
                    }
                } else {
                    // Short naps so a stop request is noticed quickly.
                    thread::sleep((next_tick - now).min(Duration::from_millis(5)));
                }
            }
            debug!("ticker stopped");
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
