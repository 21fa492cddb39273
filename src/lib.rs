//! Grid snake: the game state, its per-tick rules, and the pieces a host
//! needs to drive it (config, random source, shared handle, ticker).

pub mod config;
pub mod error;
pub mod game_core;
pub mod game_state;
pub mod rng;
pub mod session;

pub use config::GameConfig;
pub use error::{ConfigError, LayoutError};
pub use game_core::{Cell, Collision, Direction, GridSize, Phase};
pub use game_state::{GameState, Snapshot, TickOutcome};
pub use rng::{RandomSource, ScriptedRng, SessionRng};
pub use session::{SharedGame, Ticker};
