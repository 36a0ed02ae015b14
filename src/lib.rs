#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod config;
pub mod error;
pub mod pile;
pub mod queue;
pub mod rng;
pub mod rules;
pub mod state;
pub mod tile;

pub mod engine {
    pub mod apply;
    pub mod score;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::config::GameConfig;
pub use crate::engine::apply::MoveOutcome;
pub use crate::engine::score::ScoreAccumulator;
pub use crate::error::{ConfigError, InvalidMove, MoveRejection};
pub use crate::pile::{DiscardPile, MergeOutcome, MergePile, Pile};
pub use crate::queue::TileQueue;
pub use crate::rng::{RandomTiles, ScriptedTiles, TileSource};
pub use crate::rules::Rules;
pub use crate::state::{GameEngine, Snapshot, Target};
pub use crate::tile::Tile;
