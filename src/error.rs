use std::io;

use crate::tile::Tile;

/// Reason code carried by every rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    UnknownPile,
    DiscardFull,
    StackFullNoMerge,
}

/// A move the engine refused. The engine state is untouched when this is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("unknown pile {index} (valid indices are 0..{piles})")]
    UnknownPile { index: usize, piles: usize },
    #[error("discard pile is full ({max} discards)")]
    DiscardFull { max: u32 },
    #[error("stack {pile} is full and its top tile {top} does not match next tile {next}")]
    StackFullNoMerge { pile: usize, top: Tile, next: Tile },
}

impl InvalidMove {
    #[inline]
    pub fn reason(&self) -> MoveRejection {
        match self {
            InvalidMove::UnknownPile { .. } => MoveRejection::UnknownPile,
            InvalidMove::DiscardFull { .. } => MoveRejection::DiscardFull,
            InvalidMove::StackFullNoMerge { .. } => MoveRejection::StackFullNoMerge,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}
