use std::collections::VecDeque;

use crate::rng::TileSource;
use crate::tile::Tile;

/// Fixed-length lookahead of upcoming tiles. Every pull refills the back.
#[derive(Debug, Clone)]
pub struct TileQueue<S> {
    buffer: VecDeque<Tile>,
    source: S,
}

impl<S: TileSource> TileQueue<S> {
    /// Fill a queue of `lookahead` tiles from `source`. `lookahead` must be >= 1.
    pub fn new(mut source: S, lookahead: usize) -> Self {
        debug_assert!(lookahead >= 1);
        let buffer = (0..lookahead).map(|_| source.generate()).collect();
        Self { buffer, source }
    }

    /// Remove the front tile and append a fresh one.
    pub fn pull(&mut self) -> Tile {
        let fresh = self.source.generate();
        self.buffer.push_back(fresh);
        // Non-empty: length was >= 1 before the push.
        self.buffer.pop_front().unwrap_or(fresh)
    }

    /// Tile `offset` places from the front (0 = next pull).
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<Tile> {
        self.buffer.get(offset).copied()
    }

    /// The tile the next pull returns.
    #[inline]
    pub fn next_tile(&self) -> Tile {
        self.buffer[0]
    }

    #[inline]
    pub fn upcoming(&self) -> impl Iterator<Item = Tile> + '_ {
        self.buffer.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
