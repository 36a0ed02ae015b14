use log::trace;

use crate::tile::Tile;

/// Capability shared by every pile kind.
pub trait Pile {
    fn is_full(&self) -> bool;
}

/// Result of placing one or more tiles on a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// Score produced by the merge cascade.
    pub score: u64,
    /// Number of pairwise merges in the cascade.
    pub merges: u32,
    /// True if the stack hit the terminal magnitude and was emptied.
    pub cleared: bool,
}

/// Bounded stack of tiles (bottom -> top) that collapses equal tops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePile {
    tiles: Vec<Tile>,
    capacity: usize,
    terminal: Tile,
}

impl MergePile {
    #[inline]
    pub fn new(capacity: usize, terminal: Tile) -> Self {
        Self {
            // One spare slot for the transient tile of a merge-freeing move.
            tiles: Vec::with_capacity(capacity + 1),
            capacity,
            terminal,
        }
    }

    /// Build a stack holding `tiles` as-is. No merge or clear pass is run.
    pub fn with_tiles(capacity: usize, terminal: Tile, tiles: &[Tile]) -> Self {
        debug_assert!(tiles.len() <= capacity);
        let mut p = Self::new(capacity, terminal);
        p.tiles.extend_from_slice(tiles);
        p
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn top(&self) -> Option<Tile> {
        self.tiles.last().copied()
    }

    #[inline]
    pub fn bottom(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn terminal(&self) -> Tile {
        self.terminal
    }

    #[inline]
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Sum of all tile magnitudes.
    #[inline]
    pub fn worth(&self) -> u64 {
        self.tiles.iter().map(|t| u64::from(t.magnitude())).sum()
    }

    /// Would `next` merge straight away if placed here?
    #[inline]
    pub fn accepts_merge(&self, next: Tile) -> bool {
        self.top() == Some(next) && next.merged().is_some()
    }

    /// Push `tile` on top, run the merge cascade, then the clear check.
    ///
    /// Capacity is not checked here; callers that must respect it go through
    /// the engine's move validation.
    pub fn add_tile(&mut self, tile: Tile) -> MergeOutcome {
        self.tiles.push(tile);
        self.settle()
    }

    /// Push a batch of tiles, then settle once.
    ///
    /// If the whole batch would overflow capacity only its first tile is
    /// pushed. An empty batch pushes nothing but still settles.
    pub fn add_tiles(&mut self, batch: &[Tile]) -> MergeOutcome {
        if self.tiles.len() + batch.len() <= self.capacity {
            self.tiles.extend_from_slice(batch);
        } else if let Some(&first) = batch.first() {
            self.tiles.push(first);
        }
        self.settle()
    }

    fn settle(&mut self) -> MergeOutcome {
        let (score, merges) = self.cascade();
        let cleared = self.bottom() == Some(self.terminal);
        if cleared {
            self.tiles.clear();
        }
        MergeOutcome {
            score,
            merges,
            cleared,
        }
    }

    /// Collapse equal top pairs until the top two differ.
    /// Each merge in one cascade is worth `sum * multiplier`, multiplier 1, 2, 3, ...
    /// A pair whose sum would exceed `u32::MAX` is left in place.
    fn cascade(&mut self) -> (u64, u32) {
        let mut score: u64 = 0;
        let mut multiplier: u64 = 1;
        let mut merges: u32 = 0;
        while let [.., a, b] = self.tiles[..] {
            if a != b {
                break;
            }
            let Some(merged) = a.merged() else { break };
            self.tiles.truncate(self.tiles.len() - 2);
            self.tiles.push(merged);
            score += u64::from(merged.magnitude()) * multiplier;
            trace!("merge {a}+{b} -> {merged} (x{multiplier})");
            multiplier += 1;
            merges += 1;
        }
        (score, merges)
    }
}

impl Pile for MergePile {
    #[inline]
    fn is_full(&self) -> bool {
        self.tiles.len() == self.capacity
    }
}

/// Counter of discarded draws. Holds no tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscardPile {
    count: u32,
    max: u32,
}

impl DiscardPile {
    #[inline]
    pub const fn new(max: u32) -> Self {
        Self { count: 0, max }
    }

    /// Build a discard pile already holding `count` discards.
    #[inline]
    pub fn with_count(max: u32, count: u32) -> Self {
        debug_assert!(count <= max);
        Self { count, max }
    }

    /// Callers must check `is_full` first.
    #[inline]
    pub fn add_discard(&mut self) {
        debug_assert!(self.count < self.max);
        self.count += 1;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.max
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.max - self.count
    }
}

impl Pile for DiscardPile {
    #[inline]
    fn is_full(&self) -> bool {
        self.count == self.max
    }
}
