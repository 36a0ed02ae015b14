use log::{debug, info};
use serde::Serialize;

use crate::error::InvalidMove;
use crate::pile::Pile;
use crate::rng::TileSource;
use crate::state::{GameEngine, Target};
use crate::tile::Tile;

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub pile: usize,
    pub tile: Tile,
    pub discarded: bool,
    pub merges: u32,
    pub score_delta: u64,
    /// The target stack reached the terminal magnitude and was emptied,
    /// which also emptied the discard pile.
    pub cleared: bool,
}

impl<S: TileSource> GameEngine<S> {
    /// Check whether the next tile may go on pile `index`. Never mutates.
    ///
    /// A full stack is still legal when its top equals the next tile, since
    /// placing it merges at once and frees a slot.
    pub fn validate_move(&self, index: usize) -> Result<Target, InvalidMove> {
        let target = self.target(index).ok_or(InvalidMove::UnknownPile {
            index,
            piles: self.rules.pile_count(),
        })?;
        match target {
            Target::Discard => {
                if self.discard.is_full() {
                    return Err(InvalidMove::DiscardFull {
                        max: self.discard.capacity(),
                    });
                }
            }
            Target::Stack(i) => {
                let stack = &self.stacks[i];
                let next = self.queue.next_tile();
                if stack.is_full() && !stack.accepts_merge(next) {
                    return Err(InvalidMove::StackFullNoMerge {
                        pile: i,
                        // Full implies non-empty (capacity >= 2).
                        top: stack.top().unwrap_or(next),
                        next,
                    });
                }
            }
        }
        Ok(target)
    }

    /// Validate, then draw the next tile and route it to pile `index`.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, InvalidMove> {
        let target = self.validate_move(index)?;
        let tile = self.queue.pull();
        self.moves += 1;

        let outcome = match target {
            Target::Discard => {
                self.discard.add_discard();
                debug!(
                    "move {}: discard {tile} ({}/{})",
                    self.moves,
                    self.discard.count(),
                    self.discard.capacity()
                );
                MoveOutcome {
                    pile: index,
                    tile,
                    discarded: true,
                    merges: 0,
                    score_delta: 0,
                    cleared: false,
                }
            }
            Target::Stack(i) => {
                let placed = self.stacks[i].add_tile(tile);
                debug!(
                    "move {}: {tile} -> stack {i}, {} merges, +{}",
                    self.moves, placed.merges, placed.score
                );
                if placed.cleared {
                    self.discard.clear();
                    self.stacks_cleared += 1;
                    info!("stack {i} reached {} and cleared; discards reset", self.rules.terminal);
                }
                MoveOutcome {
                    pile: index,
                    tile,
                    discarded: false,
                    merges: placed.merges,
                    score_delta: placed.score,
                    cleared: placed.cleared,
                }
            }
        };

        self.score.add(outcome.score_delta);
        if self.is_game_over() {
            info!("game over after {} moves, score {}", self.moves, self.score.total());
        }
        Ok(outcome)
    }
}
