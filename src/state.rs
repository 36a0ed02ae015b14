use serde::Serialize;

use crate::engine::score::ScoreAccumulator;
use crate::error::ConfigError;
use crate::pile::{DiscardPile, MergePile, Pile};
use crate::queue::TileQueue;
use crate::rng::{RandomTiles, TileSource};
use crate::rules::Rules;
use crate::tile::Tile;

/// Where a pile index routes a drawn tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Stack(usize),
    Discard,
}

/// Owned copy of everything a renderer or bot needs after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub stacks: Vec<Vec<Tile>>,
    pub discards: u32,
    pub max_discards: u32,
    pub upcoming: Vec<Tile>,
    pub score: u64,
    pub moves: u64,
    pub stacks_cleared: u64,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameEngine<S = RandomTiles> {
    pub(crate) rules: Rules,
    pub(crate) stacks: Vec<MergePile>,
    pub(crate) discard: DiscardPile,
    pub(crate) queue: TileQueue<S>,
    pub(crate) score: ScoreAccumulator,
    pub(crate) moves: u64,
    pub(crate) stacks_cleared: u64,
}

impl GameEngine<RandomTiles> {
    /// Fresh game drawing tiles from a PCG stream seeded with `seed`.
    pub fn with_seed(rules: Rules, seed: u64) -> Result<Self, ConfigError> {
        Self::new(rules, RandomTiles::seeded(seed))
    }
}

impl<S: TileSource> GameEngine<S> {
    /// Fresh game: empty stacks, empty discard pile, queue filled from `source`.
    pub fn new(rules: Rules, source: S) -> Result<Self, ConfigError> {
        rules.validate()?;
        let terminal = Tile::new(rules.terminal);
        Ok(Self {
            stacks: (0..rules.stacks)
                .map(|_| MergePile::new(rules.stack_capacity, terminal))
                .collect(),
            discard: DiscardPile::new(rules.max_discards),
            queue: TileQueue::new(source, rules.lookahead),
            score: ScoreAccumulator::new(),
            moves: 0,
            stacks_cleared: 0,
            rules,
        })
    }

    /// Start from an arbitrary mid-game position.
    ///
    /// `stacks` lists each stack bottom -> top and must have exactly
    /// `rules.stacks` entries. Stacks are taken as given (no merge pass).
    pub fn from_position(
        rules: Rules,
        source: S,
        stacks: &[&[Tile]],
        discards: u32,
    ) -> Result<Self, ConfigError> {
        let mut engine = Self::new(rules, source)?;
        if stacks.len() != rules.stacks {
            return Err(ConfigError::Invalid(format!(
                "expected {} stacks, got {}",
                rules.stacks,
                stacks.len()
            )));
        }
        if discards > rules.max_discards {
            return Err(ConfigError::Invalid(format!(
                "{discards} discards exceeds max_discards {}",
                rules.max_discards
            )));
        }
        let terminal = Tile::new(rules.terminal);
        for (i, tiles) in stacks.iter().enumerate() {
            if tiles.len() > rules.stack_capacity {
                return Err(ConfigError::Invalid(format!(
                    "stack {i} holds {} tiles, capacity is {}",
                    tiles.len(),
                    rules.stack_capacity
                )));
            }
            engine.stacks[i] = MergePile::with_tiles(rules.stack_capacity, terminal, tiles);
        }
        engine.discard = DiscardPile::with_count(rules.max_discards, discards);
        Ok(engine)
    }

    /// Map a caller-supplied index to its pile, if any.
    #[inline]
    pub fn target(&self, index: usize) -> Option<Target> {
        if index < self.stacks.len() {
            Some(Target::Stack(index))
        } else if index == self.rules.discard_index() {
            Some(Target::Discard)
        } else {
            None
        }
    }

    /// True once every stack and the discard pile are full.
    ///
    /// A full stack whose top matches the next tile still counts as full here,
    /// even though `validate_move` would accept it.
    pub fn is_game_over(&self) -> bool {
        self.discard.is_full() && self.stacks.iter().all(Pile::is_full)
    }

    /// Indices that `validate_move` currently accepts, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.rules.pile_count())
            .filter(|&i| self.validate_move(i).is_ok())
            .collect()
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn discard_index(&self) -> usize {
        self.rules.discard_index()
    }

    #[inline]
    pub fn stacks(&self) -> &[MergePile] {
        &self.stacks
    }

    #[inline]
    pub fn stack(&self, index: usize) -> Option<&MergePile> {
        self.stacks.get(index)
    }

    #[inline]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    #[inline]
    pub fn discard_count(&self) -> u32 {
        self.discard.count()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score.total()
    }

    /// Next `n` tiles, front first. Never more than the lookahead.
    pub fn upcoming(&self, n: usize) -> Vec<Tile> {
        self.queue.upcoming().take(n).collect()
    }

    #[inline]
    pub fn peek(&self, offset: usize) -> Option<Tile> {
        self.queue.peek(offset)
    }

    #[inline]
    pub fn moves_played(&self) -> u64 {
        self.moves
    }

    #[inline]
    pub fn stacks_cleared(&self) -> u64 {
        self.stacks_cleared
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stacks: self.stacks.iter().map(|s| s.tiles().to_vec()).collect(),
            discards: self.discard.count(),
            max_discards: self.discard.capacity(),
            upcoming: self.queue.upcoming().collect(),
            score: self.score.total(),
            moves: self.moves,
            stacks_cleared: self.stacks_cleared,
            game_over: self.is_game_over(),
        }
    }
}
