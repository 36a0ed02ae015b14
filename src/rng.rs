use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::tile::{Tile, MAX_DRAW_EXPONENT, MIN_DRAW_EXPONENT};

/// Source of freshly generated tiles. The only place randomness enters the engine.
pub trait TileSource {
    fn generate(&mut self) -> Tile;
}

/// Uniform draw over magnitudes 2..=64 (exponents 1..=6, probability 1/6 each).
#[derive(Debug, Clone)]
pub struct RandomTiles<R: Rng = Pcg64> {
    rng: R,
}

impl RandomTiles<Pcg64> {
    /// PCG stream seeded with `seed`; equal seeds replay equal draws.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomTiles<R> {
    #[inline]
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RandomTiles<R> {
    #[inline]
    fn generate(&mut self) -> Tile {
        Tile::from_exponent(self.rng.gen_range(MIN_DRAW_EXPONENT..=MAX_DRAW_EXPONENT))
    }
}

/// Replays a fixed tile sequence, wrapping around at the end.
/// Used for scripted games and tests that need exact draws.
#[derive(Debug, Clone)]
pub struct ScriptedTiles {
    tiles: Vec<Tile>,
    pos: usize,
}

impl ScriptedTiles {
    /// Panics if `tiles` is empty.
    pub fn new(tiles: Vec<Tile>) -> Self {
        assert!(!tiles.is_empty(), "scripted tile sequence must not be empty");
        Self { tiles, pos: 0 }
    }

    /// # Panics
    ///
    /// If `magnitudes` is empty or holds a value that is not a power of two >= 2.
    pub fn from_magnitudes(magnitudes: &[u32]) -> Self {
        Self::new(magnitudes.iter().copied().map(Tile::new).collect())
    }
}

impl TileSource for ScriptedTiles {
    #[inline]
    fn generate(&mut self) -> Tile {
        let t = self.tiles[self.pos];
        self.pos = (self.pos + 1) % self.tiles.len();
        t
    }
}

impl<S: TileSource + ?Sized> TileSource for Box<S> {
    #[inline]
    fn generate(&mut self) -> Tile {
        (**self).generate()
    }
}
