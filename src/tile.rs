use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest exponent the generator draws (magnitude 2).
pub const MIN_DRAW_EXPONENT: u32 = 1;
/// Largest exponent the generator draws (magnitude 64).
pub const MAX_DRAW_EXPONENT: u32 = 6;

/// A power-of-two tile. Equality and ordering are by magnitude only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(u32);

impl Tile {
    /// # Panics
    ///
    /// If `magnitude` is not a power of two >= 2. Use `try_new` for
    /// untrusted input.
    #[inline]
    pub const fn new(magnitude: u32) -> Self {
        assert!(
            magnitude >= 2 && magnitude.is_power_of_two(),
            "tile magnitude must be a power of two >= 2"
        );
        Self(magnitude)
    }

    #[inline]
    pub const fn try_new(magnitude: u32) -> Option<Self> {
        if magnitude >= 2 && magnitude.is_power_of_two() {
            Some(Self(magnitude))
        } else {
            None
        }
    }

    /// Tile of magnitude `2^exponent`.
    #[inline]
    pub const fn from_exponent(exponent: u32) -> Self {
        Self::new(1 << exponent)
    }

    #[inline]
    pub const fn magnitude(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn exponent(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// The tile produced by merging two copies of `self`, or `None` if the
    /// doubled magnitude does not fit in a `u32`.
    #[inline]
    pub const fn merged(self) -> Option<Self> {
        match self.0.checked_mul(2) {
            Some(m) => Some(Self(m)),
            None => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
