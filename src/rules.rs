use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Number of merge stacks. The discard pile takes the index right after them.
    pub stacks: usize,
    pub stack_capacity: usize,
    pub max_discards: u32,
    /// Number of upcoming tiles visible in the queue.
    pub lookahead: usize,
    /// Magnitude that clears a stack when it reaches the bottom slot.
    pub terminal: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self::reference()
    }
}

impl Rules {
    #[inline]
    pub const fn new(
        stacks: usize,
        stack_capacity: usize,
        max_discards: u32,
        lookahead: usize,
        terminal: u32,
    ) -> Self {
        Self {
            stacks,
            stack_capacity,
            max_discards,
            lookahead,
            terminal,
        }
    }

    /// Four stacks of eight, two discards, two tiles of lookahead, clear at 2048.
    #[inline]
    pub const fn reference() -> Self {
        Self::new(4, 8, 2, 2, 2048)
    }

    /// Index the discard pile answers to.
    #[inline]
    pub const fn discard_index(&self) -> usize {
        self.stacks
    }

    /// Total addressable piles, discard included.
    #[inline]
    pub const fn pile_count(&self) -> usize {
        self.stacks + 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stacks == 0 {
            return Err(ConfigError::Invalid("at least one stack is required".into()));
        }
        if self.stack_capacity < 2 {
            return Err(ConfigError::Invalid(format!(
                "stack_capacity must be >= 2, got {}",
                self.stack_capacity
            )));
        }
        if self.lookahead == 0 {
            return Err(ConfigError::Invalid("lookahead must be >= 1".into()));
        }
        // A terminal of 2 would clear every stack on its first draw.
        if self.terminal < 4 || !self.terminal.is_power_of_two() {
            return Err(ConfigError::Invalid(format!(
                "terminal must be a power of two >= 4, got {}",
                self.terminal
            )));
        }
        Ok(())
    }
}
