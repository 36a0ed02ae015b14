/// Cumulative game score. Only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreAccumulator {
    total: u64,
}

impl ScoreAccumulator {
    #[inline]
    pub const fn new() -> Self {
        Self { total: 0 }
    }

    #[inline]
    pub fn add(&mut self, delta: u64) {
        self.total = self.total.saturating_add(delta);
    }

    #[inline]
    pub const fn total(&self) -> u64 {
        self.total
    }
}
