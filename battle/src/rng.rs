//! The engine's only source of randomness

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG used to break speed ties
#[derive(Debug, Clone)]
pub struct BattleRng(StdRng);

impl BattleRng {
    /// Deterministic stream for replays and tests
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Fair 50/50 draw
    pub fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}
