//! Engine configuration

/// Tunables for a single battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BattleConfig {
    /// Seed for speed-tie resolution (None draws from OS entropy)
    pub seed: Option<u64>,

    /// Upper bound on top-level menu passes while collecting one action.
    /// A controller that keeps backing out past this is a contract violation.
    pub max_choice_attempts: usize,

    /// Rounds after which the battle is declared a draw
    pub max_turns: Option<u32>,
}

impl BattleConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_choice_attempts(mut self, attempts: usize) -> Self {
        self.max_choice_attempts = attempts.max(1);
        self
    }

    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_choice_attempts: 16,
            max_turns: None,
        }
    }
}
