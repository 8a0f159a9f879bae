//! Configuration for an engine session.

/// Number of shuffles Secret Santa tries before giving up.
pub const DEFAULT_SANTA_ATTEMPTS: u32 = 50;

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible games. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Derangement attempts for Secret Santa (at least 1).
    pub santa_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            santa_attempts: DEFAULT_SANTA_ATTEMPTS,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the Secret Santa attempt budget (clamped to at least 1).
    pub fn with_santa_attempts(mut self, attempts: u32) -> Self {
        self.santa_attempts = attempts.max(1);
        self
    }
}
