use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::engine::DEFAULT_SHUFFLE_SWAPS;
use crate::error::ConfigError;

const MAX_SHUFFLE_SWAPS: usize = 10_000;

/// Settings for a game session, passed in by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for every deal of the session. Taken from the clock when absent.
    pub seed: Option<u64>,
    /// Random single-slot swaps applied to a sorted layout.
    pub shuffle_swaps: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            shuffle_swaps: DEFAULT_SHUFFLE_SWAPS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shuffle_swaps > MAX_SHUFFLE_SWAPS {
            return Err(ConfigError::Validation(format!(
                "shuffle_swaps must be <= {MAX_SHUFFLE_SWAPS}, got {}",
                self.shuffle_swaps
            )));
        }
        Ok(())
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}
