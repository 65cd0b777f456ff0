//! Game configuration: RNG seed and the automatic descent curve.
//!
//! Values come from [`GameConfig::default`] or from environment variables via
//! [`GameConfig::from_env`]. Unparseable values fall back to their defaults.

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, MAX_SPEED_LEVEL, MIN_DROP_MS};

/// Tunables for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the piece queue generator
    pub seed: u64,
    /// Descent interval at level 0
    pub base_drop_ms: u32,
    /// Interval reduction per level
    pub drop_step_ms: u32,
    /// Floor for the descent interval (never below 1)
    pub min_drop_ms: u32,
    /// Level after which descent stops speeding up
    pub max_speed_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            base_drop_ms: BASE_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: MIN_DROP_MS,
            max_speed_level: MAX_SPEED_LEVEL,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKTRIS_SEED` (default: derived from the wall clock)
    /// - `BLOCKTRIS_BASE_DROP_MS` (default: 500)
    /// - `BLOCKTRIS_DROP_STEP_MS` (default: 45)
    /// - `BLOCKTRIS_MIN_DROP_MS` (default: 50)
    /// - `BLOCKTRIS_MAX_SPEED_LEVEL` (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = parse_var(&lookup, "BLOCKTRIS_SEED").unwrap_or_else(clock_seed);
        let base_drop_ms =
            parse_var(&lookup, "BLOCKTRIS_BASE_DROP_MS").unwrap_or(defaults.base_drop_ms);
        let drop_step_ms =
            parse_var(&lookup, "BLOCKTRIS_DROP_STEP_MS").unwrap_or(defaults.drop_step_ms);
        let min_drop_ms =
            parse_var(&lookup, "BLOCKTRIS_MIN_DROP_MS").unwrap_or(defaults.min_drop_ms);
        let max_speed_level =
            parse_var(&lookup, "BLOCKTRIS_MAX_SPEED_LEVEL").unwrap_or(defaults.max_speed_level);

        Self {
            seed,
            base_drop_ms,
            drop_step_ms,
            min_drop_ms: min_drop_ms.max(1),
            max_speed_level,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = raw, "ignoring unparseable config value");
            None
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
