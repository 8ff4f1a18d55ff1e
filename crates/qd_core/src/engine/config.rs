//! Decision tuning parameters

use serde::{Deserialize, Serialize};

/// Tunables for the per-turn heuristic.
///
/// The defaults are the contest-proven values; the struct exists so tests and
/// future tuning passes can vary them without touching the decision code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Thrust applied to every movement order (default: 150).
    pub move_thrust: f64,
    /// Power applied when a carrier throws at the opponent goal (default: 500).
    pub throw_power: f64,
    /// Magic reserve that must be strictly exceeded before casting
    /// (default: 32).
    pub magic_threshold: u32,
    /// Magnitude of the snaffle-pull spell; the referee deducts this much
    /// magic when the cast resolves (default: 33).
    pub spell_magic: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            move_thrust: 150.0,
            throw_power: 500.0,
            magic_threshold: 32,
            spell_magic: 33.0,
        }
    }
}
