//! Guards for the balanced-split search
//!
//! The reservation search is exponential in the number of treasures. These
//! knobs make oversized inputs fail fast with a clear error instead of
//! hanging. Deserializable so embedders can ship tuning as data.

use serde::{Deserialize, Serialize};

/// Tunables for one balanced-split run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitConfig {
    /// Maximum number of treasures the engine accepts
    #[serde(default = "default_max_treasures")]
    pub max_treasures: usize,
    /// Maximum number of search states explored in one run
    #[serde(default = "default_node_budget")]
    pub node_budget: u64,
}

fn default_max_treasures() -> usize {
    24
}

fn default_node_budget() -> u64 {
    1 << 22
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_treasures: default_max_treasures(),
            node_budget: default_node_budget(),
        }
    }
}
