//! Simulation construction parameters.

use crate::error::{SimError, SimResult};
use crate::motion::MovementPolicy;
use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// Smallest accepted grid dimension.
pub const DIM_MIN: Coord = 2;
/// Largest accepted grid dimension.
pub const DIM_MAX: Coord = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub width: Coord,
    pub height: Coord,
    /// `Some` for deterministic replay, `None` for an entropy seed.
    pub seed: Option<u64>,
    pub policy: MovementPolicy,
}

impl SimConfig {
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            width,
            height,
            seed: None,
            policy: MovementPolicy::Free,
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: MovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enforce the `[DIM_MIN, DIM_MAX]` dimension contract. This is the
    /// input layer's responsibility — the engine trusts its caller and
    /// never re-checks.
    pub fn validate(&self) -> SimResult<()> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !(DIM_MIN..=DIM_MAX).contains(&value) {
                return Err(SimError::DimensionOutOfRange {
                    axis,
                    value,
                    min: DIM_MIN,
                    max: DIM_MAX,
                });
            }
        }
        Ok(())
    }
}
