//! Motion vectors and the movement-policy configuration.
//!
//! Whether a step may move both axes at once is a single enum choice,
//! consumed by both the motion generator and the walker's precondition
//! check — never duplicated engine or walker types.

use crate::rng::WalkRng;
use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// Attempted per-axis displacement for one step. Components are always
/// in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    pub dx: Coord,
    pub dy: Coord,
}

impl Motion {
    pub const ZERO: Motion = Motion { dx: 0, dy: 0 };

    pub fn new(dx: Coord, dy: Coord) -> Self {
        Self { dx, dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPolicy {
    /// Both axes drawn independently — diagonal steps permitted.
    Free,
    /// A fair coin picks the axis; the other component is always 0.
    AxisConstrained,
}

impl MovementPolicy {
    /// Draw one motion vector under this policy. Axis-constrained
    /// samples satisfy `permits` by construction.
    pub fn sample(&self, rng: &mut WalkRng) -> Motion {
        match self {
            Self::Free => {
                let dx = rng.step_offset();
                let dy = rng.step_offset();
                Motion::new(dx, dy)
            }
            Self::AxisConstrained => {
                if rng.coin() {
                    Motion::new(rng.step_offset(), 0)
                } else {
                    Motion::new(0, rng.step_offset())
                }
            }
        }
    }

    /// Whether a walker under this policy accepts the motion.
    pub fn permits(&self, motion: Motion) -> bool {
        match self {
            Self::Free => true,
            Self::AxisConstrained => motion.dx == 0 || motion.dy == 0,
        }
    }
}
