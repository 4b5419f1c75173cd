//! A single tracked walker with an integer position.

use crate::error::{SimError, SimResult};
use crate::grid::Grid;
use crate::motion::{Motion, MovementPolicy};
use crate::types::Coord;

/// Mutable walker state. Owned exclusively by the engine; the grid is
/// shared read-only for bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    x: Coord,
    y: Coord,
    policy: MovementPolicy,
}

impl Walker {
    pub fn at(x: Coord, y: Coord, policy: MovementPolicy) -> Self {
        Self { x, y, policy }
    }

    /// Attempt one step. Returns `Ok(true)` if the move committed,
    /// `Ok(false)` if the candidate cell was outside the grid — a
    /// blocked move is a designed no-op, not an error.
    ///
    /// Errors with `InvalidMotion` if the motion violates an
    /// axis-constrained walker's one-axis-per-step precondition. That is
    /// a generator/walker policy mismatch and must abort the run; the
    /// position is left untouched.
    pub fn attempt_move(&mut self, grid: &Grid, motion: Motion) -> SimResult<bool> {
        if !self.policy.permits(motion) {
            return Err(SimError::InvalidMotion {
                dx: motion.dx,
                dy: motion.dy,
            });
        }

        let candidate_x = self.x + motion.dx;
        let candidate_y = self.y + motion.dy;

        if !grid.contains(candidate_x, candidate_y) {
            log::debug!(
                "blocked move ({}, {}) -> ({candidate_x}, {candidate_y})",
                self.x,
                self.y
            );
            return Ok(false);
        }

        self.x = candidate_x;
        self.y = candidate_y;
        Ok(true)
    }

    /// True iff both coordinates match exactly. Pure query.
    pub fn is_colocated_with(&self, other: &Walker) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn position(&self) -> (Coord, Coord) {
        (self.x, self.y)
    }
}
