//! Snapshot of the full observable simulation state.
//!
//! A snapshot is the only thing a presentation layer ever reads: grid
//! dimensions, both walker positions, the same-cell flag, and the run
//! status. It is taken between steps, never mid-step.

use crate::error::SimResult;
use crate::types::{Coord, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub running: bool,
    pub steps: Tick,
    pub width: Coord,
    pub height: Coord,
    pub walker_a: (Coord, Coord),
    pub walker_b: (Coord, Coord),
    pub met: bool,
}

impl SimSnapshot {
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for SimSnapshot {
    /// Stable single-line form for end-of-run reporting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[running: {}, steps: {}, forest: {}x{}, a: ({}, {}), b: ({}, {}), met: {}]",
            self.running,
            self.steps,
            self.width,
            self.height,
            self.walker_a.0,
            self.walker_a.1,
            self.walker_b.0,
            self.walker_b.1,
            self.met
        )
    }
}
