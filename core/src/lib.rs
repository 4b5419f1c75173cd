//! forestwalk-core — two random walkers on a bounded grid.
//!
//! Two walkers start in opposite corners of a width×height forest and
//! take one randomized step per update until they share a cell or the
//! step ceiling is hit. The engine is fully deterministic under an
//! explicit seed.
//!
//! RULES:
//!   - All randomness flows through the engine-owned WalkRng.
//!   - Within a step, walker A always moves before walker B.
//!   - Observers only ever see fully-committed post-step state.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod motion;
pub mod pacer;
pub mod rng;
pub mod snapshot;
pub mod types;
pub mod walker;

pub use config::SimConfig;
pub use engine::{EngineState, SimEngine, StepOutcome, MAX_UPDATES};
pub use error::{SimError, SimResult};
pub use grid::Grid;
pub use motion::{Motion, MovementPolicy};
pub use pacer::{PacedHandle, PacedSim, DEFAULT_STEP_RATE};
pub use snapshot::SimSnapshot;
pub use walker::Walker;
