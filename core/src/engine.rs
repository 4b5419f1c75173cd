//! The simulation engine — owns both walkers and the termination policy.
//!
//! STEP PROCEDURE (fixed, documented, never reordered):
//!   1. Sample a motion vector for walker A, then for walker B.
//!   2. A attempts its move, then B — no barrier between them; B's
//!      motion was drawn before A moved and does not depend on A's
//!      outcome.
//!   3. Evaluate the stop condition: colocation OR steps > MAX_UPDATES.
//!   4. If it holds, stop without counting the terminal step; else
//!      increment the counter.
//!
//! RULES:
//!   - All randomness flows through the engine-owned WalkRng.
//!   - stop() is cooperative and idempotent; it takes effect at the
//!     next step boundary.
//!   - There is no recoverable-error path: InvalidMotion signals a
//!     generator/walker policy mismatch and aborts the run.

use crate::{
    config::SimConfig,
    error::SimResult,
    grid::Grid,
    motion::{Motion, MovementPolicy},
    rng::WalkRng,
    snapshot::SimSnapshot,
    types::Tick,
    walker::Walker,
};

/// Step ceiling: a run halts after at most MAX_UPDATES + 1 steps even
/// if the walkers never meet.
pub const MAX_UPDATES: Tick = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Stopped,
}

/// What one executed step did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Both walkers moved (or were blocked); the run continues.
    Advanced,
    /// The walkers share a cell; the run stopped.
    Met,
    /// The step ceiling was exceeded; the run stopped.
    LimitReached,
}

pub struct SimEngine {
    grid:     Grid,
    walker_a: Walker,
    walker_b: Walker,
    rng:      WalkRng,
    policy:   MovementPolicy,
    state:    EngineState,
    steps:    Tick,
}

impl SimEngine {
    /// Walker A starts at (0, 0), walker B at the opposite corner.
    /// Dimensions must already satisfy the input layer's contract.
    pub fn new(config: &SimConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self {
            walker_a: Walker::at(0, 0, config.policy),
            walker_b: Walker::at(config.width - 1, config.height - 1, config.policy),
            rng:      WalkRng::new(config.seed),
            policy:   config.policy,
            state:    EngineState::Idle,
            grid,
            steps:    0,
        }
    }

    /// Idle → Running, then drive steps synchronously until Stopped.
    /// Does not return before the run terminates.
    pub fn start(&mut self) -> SimResult<()> {
        self.begin();
        while self.state == EngineState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Idle → Running without driving any steps. Used by the paced
    /// runner and by tests that feed motions directly.
    /// Panics if the engine already left Idle — callers must not reuse
    /// a finished engine.
    pub fn begin(&mut self) {
        assert!(
            self.state == EngineState::Idle,
            "begin() called on a non-idle engine"
        );
        self.state = EngineState::Running;
        log::info!(
            "run started: grid {}x{}, policy {:?}",
            self.grid.width(),
            self.grid.height(),
            self.policy
        );
    }

    /// Running → Stopped. Idempotent; callable internally on the
    /// termination condition or externally for manual cancellation.
    pub fn stop(&mut self) {
        if self.state == EngineState::Running {
            self.state = EngineState::Stopped;
            log::info!("run stopped after {} counted steps", self.steps);
        }
    }

    /// Execute one step with motions drawn from the configured policy.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        let motion_a = self.policy.sample(&mut self.rng);
        let motion_b = self.policy.sample(&mut self.rng);
        self.step_with(motion_a, motion_b)
    }

    /// Execute one step with explicit motions. Walker A moves first,
    /// then B, both within the same step.
    ///
    /// The terminal step is not counted: `steps` reflects completed
    /// steps prior to the one that triggered the stop condition, so it
    /// never exceeds MAX_UPDATES + 1.
    pub fn step_with(&mut self, motion_a: Motion, motion_b: Motion) -> SimResult<StepOutcome> {
        assert!(
            self.state == EngineState::Running,
            "step() called while not running"
        );

        self.walker_a.attempt_move(&self.grid, motion_a)?;
        self.walker_b.attempt_move(&self.grid, motion_b)?;

        if self.walker_a.is_colocated_with(&self.walker_b) {
            log::debug!(
                "walkers met at {:?} after {} counted steps",
                self.walker_a.position(),
                self.steps
            );
            self.stop();
            return Ok(StepOutcome::Met);
        }

        if self.steps > MAX_UPDATES {
            log::debug!("step ceiling exceeded without a meeting");
            self.stop();
            return Ok(StepOutcome::LimitReached);
        }

        self.steps += 1;
        Ok(StepOutcome::Advanced)
    }

    /// Status accessor: the full committed observable state.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            running:  self.state == EngineState::Running,
            steps:    self.steps,
            width:    self.grid.width(),
            height:   self.grid.height(),
            walker_a: self.walker_a.position(),
            walker_b: self.walker_b.position(),
            met:      self.walker_a.is_colocated_with(&self.walker_b),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn steps(&self) -> Tick {
        self.steps
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
