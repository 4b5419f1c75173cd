//! Paced dual-activity drive.
//!
//! Stepping runs on a dedicated thread at a fixed logical rate
//! (wall-clock accumulator, default 60 steps/second); presentation runs
//! on the calling thread and reads committed snapshots. One mutex scope
//! covers a whole burst of steps, so an observer can never see a step's
//! position mutations half-applied.
//!
//! Stopping is cooperative: the `running` flag is the only cancellation
//! token, and a stop request takes effect at the next step boundary.

use crate::engine::SimEngine;
use crate::error::SimResult;
use crate::snapshot::SimSnapshot;
use anyhow::anyhow;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

/// Target logical step rate when none is configured.
pub const DEFAULT_STEP_RATE: u32 = 60;

/// Upper bound on steps executed per stepping iteration. Caps the
/// catch-up burst after a scheduler stall.
const MAX_STEPS_PER_BURST: u64 = 8;

/// A simulation driven at a fixed logical rate while a presentation
/// callback observes it.
pub struct PacedSim {
    engine: Arc<Mutex<SimEngine>>,
    rate: u32,
}

/// Cloneable handle for observing or cancelling a paced run from
/// outside the drive loop.
#[derive(Clone)]
pub struct PacedHandle {
    engine: Arc<Mutex<SimEngine>>,
}

impl PacedHandle {
    /// Request cancellation. Takes effect at the next step boundary.
    pub fn stop(&self) {
        self.engine.lock().expect("engine mutex poisoned").stop();
    }

    pub fn snapshot(&self) -> SimSnapshot {
        self.engine.lock().expect("engine mutex poisoned").snapshot()
    }
}

impl PacedSim {
    /// Takes an idle engine; `run` transitions it to Running.
    pub fn new(engine: SimEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            rate: DEFAULT_STEP_RATE,
        }
    }

    pub fn steps_per_second(mut self, rate: u32) -> Self {
        assert!(rate > 0, "step rate must be positive");
        self.rate = rate;
        self
    }

    pub fn handle(&self) -> PacedHandle {
        PacedHandle {
            engine: Arc::clone(&self.engine),
        }
    }

    /// Drive the run to completion and return the terminal snapshot.
    ///
    /// `present` is invoked on the calling thread whenever the committed
    /// state changed — after any step(s) occurred — and once more for
    /// the terminal state.
    pub fn run<F>(self, mut present: F) -> SimResult<SimSnapshot>
    where
        F: FnMut(&SimSnapshot),
    {
        self.engine.lock().expect("engine mutex poisoned").begin();

        let stepper = {
            let engine = Arc::clone(&self.engine);
            let step_interval = 1.0 / f64::from(self.rate);
            thread::spawn(move || step_loop(&engine, step_interval))
        };

        let mut last: Option<SimSnapshot> = None;
        loop {
            let snap = self
                .engine
                .lock()
                .expect("engine mutex poisoned")
                .snapshot();
            let done = !snap.running;
            if last.as_ref() != Some(&snap) {
                present(&snap);
                last = Some(snap);
            }
            if done {
                break;
            }
            thread::yield_now();
        }

        stepper
            .join()
            .map_err(|_| anyhow!("stepping thread panicked"))??;

        Ok(last.expect("terminal snapshot is always presented"))
    }
}

/// Fixed-timestep accumulator: elapsed wall-clock time converts into
/// due steps, executed under a single lock scope, with a voluntary
/// yield between iterations.
fn step_loop(engine: &Arc<Mutex<SimEngine>>, step_interval: f64) -> SimResult<()> {
    let mut accumulator = 0.0_f64;
    let mut last_iter = Instant::now();

    loop {
        let now = Instant::now();
        accumulator += now.duration_since(last_iter).as_secs_f64();
        last_iter = now;

        let max_accumulator = step_interval * MAX_STEPS_PER_BURST as f64;
        if accumulator > max_accumulator {
            accumulator = max_accumulator;
        }

        let mut due = (accumulator / step_interval) as u64;
        if due > 0 {
            accumulator -= step_interval * due as f64;
            let mut engine = engine.lock().expect("engine mutex poisoned");
            while due > 0 && engine.is_running() {
                engine.step()?;
                due -= 1;
            }
            if !engine.is_running() {
                return Ok(());
            }
        }

        thread::yield_now();
    }
}
