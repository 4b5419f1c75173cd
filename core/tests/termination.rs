//! Termination guarantees and the engine state machine.

use forestwalk_core::{
    EngineState, Motion, MovementPolicy, SimConfig, SimEngine, StepOutcome, MAX_UPDATES,
};

#[test]
fn every_run_halts_within_the_step_ceiling() {
    let config = SimConfig::new(2, 2).seeded(99);
    let mut engine = SimEngine::new(&config);
    engine.start().expect("run");

    assert_eq!(engine.state(), EngineState::Stopped);
    assert!(
        engine.steps() <= MAX_UPDATES + 1,
        "step count {} exceeded the ceiling",
        engine.steps()
    );

    let snap = engine.snapshot();
    assert!(!snap.running);
    assert!(
        snap.met || snap.steps == MAX_UPDATES + 1,
        "run stopped without meeting or exhausting the ceiling: {snap}"
    );
}

#[test]
fn forced_meeting_on_a_2x2_grid() {
    // A starts at (0, 0), B at (1, 1). One step moves A right and B
    // down: both land on (1, 0).
    let config = SimConfig::new(2, 2);
    let mut engine = SimEngine::new(&config);
    engine.begin();

    let outcome = engine
        .step_with(Motion::new(1, 0), Motion::new(0, -1))
        .expect("free-policy motions never fail");

    assert_eq!(outcome, StepOutcome::Met);
    assert_eq!(engine.state(), EngineState::Stopped);

    let snap = engine.snapshot();
    assert!(snap.met);
    assert_eq!(snap.walker_a, (1, 0));
    assert_eq!(snap.walker_b, (1, 0));
    assert_eq!(
        engine.steps(),
        0,
        "the terminal step must not be counted"
    );
}

#[test]
fn zero_motion_run_exhausts_the_step_ceiling() {
    // Walkers that never move can never meet; only the ceiling stops
    // the run.
    let config = SimConfig::new(3, 3);
    let mut engine = SimEngine::new(&config);
    engine.begin();

    let mut last = StepOutcome::Advanced;
    while engine.is_running() {
        last = engine
            .step_with(Motion::ZERO, Motion::ZERO)
            .expect("zero motions never fail");
    }

    assert_eq!(last, StepOutcome::LimitReached);
    assert_eq!(engine.steps(), MAX_UPDATES + 1);

    let snap = engine.snapshot();
    assert_eq!(snap.walker_a, (0, 0));
    assert_eq!(snap.walker_b, (2, 2));
    assert!(!snap.met);
}

#[test]
fn stop_is_idempotent() {
    let config = SimConfig::new(4, 4).seeded(5);
    let mut engine = SimEngine::new(&config);
    engine.begin();

    engine.stop();
    assert_eq!(engine.state(), EngineState::Stopped);
    engine.stop();
    assert_eq!(engine.state(), EngineState::Stopped);
    assert_eq!(engine.steps(), 0);
}

#[test]
fn colocation_implies_stopped_at_every_observable_point() {
    let config = SimConfig::new(2, 2).seeded(1234);
    let mut engine = SimEngine::new(&config);
    engine.begin();

    while engine.is_running() {
        engine.step().expect("step");
        let snap = engine.snapshot();
        assert!(
            !snap.met || !snap.running,
            "observed a colocated-but-running state: {snap}"
        );
    }
}
