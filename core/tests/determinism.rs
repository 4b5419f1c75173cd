//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two engines, same (dimensions, seed, policy): they must walk the
//! identical trajectory and report the identical final state. Any
//! divergence means randomness is leaking around the owned generator.

use forestwalk_core::{MovementPolicy, SimConfig, SimEngine};

/// Drive up to `max_steps` sampled steps and record each committed
/// snapshot in its stable textual form.
fn trajectory_prefix(config: &SimConfig, max_steps: u64) -> Vec<String> {
    let mut engine = SimEngine::new(config);
    engine.begin();
    let mut frames = vec![engine.snapshot().to_string()];
    for _ in 0..max_steps {
        if !engine.is_running() {
            break;
        }
        engine.step().expect("policy-matched motions never fail");
        frames.push(engine.snapshot().to_string());
    }
    frames
}

#[test]
fn same_seed_reproduces_the_full_trajectory() {
    for policy in [MovementPolicy::Free, MovementPolicy::AxisConstrained] {
        let config = SimConfig::new(31, 17)
            .seeded(0xDEAD_BEEF_CAFE_1234)
            .with_policy(policy);

        let a = trajectory_prefix(&config, 5_000);
        let b = trajectory_prefix(&config, 5_000);

        assert_eq!(
            a.len(),
            b.len(),
            "trajectory lengths differ under {policy:?}: {} vs {}",
            a.len(),
            b.len()
        );
        for (i, (fa, fb)) in a.iter().zip(b.iter()).enumerate() {
            assert_eq!(fa, fb, "trajectory diverged at frame {i} under {policy:?}");
        }
    }
}

#[test]
fn same_seed_reproduces_final_steps_and_positions() {
    let config = SimConfig::new(9, 9).seeded(42);

    let mut engine_a = SimEngine::new(&config);
    let mut engine_b = SimEngine::new(&config);
    engine_a.start().expect("run a");
    engine_b.start().expect("run b");

    assert_eq!(engine_a.steps(), engine_b.steps(), "step counts differ");
    assert_eq!(
        engine_a.snapshot(),
        engine_b.snapshot(),
        "final states differ"
    );
}

#[test]
fn different_seeds_produce_different_trajectories() {
    let a = trajectory_prefix(&SimConfig::new(50, 50).seeded(1), 1_000);
    let b = trajectory_prefix(&SimConfig::new(50, 50).seeded(2), 1_000);

    let any_different =
        a.len() != b.len() || a.iter().zip(b.iter()).any(|(fa, fb)| fa != fb);
    assert!(
        any_different,
        "different seeds produced identical trajectories — the seed is not being used"
    );
}
