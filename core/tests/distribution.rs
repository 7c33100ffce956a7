//! Statistical properties of weighted sampling.
//!
//! These are tolerance-band tests over large samples, not exact
//! assertions. Bands are several standard deviations wide so they
//! hold for any seed.

use montecarlo_core::rng::RngBank;
use montecarlo_core::Die;

/// With equal weights, empirical face frequencies converge on
/// 1/num_faces.
#[test]
fn equal_weights_converge_to_uniform() {
    const ROLLS: usize = 60_000;
    let die = Die::new(vec![1u32, 2, 3, 4, 5, 6]).unwrap();
    let bank = RngBank::new(2024);
    let mut rng = bank.for_slot_at_play(0, 0);

    let outcomes = die.roll(ROLLS, &mut rng).unwrap();

    for face in 1..=6u32 {
        let count = outcomes.iter().filter(|o| **o == face).count();
        let frequency = count as f64 / ROLLS as f64;
        let expected = 1.0 / 6.0;
        // std dev of the frequency is ~0.0015 at n=60k; 0.01 is >6 sigma
        assert!(
            (frequency - expected).abs() < 0.01,
            "Face {face} frequency {frequency:.4} outside band around {expected:.4}"
        );
    }
}

/// A heavily weighted face dominates the draw in proportion to its
/// share of the total weight.
#[test]
fn weighted_face_dominates_proportionally() {
    const ROLLS: usize = 30_000;
    let mut die = Die::new(vec![1u32, 2, 3, 4, 5, 6]).unwrap();
    die.set_weight(&6, 45.0).unwrap(); // 45 of 50 total -> p = 0.9
    let bank = RngBank::new(99);
    let mut rng = bank.for_slot_at_play(0, 0);

    let outcomes = die.roll(ROLLS, &mut rng).unwrap();

    let sixes = outcomes.iter().filter(|o| **o == 6).count();
    let frequency = sixes as f64 / ROLLS as f64;
    assert!(
        (frequency - 0.9).abs() < 0.02,
        "Weighted face frequency {frequency:.4} outside band around 0.9"
    );
}

/// A weight change takes effect on the very next roll call.
#[test]
fn weight_change_applies_immediately() {
    const ROLLS: usize = 5_000;
    let mut die = Die::new(vec![0u32, 1]).unwrap();
    let bank = RngBank::new(7);
    let mut rng = bank.for_slot_at_play(0, 0);

    let before = die.roll(ROLLS, &mut rng).unwrap();
    let ones_before = before.iter().filter(|o| **o == 1).count();

    die.set_weight(&1, 999.0).unwrap(); // p(1) ~ 0.999
    let after = die.roll(ROLLS, &mut rng).unwrap();
    let ones_after = after.iter().filter(|o| **o == 1).count();

    assert!(
        ones_before > 2_000 && ones_before < 3_000,
        "Fair coin should land near 50%, got {ones_before}/{ROLLS}"
    );
    assert!(
        ones_after > 4_900,
        "Reweighted coin should land 1 almost always, got {ones_after}/{ROLLS}"
    );
}
