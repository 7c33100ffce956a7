//! The weighted die — the single random-outcome generator.
//!
//! A die owns a fixed, ordered set of unique faces and one mutable
//! weight per face. Weights default to 1.0 (a fair die) and are
//! renormalized at every draw, so a weight change is visible in the
//! very next roll.

use serde::Serialize;

use crate::error::{McError, McResult};
use crate::rng::SlotRng;
use crate::types::Face;

#[derive(Debug, Clone)]
pub struct Die<F: Face> {
    faces: Vec<F>,
    weights: Vec<f64>,
}

/// An owned copy of a die's face/weight association.
/// Detached from the die — mutating the die later does not affect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DieSnapshot<F: Face> {
    pub faces: Vec<F>,
    pub weights: Vec<f64>,
}

impl<F: Face> Die<F> {
    /// Build a die from an ordered face set. Every weight starts at 1.0.
    ///
    /// Fails with `InvalidInput` if the face set is empty or contains
    /// a repeated face.
    pub fn new(faces: Vec<F>) -> McResult<Self> {
        if faces.is_empty() {
            return Err(McError::invalid_input("a die needs at least one face"));
        }
        let mut seen = std::collections::BTreeSet::new();
        for face in &faces {
            if !seen.insert(face) {
                return Err(McError::invalid_input(format!(
                    "faces must be unique, '{face}' repeats"
                )));
            }
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// Change the weight of a single face. All other weights are
    /// untouched; future draws reflect the new weight immediately.
    ///
    /// Fails with `FaceNotFound` for an unknown face and `InvalidInput`
    /// for a weight that is not a strictly positive finite number.
    /// On failure the weight vector is completely unchanged.
    pub fn set_weight(&mut self, face: &F, weight: f64) -> McResult<()> {
        let index = self
            .faces
            .iter()
            .position(|f| f == face)
            .ok_or_else(|| McError::FaceNotFound {
                face: face.to_string(),
            })?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(McError::invalid_input(format!(
                "weight must be a positive finite number, got {weight}"
            )));
        }
        self.weights[index] = weight;
        log::trace!("die: weight of face '{face}' set to {weight}");
        Ok(())
    }

    /// Roll the die `num_rolls` times with replacement.
    ///
    /// Each draw picks face i with probability weight_i / sum(weights),
    /// computed from the live weight vector at call time. Draws are
    /// independent; the only side effect is RNG state advancement.
    pub fn roll(&self, num_rolls: usize, rng: &mut SlotRng) -> McResult<Vec<F>> {
        if num_rolls == 0 {
            return Err(McError::invalid_input(
                "number of rolls must be a positive integer",
            ));
        }
        let total: f64 = self.weights.iter().sum();
        let mut outcomes = Vec::with_capacity(num_rolls);
        for _ in 0..num_rolls {
            outcomes.push(self.draw_one(total, rng));
        }
        Ok(outcomes)
    }

    /// One inverse-CDF draw over the cumulative weights.
    fn draw_one(&self, total: f64, rng: &mut SlotRng) -> F {
        let target = rng.next_f64() * total;
        let mut cumulative = 0.0;
        for (face, weight) in self.faces.iter().zip(&self.weights) {
            cumulative += weight;
            if target < cumulative {
                return face.clone();
            }
        }
        // Float rounding can leave target == total; the last face wins.
        self.faces[self.faces.len() - 1].clone()
    }

    /// Owned copy of the current face/weight state, for inspection.
    pub fn snapshot(&self) -> DieSnapshot<F> {
        DieSnapshot {
            faces: self.faces.clone(),
            weights: self.weights.clone(),
        }
    }

    pub fn faces(&self) -> &[F] {
        &self.faces
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

impl Die<u32> {
    /// A standard fair die with faces 1..=sides.
    pub fn uniform(sides: u32) -> McResult<Self> {
        if sides == 0 {
            return Err(McError::invalid_input("a die needs at least one face"));
        }
        Self::new((1..=sides).collect())
    }
}
