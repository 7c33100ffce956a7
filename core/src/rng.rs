//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! All randomness flows through SlotRng instances derived from the
//! single master seed stored on the game.
//!
//! Each die slot gets its own RNG stream, seeded deterministically
//! from (master_seed, slot, play counter). This means:
//!   - Every slot draws from an independent stream, so draws stay
//!     statistically independent across dice.
//!   - Replaying the same game advances the play counter, so a second
//!     play never repeats the first play's outcomes.
//!   - A whole run is reproducible from the master seed alone.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::types::Slot;

/// A deterministic RNG stream for a single die slot during one play.
pub struct SlotRng {
    pub slot: Slot,
    inner: Pcg64Mcg,
}

impl SlotRng {
    /// Create a slot RNG from the master seed, a stable slot index and
    /// the play counter. Slot indices must never be reordered between
    /// plays of the same game.
    pub fn new(master_seed: u64, slot: u64, play: u64) -> Self {
        let derived_seed = master_seed
            ^ slot.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ play.wrapping_mul(0xd134_2543_de82_ef95);
        Self {
            slot: slot as Slot,
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// All slot RNGs for a single game, derived on demand from one seed.
#[derive(Debug)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_slot_at_play(&self, slot: Slot, play: u64) -> SlotRng {
        SlotRng::new(self.master_seed, slot as u64, play)
    }
}
