//! montecarlo-core — a weighted-die Monte Carlo simulation engine.
//!
//! Three components, each depending only on the previous:
//!   - [`Die`]: a weighted finite random-outcome generator.
//!   - [`Game`]: owns an ordered dice collection and the roll table
//!     produced by the most recent batch of simultaneous rolls.
//!   - [`Analyzer`]: read-only descriptive statistics over a game's
//!     current table (jackpots, face counts, combinations,
//!     permutations).
//!
//! Data flows one direction: die -> game -> analyzer. All randomness
//! is deterministic, derived from the game's master seed (see
//! [`rng`]), so a whole run is a pure function of (dice, seed, rolls).

pub mod analyzer;
pub mod die;
pub mod error;
pub mod game;
pub mod rng;
pub mod table;
pub mod types;

pub use analyzer::{Analyzer, FaceCounts, TupleCount};
pub use die::{Die, DieSnapshot};
pub use error::{McError, McResult};
pub use game::{Game, TableLayout, TableView};
pub use table::{NarrowRow, RollTable};
pub use types::{Count, Face, Slot};
