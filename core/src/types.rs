//! Shared primitive types used across the entire engine.

use serde::Serialize;
use std::fmt::{Debug, Display};

/// A die-slot index inside a game. Column order in the roll table
/// always matches slot order.
pub type Slot = usize;

/// An occurrence count in a statistics table.
pub type Count = u64;

/// The contract a face (outcome label) must fulfill.
///
/// Ordering gives deterministic statistics output, display gives
/// readable errors, serialization feeds the runner's JSON reports.
/// Blanket-implemented: any suitable type is a face.
pub trait Face: Clone + Ord + Debug + Display + Serialize {}

impl<T> Face for T where T: Clone + Ord + Debug + Display + Serialize {}
