//! Descriptive statistics over a single game's roll table.
//!
//! The analyzer:
//!   1. Counts jackpots (rows where every die agrees)
//!   2. Tabulates per-roll face counts over the observed face union
//!   3. Groups rows by order-independent combination
//!   4. Groups rows by order-dependent permutation
//!
//! Pure reads: every query recomputes from the game's live table, so
//! replaying the game between calls is always reflected. Group output
//! is accumulated in BTreeMaps keyed by the combo/perm tuple, which
//! makes the ordering deterministic (sorted by key) for identical
//! input.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::game::Game;
use crate::types::{Count, Face};

pub struct Analyzer<'a, F: Face> {
    game: &'a Game<F>,
}

/// Per-roll face-count table. Columns are the sorted union of every
/// face observed anywhere in the table; rows follow roll order and
/// each row sums to the number of dice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceCounts<F: Face> {
    pub faces: Vec<F>,
    pub rows: Vec<Vec<Count>>,
}

/// One distinct combination or permutation and how often it occurred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleCount<F: Face> {
    pub faces: Vec<F>,
    pub count: Count,
}

impl<F: Face> FaceCounts<F> {
    pub fn empty() -> Self {
        Self {
            faces: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// (number of rolls, number of distinct observed faces).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.faces.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, F: Face> Analyzer<'a, F> {
    /// Bind an analyzer to one game. The binding is immutable; analyze
    /// a different game by constructing a new analyzer.
    pub fn new(game: &'a Game<F>) -> Self {
        Self { game }
    }

    /// How many rolls came up all-identical across every die.
    ///
    /// A row is a jackpot when it holds exactly one distinct value, so
    /// every row of a single-die game counts. Returns 0 for an
    /// unplayed game.
    pub fn jackpot(&self) -> Count {
        self.game
            .table()
            .rows()
            .filter(|row| row.iter().all(|v| v == &row[0]))
            .count() as Count
    }

    /// Per-roll counts of every face observed anywhere in the table.
    /// Faces a row never produced are counted as 0. Empty for an
    /// unplayed game.
    pub fn face_counts(&self) -> FaceCounts<F> {
        let table = self.game.table();
        if table.is_empty() {
            return FaceCounts::empty();
        }

        let faces = table.observed_faces();
        let mut rows = Vec::with_capacity(table.num_rolls());
        for row in table.rows() {
            let mut counts = vec![0 as Count; faces.len()];
            for value in row {
                // observed_faces is sorted, so every cell is findable
                let index = faces
                    .binary_search(value)
                    .unwrap_or_else(|_| unreachable!("cell absent from face union"));
                counts[index] += 1;
            }
            rows.push(counts);
        }
        FaceCounts { faces, rows }
    }

    /// Distinct order-independent combinations of each roll's faces,
    /// with occurrence counts. Output is sorted by the combination
    /// key. Empty for an unplayed game; counts sum to the roll count.
    pub fn combo_counts(&self) -> Vec<TupleCount<F>> {
        self.group_rows(|row| {
            let mut key = row.to_vec();
            key.sort();
            key
        })
    }

    /// Distinct order-dependent permutations of each roll's faces,
    /// with occurrence counts. Two rolls with the same faces in a
    /// different die order are distinct groups. Output is sorted by
    /// the permutation key.
    pub fn perm_counts(&self) -> Vec<TupleCount<F>> {
        self.group_rows(|row| row.to_vec())
    }

    fn group_rows<K>(&self, key_of: K) -> Vec<TupleCount<F>>
    where
        K: Fn(&[F]) -> Vec<F>,
    {
        let mut groups: BTreeMap<Vec<F>, Count> = BTreeMap::new();
        for row in self.game.table().rows() {
            *groups.entry(key_of(row)).or_insert(0) += 1;
        }
        groups
            .into_iter()
            .map(|(faces, count)| TupleCount { faces, count })
            .collect()
    }
}
