//! The roll result table and its shared utilities.
//!
//! A rectangular, row-major table: one row per roll, one column per
//! die slot. Built wholesale by `Game::play` and read by the analyzer;
//! it always holds the most recent play only, never a running history.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::{McError, McResult};
use crate::types::{Face, Slot};

#[derive(Debug, Clone, Serialize)]
pub struct RollTable<F: Face> {
    rows: Vec<Vec<F>>,
}

/// One cell of the narrow (long-format) view: (roll, die slot, outcome).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrowRow<F: Face> {
    pub roll_number: usize,
    pub die_number: Slot,
    pub outcome: F,
}

impl<F: Face> RollTable<F> {
    /// The empty, unplayed table.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Assemble a table from per-die outcome columns, all of equal
    /// length. Column order becomes table column order.
    pub fn from_columns(columns: Vec<Vec<F>>) -> Self {
        let num_rows = columns.first().map_or(0, Vec::len);
        debug_assert!(
            columns.iter().all(|c| c.len() == num_rows),
            "all dice must produce the same number of rolls"
        );
        let mut rows = Vec::with_capacity(num_rows);
        for i in 0..num_rows {
            rows.push(columns.iter().map(|c| c[i].clone()).collect());
        }
        Self { rows }
    }

    /// Build a table directly from rows. Fails with `InvalidInput` if
    /// the rows are not all the same width. Used by tests and tooling;
    /// production tables come from `Game::play`.
    pub fn from_rows(rows: Vec<Vec<F>>) -> McResult<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if rows.iter().any(|r| r.len() != width) {
                return Err(McError::invalid_input(
                    "all table rows must have the same width",
                ));
            }
        }
        Ok(Self { rows })
    }

    /// (number of rolls, number of die slots).
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rolls(), self.num_dice())
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, index: usize) -> Option<&[F]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Overwrite one row in place. Fails with `InvalidInput` if the
    /// index is out of range or the width does not match the table.
    pub fn set_row(&mut self, index: usize, values: Vec<F>) -> McResult<()> {
        let width = self.num_dice();
        if index >= self.rows.len() {
            return Err(McError::invalid_input(format!(
                "row index {index} out of range for {} rows",
                self.rows.len()
            )));
        }
        if values.len() != width {
            return Err(McError::invalid_input(format!(
                "row width {} does not match table width {width}",
                values.len()
            )));
        }
        self.rows[index] = values;
        Ok(())
    }

    /// Sorted, deduplicated union of every face observed in the table.
    pub fn observed_faces(&self) -> Vec<F> {
        let set: BTreeSet<&F> = self.rows.iter().flatten().collect();
        set.into_iter().cloned().collect()
    }

    /// Long-format projection: one entry per cell, ordered by roll
    /// number first, die slot second. Empty for an unplayed table.
    pub fn narrow_rows(&self) -> Vec<NarrowRow<F>> {
        let mut out = Vec::with_capacity(self.num_rolls() * self.num_dice());
        for (roll_number, row) in self.rows.iter().enumerate() {
            for (die_number, outcome) in row.iter().enumerate() {
                out.push(NarrowRow {
                    roll_number,
                    die_number,
                    outcome: outcome.clone(),
                });
            }
        }
        out
    }
}
