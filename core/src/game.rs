//! The game — owner of the dice and the current roll table.
//!
//! RULES:
//!   - Dice roll in slot order, every play.
//!   - Each slot draws from its own deterministic RNG stream.
//!   - `play` replaces the prior table wholesale, never appends.
//!   - All randomness flows through the RngBank.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::die::Die;
use crate::error::{McError, McResult};
use crate::rng::RngBank;
use crate::table::{NarrowRow, RollTable};
use crate::types::{Face, Slot};

#[derive(Debug)]
pub struct Game<F: Face> {
    dice: Vec<Die<F>>,
    rng_bank: RngBank,
    plays: u64,
    table: RollTable<F>,
}

/// Layout selector for `Game::view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    Wide,
    Narrow,
}

impl FromStr for TableLayout {
    type Err = McError;

    fn from_str(s: &str) -> McResult<Self> {
        match s {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            other => Err(McError::invalid_input(format!(
                "unknown table layout '{other}', expected 'wide' or 'narrow'"
            ))),
        }
    }
}

/// The result of `Game::view` — the wide table as-is, or the
/// long-format narrow projection.
#[derive(Debug)]
pub enum TableView<'a, F: Face> {
    Wide(&'a RollTable<F>),
    Narrow(Vec<NarrowRow<F>>),
}

impl<F: Face> Game<F> {
    /// Build a game over an ordered, non-empty dice collection.
    /// The table starts empty; the seed feeds every slot's RNG stream.
    pub fn new(dice: Vec<Die<F>>, seed: u64) -> McResult<Self> {
        if dice.is_empty() {
            return Err(McError::invalid_input("a game needs at least one die"));
        }
        Ok(Self {
            dice,
            rng_bank: RngBank::new(seed),
            plays: 0,
            table: RollTable::empty(),
        })
    }

    /// Roll every die `num_rolls` times and replace the roll table.
    ///
    /// Fails with `InvalidInput` for zero rolls; on failure the prior
    /// table is completely unchanged. Each die slot draws from its own
    /// stream, derived from (seed, slot, play counter), so replaying
    /// the same game produces fresh outcomes.
    pub fn play(&mut self, num_rolls: usize) -> McResult<()> {
        if num_rolls == 0 {
            return Err(McError::invalid_input(
                "number of rolls must be a positive integer",
            ));
        }

        let mut columns = Vec::with_capacity(self.dice.len());
        for (slot, die) in self.dice.iter().enumerate() {
            let mut rng = self.rng_bank.for_slot_at_play(slot, self.plays);
            columns.push(die.roll(num_rolls, &mut rng)?);
        }

        self.table = RollTable::from_columns(columns);
        self.plays += 1;
        log::debug!(
            "play={} game: rolled {num_rolls} rows across {} dice",
            self.plays,
            self.dice.len()
        );
        Ok(())
    }

    /// The most recent play in the requested layout. Empty before the
    /// first play; never an error.
    pub fn view(&self, layout: TableLayout) -> TableView<'_, F> {
        match layout {
            TableLayout::Wide => TableView::Wide(&self.table),
            TableLayout::Narrow => TableView::Narrow(self.table.narrow_rows()),
        }
    }

    /// The current roll table (wide form).
    pub fn table(&self) -> &RollTable<F> {
        &self.table
    }

    /// Mutable access to the table, for tests and tooling that need to
    /// pin specific rows. `play` still replaces the whole table.
    pub fn table_mut(&mut self) -> &mut RollTable<F> {
        &mut self.table
    }

    pub fn dice(&self) -> &[Die<F>] {
        &self.dice
    }

    /// Mutable access to one die, e.g. to reweight it between plays.
    pub fn die_mut(&mut self, slot: Slot) -> Option<&mut Die<F>> {
        self.dice.get_mut(slot)
    }

    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }
}
