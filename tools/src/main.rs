//! mc-runner: headless weighted-die Monte Carlo runner.
//!
//! Usage:
//!   mc-runner --seed 12345 --sides 6 --dice 5 --rolls 1000
//!   mc-runner --seed 12345 --weight 6:50 --layout narrow
//!
//! Builds a game of identical dice, applies any face reweights, plays
//! one batch and prints the table view plus all derived statistics as
//! a single JSON document on stdout.

use anyhow::{bail, Context, Result};
use montecarlo_core::{Analyzer, Die, FaceCounts, Game, TableLayout, TableView, TupleCount};
use std::env;
use std::str::FromStr;

#[derive(serde::Serialize)]
struct Report {
    seed: u64,
    rolls: usize,
    dice: usize,
    shape: (usize, usize),
    layout: TableLayout,
    table: serde_json::Value,
    jackpots: u64,
    face_counts: FaceCounts<u32>,
    combo_counts: Vec<TupleCount<u32>>,
    perm_counts: Vec<TupleCount<u32>>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let sides = parse_arg(&args, "--sides", 6u32);
    let num_dice = parse_arg(&args, "--dice", 5usize);
    let rolls = parse_arg(&args, "--rolls", 1000usize);
    let layout = args
        .windows(2)
        .find(|w| w[0] == "--layout")
        .map(|w| TableLayout::from_str(&w[1]))
        .transpose()?
        .unwrap_or(TableLayout::Wide);

    let mut die = Die::uniform(sides)?;
    for (face, weight) in parse_weights(&args)? {
        die.set_weight(&face, weight)?;
    }

    let mut game = Game::new(vec![die; num_dice], seed)?;
    log::info!("seed={seed} runner: playing {rolls} rolls across {num_dice} d{sides}");
    game.play(rolls)?;

    let analyzer = Analyzer::new(&game);
    let table = match game.view(layout) {
        TableView::Wide(table) => serde_json::to_value(table)?,
        TableView::Narrow(rows) => serde_json::to_value(rows)?,
    };
    let report = Report {
        seed,
        rolls,
        dice: num_dice,
        shape: game.table().shape(),
        layout,
        table,
        jackpots: analyzer.jackpot(),
        face_counts: analyzer.face_counts(),
        combo_counts: analyzer.combo_counts(),
        perm_counts: analyzer.perm_counts(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Scan argv for `flag value`, falling back to a default.
fn parse_arg<T: FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

/// Collect every `--weight FACE:WEIGHT` pair from argv.
fn parse_weights(args: &[String]) -> Result<Vec<(u32, f64)>> {
    let mut out = Vec::new();
    for w in args.windows(2) {
        if w[0] != "--weight" {
            continue;
        }
        let Some((face, weight)) = w[1].split_once(':') else {
            bail!("--weight expects FACE:WEIGHT, got '{}'", w[1]);
        };
        let face: u32 = face
            .parse()
            .with_context(|| format!("invalid face '{face}' in --weight"))?;
        let weight: f64 = weight
            .parse()
            .with_context(|| format!("invalid weight '{weight}' in --weight"))?;
        out.push((face, weight));
    }
    Ok(out)
}
