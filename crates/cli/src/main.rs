// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em table simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use holdem_cli::{CallingStation, RandomBot};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    /// Call every bet.
    Calling,
    /// Random legal actions.
    Random,
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at the table.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// The small blind, the big blind is twice this amount.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    small_blind: u32,
    /// Starting chips for each player.
    #[clap(long, default_value_t = 1_000, value_parser = clap::value_parser!(u32).range(1..))]
    chips: u32,
    /// Number of hands to play.
    #[clap(long, default_value_t = 10)]
    hands: usize,
    /// Seed for reproducible games.
    #[clap(long)]
    seed: Option<u64>,
    /// The players strategy.
    #[clap(long, value_enum, default_value_t = StrategyKind::Random)]
    strategy: StrategyKind,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = holdem_cli::Config {
        players: cli.players as usize,
        small_blind: cli.small_blind.into(),
        chips: cli.chips.into(),
        hands: cli.hands,
        seed: cli.seed,
    };

    match cli.strategy {
        StrategyKind::Calling => holdem_cli::run(&config, |_| CallingStation)?,
        StrategyKind::Random => holdem_cli::run(&config, |seat| {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(seat as u64 + 1)),
                None => StdRng::from_os_rng(),
            };

            RandomBot::new(rng)
        })?,
    };

    Ok(())
}
