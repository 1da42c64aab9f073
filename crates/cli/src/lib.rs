// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em table simulator.
//!
//! Plays a number of hands at a [Table] where each seat is played by a
//! [Strategy], the hands are logged as they are played.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};

use holdem_engine::{Chips, HandPayoff, PlayerAction, Street, Table, TableConfig};

mod strategy;
pub use strategy::{CallingStation, RandomBot, Strategy};

/// Simulator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// The small blind.
    pub small_blind: Chips,
    /// Starting chips for each player.
    pub chips: Chips,
    /// Number of hands to play.
    pub hands: usize,
    /// Seed for reproducible games.
    pub seed: Option<u64>,
}

/// The result of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of hands played.
    pub hands: usize,
    /// Players names and chips in seat order.
    pub chips: Vec<(String, Chips)>,
}

static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Frank", "Mike", "Nina", "Oscar", "Paul", "Rose",
];

/// Plays the configured hands with a strategy for each seat.
///
/// The factory is called with the seat index. The simulation stops early when
/// fewer than two players have chips.
pub fn run<F, S>(config: &Config, mut factory: F) -> Result<Summary>
where
    F: FnMut(usize) -> S,
    S: Strategy,
{
    if config.players > NICKNAMES.len() {
        bail!("Too many players {}", config.players);
    }

    let table_config = TableConfig {
        seats: config.players,
        small_blind: config.small_blind,
    };

    let mut table = match config.seed {
        Some(seed) => Table::with_rng(table_config, StdRng::seed_from_u64(seed))?,
        None => Table::new(table_config)?,
    };

    table.initialize_game(&NICKNAMES[..config.players], config.chips)?;
    let mut strategies = (0..config.players).map(&mut factory).collect::<Vec<_>>();

    let mut hands = 0;
    while hands < config.hands {
        if table.count_with_chips() < 2 {
            info!("Not enough players with chips, stopping");
            break;
        }

        hands += 1;
        info!("Hand {hands}");

        for payoff in play_hand(&mut table, &mut strategies)? {
            let winner = &table.players()[payoff.seat];
            info!(
                "Hand {hands} won by {} {} chips now {}",
                winner.name(),
                payoff.chips,
                winner.chips()
            );
        }
    }

    let chips = table
        .players()
        .iter()
        .map(|p| (p.name().to_string(), p.chips()))
        .collect::<Vec<_>>();

    for (name, chips) in &chips {
        info!("{name} has {chips} chips");
    }

    Ok(Summary { hands, chips })
}

/// Plays a hand until a single player is left or the river betting completes.
fn play_hand<S: Strategy>(table: &mut Table, strategies: &mut [S]) -> Result<Vec<HandPayoff>> {
    table.start_new_hand()?;

    loop {
        if table.count_in_hand() == 1 {
            break;
        }

        if table.is_betting_complete() {
            if table.street() == Street::River {
                break;
            }

            table.deal_next_street()?;
            continue;
        }

        let seat = table.current_player_idx();
        let Some(player) = table.current_player() else {
            bail!("No player at seat {seat}");
        };

        let actions = table.valid_actions(player);
        let (action, amount) = strategies[seat].execute(&actions, table);
        if let Err(e) = table.process_action(action, amount) {
            // Fallback to the most passive legal action.
            let action = if actions.check {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };

            warn!("Seat {seat} {e}, playing {action}");
            table.process_action(action, None)?;
        }
    }

    Ok(table.end_hand()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::ValidActions;

    fn config(players: usize, chips: u32, hands: usize) -> Config {
        Config {
            players,
            small_blind: Chips::new(10),
            chips: Chips::new(chips),
            hands,
            seed: Some(42),
        }
    }

    fn total(summary: &Summary) -> Chips {
        summary.chips.iter().map(|(_, c)| *c).sum()
    }

    /// Moves all in whenever possible.
    struct AllIn;

    impl Strategy for AllIn {
        fn execute(
            &mut self,
            actions: &ValidActions,
            table: &Table,
        ) -> (PlayerAction, Option<Chips>) {
            match table.raise_bounds() {
                Some(bounds) => (PlayerAction::Raise, Some(bounds.max)),
                None if actions.call => (PlayerAction::Call, None),
                None => (PlayerAction::Check, None),
            }
        }
    }

    /// Always raises without an amount.
    struct BadRaise;

    impl Strategy for BadRaise {
        fn execute(&mut self, _: &ValidActions, _: &Table) -> (PlayerAction, Option<Chips>) {
            (PlayerAction::Raise, None)
        }
    }

    #[test]
    fn calling_stations_keep_all_chips() {
        let summary = run(&config(4, 1_000, 20), |_| CallingStation).unwrap();
        assert_eq!(summary.hands, 20);
        assert_eq!(summary.chips.len(), 4);
        assert_eq!(summary.chips[0].0, "Alice");
        assert_eq!(total(&summary), Chips::new(4_000));
    }

    #[test]
    fn random_bots_same_seed_same_game() {
        let play = || {
            run(&config(6, 500, 30), |seat| {
                RandomBot::new(StdRng::seed_from_u64(seat as u64))
            })
            .unwrap()
        };

        let summary = play();
        assert_eq!(summary, play());
        assert_eq!(total(&summary), Chips::new(3_000));
    }

    #[test]
    fn stops_when_one_player_has_chips() {
        let summary = run(&config(2, 100, 1_000), |_| AllIn).unwrap();
        assert!(summary.hands < 1_000);
        assert!(summary.chips.iter().any(|(_, c)| *c == Chips::ZERO));
        assert_eq!(total(&summary), Chips::new(200));
    }

    #[test]
    fn rejected_actions_fall_back() {
        let summary = run(&config(3, 1_000, 5), |_| BadRaise).unwrap();
        assert_eq!(summary.hands, 5);
        assert_eq!(total(&summary), Chips::new(3_000));
    }

    #[test]
    fn too_many_players() {
        let mut config = config(11, 1_000, 1);
        assert!(run(&config, |_| CallingStation).is_err());

        config.players = 1;
        assert!(run(&config, |_| CallingStation).is_err());
    }
}
