// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player strategies.
use rand::{Rng, rngs::StdRng};

use holdem_engine::{Chips, PlayerAction, Table, ValidActions};

/// A strategy that plays for a seat.
pub trait Strategy {
    /// Picks an action given the legal actions and the table state.
    ///
    /// The chips amount is only used for raises.
    fn execute(&mut self, actions: &ValidActions, table: &Table) -> (PlayerAction, Option<Chips>);
}

/// Calls any bet and checks when possible, never folds.
#[derive(Debug, Clone, Default)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn execute(&mut self, actions: &ValidActions, _table: &Table) -> (PlayerAction, Option<Chips>) {
        if actions.call {
            (PlayerAction::Call, None)
        } else if actions.check {
            (PlayerAction::Check, None)
        } else {
            (PlayerAction::Fold, None)
        }
    }
}

/// Picks a random legal action.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    /// Creates a bot that uses the given randomness.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomBot {
    fn execute(&mut self, actions: &ValidActions, table: &Table) -> (PlayerAction, Option<Chips>) {
        let actions = actions.to_vec();
        if actions.is_empty() {
            return (PlayerAction::Fold, None);
        }

        let action = actions[self.rng.random_range(0..actions.len())];
        if action != PlayerAction::Raise {
            return (action, None);
        }

        let amount = table.raise_bounds().map(|bounds| {
            // Go all in once in a while.
            if self.rng.random_ratio(1, 10) {
                bounds.max
            } else {
                let amount = self
                    .rng
                    .random_range(bounds.min.amount()..=bounds.default.amount());
                Chips::new(amount)
            }
        });

        (action, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::TableConfig;
    use rand::SeedableRng;

    fn new_table() -> Table {
        let config = TableConfig {
            seats: 3,
            small_blind: Chips::new(10),
        };
        let mut table = Table::with_rng(config, StdRng::seed_from_u64(3)).unwrap();
        table
            .initialize_game(&["Alice", "Bob", "Carol"], Chips::new(500))
            .unwrap();
        table.start_new_hand().unwrap();
        table
    }

    #[test]
    fn calling_station_calls_or_checks() {
        let table = new_table();
        let mut bot = CallingStation;

        let facing_bet = ValidActions {
            check: false,
            call: true,
            raise: true,
            fold: true,
        };
        assert_eq!(
            bot.execute(&facing_bet, &table),
            (PlayerAction::Call, None)
        );

        let matched = ValidActions {
            check: true,
            call: false,
            raise: true,
            fold: false,
        };
        assert_eq!(bot.execute(&matched, &table), (PlayerAction::Check, None));
    }

    #[test]
    fn random_bot_plays_legal_actions() {
        let table = new_table();
        let player = table.current_player().unwrap();
        let actions = table.valid_actions(player);
        let bounds = table.raise_bounds().unwrap();

        let mut bot = RandomBot::new(StdRng::seed_from_u64(11));
        for _ in 0..200 {
            let (action, amount) = bot.execute(&actions, &table);
            assert!(actions.contains(action));

            if action == PlayerAction::Raise {
                let amount = amount.unwrap();
                assert!(amount >= bounds.min && amount <= bounds.max);
            } else {
                assert!(amount.is_none());
            }
        }
    }
}
