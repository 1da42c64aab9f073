// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em betting engine.
//!
//! A [Table] seats from 2 to 10 players, deals the hole cards and the board,
//! validates the players actions, and pays the pot at the end of each hand:
//!
//! ```
//! # use holdem_engine::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let config = TableConfig {
//!     seats: 2,
//!     small_blind: Chips::new(10),
//! };
//!
//! let mut table = Table::with_rng(config, StdRng::seed_from_u64(1)).unwrap();
//! table.initialize_game(&["Alice", "Bob"], Chips::new(1_000)).unwrap();
//! table.start_new_hand().unwrap();
//! assert_eq!(table.pot(), Chips::new(30));
//!
//! // The small blind folds and the big blind wins the pot.
//! table.process_action(PlayerAction::Fold, None).unwrap();
//! let payoffs = table.end_hand().unwrap();
//! assert_eq!(payoffs[0].chips, Chips::new(30));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod action;
mod chips;
mod error;
mod player;
mod street;
mod table;

pub use action::{PlayerAction, RaiseBounds, ValidActions};
pub use chips::Chips;
pub use error::{EngineError, Result};
pub use player::Player;
pub use street::Street;
pub use table::{HandPayoff, ShowdownHand, Table, TableConfig};

// Reexport cards and evaluator types.
pub use holdem_eval::{Card, HandRank, HandValue};
