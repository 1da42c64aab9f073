// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. Hands are ranked using the
//! equivalence classes of the [Cactus Kev's][kevlink] evaluator, there are 7462
//! distinct 5-cards hand values numbered from 1 (royal flush) to 7462 (7-5-4-3-2
//! offsuit), so a lower score is a stronger hand.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its score:
//!
//! ```
//! # use holdem_eval::*;
//! let royal = ["AS", "KS", "QS", "JS", "TS"].map(|c| c.parse::<Card>().unwrap());
//! let worst = ["7H", "5D", "4C", "3S", "2H"].map(|c| c.parse::<Card>().unwrap());
//!
//! let v1 = HandValue::eval(&royal);
//! let v2 = HandValue::eval(&worst);
//! assert_eq!(v1.score(), 1);
//! assert_eq!(v2.score(), 7462);
//! assert!(v1 > v2);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, Rank, Suit};
