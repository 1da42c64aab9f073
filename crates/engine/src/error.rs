// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine errors.
use thiserror::Error;

use crate::{Chips, PlayerAction, Street};

/// Engine result type.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors returned by the table engine.
///
/// An operation that returns an error leaves the table state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The table configuration is not valid.
    #[error("Invalid table config: {0}")]
    InvalidConfig(&'static str),
    /// The number of players doesn't match the table seats.
    #[error("Expected {seats} players, got {players}")]
    SeatCountMismatch {
        /// The table seats.
        seats: usize,
        /// The number of players.
        players: usize,
    },
    /// Fewer than two players have chips.
    #[error("Not enough players with chips to start a hand")]
    NotEnoughPlayers,
    /// A hand is already in progress.
    #[error("Hand in progress")]
    HandInProgress,
    /// There is no hand in progress.
    #[error("No hand in progress")]
    NoHandInProgress,
    /// The action is not legal for the player to act.
    #[error("Illegal action {action} for player at seat {seat}")]
    IllegalAction {
        /// The rejected action.
        action: PlayerAction,
        /// The seat of the player to act.
        seat: usize,
    },
    /// A raise without an amount.
    #[error("Raise amount missing")]
    MissingRaiseAmount,
    /// A raise that doesn't exceed the current bet.
    #[error("Raise to {amount} must exceed the current bet {current_bet}")]
    RaiseTooSmall {
        /// The requested raise amount.
        amount: Chips,
        /// The table current bet.
        current_bet: Chips,
    },
    /// The river has been dealt already.
    #[error("No more streets to deal after the river")]
    NoMoreStreets,
    /// Hands can only be evaluated after the river.
    #[error("Cannot evaluate hands on the {0}")]
    NotAtShowdown(Street),
    /// The hand has not been decided yet.
    #[error("Hand not finished")]
    HandNotFinished,
    /// The deck has no cards left.
    #[error("Deck exhausted")]
    DeckExhausted,
}
