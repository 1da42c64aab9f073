// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions types.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Chips;

/// A Player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Player checks.
    Check,
    /// Player calls.
    Call,
    /// Player raises.
    Raise,
    /// Player folds.
    Fold,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Check => "CHECK",
            PlayerAction::Call => "CALL",
            PlayerAction::Raise => "RAISE",
            PlayerAction::Fold => "FOLD",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The legal actions for a player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidActions {
    /// The player can check.
    pub check: bool,
    /// The player can call.
    pub call: bool,
    /// The player can raise.
    pub raise: bool,
    /// The player can fold.
    pub fold: bool,
}

impl ValidActions {
    /// No legal action, used for players that cannot act.
    pub const NONE: ValidActions = ValidActions {
        check: false,
        call: false,
        raise: false,
        fold: false,
    };

    /// Checks if an action is legal.
    pub fn contains(&self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Check => self.check,
            PlayerAction::Call => self.call,
            PlayerAction::Raise => self.raise,
            PlayerAction::Fold => self.fold,
        }
    }

    /// Checks if there is no legal action.
    pub fn is_empty(&self) -> bool {
        self == &Self::NONE
    }

    /// Returns the legal actions.
    pub fn to_vec(&self) -> Vec<PlayerAction> {
        [
            PlayerAction::Check,
            PlayerAction::Call,
            PlayerAction::Raise,
            PlayerAction::Fold,
        ]
        .into_iter()
        .filter(|a| self.contains(*a))
        .collect()
    }
}

/// The raise amounts accepted from the player to act.
///
/// Amounts are the player total bet for the street after the raise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RaiseBounds {
    /// The smallest legal raise.
    pub min: Chips,
    /// A suggested raise, the current bet plus a big blind.
    pub default: Chips,
    /// The largest raise, all the player chips.
    pub max: Chips,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_actions_contains() {
        let actions = ValidActions {
            check: false,
            call: true,
            raise: true,
            fold: true,
        };

        assert!(!actions.contains(PlayerAction::Check));
        assert!(actions.contains(PlayerAction::Call));
        assert!(actions.contains(PlayerAction::Raise));
        assert!(actions.contains(PlayerAction::Fold));
        assert!(!actions.is_empty());
        assert_eq!(
            actions.to_vec(),
            vec![PlayerAction::Call, PlayerAction::Raise, PlayerAction::Fold]
        );

        assert!(ValidActions::NONE.is_empty());
        assert!(ValidActions::NONE.to_vec().is_empty());
        assert_eq!(PlayerAction::Raise.to_string(), "RAISE");
    }
}
