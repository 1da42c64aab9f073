// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use holdem_cards::Card;

use crate::Chips;

/// A table player state.
///
/// Players are mutated only by the [Table](crate::Table), callers observe
/// them through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: Chips,
    cards: Vec<Card>,
    current_bet: Chips,
    total_bet: Chips,
    is_folded: bool,
    is_all_in: bool,
    has_acted: bool,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            cards: Vec::with_capacity(2),
            current_bet: Chips::ZERO,
            total_bet: Chips::ZERO,
            is_folded: false,
            is_all_in: false,
            has_acted: false,
        }
    }

    /// This player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This player chips.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// This player hole cards, empty or two cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The chips committed on the current street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The chips committed in the current hand.
    pub fn total_bet(&self) -> Chips {
        self.total_bet
    }

    /// The player folded this hand.
    pub fn is_folded(&self) -> bool {
        self.is_folded
    }

    /// The player has no chips left to bet this hand.
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }

    /// The player has acted on the current street.
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }

    /// The player is in the hand and can still bet.
    pub fn can_act(&self) -> bool {
        !self.is_folded && !self.is_all_in
    }

    /// Updates this player bet to the given street total.
    ///
    /// A player that doesn't have enough chips goes all in, returns the chips
    /// moved from the player stack.
    pub(crate) fn bet(&mut self, chips: Chips) -> Chips {
        // How much to bet considering previous bets.
        let remainder = (chips - self.current_bet).min(self.chips);

        self.chips -= remainder;
        self.current_bet += remainder;
        self.total_bet += remainder;

        if self.chips == Chips::ZERO {
            self.is_all_in = true;
        }

        remainder
    }

    /// Sets this player in fold state.
    pub(crate) fn fold(&mut self) {
        self.is_folded = true;
    }

    pub(crate) fn set_acted(&mut self) {
        self.has_acted = true;
    }

    pub(crate) fn deal(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn win(&mut self, chips: Chips) {
        self.chips += chips;
    }

    /// Reset state for a new hand.
    pub(crate) fn reset_hand(&mut self) {
        self.cards.clear();
        self.current_bet = Chips::ZERO;
        self.total_bet = Chips::ZERO;
        self.is_folded = false;
        self.is_all_in = false;
        self.has_acted = false;
    }

    /// Reset state for a new street.
    pub(crate) fn start_street(&mut self) {
        self.current_bet = Chips::ZERO;
        self.has_acted = false;
    }

    #[cfg(test)]
    pub(crate) fn set_cards(&mut self, cards: &[Card]) {
        self.cards = cards.to_vec();
    }

    /// Clears hand state once the hand has been paid.
    pub(crate) fn end_hand(&mut self) {
        self.cards.clear();
        self.current_bet = Chips::ZERO;
        self.total_bet = Chips::ZERO;
        self.has_acted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_moves_remainder() {
        let mut p = Player::new("Alice", Chips::new(1_000));
        assert_eq!(p.bet(Chips::new(20)), Chips::new(20));
        assert_eq!(p.chips(), Chips::new(980));
        assert_eq!(p.current_bet(), Chips::new(20));

        // Raising to 60 only moves the difference.
        assert_eq!(p.bet(Chips::new(60)), Chips::new(40));
        assert_eq!(p.chips(), Chips::new(940));
        assert_eq!(p.current_bet(), Chips::new(60));
        assert_eq!(p.total_bet(), Chips::new(60));
        assert!(!p.is_all_in());

        // A new street keeps the hand total.
        p.start_street();
        assert_eq!(p.current_bet(), Chips::ZERO);
        assert_eq!(p.bet(Chips::new(10)), Chips::new(10));
        assert_eq!(p.total_bet(), Chips::new(70));
    }

    #[test]
    fn bet_more_than_chips_goes_all_in() {
        let mut p = Player::new("Bob", Chips::new(50));
        assert_eq!(p.bet(Chips::new(200)), Chips::new(50));
        assert_eq!(p.chips(), Chips::ZERO);
        assert_eq!(p.current_bet(), Chips::new(50));
        assert!(p.is_all_in());
        assert!(!p.can_act());
    }

    #[test]
    fn reset_hand_clears_flags() {
        let mut p = Player::new("Carol", Chips::new(100));
        p.deal("AH".parse().unwrap());
        p.deal("KH".parse().unwrap());
        p.bet(Chips::new(100));
        p.fold();
        p.set_acted();
        assert_eq!(p.cards().len(), 2);

        p.reset_hand();
        assert!(p.cards().is_empty());
        assert!(!p.is_folded());
        assert!(!p.is_all_in());
        assert!(!p.has_acted());
        assert_eq!(p.current_bet(), Chips::ZERO);
        assert_eq!(p.total_bet(), Chips::ZERO);
        assert_eq!(p.chips(), Chips::ZERO);
    }

    #[test]
    fn end_hand_returns_cards() {
        let mut p = Player::new("Dave", Chips::new(100));
        p.deal("AH".parse().unwrap());
        p.deal("KH".parse().unwrap());
        p.bet(Chips::new(40));
        p.set_acted();
        p.win(Chips::new(80));

        p.end_hand();
        assert!(p.cards().is_empty());
        assert!(!p.has_acted());
        assert_eq!(p.current_bet(), Chips::ZERO);
        assert_eq!(p.total_bet(), Chips::ZERO);
        assert_eq!(p.chips(), Chips::new(140));
    }
}
