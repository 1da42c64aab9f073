// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table state and betting rounds.
use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use holdem_cards::{Card, Deck};
use holdem_eval::HandValue;

use crate::{
    Chips, EngineError, Player, PlayerAction, RaiseBounds, Result, Street, ValidActions,
};

/// The table configuration, fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of seats at the table.
    pub seats: usize,
    /// The small blind, the big blind is twice this amount.
    pub small_blind: Chips,
}

impl TableConfig {
    /// The maximum number of seats.
    pub const MAX_SEATS: usize = 10;

    /// The big blind amount.
    pub fn big_blind(&self) -> Chips {
        self.small_blind * 2
    }

    fn validate(&self) -> Result<()> {
        if !(2..=Self::MAX_SEATS).contains(&self.seats) {
            return Err(EngineError::InvalidConfig("seats must be between 2 and 10"));
        }

        if self.small_blind == Chips::ZERO {
            return Err(EngineError::InvalidConfig("small blind must be at least 1"));
        }

        Ok(())
    }
}

/// A player hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownHand {
    /// The player seat.
    pub seat: usize,
    /// The player name.
    pub name: String,
    /// The best hand made with the hole cards and the board.
    pub value: HandValue,
}

impl ShowdownHand {
    /// The hand score, lower is stronger.
    pub fn score(&self) -> u16 {
        self.value.score()
    }
}

/// The chips a player won at the end of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandPayoff {
    /// The winner seat.
    pub seat: usize,
    /// The chips won.
    pub chips: Chips,
    /// The winning five cards, empty if the hand ended without a showdown.
    pub cards: Vec<Card>,
}

/// A poker table.
///
/// The table owns the players, the deck, and the hand state, it is driven by a
/// single caller that asks for the [valid actions](Table::valid_actions) of
/// the player to act, submits an action with [Table::process_action], and deals
/// the next street or ends the hand once the betting is complete.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    current_bet: Chips,
    dealer_idx: usize,
    current_player_idx: usize,
    street: Street,
    hand_in_progress: bool,
    rng: StdRng,
}

impl Table {
    /// Creates a new table.
    pub fn new(config: TableConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new table with user initialized randomness.
    pub fn with_rng(config: TableConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            players: Vec::with_capacity(config.seats),
            deck: Deck::new_and_shuffled(&mut rng),
            board: Vec::with_capacity(5),
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            dealer_idx: 0,
            current_player_idx: 0,
            street: Street::Preflop,
            hand_in_progress: false,
            rng,
        })
    }

    /// Seats one player for each name with the given chips and picks a random
    /// dealer.
    pub fn initialize_game<S: AsRef<str>>(&mut self, names: &[S], chips: Chips) -> Result<()> {
        if names.len() != self.config.seats {
            return Err(EngineError::SeatCountMismatch {
                seats: self.config.seats,
                players: names.len(),
            });
        }

        self.players = names.iter().map(|n| Player::new(n.as_ref(), chips)).collect();
        self.dealer_idx = self.rng.random_range(0..self.players.len());
        self.current_player_idx = (self.dealer_idx + 1) % self.players.len();
        self.board.clear();
        self.pot = Chips::ZERO;
        self.current_bet = Chips::ZERO;
        self.street = Street::Preflop;
        self.hand_in_progress = false;

        info!(
            "Game initialized with {} players, {chips} chips each, dealer {}",
            self.players.len(),
            self.players[self.dealer_idx].name()
        );

        Ok(())
    }

    /// Starts a new hand, deals the hole cards and posts the blinds.
    pub fn start_new_hand(&mut self) -> Result<()> {
        if self.hand_in_progress {
            return Err(EngineError::HandInProgress);
        }

        let in_hand = self.count_with_chips();
        if in_hand < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        // Draw all the hole cards before changing any state.
        let mut deck = Deck::new_and_shuffled(&mut self.rng);
        let hole_cards = deck.draw(in_hand * 2).ok_or(EngineError::DeckExhausted)?;

        self.deck = deck;
        self.board.clear();
        self.pot = Chips::ZERO;
        self.current_bet = Chips::ZERO;
        self.street = Street::Preflop;

        // Players that run out of chips sit out the hand.
        for player in &mut self.players {
            player.reset_hand();
            if player.chips() == Chips::ZERO {
                player.fold();
            }
        }

        // Deal two passes starting from the player after the dealer.
        let seats = self.players.len();
        let mut hole_cards = hole_cards.into_iter();
        for _ in 0..2 {
            for offset in 1..=seats {
                let player = &mut self.players[(self.dealer_idx + offset) % seats];
                if !player.is_folded() {
                    if let Some(card) = hole_cards.next() {
                        player.deal(card);
                    }
                }
            }
        }

        // Pay small and big blind, there are at least two players in the hand.
        let sb_idx = self.next_seat(self.dealer_idx, |p| !p.is_folded());
        let bb_idx = self.next_seat(sb_idx, |p| !p.is_folded());
        self.pot += self.players[sb_idx].bet(self.config.small_blind);
        self.pot += self.players[bb_idx].bet(self.config.big_blind());
        self.current_bet = self.config.big_blind();

        self.current_player_idx = self.next_seat(bb_idx, Player::can_act);
        self.hand_in_progress = true;

        info!(
            "Start hand dealer {} small blind {} big blind {} pot {}",
            self.players[self.dealer_idx].name(),
            self.players[sb_idx].name(),
            self.players[bb_idx].name(),
            self.pot
        );

        Ok(())
    }

    /// Deals the flop, turn, or river and starts a new betting round.
    pub fn deal_next_street(&mut self) -> Result<()> {
        if !self.hand_in_progress {
            return Err(EngineError::NoHandInProgress);
        }

        let next = self.street.next().ok_or(EngineError::NoMoreStreets)?;
        let count = next.board_len() - self.street.board_len();
        let cards = self.deck.draw(count).ok_or(EngineError::DeckExhausted)?;

        self.board.extend(cards);
        self.street = next;
        self.current_bet = Chips::ZERO;
        for player in &mut self.players {
            player.start_street();
        }

        self.current_player_idx = self.next_seat(self.dealer_idx, Player::can_act);

        info!("Deal {} board {}", self.street, format_cards(&self.board));

        Ok(())
    }

    /// Returns the legal actions for a player.
    pub fn valid_actions(&self, player: &Player) -> ValidActions {
        if !self.hand_in_progress || !player.can_act() {
            return ValidActions::NONE;
        }

        let check = player.current_bet() == self.current_bet;
        ValidActions {
            check,
            call: player.chips() > Chips::ZERO && player.current_bet() < self.current_bet,
            raise: player.chips() > self.current_bet,
            fold: !check,
        }
    }

    /// Applies an action for the player to act and moves to the next player.
    ///
    /// The `amount` is the player total bet for the street and it is only used
    /// by [PlayerAction::Raise]. Bets larger than the player chips are reduced to
    /// an all in.
    pub fn process_action(&mut self, action: PlayerAction, amount: Option<Chips>) -> Result<()> {
        if !self.hand_in_progress {
            return Err(EngineError::NoHandInProgress);
        }

        let seat = self.current_player_idx;
        let valid = self.valid_actions(&self.players[seat]);
        if !valid.contains(action) {
            warn!(
                "Rejected {action} from {}, valid actions {:?}",
                self.players[seat].name(),
                valid.to_vec()
            );
            return Err(EngineError::IllegalAction { action, seat });
        }

        let current_bet = self.current_bet;
        let amount = match (action, amount) {
            (PlayerAction::Raise, None) => return Err(EngineError::MissingRaiseAmount),
            (PlayerAction::Raise, Some(amount)) if amount <= current_bet => {
                return Err(EngineError::RaiseTooSmall {
                    amount,
                    current_bet,
                });
            }
            (PlayerAction::Raise, Some(amount)) => amount,
            _ => current_bet,
        };

        let player = &mut self.players[seat];
        match action {
            PlayerAction::Fold => player.fold(),
            PlayerAction::Check => {}
            PlayerAction::Call | PlayerAction::Raise => {
                self.pot += player.bet(amount);
                self.current_bet = self.current_bet.max(player.current_bet());
            }
        }

        player.set_acted();

        debug!(
            "{} {action} bet {} chips {}{} pot {}",
            player.name(),
            player.current_bet(),
            player.chips(),
            if player.is_all_in() { " all in" } else { "" },
            self.pot
        );

        self.current_player_idx = self.next_seat(seat, Player::can_act);

        Ok(())
    }

    /// Checks if every player in the hand has matched the bet.
    ///
    /// The round is complete if at most one player has not folded, or if each
    /// player has folded, is all in, or has bet the current bet.
    pub fn is_round_complete(&self) -> bool {
        if self.count_in_hand() <= 1 {
            return true;
        }

        self.players
            .iter()
            .all(|p| p.current_bet() == self.current_bet || p.is_folded() || p.is_all_in())
    }

    /// Checks if the betting round is closed.
    ///
    /// In addition to [Table::is_round_complete] every player that can bet must
    /// have acted on this street, unless fewer than two players can bet.
    pub fn is_betting_complete(&self) -> bool {
        if !self.is_round_complete() {
            return false;
        }

        if self.count_in_hand() <= 1 {
            return true;
        }

        let can_act = self
            .players
            .iter()
            .filter(|p| p.can_act())
            .collect::<Vec<_>>();
        can_act.len() < 2 || can_act.iter().all(|p| p.has_acted())
    }

    /// Evaluates the hands of the players that have not folded.
    ///
    /// Hands are sorted by score with the strongest hand first.
    pub fn evaluate_hands(&self) -> Result<Vec<ShowdownHand>> {
        if !self.hand_in_progress {
            return Err(EngineError::NoHandInProgress);
        }

        if self.street != Street::River {
            return Err(EngineError::NotAtShowdown(self.street));
        }

        let mut hands = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(seat, p)| {
                let mut cards = p.cards().to_vec();
                cards.extend_from_slice(&self.board);
                ShowdownHand {
                    seat,
                    name: p.name().to_string(),
                    value: HandValue::eval(&cards),
                }
            })
            .collect::<Vec<_>>();

        hands.sort_by_key(ShowdownHand::score);
        Ok(hands)
    }

    /// Pays the pot to the winners, moves the button, and ends the hand.
    ///
    /// The hand can end when a single player has not folded or when the river
    /// betting is complete. A pot split between players with the same hand
    /// gives the odd chips to the first winners after the dealer.
    pub fn end_hand(&mut self) -> Result<Vec<HandPayoff>> {
        if !self.hand_in_progress {
            return Err(EngineError::NoHandInProgress);
        }

        let payoffs = if self.count_in_hand() == 1 {
            let seat = self.next_seat(self.dealer_idx, |p| !p.is_folded());
            vec![HandPayoff {
                seat,
                chips: self.pot,
                cards: Vec::default(),
            }]
        } else if self.street == Street::River && self.is_betting_complete() {
            self.showdown_payoffs()?
        } else {
            return Err(EngineError::HandNotFinished);
        };

        for payoff in &payoffs {
            self.players[payoff.seat].win(payoff.chips);
            info!(
                "{} wins {} {}",
                self.players[payoff.seat].name(),
                payoff.chips,
                format_cards(&payoff.cards)
            );
        }

        self.pot = Chips::ZERO;
        self.current_bet = Chips::ZERO;
        self.hand_in_progress = false;
        for player in &mut self.players {
            player.end_hand();
        }

        // Move the button to the next player that can play.
        self.dealer_idx = self.next_seat(self.dealer_idx, |p| p.chips() > Chips::ZERO);

        Ok(payoffs)
    }

    fn showdown_payoffs(&self) -> Result<Vec<HandPayoff>> {
        let hands = self.evaluate_hands()?;
        let best = hands.first().map(ShowdownHand::score).unwrap_or_default();

        // Winners ordered by seat starting from the player after the dealer.
        let seats = self.players.len();
        let mut winners = hands
            .into_iter()
            .filter(|h| h.score() == best)
            .collect::<Vec<_>>();
        winners.sort_by_key(|h| (h.seat + seats - self.dealer_idx - 1) % seats);

        let count = winners.len() as u32;
        let share = self.pot / count;
        let odd_chips = (self.pot % count).amount() as usize;

        Ok(winners
            .into_iter()
            .enumerate()
            .map(|(idx, h)| HandPayoff {
                seat: h.seat,
                chips: if idx < odd_chips {
                    share + Chips::new(1)
                } else {
                    share
                },
                cards: h.value.hand().to_vec(),
            })
            .collect())
    }

    /// Returns the first seat after `from` whose player satisfies `pred`.
    ///
    /// Seats are visited in order wrapping around, `from` is visited last and
    /// returned if no player satisfies the predicate.
    fn next_seat<P>(&self, from: usize, pred: P) -> usize
    where
        P: Fn(&Player) -> bool,
    {
        let seats = self.players.len();
        (1..=seats)
            .map(|offset| (from + offset) % seats)
            .find(|&idx| pred(&self.players[idx]))
            .unwrap_or(from)
    }

    /// The raise amounts for the player to act, `None` if the player cannot
    /// raise.
    pub fn raise_bounds(&self) -> Option<RaiseBounds> {
        let player = self.current_player()?;
        if !self.valid_actions(player).raise {
            return None;
        }

        let max = player.current_bet() + player.chips();
        Some(RaiseBounds {
            min: self.current_bet + Chips::new(1),
            default: (self.current_bet + self.config.big_blind()).min(max),
            max,
        })
    }

    /// The player to act.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_idx)
    }

    /// The player at the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// All the players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players that have not folded.
    pub fn count_in_hand(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    /// Number of players with chips.
    pub fn count_with_chips(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.chips() > Chips::ZERO)
            .count()
    }

    /// The chips in the pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The bet to match on this street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The board cards.
    pub fn community_cards(&self) -> &[Card] {
        &self.board
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The dealer seat.
    pub fn dealer_idx(&self) -> usize {
        self.dealer_idx
    }

    /// The seat of the player to act.
    pub fn current_player_idx(&self) -> usize {
        self.current_player_idx
    }

    /// The small blind.
    pub fn small_blind(&self) -> Chips {
        self.config.small_blind
    }

    /// The big blind.
    pub fn big_blind(&self) -> Chips {
        self.config.big_blind()
    }

    /// Checks if a hand has started and not ended.
    pub fn is_hand_in_progress(&self) -> bool {
        self.hand_in_progress
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
