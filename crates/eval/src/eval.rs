// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5 cards hand is reduced to a strength value that packs the hand category
//! with the ranks that break ties inside the category, 6 and 7 cards hands are
//! evaluated by picking the strongest of their 5 cards subsets.
//!
//! The [HandValue::score] maps a strength to its [Cactus Kev's][kevlink]
//! equivalence class, the table that maps strengths to classes is built once by
//! enumerating all distinct 5 cards rank patterns.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use ahash::AHashMap;
use std::{cmp::Ordering, fmt, sync::LazyLock};

use holdem_cards::Card;

/// The number of distinct 5 cards hand values.
pub const DISTINCT_VALUES: usize = 7462;

/// Maps a hand strength to its equivalence class score.
static SCORES: LazyLock<AHashMap<u32, u16>> = LazyLock::new(|| {
    let mut values = Vec::with_capacity(DISTINCT_VALUES);

    for a in 0..13u8 {
        for b in a..13 {
            for c in b..13 {
                for d in c..13 {
                    for e in d..13 {
                        // There are only 4 cards of each rank.
                        if a == e {
                            continue;
                        }

                        let ranks = [a, b, c, d, e];
                        values.push(strength(ranks, false).1);

                        if a < b && b < c && c < d && d < e {
                            values.push(strength(ranks, true).1);
                        }
                    }
                }
            }
        }
    }

    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();

    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| (value, idx as u16 + 1))
        .collect()
});

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No pair.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{s}")
    }
}

/// The value of the best 5 cards hand.
///
/// Values compare by hand strength, the stronger hand compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    rank: HandRank,
    strength: u32,
    hand: [Card; 5],
}

impl HandValue {
    /// Evaluates a 5, 6 or 7 cards hand.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval(cards: &[Card]) -> Self {
        let n = cards.len();
        assert!((5..=7).contains(&n), "5 <= cards <= 7");

        let mut best: Option<HandValue> = None;
        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = Self::eval5(hand);
                            if best.is_none_or(|b| value > b) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        // At least one 5 cards subset was evaluated.
        best.unwrap_or_else(|| Self::eval5([cards[0], cards[1], cards[2], cards[3], cards[4]]))
    }

    fn eval5(hand: [Card; 5]) -> Self {
        let is_flush = hand.iter().fold(0xf, |acc, c| acc & c.suit_bits()) != 0;
        let ranks = hand.map(|c| c.rank_bits());
        let (rank, strength) = strength(ranks, is_flush);
        Self {
            rank,
            strength,
            hand,
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The five cards that make this hand.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The hand equivalence class in 1..=7462, lower is stronger.
    pub fn score(&self) -> u16 {
        SCORES.get(&self.strength).copied().unwrap_or(u16::MAX)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

/// Computes the category and strength of five ranks.
///
/// The strength is the category in bits 20..24 followed by up to five 4-bits
/// ranks ordered by multiplicity and then by rank, a straight only stores its
/// top card.
fn strength(ranks: [u8; 5], is_flush: bool) -> (HandRank, u32) {
    let mut counts = [0u8; 13];
    for r in ranks {
        counts[r as usize] += 1;
    }

    // (count, rank) pairs, highest count first then highest rank.
    let mut groups = (0..13u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let straight_high = if groups.len() == 5 {
        let (hi, lo) = (groups[0].1, groups[4].1);
        if hi - lo == 4 {
            Some(hi)
        } else if hi == 12 && groups[1].1 == 3 {
            // The wheel, the ace plays low.
            Some(3)
        } else {
            None
        }
    } else {
        None
    };

    let first = groups[0].0;
    let second = groups.get(1).map(|g| g.0).unwrap_or_default();
    let rank = match (straight_high, is_flush, first, second) {
        (Some(_), true, _, _) => HandRank::StraightFlush,
        (_, _, 4, _) => HandRank::FourOfAKind,
        (_, _, 3, 2) => HandRank::FullHouse,
        (_, true, _, _) => HandRank::Flush,
        (Some(_), false, _, _) => HandRank::Straight,
        (_, _, 3, _) => HandRank::ThreeOfAKind,
        (_, _, 2, 2) => HandRank::TwoPair,
        (_, _, 2, _) => HandRank::OnePair,
        _ => HandRank::HighCard,
    };

    let mut value = (rank as u32) << 20;
    match (rank, straight_high) {
        (HandRank::Straight | HandRank::StraightFlush, Some(hi)) => value |= (hi as u32) << 16,
        _ => {
            for (idx, (_, r)) in groups.iter().enumerate() {
                value |= (*r as u32) << (16 - 4 * idx);
            }
        }
    }

    (rank, value)
}
