// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and best hand selection.
use std::{fmt, str::FromStr};

use flopsight_cards::{Card, combinations};

/// Classification errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Classification works on exactly 5 cards.
    #[error("hand classification requires exactly 5 cards, got {0}")]
    NotFiveCards(usize),
    /// Best hand selection needs at least 5 cards to pick from.
    #[error("best hand selection requires at least 5 cards, got {0}")]
    TooFewCards(usize),
}

/// The nine hand categories ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No pair, the highest card plays.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, the wheel A-2-3-4-5 included.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandCategory {
    /// The category strength used for comparison and sorting, 1 for high
    /// card up to 9 for straight flush.
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// The category display name as used in reports.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }

    /// Returns all categories from the strongest to the weakest.
    pub fn strongest_first() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hand category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for HandCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::strongest_first()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Tie breaking policy for comparing hands.
///
/// Category only comparison is the engine default: two hands of the same
/// category are equal in strength. The kickers policy adds a within
/// category ordering and is strictly opt in so it never changes reports
/// that were built on category granularity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Compare by category strength only.
    #[default]
    Category,
    /// Compare by category, then by the within category card ranks.
    Kickers,
}

/// The evaluation of a 5 cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandEval {
    /// The hand category.
    pub category: HandCategory,
    kickers: u32,
}

impl HandEval {
    /// The comparable strength of this hand under the given policy.
    ///
    /// Strengths are only meaningful relative to other hands scored with
    /// the same policy.
    pub fn strength(&self, tie_break: TieBreak) -> u32 {
        match tie_break {
            TieBreak::Category => self.category.strength() as u32,
            TieBreak::Kickers => ((self.category.strength() as u32) << 20) | self.kickers,
        }
    }
}

/// The wheel straight rank values, the ace playing low.
const WHEEL: [u8; 5] = [12, 3, 2, 1, 0];

/// Classifies a 5 cards hand into its category.
///
/// Returns an error unless given exactly 5 cards.
pub fn evaluate(cards: &[Card]) -> Result<HandEval, EvalError> {
    if cards.len() != 5 {
        return Err(EvalError::NotFiveCards(cards.len()));
    }

    let mut hand = [cards[0]; 5];
    hand.copy_from_slice(cards);
    hand.sort_unstable_by(|a, b| b.rank().cmp(&a.rank()));

    let mut values = [0u8; 5];
    for (v, c) in values.iter_mut().zip(&hand) {
        *v = c.rank().value();
    }

    let flush = hand.iter().all(|c| c.suit() == hand[0].suit());

    // A straight is five distinct ranks in a consecutive run, or the wheel
    // pattern with the ace counted low.
    let distinct = values.windows(2).all(|w| w[0] > w[1]);
    let wheel = distinct && values == WHEEL;
    let straight = distinct && (values[0] - values[4] == 4 || wheel);

    // Rank multiset counts sorted by count then rank descending, e.g.
    // [4,1] four of a kind, [3,2] full house, [2,2,1] two pair.
    let mut tally = [0u8; 13];
    for v in values {
        tally[v as usize] += 1;
    }

    let mut counts = tally
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(rank, &n)| (n, rank as u8))
        .collect::<Vec<_>>();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    use HandCategory::*;
    let category = match (straight, flush) {
        (true, true) => StraightFlush,
        _ if counts[0].0 == 4 => FourOfAKind,
        _ if counts[0].0 == 3 && counts[1].0 == 2 => FullHouse,
        (_, true) => Flush,
        (true, _) => Straight,
        _ if counts[0].0 == 3 => ThreeOfAKind,
        _ if counts[0].0 == 2 && counts[1].0 == 2 => TwoPair,
        _ if counts[0].0 == 2 => Pair,
        _ => HighCard,
    };

    // Straights rank by their high card, the wheel by the five; everything
    // else packs the count sorted ranks four bits at a time.
    let kickers = if straight {
        if wheel { 3 } else { values[0] as u32 }
    } else {
        counts.iter().fold(0, |acc, &(_, r)| (acc << 4) | r as u32)
    };

    Ok(HandEval { category, kickers })
}

/// The strongest 5 cards hand out of a larger set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    /// The winning subset evaluation.
    pub eval: HandEval,
    /// The winning 5 cards subset.
    pub cards: [Card; 5],
}

/// Finds the strongest 5 cards subset of the given cards.
///
/// All 5-subsets are classified and the maximum by strength kept, with
/// ties broken by the first subset encountered. Returns an error if fewer
/// than 5 cards are supplied.
pub fn best_hand(cards: &[Card], tie_break: TieBreak) -> Result<BestHand, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::TooFewCards(cards.len()));
    }

    let mut best: Option<BestHand> = None;
    for subset in combinations(cards, 5) {
        let eval = evaluate(&subset)?;
        if best
            .as_ref()
            .is_none_or(|b| eval.strength(tie_break) > b.eval.strength(tie_break))
        {
            let mut cards = [subset[0]; 5];
            cards.copy_from_slice(&subset);
            best = Some(BestHand { eval, cards });
        }
    }

    // With 5 or more cards there is always at least one subset.
    Ok(best.expect("at least one 5 cards subset"))
}
