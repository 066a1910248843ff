// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use serde::{Deserialize, Serialize, de, ser};
use std::{fmt, str::FromStr};

/// Error for a malformed card token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card token `{0}`")]
pub struct ParseCardError(pub String);

/// A Poker card.
///
/// Cards are ordered by rank first so that sorting a hand orders it by
/// strength; two cards are equal only when both rank and suit match.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card with the given rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a card from its two character token.
    ///
    /// The token is a rank from `23456789TJQKA` followed by a suit from
    /// `shdc`; both characters are case normalized before matching.
    pub fn parse(token: &str) -> Result<Card, ParseCardError> {
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError(token.to_string()));
        };

        let rank = Rank::from_char(r.to_ascii_uppercase());
        let suit = Suit::from_char(s.to_ascii_lowercase());
        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(ParseCardError(token.to_string())),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

// Cards cross the wire as their two character tokens.
impl Serialize for Card {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Card::parse(&token).map_err(de::Error::custom)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value on the 13 points scale, deuce=0 to ace=12.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        let suit = match c {
            's' => Suit::Spades,
            'h' => Suit::Hearts,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            _ => return None,
        };
        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        };

        write!(f, "{suit}")
    }
}

/// A cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a deck holding the full deck minus the excluded cards.
    ///
    /// Duplicates in the exclusion set are harmless, each matching card is
    /// removed once from the full deck so no card ever appears twice.
    pub fn without(excluded: &[Card]) -> Deck {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .filter(|c| !excluded.contains(c))
            .collect();
        Deck { cards }
    }

    /// The remaining cards in their deterministic deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::without(&[])
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_tokens() {
        let c = Card::parse("As").unwrap();
        assert_eq!(c.rank(), Rank::Ace);
        assert_eq!(c.suit(), Suit::Spades);

        let c = Card::parse("Td").unwrap();
        assert_eq!(c.rank(), Rank::Ten);
        assert_eq!(c.suit(), Suit::Diamonds);

        // Case normalization on both characters.
        assert_eq!(Card::parse("kH").unwrap(), Card::parse("Kh").unwrap());
        assert_eq!(Card::parse("AS").unwrap(), Card::parse("as").unwrap());

        for token in ["", "A", "1s", "Ax", "10s", "As "] {
            let err = Card::parse(token).unwrap_err();
            assert_eq!(err, ParseCardError(token.to_string()));
        }
    }

    #[test]
    fn token_roundtrip() {
        for card in Deck::default() {
            let token = card.to_string();
            assert_eq!(token.parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Trey > Rank::Deuce);
        assert_eq!(Rank::Deuce.value(), 0);
        assert_eq!(Rank::Ace.value(), 12);

        // Cards order by rank first.
        let ah = Card::parse("Ah").unwrap();
        let ks = Card::parse("Ks").unwrap();
        assert!(ah > ks);
    }

    #[test]
    fn full_deck() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let unique = deck.cards().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);

        // Deterministic order for reproducible enumerations.
        assert_eq!(Deck::default().cards(), deck.cards());
    }

    #[test]
    fn deck_without() {
        let hole = [Card::parse("As").unwrap(), Card::parse("Ks").unwrap()];
        let deck = Deck::without(&hole);
        assert_eq!(deck.count(), 50);
        assert!(!deck.cards().contains(&hole[0]));
        assert!(!deck.cards().contains(&hole[1]));

        // Duplicated exclusions remove the card once.
        let dups = [hole[0], hole[0], hole[1]];
        assert_eq!(Deck::without(&dups).count(), 50);
    }

    #[test]
    fn serde_tokens() {
        let card = Card::parse("Qc").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qc\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }
}
