// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flopsight cards and combinatorics types.
//!
//! This crate defines the [Card], [Rank], and [Suit] value types, parsing
//! from the two character wire tokens:
//!
//! ```
//! # use flopsight_cards::{Card, Rank, Suit};
//! let ah = "Ah".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! a [Deck] type for enumerating the cards left once some are known:
//!
//! ```
//! # use flopsight_cards::{Card, Deck};
//! let hole = ["As".parse::<Card>().unwrap(), "Ks".parse::<Card>().unwrap()];
//! let deck = Deck::without(&hole);
//! assert_eq!(deck.count(), 50);
//! ```
//!
//! and a [combinations] iterator over the k-subsets of a card set:
//!
//! ```
//! # use flopsight_cards::{combinations, Deck};
//! let deck = Deck::default();
//! let flops = combinations(deck.cards(), 3).count();
//! assert_eq!(flops, 22_100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combos;
mod deck;

pub use combos::{Combinations, combinations, nck};
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
