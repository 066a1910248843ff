// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flopsight Poker hand classifier.
//!
//! Classifies 5 cards hands into the nine standard categories and selects
//! the strongest 5 cards subset out of a 5 to 7 cards hand:
//!
//! ```
//! # use flopsight_eval::*;
//! let hand = ["As", "Ks", "Qs", "Js", "Ts"]
//!     .iter()
//!     .map(|t| t.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let eval = evaluate(&hand).unwrap();
//! assert_eq!(eval.category, HandCategory::StraightFlush);
//! ```
//!
//! Hands are compared by category only, two flushes are equal in strength
//! no matter their cards. This is the granularity the equity and grouping
//! reports are built on; the optional [TieBreak::Kickers] ordering adds a
//! within category comparison for callers that opt into it.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;

pub use eval::{
    BestHand, EvalError, HandCategory, HandEval, TieBreak, UnknownCategory, best_hand, evaluate,
};

// Reexport cards types.
pub use flopsight_cards::{Card, Deck, Rank, Suit, combinations, nck};
