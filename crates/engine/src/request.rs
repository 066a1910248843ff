// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Type definitions for requests and replies crossing the engine boundary.
use serde::{Deserialize, Serialize};

use flopsight_cards::Card;

use crate::{EngineError, equity::Distribution};

/// An analysis request.
///
/// Card tokens are two character strings, rank from `23456789TJQKA` and
/// suit from `shdc`. The flop is either absent or complete, the turn needs
/// a flop and the river a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Caller chosen correlation id, echoed in the reply so overlapping
    /// requests can discard stale responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The two hole cards.
    pub hole_cards: Vec<String>,
    /// The three flop cards, if the flop is known.
    #[serde(default)]
    pub flop_cards: Option<Vec<String>>,
    /// The turn card, if known.
    #[serde(default)]
    pub turn_card: Option<String>,
    /// The river card, if known.
    #[serde(default)]
    pub river_card: Option<String>,
}

/// An analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// The request correlation id, if the request carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Percentage per hand category, all nine categories present.
    pub probabilities: Distribution,
    /// Candidate groups from the strongest category down.
    pub best_flop_groups: Vec<GroupSummary>,
    /// Candidate groups from the weakest category up, empty once the
    /// board has a turn or river.
    pub worst_flop_groups: Vec<GroupSummary>,
    /// The category name of the best hand over the known cards.
    pub current_hand_name: String,
    /// The cards making up the current best hand.
    pub current_best_hand_cards: Vec<Card>,
    /// The request had a turn card.
    pub has_turn: bool,
    /// The request had a river card.
    pub has_river: bool,
}

/// A group of candidate flops or single next cards that land the same
/// category with the same rank composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    /// The category name shared by the group.
    pub hand_name: String,
    /// One example candidate for compact display.
    pub representative_flop: Vec<Card>,
    /// All candidate variations in the group, capped to bound memory.
    pub flops: Vec<Vec<Card>>,
}

/// The reply for a request, a response or a recoverable error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReply {
    /// Successful analysis.
    Response(Box<AnalysisResponse>),
    /// The request failed, the engine stays up.
    Error(ErrorReply),
}

/// An error reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    /// The request correlation id, if the request carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// What went wrong.
    pub error: String,
}

/// The validated cards of a request, one entry per dealt street.
#[derive(Debug, Clone)]
pub(crate) struct Streets {
    pub hole: [Card; 2],
    pub flop: Option<[Card; 3]>,
    pub turn: Option<Card>,
    pub river: Option<Card>,
}

impl Streets {
    /// Parses and validates the request cards.
    pub fn parse(request: &AnalysisRequest) -> Result<Streets, EngineError> {
        if request.hole_cards.len() != 2 {
            return Err(EngineError::Validation(format!(
                "expected 2 hole cards, got {}",
                request.hole_cards.len()
            )));
        }

        let hole = [
            request.hole_cards[0].parse::<Card>()?,
            request.hole_cards[1].parse::<Card>()?,
        ];

        let flop = match &request.flop_cards {
            None => None,
            Some(tokens) if tokens.len() == 3 => {
                let mut flop = [hole[0]; 3];
                for (c, t) in flop.iter_mut().zip(tokens) {
                    *c = t.parse::<Card>()?;
                }
                Some(flop)
            }
            Some(tokens) => {
                return Err(EngineError::Validation(format!(
                    "flop must have 3 cards, got {}",
                    tokens.len()
                )));
            }
        };

        let turn = request.turn_card.as_deref().map(Card::parse).transpose()?;
        let river = request.river_card.as_deref().map(Card::parse).transpose()?;

        if turn.is_some() && flop.is_none() {
            return Err(EngineError::Validation(
                "turn card requires a complete flop".to_string(),
            ));
        }
        if river.is_some() && turn.is_none() {
            return Err(EngineError::Validation(
                "river card requires a turn card".to_string(),
            ));
        }

        let streets = Streets {
            hole,
            flop,
            turn,
            river,
        };

        let known = streets.known();
        for (i, card) in known.iter().enumerate() {
            if known[..i].contains(card) {
                return Err(EngineError::Validation(format!("duplicate card {card}")));
            }
        }

        Ok(streets)
    }

    /// All known cards in dealing order.
    pub fn known(&self) -> Vec<Card> {
        let mut cards = self.hole.to_vec();
        if let Some(flop) = &self.flop {
            cards.extend_from_slice(flop);
        }
        cards.extend(self.turn);
        cards.extend(self.river);
        cards
    }
}
