// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact equity enumeration over board completions.
use log::{info, warn};
use serde::{Deserialize, Serialize, de, ser};
use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use flopsight_cards::{Card, Deck, combinations, nck};
use flopsight_eval::{HandCategory, TieBreak, best_hand, evaluate};

use crate::{
    EngineError,
    chart::Chart,
    groups::{self, SAMPLE_SIZE},
    request::{AnalysisReply, AnalysisRequest, AnalysisResponse, ErrorReply, GroupSummary, Streets},
};

/// Percentage per hand category, all nine categories always present.
///
/// Values are exact whenever they come from an enumeration: the count of
/// completions landing on a category over the total, times 100, so the
/// nine values sum to 100 up to floating point noise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution([f64; 9]);

impl Distribution {
    /// The all zeroes distribution used when no data is available.
    pub fn zero() -> Distribution {
        Distribution::default()
    }

    /// A distribution with the whole mass on one category.
    pub fn single(category: HandCategory) -> Distribution {
        let mut dist = Distribution::default();
        dist.0[Self::idx(category)] = 100.0;
        dist
    }

    /// The exact percentages for the given category counts.
    pub fn from_counts(counts: &[u64; 9], total: u64) -> Distribution {
        let mut dist = Distribution::default();
        if total > 0 {
            for (pct, &count) in dist.0.iter_mut().zip(counts) {
                *pct = count as f64 / total as f64 * 100.0;
            }
        }
        dist
    }

    /// The percentage for a category.
    pub fn get(&self, category: HandCategory) -> f64 {
        self.0[Self::idx(category)]
    }

    /// The sum of all percentages.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    fn idx(category: HandCategory) -> usize {
        category.strength() as usize - 1
    }
}

impl Serialize for Distribution {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(9))?;
        for category in HandCategory::strongest_first() {
            map.serialize_entry(category.name(), &self.get(category))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, f64>::deserialize(deserializer)?;

        let mut dist = Distribution::default();
        for (name, pct) in map {
            let category = name
                .parse::<HandCategory>()
                .map_err(|e| de::Error::custom(e.to_string()))?;
            dist.0[Self::idx(category)] = pct;
        }
        Ok(dist)
    }
}

/// An evaluated candidate, a flop or a single next card together with the
/// category it lands the hand on.
#[derive(Debug, Clone)]
pub(crate) struct Solved {
    pub(crate) cards: Vec<Card>,
    pub(crate) category: HandCategory,
}

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Path to the starting hand chart file, if one is available.
    pub chart_path: Option<PathBuf>,
    /// The hand comparison policy, category only by default.
    pub tie_break: TieBreak,
}

/// The loaded chart, or why there is none.
#[derive(Debug)]
enum ChartState {
    Loaded(Arc<Chart>),
    Failed,
    Unconfigured,
}

/// The equity engine.
///
/// Holds only immutable state, every request is evaluated independently;
/// the chart is loaded exactly once at construction and shared read only.
#[derive(Debug)]
pub struct Engine {
    chart: ChartState,
    tie_break: TieBreak,
}

impl Engine {
    /// Creates an engine, loading the chart if one is configured.
    ///
    /// A chart load failure is degraded, not fatal: the engine comes up
    /// chart-less and preflop probabilities are zero filled.
    pub fn new(config: EngineConfig) -> Engine {
        let chart = match &config.chart_path {
            Some(path) => match Chart::load(path) {
                Ok(chart) => {
                    info!("Loaded {} starting hands from {}", chart.len(), path.display());
                    ChartState::Loaded(Arc::new(chart))
                }
                Err(e) => {
                    warn!("{e}, preflop probabilities will be zero filled");
                    ChartState::Failed
                }
            },
            None => ChartState::Unconfigured,
        };

        Engine {
            chart,
            tie_break: config.tie_break,
        }
    }

    /// Creates an engine around an already loaded chart.
    pub fn with_chart(chart: Arc<Chart>, tie_break: TieBreak) -> Engine {
        Engine {
            chart: ChartState::Loaded(chart),
            tie_break,
        }
    }

    /// Analyzes a request, turning any failure into an error reply.
    pub fn dispatch(&self, request: AnalysisRequest) -> AnalysisReply {
        let id = request.id;
        match self.analyze(&request) {
            Ok(response) => AnalysisReply::Response(Box::new(response)),
            Err(e) => {
                warn!("Request rejected: {e}");
                AnalysisReply::Error(ErrorReply {
                    id,
                    error: e.to_string(),
                })
            }
        }
    }

    /// Analyzes a request.
    ///
    /// The mode follows board completeness: no board enumerates flops (or
    /// uses the chart), a flop enumerates turn and river, a turn the
    /// rivers, and a full board is the degenerate certain outcome.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, EngineError> {
        let streets = Streets::parse(request)?;
        let known = streets.known();

        let (probabilities, best, worst) = match (&streets.flop, &streets.turn, &streets.river) {
            (None, _, _) => self.preflop(streets.hole)?,
            (Some(_), None, _) => {
                let (counts, total) = self.completions_tally(&known, 2)?;
                let candidates = self.next_card_candidates(&known)?;
                let dist = Distribution::from_counts(&counts, total);
                (dist, groups::group(&candidates), Vec::new())
            }
            (Some(_), Some(_), None) => {
                let (counts, total) = self.completions_tally(&known, 1)?;
                let candidates = self.next_card_candidates(&known)?;
                let dist = Distribution::from_counts(&counts, total);
                (dist, groups::group(&candidates), Vec::new())
            }
            (Some(_), Some(_), Some(river)) => {
                let final_hand = best_hand(&known, self.tie_break)?;
                let category = final_hand.eval.category;
                let group = GroupSummary {
                    hand_name: category.name().to_string(),
                    representative_flop: vec![*river],
                    flops: vec![vec![*river]],
                };
                (Distribution::single(category), vec![group], Vec::new())
            }
        };

        let (current_hand_name, current_best_hand_cards) = self.current_hand(&known)?;

        Ok(AnalysisResponse {
            id: request.id,
            probabilities,
            best_flop_groups: best,
            worst_flop_groups: worst,
            current_hand_name,
            current_best_hand_cards,
            has_turn: streets.turn.is_some(),
            has_river: streets.river.is_some(),
        })
    }

    /// Preflop mode: enumerate every possible flop for the tallies and the
    /// best and worst groups; probabilities come from the chart when one
    /// is loaded.
    fn preflop(
        &self,
        hole: [Card; 2],
    ) -> Result<(Distribution, Vec<GroupSummary>, Vec<GroupSummary>), EngineError> {
        let deck = Deck::without(&hole);

        let mut counts = [0u64; 9];
        let mut solved = Vec::with_capacity(nck(deck.count(), 3));
        let mut cards = [hole[0], hole[1], hole[0], hole[0], hole[0]];

        for flop in combinations(deck.cards(), 3) {
            cards[2..].copy_from_slice(&flop);
            let eval = evaluate(&cards)?;
            counts[Distribution::idx(eval.category)] += 1;
            solved.push(Solved {
                cards: flop,
                category: eval.category,
            });
        }

        // Stable by strength so equal categories keep enumeration order.
        solved.sort_by(|a, b| b.category.cmp(&a.category));

        let best = groups::group(&solved[..solved.len().min(SAMPLE_SIZE)]);
        let worst_sample = solved
            .iter()
            .rev()
            .take(SAMPLE_SIZE)
            .cloned()
            .collect::<Vec<_>>();
        let worst = groups::group(&worst_sample);

        let probabilities = match &self.chart {
            ChartState::Loaded(chart) => match chart.lookup(&hole) {
                Some(dist) => dist.clone(),
                None => {
                    warn!("No chart entry for {}", Chart::key(&hole));
                    Distribution::zero()
                }
            },
            ChartState::Failed => Distribution::zero(),
            // Without a chart fall back to the exact flop enumeration, the
            // odds of the 5 cards hand made by the flop.
            ChartState::Unconfigured => Distribution::from_counts(&counts, solved.len() as u64),
        };

        Ok((probabilities, best, worst))
    }

    /// Tallies the best hand category over every way to draw `draw` more
    /// cards from the remaining deck.
    fn completions_tally(
        &self,
        known: &[Card],
        draw: usize,
    ) -> Result<([u64; 9], u64), EngineError> {
        let deck = Deck::without(known);
        let base = known.len();

        let mut counts = [0u64; 9];
        let mut total = 0u64;
        let mut cards = known.to_vec();

        for draw_cards in combinations(deck.cards(), draw) {
            cards.truncate(base);
            cards.extend_from_slice(&draw_cards);

            let best = best_hand(&cards, self.tie_break)?;
            counts[Distribution::idx(best.eval.category)] += 1;
            total += 1;
        }

        Ok((counts, total))
    }

    /// Evaluates each remaining card as the next street, strongest first.
    fn next_card_candidates(&self, known: &[Card]) -> Result<Vec<Solved>, EngineError> {
        let deck = Deck::without(known);
        let base = known.len();

        let mut solved = Vec::with_capacity(deck.count());
        let mut cards = known.to_vec();

        for &card in deck.cards() {
            cards.truncate(base);
            cards.push(card);

            let best = best_hand(&cards, self.tie_break)?;
            solved.push(Solved {
                cards: vec![card],
                category: best.eval.category,
            });
        }

        solved.sort_by(|a, b| b.category.cmp(&a.category));
        Ok(solved)
    }

    /// The best hand over the known cards, or the duplication based
    /// fallback when fewer than 5 cards are known.
    fn current_hand(&self, known: &[Card]) -> Result<(String, Vec<Card>), EngineError> {
        if known.len() >= 5 {
            let best = best_hand(known, self.tie_break)?;
            return Ok((best.eval.category.name().to_string(), best.cards.to_vec()));
        }

        let mut tally = [0u8; 13];
        for card in known {
            tally[card.rank().value() as usize] += 1;
        }

        let category = match tally.iter().max().copied().unwrap_or(0) {
            4 => HandCategory::FourOfAKind,
            3 => HandCategory::ThreeOfAKind,
            2 => HandCategory::Pair,
            _ => HandCategory::HighCard,
        };

        Ok((category.name().to_string(), known.to_vec()))
    }
}
