// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Precomputed starting hand chart.
//!
//! The chart maps each of the 169 canonical two card starting hands to its
//! by-the-river category distribution. It is loaded once from a versioned
//! JSON file at engine construction and shared read only for the lifetime
//! of the process; a missing or malformed file degrades preflop
//! probabilities, it never fails a request.
use ahash::AHashMap;
use serde::Deserialize;
use std::{fs, path::Path};

use flopsight_cards::Card;

use crate::{EngineError, equity::Distribution};

/// The chart file version this build reads.
pub const CHART_VERSION: u32 = 1;

/// A loaded starting hand chart.
#[derive(Debug)]
pub struct Chart {
    hands: AHashMap<String, Distribution>,
}

/// The chart file shape.
#[derive(Debug, Deserialize)]
struct ChartFile {
    version: u32,
    hands: AHashMap<String, Distribution>,
}

impl Chart {
    /// Loads a chart from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Chart, EngineError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| EngineError::ChartLoad(format!("{}: {e}", path.display())))?;
        Chart::from_json(&data)
    }

    /// Parses a chart from its JSON representation.
    pub fn from_json(data: &str) -> Result<Chart, EngineError> {
        let file = serde_json::from_str::<ChartFile>(data)
            .map_err(|e| EngineError::ChartLoad(e.to_string()))?;

        if file.version != CHART_VERSION {
            return Err(EngineError::ChartLoad(format!(
                "unsupported chart version {}, expected {CHART_VERSION}",
                file.version
            )));
        }

        Ok(Chart { hands: file.hands })
    }

    /// The canonical key for a two card starting hand.
    ///
    /// Pocket pairs key as the doubled rank (`"77"`), everything else as
    /// higher rank, lower rank, and a suited or offsuit flag (`"AKs"`,
    /// `"AKo"`). Both orderings of the hole cards map to the same key.
    pub fn key(hole: &[Card; 2]) -> String {
        let (hi, lo) = if hole[0].rank() >= hole[1].rank() {
            (hole[0], hole[1])
        } else {
            (hole[1], hole[0])
        };

        if hi.rank() == lo.rank() {
            format!("{}{}", hi.rank(), lo.rank())
        } else {
            let suited = if hi.suit() == lo.suit() { 's' } else { 'o' };
            format!("{}{}{}", hi.rank(), lo.rank(), suited)
        }
    }

    /// The distribution for a starting hand, if charted.
    pub fn lookup(&self, hole: &[Card; 2]) -> Option<&Distribution> {
        self.hands.get(&Self::key(hole))
    }

    /// Number of charted hands.
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Checks if the chart has no hands.
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(a: &str, b: &str) -> [Card; 2] {
        [a.parse().unwrap(), b.parse().unwrap()]
    }

    #[test]
    fn canonical_keys() {
        assert_eq!(Chart::key(&cards("As", "Ks")), "AKs");
        assert_eq!(Chart::key(&cards("As", "Kd")), "AKo");
        assert_eq!(Chart::key(&cards("7h", "7c")), "77");
        assert_eq!(Chart::key(&cards("2c", "Tc")), "T2s");

        // Hole card order never changes the key.
        assert_eq!(Chart::key(&cards("Ks", "As")), "AKs");
        assert_eq!(Chart::key(&cards("Kd", "As")), "AKo");
    }

    #[test]
    fn loads_and_looks_up() {
        let chart = Chart::from_json(
            r#"{
                "version": 1,
                "hands": {
                    "AKs": { "Straight Flush": 0.1, "Flush": 7.0, "Pair": 45.0 },
                    "77": { "Four of a Kind": 0.9, "Three of a Kind": 11.0 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(chart.len(), 2);

        let dist = chart.lookup(&cards("Ks", "As")).unwrap();
        assert_eq!(dist.get(flopsight_eval::HandCategory::Flush), 7.0);
        assert_eq!(dist.get(flopsight_eval::HandCategory::HighCard), 0.0);

        assert!(chart.lookup(&cards("As", "Kd")).is_none());
    }

    #[test]
    fn rejects_version_mismatch() {
        let err = Chart::from_json(r#"{ "version": 2, "hands": {} }"#).unwrap_err();
        assert!(matches!(err, EngineError::ChartLoad(_)));
    }

    #[test]
    fn rejects_unknown_categories() {
        let err = Chart::from_json(
            r#"{ "version": 1, "hands": { "AKs": { "Royal Flush": 1.0 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::ChartLoad(_)));
    }

    #[test]
    fn missing_file_fails_closed() {
        let err = Chart::load("/no/such/chart.json").unwrap_err();
        assert!(matches!(err, EngineError::ChartLoad(_)));
    }
}
