// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Candidate grouping by category and rank composition.
use ahash::AHashMap;

use flopsight_cards::Rank;
use flopsight_eval::HandCategory;

use crate::{equity::Solved, request::GroupSummary};

/// How many strongest or weakest candidates feed the grouping.
pub(crate) const SAMPLE_SIZE: usize = 100;

/// Cap on stored variations per group, a memory bound for the preflop
/// enumeration where thousands of flops can share a rank composition.
const MAX_VARIATIONS: usize = 100;

/// Groups candidates sharing (category, sorted ranks), suits ignored.
///
/// The input order is preserved: feeding candidates sorted by strength
/// yields groups sorted the same way. The first candidate of each group
/// becomes its representative and also counts as a variation.
pub(crate) fn group(solved: &[Solved]) -> Vec<GroupSummary> {
    let mut index: AHashMap<(HandCategory, Vec<Rank>), usize> = AHashMap::new();
    let mut groups: Vec<GroupSummary> = Vec::new();

    for s in solved {
        let mut ranks = s.cards.iter().map(|c| c.rank()).collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let i = *index.entry((s.category, ranks)).or_insert_with(|| {
            groups.push(GroupSummary {
                hand_name: s.category.name().to_string(),
                representative_flop: s.cards.clone(),
                flops: Vec::new(),
            });
            groups.len() - 1
        });

        if groups[i].flops.len() < MAX_VARIATIONS {
            groups[i].flops.push(s.cards.clone());
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use flopsight_cards::Card;

    fn solved(category: HandCategory, tokens: &[&str]) -> Solved {
        Solved {
            cards: tokens.iter().map(|t| t.parse::<Card>().unwrap()).collect(),
            category,
        }
    }

    #[test]
    fn merges_same_ranks_across_suits() {
        let candidates = vec![
            solved(HandCategory::HighCard, &["Ah", "Kh", "Qh"]),
            solved(HandCategory::HighCard, &["Ad", "Kd", "Qd"]),
            solved(HandCategory::HighCard, &["Kc", "Qs", "Ah"]),
        ];

        let groups = group(&candidates);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].flops.len(), 3);
        assert_eq!(
            groups[0].representative_flop,
            candidates[0].cards,
            "first candidate is the representative"
        );
    }

    #[test]
    fn splits_different_ranks() {
        let candidates = vec![
            solved(HandCategory::ThreeOfAKind, &["2h", "2d", "2c"]),
            solved(HandCategory::ThreeOfAKind, &["7h", "7d", "7c"]),
        ];

        let groups = group(&candidates);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].hand_name, "Three of a Kind");
        assert_eq!(groups[1].hand_name, "Three of a Kind");
    }

    #[test]
    fn splits_same_ranks_different_category() {
        let candidates = vec![
            solved(HandCategory::Flush, &["Ah", "Kh", "Qh"]),
            solved(HandCategory::Straight, &["Ad", "Kh", "Qc"]),
        ];

        assert_eq!(group(&candidates).len(), 2);
    }

    #[test]
    fn preserves_input_order() {
        let candidates = vec![
            solved(HandCategory::Flush, &["Ah", "Kh", "Qh"]),
            solved(HandCategory::Pair, &["2h", "2d", "9c"]),
            solved(HandCategory::HighCard, &["3h", "8d", "Jc"]),
        ];

        let names = group(&candidates)
            .iter()
            .map(|g| g.hand_name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Flush", "Pair", "High Card"]);
    }

    #[test]
    fn caps_variations() {
        let mut candidates = Vec::new();
        for _ in 0..150 {
            candidates.push(solved(HandCategory::Pair, &["2h", "2d", "9c"]));
        }

        let groups = group(&candidates);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].flops.len(), 100);
    }

    #[test]
    fn single_card_candidates() {
        let candidates = vec![
            solved(HandCategory::Flush, &["Ah"]),
            solved(HandCategory::Flush, &["Ad"]),
        ];

        // Single next cards with the same rank merge like flops do.
        let groups = group(&candidates);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].flops.len(), 2);
    }
}
