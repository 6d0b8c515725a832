//! Regret Engine - Loss-aversion-weighted scoring and ranking.

use std::cmp::Ordering;

use super::{RankedOption, Ranking, RegretBand};
use crate::domain::decision::DecisionOption;

/// Regret scoring functions.
pub struct RegretEngine;

impl RegretEngine {
    /// Computes the regret score of one option.
    ///
    /// # Algorithm
    /// score = count(cons) × factor − count(pros)
    ///
    /// Any factor is accepted, negative or fractional included; range policy
    /// belongs to the caller.
    pub fn score(option: &DecisionOption, factor: f64) -> f64 {
        option.cons.len() as f64 * factor - option.pros.len() as f64
    }

    /// Scores every option and sorts ascending by score.
    ///
    /// # Ordering
    /// - Lower score ranks first.
    /// - Equal scores keep their input order (stable sort).
    /// - NaN scores, only reachable with a non-finite factor, sort last.
    ///
    /// # Edge Cases
    /// - Empty input: Returns an empty ranking
    /// - No pros and no cons: Score is 0
    pub fn rank(options: &[DecisionOption], factor: f64) -> Ranking {
        let mut ranked: Vec<RankedOption> = options
            .iter()
            .map(|option| RankedOption {
                regret_score: Self::score(option, factor),
                option: option.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| Self::compare_scores(a.regret_score, b.regret_score));

        Ranking::new(ranked)
    }

    /// Maps a score onto its fixed description.
    pub fn describe(score: f64) -> &'static str {
        RegretBand::for_score(score).description()
    }

    /// Total order on scores: numeric ascending, `-0.0 == 0.0`, NaN last.
    fn compare_scores(a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::Item;
    use crate::domain::foundation::OptionId;
    use proptest::prelude::*;

    fn option(name: &str, pros: usize, cons: usize) -> DecisionOption {
        let mut option = DecisionOption::new(name);
        for i in 0..pros {
            option = option.with_pro(Item::from_input(&format!("pro {}", i)).unwrap());
        }
        for i in 0..cons {
            option = option.with_con(Item::from_input(&format!("con {}", i)).unwrap());
        }
        option
    }

    fn names(ranking: &Ranking) -> Vec<&str> {
        ranking.as_slice().iter().map(|r| r.option.name.as_str()).collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Scoring
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn score_weights_cons_by_factor() {
        assert_eq!(RegretEngine::score(&option("Car", 1, 3), 2.0), 5.0);
        assert_eq!(RegretEngine::score(&option("Bike", 3, 1), 2.0), -1.0);
    }

    #[test]
    fn score_with_no_items_is_zero() {
        assert_eq!(RegretEngine::score(&option("Empty", 0, 0), 2.0), 0.0);
    }

    #[test]
    fn score_accepts_fractional_and_negative_factors() {
        assert_eq!(RegretEngine::score(&option("X", 1, 2), 1.5), 2.0);
        assert_eq!(RegretEngine::score(&option("X", 1, 2), -1.0), -3.0);
    }

    // ───────────────────────────────────────────────────────────────
    // Ranking
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn rank_empty_input_yields_empty_ranking() {
        let ranking = RegretEngine::rank(&[], 2.0);
        assert!(ranking.is_empty());
        assert!(ranking.winner().is_none());
    }

    #[test]
    fn rank_sorts_ascending_by_score() {
        let options = vec![option("Car", 1, 3), option("Bike", 3, 1)];
        let ranking = RegretEngine::rank(&options, 2.0);

        assert_eq!(names(&ranking), vec!["Bike", "Car"]);
        assert_eq!(ranking.winner().unwrap().regret_score, -1.0);
        assert_eq!(ranking.winner().unwrap().band(), RegretBand::Safe);
        assert_eq!(ranking.runners_up()[0].regret_score, 5.0);
        assert_eq!(ranking.runners_up()[0].band(), RegretBand::Heavy);
    }

    #[test]
    fn rank_ties_keep_input_order() {
        let options = vec![option("A", 2, 1), option("B", 0, 0)];
        let ranking = RegretEngine::rank(&options, 2.0);

        assert_eq!(names(&ranking), vec!["A", "B"]);
        assert!(ranking.as_slice().iter().all(|r| r.regret_score == 0.0));
        assert!(ranking.as_slice().iter().all(|r| r.band() == RegretBand::Safe));
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        assert_eq!(RegretEngine::compare_scores(-0.0, 0.0), Ordering::Equal);
        assert_eq!(RegretEngine::compare_scores(0.0, -0.0), Ordering::Equal);
    }

    #[test]
    fn nan_compares_after_everything() {
        assert_eq!(RegretEngine::compare_scores(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(RegretEngine::compare_scores(-1.0, f64::NAN), Ordering::Less);
        assert_eq!(RegretEngine::compare_scores(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn rank_does_not_mutate_input() {
        let options = vec![option("Car", 1, 3), option("Bike", 3, 1)];
        let before = options.clone();
        let _ = RegretEngine::rank(&options, 2.0);
        assert_eq!(options, before);
    }

    #[test]
    fn rank_reorders_when_factor_changes() {
        // A: 4 pros, 2 cons; B: 0 pros, 1 con
        let options = vec![option("A", 4, 2), option("B", 0, 1)];
        assert_eq!(names(&RegretEngine::rank(&options, 1.0)), vec!["A", "B"]);
        assert_eq!(names(&RegretEngine::rank(&options, 5.0)), vec!["B", "A"]);
    }

    #[test]
    fn rank_puts_nan_scores_last() {
        let options = vec![option("Conned", 0, 1), option("Clean", 0, 0)];
        let ranking = RegretEngine::rank(&options, f64::INFINITY);
        // 0 × inf is NaN, 1 × inf is inf
        assert_eq!(names(&ranking), vec!["Conned", "Clean"]);
        assert!(ranking.as_slice()[1].regret_score.is_nan());
    }

    // ───────────────────────────────────────────────────────────────
    // Description
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn describe_band_boundaries() {
        assert_eq!(RegretEngine::describe(0.0), "A very safe path forward.");
        assert_eq!(
            RegretEngine::describe(3.0),
            "A solid choice with manageable tradeoffs."
        );
        assert_eq!(
            RegretEngine::describe(3.01),
            "This path might feel quite heavy later on."
        );
        assert_eq!(RegretEngine::describe(-5.0), "A very safe path forward.");
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    fn options_strategy() -> impl Strategy<Value = Vec<DecisionOption>> {
        prop::collection::vec((0usize..6, 0usize..6), 1..8).prop_map(|counts| {
            counts
                .into_iter()
                .enumerate()
                .map(|(i, (pros, cons))| option(&format!("opt{}", i), pros, cons))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rank_is_a_permutation_of_input(options in options_strategy(), factor in -10.0f64..10.0) {
            let ranking = RegretEngine::rank(&options, factor);
            prop_assert_eq!(ranking.len(), options.len());

            let mut input_ids: Vec<_> = options.iter().map(|o| o.id.to_string()).collect();
            let mut output_ids: Vec<_> = ranking.as_slice().iter().map(|r| r.option.id.to_string()).collect();
            input_ids.sort();
            output_ids.sort();
            prop_assert_eq!(input_ids, output_ids);
        }

        #[test]
        fn rank_scores_match_formula_exactly(options in options_strategy(), factor in -10.0f64..10.0) {
            for ranked in &RegretEngine::rank(&options, factor) {
                let expected = ranked.option.cons.len() as f64 * factor - ranked.option.pros.len() as f64;
                prop_assert_eq!(ranked.regret_score.to_bits(), expected.to_bits());
            }
        }

        #[test]
        fn rank_is_sorted_and_stable(options in options_strategy(), factor in 1.0f64..5.0) {
            let ranking = RegretEngine::rank(&options, factor);
            let position = |id: OptionId| options.iter().position(|o| o.id == id).unwrap();

            for pair in ranking.as_slice().windows(2) {
                prop_assert!(pair[0].regret_score <= pair[1].regret_score);
                if pair[0].regret_score == pair[1].regret_score {
                    prop_assert!(position(pair[0].option.id) < position(pair[1].option.id));
                }
            }
        }

        #[test]
        fn raising_factor_never_lowers_a_score(
            pros in 0usize..10,
            cons in 0usize..10,
            low in 1.0f64..5.0,
            delta in 0.0f64..5.0,
        ) {
            let candidate = option("X", pros, cons);
            let before = RegretEngine::score(&candidate, low);
            let after = RegretEngine::score(&candidate, low + delta);
            if cons == 0 {
                prop_assert_eq!(before, after);
            } else {
                prop_assert!(after >= before);
            }
        }

        #[test]
        fn rank_is_idempotent(options in options_strategy(), factor in -10.0f64..10.0) {
            prop_assert_eq!(
                RegretEngine::rank(&options, factor),
                RegretEngine::rank(&options, factor)
            );
        }
    }
}
