//! Ranked view over scored options.

use serde::Serialize;

use super::RegretBand;
use crate::domain::decision::DecisionOption;

/// An option annotated with its regret score.
///
/// Derived output only; serializes with a `regretScore` field next to the
/// option's own fields but is never part of the stored decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOption {
    #[serde(flatten)]
    pub option: DecisionOption,
    pub regret_score: f64,
}

impl RankedOption {
    pub fn band(&self) -> RegretBand {
        RegretBand::for_score(self.regret_score)
    }

    pub fn description(&self) -> &'static str {
        self.band().description()
    }
}

/// Options in ranked order, lowest regret first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    ranked: Vec<RankedOption>,
}

impl Ranking {
    pub(crate) fn new(ranked: Vec<RankedOption>) -> Self {
        Self { ranked }
    }

    /// The recommended option, if any option was ranked.
    pub fn winner(&self) -> Option<&RankedOption> {
        self.ranked.first()
    }

    /// Everything after the winner, still in ranked order.
    pub fn runners_up(&self) -> &[RankedOption] {
        self.ranked.get(1..).unwrap_or(&[])
    }

    /// Description of the winner's band.
    pub fn description(&self) -> Option<&'static str> {
        self.winner().map(RankedOption::description)
    }

    pub fn as_slice(&self) -> &[RankedOption] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn into_vec(self) -> Vec<RankedOption> {
        self.ranked
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedOption;
    type IntoIter = std::slice::Iter<'a, RankedOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(name: &str, score: f64) -> RankedOption {
        RankedOption {
            option: DecisionOption::new(name),
            regret_score: score,
        }
    }

    #[test]
    fn winner_and_runners_up_split_the_ranking() {
        let ranking = Ranking::new(vec![ranked("A", -1.0), ranked("B", 2.0), ranked("C", 5.0)]);
        assert_eq!(ranking.winner().unwrap().option.name, "A");
        let rest: Vec<_> = ranking.runners_up().iter().map(|r| r.option.name.as_str()).collect();
        assert_eq!(rest, vec!["B", "C"]);
        assert_eq!(ranking.description(), Some("A very safe path forward."));
    }

    #[test]
    fn empty_ranking_has_no_winner() {
        let ranking = Ranking::default();
        assert!(ranking.winner().is_none());
        assert!(ranking.runners_up().is_empty());
        assert!(ranking.description().is_none());
    }

    #[test]
    fn single_option_has_no_runners_up() {
        let ranking = Ranking::new(vec![ranked("Solo", 4.0)]);
        assert!(ranking.runners_up().is_empty());
        assert_eq!(ranking.winner().unwrap().band(), RegretBand::Heavy);
    }

    #[test]
    fn ranked_option_serializes_regret_score_inline() {
        let json = serde_json::to_value(ranked("Car", 5.0)).unwrap();
        assert_eq!(json["name"], "Car");
        assert_eq!(json["regretScore"], 5.0);
        assert!(json["pros"].is_array());
    }
}
