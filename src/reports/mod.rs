/*!
Reports on the outcome of reasoning, for a caller to render.

The reasoning procedures conclude with one of the structures here:
- [PenaltyOutcome] --- the least total penalty over acceptable worlds, with one witnessing world.
- [PenaltyOptima] --- the least total penalty together with every witnessing world.
- [GoalReport] --- the standing of a single choice rule, either the best achievable rank with a witness or note the chain cannot be reached.

Worlds are reported as (total, canonical) [valuations](crate::structures::valuation) over the attribute atoms, and the [attribute database](crate::db::attribute::AttributeDB::valuation_string) turns these back into names for display.

Two comparison helpers are included for weighing one world against another after the fact:
- [Degree], how far down a chain a world falls.
- [Dominance], the pointwise comparison of two degree vectors, as chains are ranked independently and two worlds may each do better on different chains.
*/

use crate::structures::valuation::CValuation;

/// How far down a chain of alternatives a world falls.
///
/// A lesser degree is a better standing, with [Finite](Degree::Finite) degrees ordered by index and any finite degree better than [Infinite](Degree::Infinite).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Degree {
    /// The index of the first alternative of the chain true on the world.
    Finite(usize),

    /// No alternative of the chain is true on the world, or the world falsifies the condition of the rule.
    Infinite,
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(degree) => write!(f, "{degree}"),
            Self::Infinite => write!(f, "∞"),
        }
    }
}

/// The pointwise comparison of two degree vectors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dominance {
    /// The worlds have the same degree on every chain.
    Equal,

    /// The first world does at least as well on every chain, and better on some.
    First,

    /// The second world does at least as well on every chain, and better on some.
    Second,

    /// Each world does better than the other on some chain.
    Incomparable,
}

impl Dominance {
    /// The dominance relation between two degree vectors, compared pointwise.
    ///
    /// The vectors are expected to order degrees by the same rules, e.g. as produced by [degrees_on](crate::db::choice::ChoiceDB::degrees_on).
    pub fn between(first: &[Degree], second: &[Degree]) -> Dominance {
        debug_assert_eq!(first.len(), second.len());

        let mut first_leads = false;
        let mut second_leads = false;

        for (this, that) in first.iter().zip(second) {
            match this.cmp(that) {
                std::cmp::Ordering::Less => first_leads = true,
                std::cmp::Ordering::Greater => second_leads = true,
                std::cmp::Ordering::Equal => {}
            }
        }

        match (first_leads, second_leads) {
            (false, false) => Dominance::Equal,
            (true, false) => Dominance::First,
            (false, true) => Dominance::Second,
            (true, true) => Dominance::Incomparable,
        }
    }
}

impl std::fmt::Display for Dominance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
            Self::Incomparable => write!(f, "incomparable"),
        }
    }
}

/// The least total penalty over acceptable worlds, with one witnessing world.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PenaltyOutcome {
    /// The least total penalty.
    pub penalty: u64,

    /// A world which satisfies the hard constraints and incurs the least total penalty.
    pub model: CValuation,
}

/// The least total penalty over acceptable worlds, with every witnessing world.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PenaltyOptima {
    /// The least total penalty.
    pub penalty: u64,

    /// Every world which satisfies the hard constraints and incurs the least total penalty.
    pub models: Vec<CValuation>,
}

/// The standing of a chain of alternatives against the hard constraints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChainStatus {
    /// Some alternative holds on an acceptable world, with the first such index and a witness.
    Achieved {
        /// The index of the first alternative jointly satisfiable with the hard constraints.
        rank: usize,

        /// A world witnessing the rank.
        model: CValuation,
    },

    /// No alternative of the chain holds on any acceptable world.
    Unsatisfiable,
}

/// The outcome of ranking a single choice rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReport {
    /// The goal of the ranked rule.
    pub goal: String,

    /// The standing of the chain of the rule.
    pub status: ChainStatus,
}

impl std::fmt::Display for GoalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.status {
            ChainStatus::Achieved { rank, .. } => write!(f, "{}: rank {rank}", self.goal),
            ChainStatus::Unsatisfiable => write!(f, "{}: unsatisfiable", self.goal),
        }
    }
}

#[cfg(test)]
mod dominance_tests {
    use super::*;

    #[test]
    fn pointwise_comparison() {
        let better = [Degree::Finite(0), Degree::Finite(1)];
        let worse = [Degree::Finite(1), Degree::Finite(1)];
        let sideways = [Degree::Finite(1), Degree::Finite(0)];

        assert_eq!(Dominance::between(&better, &worse), Dominance::First);
        assert_eq!(Dominance::between(&worse, &better), Dominance::Second);
        assert_eq!(Dominance::between(&better, &better), Dominance::Equal);
        assert_eq!(Dominance::between(&better, &sideways), Dominance::Incomparable);
    }

    #[test]
    fn any_finite_degree_beats_infinite() {
        assert!(Degree::Finite(1000) < Degree::Infinite);
        assert!(Degree::Finite(0) < Degree::Finite(1));
    }
}
