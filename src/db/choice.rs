/*!
A database of choice rules.

A choice rule belongs to a named goal and holds a chain of alternatives, each a formula, ordered from most to least preferred.
A rule may also carry a condition: a world which falsifies the condition does not satisfy the rule to any degree.

On a given world the rule is satisfied to a [degree](Degree): the index of the first alternative true on the world, or an infinite degree when no alternative is.
Against the hard constraints the rule has a rank: the least degree witnessed by some acceptable world, found by [rank_chains](crate::context::GenericContext::rank_chains).
Chains must be non-empty, a rule with nothing to choose between is rejected.
*/

use crate::{
    reports::Degree,
    structures::{
        clause::{CFormula, Formula},
        valuation::Valuation,
    },
    types::err::ChoiceError,
};

/// A chain of alternatives for a named goal.
#[derive(Clone, Debug)]
pub struct ChoiceRule {
    /// The goal of the rule, used in reports.
    goal: String,

    /// The alternatives of the rule, index 0 the most preferred.
    alternatives: Vec<CFormula>,

    /// An optional condition, held to no degree on worlds which falsify it.
    condition: Option<CFormula>,
}

impl ChoiceRule {
    /// The goal of the rule.
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// The alternatives of the rule, index 0 the most preferred.
    pub fn alternatives(&self) -> &[CFormula] {
        &self.alternatives
    }

    /// The condition of the rule, if one was given.
    pub fn condition(&self) -> Option<&CFormula> {
        self.condition.as_ref()
    }

    /// The degree to which the given valuation satisfies the rule.
    pub fn degree_on(&self, valuation: &impl Valuation) -> Degree {
        if let Some(condition) = &self.condition {
            if !condition.satisfied_on(valuation) {
                return Degree::Infinite;
            }
        }

        for (index, alternative) in self.alternatives.iter().enumerate() {
            if alternative.satisfied_on(valuation) {
                return Degree::Finite(index);
            }
        }

        Degree::Infinite
    }
}

/// The choice rule database.
#[derive(Default)]
pub struct ChoiceDB {
    /// Every stored rule, in the order given.
    rules: Vec<ChoiceRule>,
}

impl ChoiceDB {
    /// Stores a rule, so long as the chain holds at least one alternative.
    pub fn add_rule(
        &mut self,
        goal: &str,
        alternatives: Vec<CFormula>,
        condition: Option<CFormula>,
    ) -> Result<(), ChoiceError> {
        if alternatives.is_empty() {
            return Err(ChoiceError::EmptyChain);
        }

        self.rules.push(ChoiceRule {
            goal: goal.to_string(),
            alternatives,
            condition,
        });

        Ok(())
    }

    /// Every stored rule.
    pub fn rules(&self) -> &[ChoiceRule] {
        &self.rules
    }

    /// The count of stored rules.
    pub fn count(&self) -> usize {
        self.rules.len()
    }

    /// The degree of each rule on the given valuation, in rule order.
    ///
    /// Suitable for a [Dominance](crate::reports::Dominance) comparison against the degrees of some other valuation.
    pub fn degrees_on(&self, valuation: &impl Valuation) -> Vec<Degree> {
        self.rules
            .iter()
            .map(|rule| rule.degree_on(valuation))
            .collect()
    }
}

#[cfg(test)]
mod choice_db_tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn empty_chains_are_rejected() {
        let mut db = ChoiceDB::default();

        assert_eq!(db.add_rule("nothing", vec![], None), Err(ChoiceError::EmptyChain));
        assert_eq!(db.count(), 0);
    }

    #[test]
    fn degrees_walk_the_chain() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);

        let mut db = ChoiceDB::default();
        db.add_rule("p over q", vec![vec![vec![p]], vec![vec![q]]], None)
            .expect("a rule");

        let best = vec![None, Some(true), Some(true)];
        let fallback = vec![None, Some(false), Some(true)];
        let neither = vec![None, Some(false), Some(false)];

        assert_eq!(db.degrees_on(&best), vec![Degree::Finite(0)]);
        assert_eq!(db.degrees_on(&fallback), vec![Degree::Finite(1)]);
        assert_eq!(db.degrees_on(&neither), vec![Degree::Infinite]);
    }

    #[test]
    fn unmet_conditions_bound_no_degree() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);

        let mut db = ChoiceDB::default();
        db.add_rule("q if p", vec![vec![vec![q]]], Some(vec![vec![p]]))
            .expect("a rule");

        let escaped = vec![None, Some(false), Some(false)];
        assert_eq!(db.degrees_on(&escaped), vec![Degree::Infinite]);

        let held = vec![None, Some(true), Some(true)];
        assert_eq!(db.degrees_on(&held), vec![Degree::Finite(0)]);
    }
}
