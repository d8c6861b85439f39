/*!
A database of penalty rules.

A penalty rule pairs a formula --- the condition --- with a positive weight.
A world violates the rule when the condition is false on the world, and the weight of every violated rule counts against the world.
The [minimum_penalty](crate::context::GenericContext::minimum_penalty) procedure searches for worlds with the least total weight counted against them.

Two degenerate shapes of condition are noted when stored, as neither is worth putting to an oracle:
- A rule whose condition contains an empty clause is violated by every world, and its weight is a fixed [baseline](PenaltyDB::baseline) of any total.
- A rule whose condition is the empty formula is satisfied by every world, and contributes nothing.

Rules with a weight of zero are rejected, as a rule without a cost is no rule at all.
*/

use crate::{
    structures::{
        clause::{CFormula, Formula},
        valuation::Valuation,
    },
    types::err::PenaltyError,
};

/// A condition whose violation costs a weight.
#[derive(Clone, Debug)]
pub struct PenaltyRule {
    /// A name for the rule, used in reports.
    name: String,

    /// The condition a world is expected to satisfy.
    condition: CFormula,

    /// The cost of violating the condition.
    weight: u64,
}

impl PenaltyRule {
    /// The name of the rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The condition of the rule.
    pub fn condition(&self) -> &CFormula {
        &self.condition
    }

    /// The weight of the rule.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Whether the condition of the rule is false on the given valuation.
    pub fn violated_on(&self, valuation: &impl Valuation) -> bool {
        !self.condition.satisfied_on(valuation)
    }

    /// Whether the condition contains an empty clause, and so is violated by every world.
    pub fn always_violated(&self) -> bool {
        self.condition.iter().any(|clause| clause.is_empty())
    }

    /// Whether the condition is the empty formula, and so is satisfied by every world.
    pub fn always_satisfied(&self) -> bool {
        self.condition.is_empty()
    }
}

/// The penalty rule database.
#[derive(Default)]
pub struct PenaltyDB {
    /// Every stored rule, in the order given.
    rules: Vec<PenaltyRule>,
}

impl PenaltyDB {
    /// Stores a rule, so long as the weight is positive.
    pub fn add_rule(
        &mut self,
        name: &str,
        condition: CFormula,
        weight: u64,
    ) -> Result<(), PenaltyError> {
        if weight == 0 {
            return Err(PenaltyError::InvalidWeight);
        }

        self.rules.push(PenaltyRule {
            name: name.to_string(),
            condition,
            weight,
        });

        Ok(())
    }

    /// Every stored rule.
    pub fn rules(&self) -> &[PenaltyRule] {
        &self.rules
    }

    /// The count of stored rules.
    pub fn count(&self) -> usize {
        self.rules.len()
    }

    /// An iterator over the rules whose violation is undecided, world by world.
    pub fn active(&self) -> impl Iterator<Item = &PenaltyRule> {
        self.rules
            .iter()
            .filter(|rule| !rule.always_violated() && !rule.always_satisfied())
    }

    /// The summed weight of rules violated by every world.
    pub fn baseline(&self) -> u64 {
        self.rules
            .iter()
            .filter(|rule| rule.always_violated())
            .fold(0, |total, rule| total.saturating_add(rule.weight))
    }

    /// The total weight counted against the given valuation.
    pub fn penalty_of(&self, valuation: &impl Valuation) -> u64 {
        self.rules
            .iter()
            .filter(|rule| rule.violated_on(valuation))
            .fold(0, |total, rule| total.saturating_add(rule.weight))
    }

    /// An iterator over (rule name, incurred weight) pairs for the given valuation, in rule order.
    pub fn breakdown<'db>(
        &'db self,
        valuation: &'db impl Valuation,
    ) -> impl Iterator<Item = (&'db str, u64)> {
        self.rules.iter().map(|rule| {
            let incurred = match rule.violated_on(valuation) {
                true => rule.weight,
                false => 0,
            };
            (rule.name(), incurred)
        })
    }
}

#[cfg(test)]
mod penalty_db_tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn zero_weights_are_rejected() {
        let mut db = PenaltyDB::default();

        let outcome = db.add_rule("free", vec![vec![CLiteral::new(1, true)]], 0);
        assert_eq!(outcome, Err(PenaltyError::InvalidWeight));
        assert_eq!(db.count(), 0);
    }

    #[test]
    fn degenerate_conditions_are_noted() {
        let mut db = PenaltyDB::default();

        db.add_rule("impossible", vec![vec![]], 3).expect("a rule");
        db.add_rule("vacuous", CFormula::default(), 5).expect("a rule");
        db.add_rule("p", vec![vec![CLiteral::new(1, true)]], 7)
            .expect("a rule");

        assert_eq!(db.baseline(), 3);
        assert_eq!(db.active().count(), 1);

        let valuation = vec![None, Some(false)];
        assert_eq!(db.penalty_of(&valuation), 3 + 7);
    }
}
