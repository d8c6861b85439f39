//! Chain ranking for choice rules, walking each chain from the most preferred alternative.

use crate::{
    context::GenericContext,
    db::choice::ChoiceRule,
    misc::log::targets::{self},
    reports::{ChainStatus, Degree, Dominance, GoalReport},
    solver::{Oracle, Verdict},
    structures::{clause::CFormula, valuation::CValuation},
    types::err::ErrorKind,
};

impl<O: Oracle> GenericContext<O> {
    /// The standing of every choice rule against the hard constraints, in rule order.
    ///
    /// Rules are ranked independently: a rule whose chain cannot be reached is reported [Unsatisfiable](ChainStatus::Unsatisfiable) and the rest are ranked all the same.
    /// Though, as with any reasoning over the hard constraints, the constraints being unsatisfiable on their own is a [fatal error](ErrorKind::HardConstraintsUnsatisfiable).
    pub fn rank_chains(&mut self) -> Result<Vec<GoalReport>, ErrorKind> {
        self.feasible_model()?;

        let rules: Vec<ChoiceRule> = self.choice_db.rules().to_vec();

        let mut reports = Vec::with_capacity(rules.len());
        for rule in &rules {
            reports.push(self.rank_chain(rule)?);
        }

        Ok(reports)
    }

    /// The standing of a single rule: the first alternative jointly satisfiable with the hard constraints (and the condition of the rule, if any), walked in order.
    fn rank_chain(&mut self, rule: &ChoiceRule) -> Result<GoalReport, ErrorKind> {
        let bound = self.attribute_bound();

        for (rank, alternative) in rule.alternatives().iter().enumerate() {
            let mut query: CFormula = self.constraint_db.clauses().to_vec();
            if let Some(condition) = rule.condition() {
                query.extend_from_slice(condition);
            }
            query.extend_from_slice(alternative);

            match self.query_oracle(&query, bound)? {
                Verdict::Satisfiable(mut model) => {
                    model.truncate(self.attribute_db.count() + 1);
                    log::info!(target: targets::CHOICE, "'{}' at rank {rank}", rule.goal());

                    return Ok(GoalReport {
                        goal: rule.goal().to_string(),
                        status: ChainStatus::Achieved { rank, model },
                    });
                }

                Verdict::Unsatisfiable => {
                    log::trace!(target: targets::CHOICE, "'{}' past rank {rank}", rule.goal());
                }
            }
        }

        Ok(GoalReport {
            goal: rule.goal().to_string(),
            status: ChainStatus::Unsatisfiable,
        })
    }

    /// Every acceptable world which no acceptable world strictly dominates, in enumeration order.
    ///
    /// A world is dominated when some other world does at least as well on every chain and better on some.
    /// Two incomparable worlds never dominate each other, so the optima may disagree chain by chain.
    /// With no choice rules every acceptable world is optimal.
    ///
    /// Concludes with a [HardConstraintsUnsatisfiable](ErrorKind::HardConstraintsUnsatisfiable) error when no world satisfies the hard constraints.
    pub fn choice_optima(&mut self) -> Result<Vec<CValuation>, ErrorKind> {
        let worlds = self.feasible_models()?;
        if worlds.is_empty() {
            return Err(ErrorKind::HardConstraintsUnsatisfiable);
        }

        let degrees: Vec<Vec<Degree>> = worlds
            .iter()
            .map(|world| self.choice_db.degrees_on(world))
            .collect();

        let mut optima = Vec::default();
        for (index, world) in worlds.iter().enumerate() {
            let dominated = degrees
                .iter()
                .any(|other| Dominance::between(&degrees[index], other) == Dominance::Second);

            if !dominated {
                optima.push(world.clone());
            }
        }

        log::info!(target: targets::CHOICE, "{} undominated worlds", optima.len());
        Ok(optima)
    }
}
