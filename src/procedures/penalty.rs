//! Penalty minimisation, as an ascending sweep of thresholds over a decision oracle.
//!
//! The oracle answers yes or no, so optimisation is a sequence of decisions: for candidate thresholds *c* in ascending order, ask whether some world satisfies the hard constraints with at most *c* weight of violated rules.
//! The first yes is the minimum, as no lesser candidate was satisfiable and every achievable total is a candidate.
//!
//! Candidates come from a [PenaltySweep]: the subset sums of the rule weights when few enough, and otherwise multiples of the greatest common divisor of the weights.
//! Either way 0 is the first candidate and the summed weight of every rule is the last, and the last query cannot fail --- with every rule relaxed the bound does no work --- so the sweep concludes whenever the hard constraints alone are satisfiable.
//!
//! Rules violated by every world are left out of the sweep and their summed weight added to any total as a fixed baseline.

use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    db::penalty::PenaltyRule,
    encoding::{AtomSupply, cap_weighted_count, relax},
    misc::log::targets::{self},
    reports::{PenaltyOptima, PenaltyOutcome},
    solver::{Oracle, Verdict},
    structures::{atom::Atom, clause::CFormula},
    types::err::ErrorKind,
};

/// The candidate thresholds of a penalty search, tried strictly ascending.
#[derive(Clone, Debug)]
pub struct PenaltySweep {
    domain: SweepDomain,
}

/// Where the candidates of a sweep come from.
#[derive(Clone, Debug)]
enum SweepDomain {
    /// Every subset sum of the weights, ascending.
    Exact {
        /// The sums, ascending, starting 0 and ending with the total of every weight.
        sums: Vec<u64>,

        /// The index of the current candidate.
        index: usize,
    },

    /// Multiples of the greatest common divisor of the weights, for when the subset sums are too many.
    Strides {
        /// The greatest common divisor of the weights.
        stride: u64,

        /// The total of every weight, at which the sweep concludes.
        limit: u64,

        /// The current candidate.
        candidate: u64,

        /// Whether the limit has been tried.
        exhausted: bool,
    },
}

impl PenaltySweep {
    /// The sweep over the given weights, holding to exact subset sums while they number within `bound`.
    pub fn over(weights: &[u64], bound: usize) -> Self {
        let mut sums = BTreeSet::from([0_u64]);
        let mut fits = true;

        'sums: for &weight in weights {
            let additions: Vec<u64> = sums
                .iter()
                .map(|sum| sum.checked_add(weight))
                .collect::<Option<Vec<u64>>>()
                .unwrap_or_default();

            if additions.is_empty() {
                fits = false;
                break 'sums;
            }

            sums.extend(additions);
            if sums.len() > bound {
                fits = false;
                break 'sums;
            }
        }

        if fits {
            PenaltySweep {
                domain: SweepDomain::Exact {
                    sums: sums.into_iter().collect(),
                    index: 0,
                },
            }
        } else {
            let stride = weights.iter().fold(0, |a, &b| gcd(a, b)).max(1);
            let limit = weights.iter().fold(0_u64, |a, &b| a.saturating_add(b));
            log::info!(target: targets::PENALTY,
                "Sweeping strides of {stride} up to {limit} in place of subset sums");

            PenaltySweep {
                domain: SweepDomain::Strides {
                    stride,
                    limit,
                    candidate: 0,
                    exhausted: false,
                },
            }
        }
    }

    /// The current candidate threshold, or nothing once the sweep is exhausted.
    pub fn candidate(&self) -> Option<u64> {
        match &self.domain {
            SweepDomain::Exact { sums, index } => sums.get(*index).copied(),

            SweepDomain::Strides {
                candidate,
                exhausted,
                ..
            } => match exhausted {
                true => None,
                false => Some(*candidate),
            },
        }
    }

    /// Moves the sweep past the current candidate.
    pub fn advance(&mut self) {
        match &mut self.domain {
            SweepDomain::Exact { sums, index } => {
                if *index < sums.len() {
                    *index += 1;
                }
            }

            SweepDomain::Strides {
                stride,
                limit,
                candidate,
                exhausted,
            } => {
                if *candidate >= *limit {
                    *exhausted = true;
                } else {
                    *candidate = candidate.saturating_add(*stride).min(*limit);
                }
            }
        }
    }
}

/// The greatest common divisor, by Euclid.
fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl<O: Oracle> GenericContext<O> {
    /// The least total weight of violated penalty rules over worlds satisfying the hard constraints, with a witnessing world.
    ///
    /// Concludes with a [HardConstraintsUnsatisfiable](ErrorKind::HardConstraintsUnsatisfiable) error when no world satisfies the hard constraints.
    pub fn minimum_penalty(&mut self) -> Result<PenaltyOutcome, ErrorKind> {
        let base_model = self.feasible_model()?;
        let baseline = self.penalty_db.baseline();

        let weights: Vec<u64> = self.penalty_db.active().map(|rule| rule.weight()).collect();
        if weights.is_empty() {
            return Ok(PenaltyOutcome {
                penalty: baseline,
                model: base_model,
            });
        }

        let mut sweep = PenaltySweep::over(&weights, self.config.subset_sum_bound);

        while let Some(cap) = sweep.candidate() {
            let (query, query_bound) = self.penalty_query(cap)?;

            match self.query_oracle(&query, query_bound)? {
                Verdict::Satisfiable(mut model) => {
                    model.truncate(self.attribute_db.count() + 1);
                    let penalty = cap.saturating_add(baseline);
                    log::info!(target: targets::PENALTY, "Minimum penalty {penalty}");

                    return Ok(PenaltyOutcome { penalty, model });
                }

                Verdict::Unsatisfiable => {
                    log::trace!(target: targets::PENALTY, "No world within {cap}");
                    sweep.advance();
                }
            }
        }

        // Unreachable when the base check above passed, as the final candidate relaxes every rule.
        Err(ErrorKind::HardConstraintsUnsatisfiable)
    }

    /// As [minimum_penalty](GenericContext::minimum_penalty), though with every witnessing world.
    pub fn penalty_optima(&mut self) -> Result<PenaltyOptima, ErrorKind> {
        let penalty = self.minimum_penalty()?.penalty;
        let cap = penalty - self.penalty_db.baseline();

        let (mut query, query_bound) = self.penalty_query(cap)?;
        let mut models = Vec::default();

        loop {
            match self.query_oracle(&query, query_bound)? {
                Verdict::Unsatisfiable => break,

                Verdict::Satisfiable(mut model) => {
                    model.truncate(self.attribute_db.count() + 1);
                    query.push(super::models::excluding_clause(&model));
                    models.push(model);
                }
            }
        }

        log::info!(target: targets::PENALTY, "{} worlds of penalty {penalty}", models.len());
        Ok(PenaltyOptima { penalty, models })
    }

    /// The hard constraints conjoined with clauses bounding the weight of violated rules by `cap`, and the atom bound of the query.
    fn penalty_query(&self, cap: u64) -> Result<(CFormula, Atom), ErrorKind> {
        let mut supply = AtomSupply::above(self.attribute_bound());
        let mut query: CFormula = self.constraint_db.clauses().to_vec();

        let active: Vec<&PenaltyRule> = self.penalty_db.active().collect();
        let pairs = relax(&active, &mut supply, &mut query)?;
        cap_weighted_count(&pairs, cap, &mut supply, &mut query)?;

        Ok((query, supply.bound()))
    }
}

#[cfg(test)]
mod sweep_tests {
    use super::*;

    #[test]
    fn exact_sums_ascend() {
        let mut sweep = PenaltySweep::over(&[2, 3], 64);

        let mut seen = Vec::default();
        while let Some(candidate) = sweep.candidate() {
            seen.push(candidate);
            sweep.advance();
        }

        assert_eq!(seen, vec![0, 2, 3, 5]);
    }

    #[test]
    fn strides_cover_the_range() {
        // Ten distinct weights make 1024 subset sums, past a bound of 8.
        let weights: Vec<u64> = (0..10).map(|power| 4 << power).collect();
        let mut sweep = PenaltySweep::over(&weights, 8);

        let mut previous = None;
        let mut last = None;
        while let Some(candidate) = sweep.candidate() {
            if let Some(previous) = previous {
                assert_eq!(candidate, previous + 4);
            }
            previous = Some(candidate);
            last = Some(candidate);
            sweep.advance();
        }

        let total: u64 = weights.iter().sum();
        assert_eq!(last, Some(total));
    }

    #[test]
    fn repeated_weights_share_sums() {
        let mut sweep = PenaltySweep::over(&[1, 1, 1], 64);

        let mut seen = Vec::default();
        while let Some(candidate) = sweep.candidate() {
            seen.push(candidate);
            sweep.advance();
        }

        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
