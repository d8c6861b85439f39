//! The search loop of the builtin solver.
//!
//! A worked loop of: propagate units to a fixpoint, decide a value for some unvalued atom, and on a conflict backtrack to the deepest decision yet to be flipped.
//! Without any decision left to flip a conflict is terminal, and without any atom left to value the valuation is a model.

use std::time::Instant;

use rand::Rng;
use rand_core::RngCore;

use crate::{
    misc::log::targets::{self},
    solver::{Dpll, Verdict},
    structures::{
        atom::Atom,
        clause::{CClause, Formula},
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
    types::err::SolverError,
};

/// The result of propagating units to a fixpoint.
enum Propagation {
    /// Nothing left to propagate, and no clause unsatisfiable.
    Fixpoint,

    /// Some clause has every literal false.
    Conflict,
}

/// A decision, with what is needed to undo and flip it.
struct Decision {
    /// The length of the trail when the decision was made.
    mark: usize,

    /// The literal decided.
    literal: CLiteral,

    /// Whether the decision is the flip of an earlier decision, and so exhausted.
    flipped: bool,
}

/// The state of a single query.
struct Search<'f> {
    /// The formula under question.
    formula: &'f [CClause],

    /// The current (often partial) valuation.
    valuation: CValuation,

    /// Atoms valued, in the order valued.
    trail: Vec<Atom>,

    /// The stack of decisions open for a flip.
    decisions: Vec<Decision>,

    /// A count of assignments made by propagation.
    propagations: usize,
}

/// A verdict on `formula`, total over atoms up to `atom_bound` (or the greatest atom of the formula, if greater).
pub(super) fn run<R: RngCore + Default>(
    solver: &mut Dpll<R>,
    formula: &[CClause],
    atom_bound: Atom,
) -> Result<Verdict, SolverError> {
    let bound = formula.top_atom().unwrap_or(0).max(atom_bound);
    let deadline = solver.time_limit.map(|limit| Instant::now() + limit);

    let mut search = Search {
        formula,
        valuation: vec![None; bound as usize + 1],
        trail: Vec::default(),
        decisions: Vec::default(),
        propagations: 0,
    };

    loop {
        if let Some(deadline) = deadline {
            if deadline < Instant::now() {
                return Err(SolverError::Timeout);
            }
        }

        match search.propagate() {
            Propagation::Conflict => {
                if !search.backtrack() {
                    log::trace!(target: targets::PROPAGATION,
                        "Unsatisfiable after {} decisions, {} propagations",
                        search.decisions.len(), search.propagations);
                    return Ok(Verdict::Unsatisfiable);
                }
            }

            Propagation::Fixpoint => match search.unvalued_atom() {
                None => {
                    log::trace!(target: targets::PROPAGATION,
                        "Satisfiable after {} decisions, {} propagations",
                        search.decisions.len(), search.propagations);
                    return Ok(Verdict::Satisfiable(search.valuation));
                }

                Some(atom) => {
                    let polarity = solver.rng.random_bool(solver.polarity_lean);
                    search.decide(CLiteral::new(atom, polarity));
                }
            },
        }
    }
}

impl Search<'_> {
    /// Repeatedly scans the formula, valuing the literal of any unit clause, until a scan makes no assignment or finds a conflict.
    fn propagate(&mut self) -> Propagation {
        loop {
            let mut progress = false;

            for clause in self.formula {
                let mut satisfied = false;
                let mut open_literal = None;
                let mut open_count = 0;

                for literal in clause {
                    match self.valuation[literal.atom() as usize] {
                        Some(value) if value == literal.polarity() => {
                            satisfied = true;
                            break;
                        }

                        Some(_) => {}

                        None => {
                            open_count += 1;
                            if open_count > 1 {
                                break;
                            }
                            open_literal = Some(*literal);
                        }
                    }
                }

                if satisfied || open_count > 1 {
                    continue;
                }

                match open_literal {
                    None => return Propagation::Conflict,

                    Some(literal) => {
                        self.assign(literal);
                        self.propagations += 1;
                        progress = true;
                    }
                }
            }

            if !progress {
                return Propagation::Fixpoint;
            }
        }
    }

    /// Values the atom of `literal` to match the literal, noting the assignment on the trail.
    fn assign(&mut self, literal: CLiteral) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.trail.push(literal.atom());
    }

    /// Assigns `literal` as a fresh decision.
    fn decide(&mut self, literal: CLiteral) {
        self.decisions.push(Decision {
            mark: self.trail.len(),
            literal,
            flipped: false,
        });
        self.assign(literal);
    }

    /// Unwinds to the deepest decision yet to be flipped and assigns the flip, or returns false when no decision remains.
    fn backtrack(&mut self) -> bool {
        while let Some(decision) = self.decisions.pop() {
            for atom in self.trail.drain(decision.mark..) {
                self.valuation[atom as usize] = None;
            }

            if !decision.flipped {
                let flip = decision.literal.negate();
                self.decisions.push(Decision {
                    mark: self.trail.len(),
                    literal: flip,
                    flipped: true,
                });
                self.assign(flip);
                return true;
            }
        }
        false
    }

    /// The least atom without a value, if some atom is without a value.
    fn unvalued_atom(&self) -> Option<Atom> {
        self.valuation
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }
}

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::{
        config::Config, generic::random::SplitMix64, solver::Oracle,
        structures::clause::CFormula,
    };

    fn fresh_solver() -> Dpll<SplitMix64> {
        Dpll::from_config(&Config::default())
    }

    #[test]
    fn the_empty_formula_is_satisfiable() {
        let mut solver = fresh_solver();
        match solver.solve(&[], 3) {
            Ok(Verdict::Satisfiable(model)) => assert_eq!(model.len(), 4),
            _ => panic!("a model"),
        }
    }

    #[test]
    fn the_empty_clause_is_unsatisfiable() {
        let mut solver = fresh_solver();
        let formula = vec![CClause::default()];
        assert_eq!(solver.solve(&formula, 0), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn propagation_chains() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);
        let r = CLiteral::new(3, true);

        let formula = vec![vec![p], vec![-p, q], vec![-q, r]];

        let mut solver = fresh_solver();
        match solver.solve(&formula, 3) {
            Ok(Verdict::Satisfiable(model)) => {
                assert_eq!(model, vec![None, Some(true), Some(true), Some(true)])
            }
            _ => panic!("a model"),
        }
    }

    #[test]
    fn backtracking_explores_both_polarities() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);

        // Decisions lean false, so (p ∨ q) forces a conflict and a flip before any model.
        let formula = vec![vec![p, q], vec![-p, q], vec![-q, p]];

        let mut solver = fresh_solver();
        match solver.solve(&formula, 2) {
            Ok(Verdict::Satisfiable(model)) => {
                assert_eq!(model, vec![None, Some(true), Some(true)])
            }
            _ => panic!("a model"),
        }
    }

    #[test]
    fn exhaustion_is_unsatisfiability() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);

        let formula = vec![vec![p, q], vec![p, -q], vec![-p, q], vec![-p, -q]];

        let mut solver = fresh_solver();
        assert_eq!(solver.solve(&formula, 2), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn bounds_stretch_to_the_formula() {
        let high = CLiteral::new(7, true);

        let mut solver = fresh_solver();
        match solver.solve(&[vec![high]], 2) {
            Ok(Verdict::Satisfiable(model)) => {
                assert_eq!(model.len(), 8);
                assert_eq!(model[7], Some(true));
            }
            _ => panic!("a model"),
        }
    }

    #[test]
    fn timeouts_surface() {
        use std::time::Duration;

        let config = Config {
            time_limit: Some(Duration::from_secs(0)),
            ..Config::default()
        };

        // Every polarity combination over three atoms, so any conclusion takes many iterations.
        let mut formula = CFormula::default();
        for selection in 0..8_u32 {
            let clause = (1..=3)
                .map(|atom| CLiteral::new(atom, ((selection >> (atom - 1)) & 1) == 1))
                .collect();
            formula.push(clause);
        }

        let mut solver: Dpll<SplitMix64> = Dpll::from_config(&config);
        assert_eq!(solver.solve(&formula, 3), Err(SolverError::Timeout));
    }
}
