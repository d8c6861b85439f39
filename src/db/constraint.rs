/*!
A database of hard constraints.

The database holds a single formula, and every acceptable world must satisfy every clause of the formula.
Loads merge conjunctively: adding a clause, or a formula of clauses, strengthens whatever is already held, and the merge is deterministic --- clauses are kept in the order given.

Each clause is preprocessed before it is stored:
- A clause containing some literal and the negation of that literal is a tautology, and is skipped.
- Duplicate literals within a clause are dropped.

An empty clause is stored as given, as an input may be unsatisfiable by construction and this is for a solve to surface.

No satisfiability check is made here.
Whether the constraints admit a model is always determined together with whatever further clauses a query conjoins.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, CFormula},
        literal::Literal,
    },
};

/// The constraint database.
#[derive(Default)]
pub struct ConstraintDB {
    /// The clauses of the hard constraint formula.
    clauses: CFormula,
}

/// The outcome of adding a clause to the database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause was a tautology, and was skipped.
    Tautology,
}

/// The result of preprocessing a clause.
enum Preprocessed {
    /// A clause free of duplicate literals.
    Clause(CClause),

    /// The clause contained a literal and its negation.
    Tautology,
}

/// `clause` with duplicate literals dropped, or note of a tautology.
fn preprocess(mut clause: CClause) -> Preprocessed {
    let mut index = 0;
    while index < clause.len() {
        let literal = clause[index];
        let seen = clause[..index]
            .iter()
            .find(|other| other.atom() == literal.atom())
            .copied();

        match seen {
            None => index += 1,

            Some(seen) if seen.polarity() == literal.polarity() => {
                clause.swap_remove(index);
            }

            Some(_) => return Preprocessed::Tautology,
        }
    }
    Preprocessed::Clause(clause)
}

impl ConstraintDB {
    /// Conjoins `clause` to the stored formula, after preprocessing.
    pub fn add_clause(&mut self, clause: CClause) -> ClauseOk {
        match preprocess(clause) {
            Preprocessed::Tautology => {
                log::trace!(target: targets::CONSTRAINT, "Tautology skipped");
                ClauseOk::Tautology
            }

            Preprocessed::Clause(clause) => {
                self.clauses.push(clause);
                ClauseOk::Added
            }
        }
    }

    /// Conjoins each clause of `formula` to the stored formula, returning the count of clauses stored.
    pub fn add_formula(&mut self, formula: CFormula) -> usize {
        let mut added = 0;
        for clause in formula {
            if self.add_clause(clause) == ClauseOk::Added {
                added += 1;
            }
        }
        added
    }

    /// The stored formula, as a slice of clauses.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The count of stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }
}
