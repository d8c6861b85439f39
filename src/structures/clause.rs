/*!
Clauses and formulas.

A clause is a collection of literals, interpreted as the disjunction of those literals.
A formula is a collection of clauses, interpreted as the conjunction of those clauses --- so, a formula is in conjunctive normal form by construction.

The canonical representation of a clause is a vector of literals, and of a formula a vector of clauses.

```rust
# use pref_sat::structures::literal::{CLiteral, Literal};
# use pref_sat::structures::clause::{Clause, Formula};
let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);

let clause = vec![p, -q];
assert_eq!(clause.size(), 2);

let formula = vec![vec![p, q], vec![-p, -q]];

let valuation = vec![None, Some(true), Some(false)];
assert!(clause.satisfied_on(&valuation));
assert!(formula.satisfied_on(&valuation));
```

- The empty clause is always false (never true).
- The empty formula is always true, and so is a convenient way to write '⊤'.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal in the clause is true on the given valuation.
    ///
    /// On a partial valuation a clause may be neither satisfied nor unsatisfiable.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether every literal in the clause is false on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// Some string representation of the clause, as space separated integers.
    fn as_string(&self) -> String;
}

/// The formula trait, for collections of clauses.
pub trait Formula {
    /// An iterator over the clauses of the formula.
    fn clauses(&self) -> impl Iterator<Item = &CClause>;

    /// Whether every clause of the formula is satisfied on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// The greatest atom appearing in the formula, if the formula is not empty of atoms.
    fn top_atom(&self) -> Option<Atom>;
}

/// The canonical representation of a clause, as a vector of literals.
pub type CClause = Vec<CLiteral>;

/// The canonical representation of a formula, as a vector of clauses.
pub type CFormula = Vec<CClause>;

impl Clause for [CLiteral] {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .all(|literal| valuation.value_of(literal.atom()) == Some(!literal.polarity()))
    }

    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        the_string.trim_end().to_string()
    }
}

impl Clause for Vec<CLiteral> {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.as_slice().literals()
    }

    fn size(&self) -> usize {
        self.as_slice().size()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().atoms()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.as_slice().satisfied_on(valuation)
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.as_slice().unsatisfiable_on(valuation)
    }

    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }
}

impl Formula for [CClause] {
    fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.iter()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().all(|clause| clause.satisfied_on(valuation))
    }

    fn top_atom(&self) -> Option<Atom> {
        self.iter().flat_map(|clause| clause.atoms()).max()
    }
}

impl Formula for Vec<CClause> {
    fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.as_slice().clauses()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.as_slice().satisfied_on(valuation)
    }

    fn top_atom(&self) -> Option<Atom> {
        self.as_slice().top_atom()
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    #[test]
    fn empty_clause_empty_formula() {
        let valuation = vec![None, Some(true)];

        let empty_clause = CClause::default();
        assert!(!empty_clause.satisfied_on(&valuation));
        assert!(empty_clause.unsatisfiable_on(&valuation));

        let empty_formula = CFormula::default();
        assert!(empty_formula.satisfied_on(&valuation));
        assert_eq!(empty_formula.top_atom(), None);
    }

    #[test]
    fn satisfaction_is_clausewise() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);

        let formula = vec![vec![p], vec![q]];

        let p_valuation = vec![None, Some(true), Some(false)];
        assert!(!formula.satisfied_on(&p_valuation));

        let pq_valuation = vec![None, Some(true), Some(true)];
        assert!(formula.satisfied_on(&pq_valuation));
    }
}
