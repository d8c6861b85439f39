/*!
The oracle --- answers to whether a formula is satisfiable, and by which world.

The reasoning procedures are written against the [Oracle] trait, and treat satisfiability as an external capability: a query is a formula, an answer is a [Verdict], and nothing carries over from one query to the next.
Any backend may stand behind the trait by wrapping its calling convention into [solve](Oracle::solve), with failures mapped to a [SolverError](crate::types::err::SolverError).

The builtin backend is [Dpll], an iterative solver which interleaves unit propagation with decisions and backtracks chronologically.
It is deliberately plain: the formulas put to it are small, and a plain solver is easy to trust.

```rust
# use pref_sat::config::Config;
# use pref_sat::generic::random::SplitMix64;
# use pref_sat::solver::{Dpll, Oracle, Verdict};
# use pref_sat::structures::literal::{CLiteral, Literal};
let mut oracle: Dpll<SplitMix64> = Dpll::from_config(&Config::default());

let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);

let formula = vec![vec![p, q], vec![-p], vec![-q, p]];
assert_eq!(oracle.solve(&formula, 2), Ok(Verdict::Unsatisfiable));

let formula = vec![vec![p, q], vec![-p]];
match oracle.solve(&formula, 2) {
    Ok(Verdict::Satisfiable(model)) => assert_eq!(model, vec![None, Some(false), Some(true)]),
    _ => panic!("a model"),
};
```
*/

mod search;

use std::time::Duration;

use rand_core::RngCore;

use crate::{
    config::{Config, PolarityLean},
    structures::{atom::Atom, clause::CClause, valuation::CValuation},
    types::err::SolverError,
};

/// The answer to a query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The formula is satisfiable, witnessed by a total valuation of every atom up to the bound of the query.
    Satisfiable(CValuation),

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

/// Something which answers satisfiability queries.
pub trait Oracle {
    /// A verdict on `formula`, pure in the formula --- no state is retained across calls.
    ///
    /// `atom_bound` notes the greatest atom of interest: any model returned is total over \[1..=bound\], extended as needed when the formula mentions a greater atom.
    fn solve(&mut self, formula: &[CClause], atom_bound: Atom) -> Result<Verdict, SolverError>;
}

/// The builtin solver, parameterised to a source of randomness for decisions.
pub struct Dpll<R: RngCore + Default> {
    /// The probability a decision assigns true.
    polarity_lean: PolarityLean,

    /// An optional limit on the time taken by a single query.
    time_limit: Option<Duration>,

    /// The source of rng.
    rng: R,
}

impl<R: RngCore + Default> Dpll<R> {
    /// A solver configured from `config`, with a default source of rng.
    pub fn from_config(config: &Config) -> Self {
        Dpll {
            polarity_lean: config.polarity_lean,
            time_limit: config.time_limit,
            rng: R::default(),
        }
    }
}

impl<R: RngCore + Default> Oracle for Dpll<R> {
    fn solve(&mut self, formula: &[CClause], atom_bound: Atom) -> Result<Verdict, SolverError> {
        search::run(self, formula, atom_bound)
    }
}
