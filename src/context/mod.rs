/*!
The context --- to which attributes, constraints, and rules are added, and within which reasoning takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over the oracle, so any backend satisfying the [Oracle](crate::solver::Oracle) trait may drive it.
[Context] fixes the oracle to the builtin solver, and [from_config](Context::from_config) builds one without an oracle needing to be supplied alongside the config.

A context owns one of each database, the configuration, and counters for a reasoning run.
The databases are public fields, though for most uses the loading methods of the [builder](crate::builder) and the reasoning [procedures](crate::procedures) are enough.

# Example

```rust
# use pref_sat::config::Config;
# use pref_sat::context::Context;
let mut the_context = Context::from_config(Config::default());

the_context.read_attributes("a\nb".as_bytes()).unwrap();

let constraint = the_context.formula_from_str("a OR b").unwrap();
the_context.add_constraints(constraint);

let best = the_context.minimum_penalty().unwrap();
assert_eq!(best.penalty, 0);
```
*/

mod counters;
pub use counters::Counters;

use std::time::Instant;

use crate::{
    config::Config,
    db::{attribute::AttributeDB, choice::ChoiceDB, constraint::ConstraintDB, penalty::PenaltyDB},
    generic::random::SplitMix64,
    misc::log::targets::{self},
    solver::{Dpll, Oracle, Verdict},
    structures::{
        atom::Atom,
        clause::{CClause, CFormula},
    },
    types::err::ErrorKind,
};

/// A generic context, parameterised to an oracle.
pub struct GenericContext<O: Oracle> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The attribute database.
    pub attribute_db: AttributeDB,

    /// The constraint database.
    pub constraint_db: ConstraintDB,

    /// The penalty rule database.
    pub penalty_db: PenaltyDB,

    /// The choice rule database.
    pub choice_db: ChoiceDB,

    /// The oracle queries are put to.
    pub oracle: O,
}

/// A context with the oracle fixed to the builtin solver.
pub type Context = GenericContext<Dpll<SplitMix64>>;

impl<O: Oracle> GenericContext<O> {
    /// A context from a config and an oracle.
    pub fn with_oracle(config: Config, oracle: O) -> Self {
        GenericContext {
            config,
            counters: Counters::default(),
            attribute_db: AttributeDB::default(),
            constraint_db: ConstraintDB::default(),
            penalty_db: PenaltyDB::default(),
            choice_db: ChoiceDB::default(),
            oracle,
        }
    }

    /// The greatest attribute atom, with atoms above this bound free for a query to use.
    pub fn attribute_bound(&self) -> Atom {
        self.attribute_db.count() as Atom
    }

    /// Conjoins each clause of `formula` to the hard constraints, returning the count of clauses stored.
    pub fn add_constraints(&mut self, formula: CFormula) -> usize {
        self.constraint_db.add_formula(formula)
    }

    /// Puts a query to the oracle, noting the query against the counters.
    pub(crate) fn query_oracle(
        &mut self,
        formula: &[CClause],
        atom_bound: Atom,
    ) -> Result<Verdict, ErrorKind> {
        self.counters.queries += 1;
        let start = Instant::now();

        let verdict = self.oracle.solve(formula, atom_bound);

        self.counters.query_time += start.elapsed();
        log::trace!(target: targets::ORACLE,
            "Query {} of {} clauses concluded", self.counters.queries, formula.len());

        verdict.map_err(ErrorKind::from)
    }
}

impl Context {
    /// A context from a config, with the builtin solver as the oracle.
    pub fn from_config(config: Config) -> Self {
        let oracle = Dpll::from_config(&config);
        Self::with_oracle(config, oracle)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
