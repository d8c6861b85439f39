/*!
Reasoning procedures, implemented on a [context](crate::context::GenericContext).

- [Penalty minimisation](crate::context::GenericContext::minimum_penalty) and [optima enumeration](crate::context::GenericContext::penalty_optima).
- [Chain ranking](crate::context::GenericContext::rank_chains) and [undominated worlds](crate::context::GenericContext::choice_optima) for choice rules.
- [Feasibility](crate::context::GenericContext::feasible) and [model enumeration](crate::context::GenericContext::feasible_models) against the hard constraints alone.

Each procedure drives the oracle through some sequence of queries, one at a time, with the order of queries load-bearing:
thresholds are swept strictly ascending and chains are walked from the most preferred alternative, so in each case the first satisfiable query is the optimum.
Queries conjoin temporary clauses to the hard constraints, and nothing is ever written back to the databases.
*/

mod choice;
mod models;
mod penalty;

pub use penalty::PenaltySweep;
