//! A library for reasoning about preferences over boolean attributes, supporting penalty logic and qualitative choice logic through a SAT oracle.
//!
//! pref_sat takes a collection of named attributes, a set of hard constraints in conjunctive normal form, and a collection of soft preference rules, and answers two kinds of question:
//! - Under penalty logic, which worlds satisfying the hard constraints minimise the summed weights of violated rules, and what is that minimum?
//! - Under qualitative choice logic, how far down a chain of successively weaker alternatives must each goal retreat before some acceptable world satisfies it?
//!
//! Both questions are answered through repeated queries to a SAT oracle, with penalty bounds translated to clauses over fresh auxiliary atoms.
//! The library ships a small oracle of its own, and the oracle sits behind a trait, so a different solver may be swapped in without touching the reasoning layers.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config), and holds four databases together with an oracle:
//! - Attributes, with their atoms and optional value labels, in an [attribute database](crate::db::attribute).
//! - Hard constraints, as a formula, in a [constraint database](crate::db::constraint).
//! - Weighted penalty rules in a [penalty database](crate::db::penalty).
//! - Chains of ranked alternatives in a [choice database](crate::db::choice).
//!
//! The databases are filled either [from text](crate::builder) or programatically, and are inspected by the reasoning [procedures]:
//! - [minimum_penalty](crate::context::GenericContext::minimum_penalty) and [penalty_optima](crate::context::GenericContext::penalty_optima) for penalty logic.
//! - [rank_chains](crate::context::GenericContext::rank_chains) and [choice_optima](crate::context::GenericContext::choice_optima) for qualitative choice logic.
//! - [feasible](crate::context::GenericContext::feasible) and friends for the hard constraints alone.
//!
//! Outcomes are returned as the structures of [reports], with witnessing worlds as valuations over the attribute atoms.
//!
//! Useful starting points, then, may be:
//! - The [builder] for the textual form of each input.
//! - The [procedures] for the reasoning loops and their use of the oracle.
//! - The [encoding](crate::encoding) for the translation of weight bounds to clauses.
//! - The [structures] to familiarise yourself with atoms, literals, clauses, and valuations.
//!
//! # Examples
//!
//! + A pair of conflicting penalty rules, where the lighter rule gives way.
//!
//! ```rust
//! # use pref_sat::config::Config;
//! # use pref_sat::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.read_attributes("fish\nwhite_wine".as_bytes()).unwrap();
//!
//! let hard = the_context.formula_from_str("fish OR white_wine").unwrap();
//! the_context.add_constraints(hard);
//!
//! the_context.read_penalty_rules("fish, 2\nNOT fish, 1".as_bytes()).unwrap();
//!
//! let best = the_context.minimum_penalty().unwrap();
//!
//! assert_eq!(best.penalty, 1);
//! assert_eq!(the_context.penalty_db.penalty_of(&best.model), 1);
//! ```
//!
//! + A goal which retreats one step down its chain.
//!
//! ```rust
//! # use pref_sat::config::Config;
//! # use pref_sat::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.read_attributes("beach\nsunny".as_bytes()).unwrap();
//!
//! let hard = the_context.formula_from_str("NOT sunny").unwrap();
//! the_context.add_constraints(hard);
//!
//! the_context.read_choice_rules("beach AND sunny BT beach BT TRUE".as_bytes()).unwrap();
//!
//! let ranked = the_context.rank_chains().unwrap();
//!
//! assert_eq!(ranked[0].to_string(), "beach AND sunny BT beach BT TRUE: rank 1");
//! ```
//!
//! # The oracle
//!
//! Oracle queries are pure.
//! Each query hands the oracle a fresh formula, auxiliary atoms are allocated above the attribute range per query, and nothing of an answer is written back to the databases.
//! So, reasoning is deterministic for a fixed context, and repeating a run returns the same answers.
//!
//! The bundled oracle is a plain iterative [DPLL solver](crate::solver::Dpll) over the canonical structures, with decision polarities drawn from a seeded generator.
//! It is suited to the scale of attribute reasoning the library targets, though anything implementing [Oracle](crate::solver::Oracle) may stand in for it.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the threshold sweep can be filtered with `RUST_LOG=penalty …` or,
//! - A trace of oracle queries with timings can be found with `RUST_LOG=oracle=trace …`

#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod encoding;
pub mod solver;

pub mod misc;
pub mod reports;
