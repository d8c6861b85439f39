//! Databases for holding the parts of a preference problem.
//!
//! - [The attribute database](crate::db::attribute)
//!   + The single source of atoms, mapping each registered attribute name (and any value labels) to an atom.
//!     Every other structure holds atoms, and never re-derives them.
//! - [The constraint database](crate::db::constraint)
//!   + The hard constraints, as a formula every acceptable world must satisfy.
//! - [The penalty database](crate::db::penalty)
//!   + Weighted rules, with the weight of each rule violated by a world counted against the world.
//! - [The choice database](crate::db::choice)
//!   + Choice rules, each an ordered chain of alternatives with earlier alternatives preferred.

pub mod attribute;
pub mod choice;
pub mod constraint;
pub mod penalty;
