/*!
(The internal representation of) an atom, aka. a boolean variable.

Atoms are things to which assigning a truth value is of interest.
Here, each attribute registered with a context is backed by an atom, and during a query further atoms may be introduced to help express some constraint (see [encoding](crate::encoding)).

Each atom is a u32 *u* such that either:
- *u* is 0, and reserved, or:
- *u* belongs to some contiguous range \[1..*b*\] for a known bound *b*.

This representation allows an atom to be used as the index of a structure, e.g. `valuation[atom]`, without taking too much space.

# Notes
- The external representation of an atom --- its name, and perhaps names for its values --- is stored in the [attribute database](crate::db::attribute).
- In the SAT literature atoms are often called 'variables', while in the logic literature 'atoms' is more common.
*/

/// An atom, aka. a boolean variable.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited to [i32::MAX] so any literal survives a round trip through a signed integer representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
