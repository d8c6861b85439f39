/*!
Fundamental structures, from atoms to formulas.

In rough order of construction:
- An [atom](atom) is a boolean variable, represented as an unsigned integer.
- A [literal](literal) is an atom paired with a polarity.
- A [clause](clause) is a collection of literals, interpreted as the disjunction of those literals, and a formula is a collection of clauses, interpreted as the conjunction of those clauses.
- A [valuation](valuation) is a (partial) function from atoms to truth values.

Each structure is given as a trait together with a canonical implementation, prefixed 'C'.
The traits allow some flexibility in how things are represented, while the canonical implementations keep most signatures in the library simple.
*/

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
