/*!
A (partial) function from atoms to truth values.

If all atoms of interest are assigned a value the valuation is 'total', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is reserved, as atoms are positive integers.
- Each other index of the vector is interpreted as an atom.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* such that:
- *v*\[a\] = Some(true) *if and only if* 𝐯(a) = true.
- *v*\[a\] = Some(false) *if and only if* 𝐯(a) = false.
- *v*\[a\] = None *if and only if* 𝐯(a) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use pref_sat::structures::valuation::Valuation;
let valuation = vec![None, None, Some(true), None];

assert_eq!(valuation.value_of(2), Some(true));
assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);
assert_eq!(valuation.atom_value_pairs().count(), 3);
```

Models returned by a [solve](crate::solver) are total valuations, and are passed around in canonical form so the same evaluation methods apply to models and to the partial valuations built up during a solve.
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation, as a vector of optional booleans.
pub type CValuation = Vec<Option<bool>>;

/// Something which stores some value of an atom and/or the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    ///
    /// Nothing is also returned for an atom outside the valuation, in particular for the reserved atom 0.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator over the values of atoms in the valuation, in strict, contiguous, atom order.
    /// I.e. the first element is the value of atom 1, and the *n*th element the value of atom *n*.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator through all (atom, value) pairs, excluding the reserved atom.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through all atoms without a value on the valuation.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// The count of atoms in the valuation, excluding the reserved atom.
    fn atom_count(&self) -> usize;
}

impl<V: std::ops::Deref<Target = [Option<bool>]>> Valuation for V {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        match atom {
            0 => None,
            _ => match self.get(atom as usize) {
                Some(value) => *value,
                None => None,
            },
        }
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().skip(1).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| match value {
                None => Some(atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
