/*!
Encodings which turn 'the weight of violated rules is at most *c*' into clauses.

Two steps, used together by the [penalty procedures](crate::context::GenericContext::minimum_penalty):

1. [relax] gives each rule a fresh relaxation atom *v* and conjoins (*v* ∨ C) for each clause C of the rule's condition.
   Any world violating the rule forces *v* true.
   The converse is left open --- *v* may be true on a world satisfying the rule --- though as every use here bounds the weighted count of true relaxation atoms from above, a model may always set *v* to match violation exactly, and so the bound cuts off exactly the worlds whose violated weight is too great.
2. [cap_weighted_count] bounds the weighted count of true atoms by `cap`, through a sequential counter over the weighted partial sums ([Hölldobler, Manthey, Steinke](https://doi.org/10.1007/978-3-642-33347-7_7) style, restricted to one-sided order literals).

The counter allocates one order atom per (prefix, reachable sum ≤ cap) pair, where an order atom true reads 'the weight of true atoms among the first *i* is at least *s*'.
For each counted atom *v* with weight *w*, and each sum *s* reachable over the prior prefix:
- (¬q\[i-1, s\] ∨ q\[i, s\]) --- a reached sum stays reached.
- (¬q\[i-1, s\] ∨ ¬v ∨ q\[i, s+w\]) --- a true atom raises any reached sum by its weight, when the raised sum is within the cap.
- (¬q\[i-1, s\] ∨ ¬v) --- a raise past the cap is forbidden.
- (¬v ∨ q\[i, w\]), or the unit (¬v) when *w* alone is past the cap.

Atoms for a query are drawn from an [AtomSupply] starting past the attribute atoms, so no query collides with the attributes, and nothing carries over between queries.
*/

use std::collections::BTreeMap;

use crate::{
    db::penalty::PenaltyRule,
    structures::{
        atom::{ATOM_MAX, Atom},
        clause::CFormula,
        literal::{CLiteral, Literal},
    },
    types::err::RegistryError,
};

/// A supply of fresh atoms for one query, starting past a given bound.
pub struct AtomSupply {
    /// The greatest atom handed out, or the bound the supply started past.
    highest: Atom,
}

impl AtomSupply {
    /// A supply of atoms strictly greater than `bound`.
    pub fn above(bound: Atom) -> Self {
        AtomSupply { highest: bound }
    }

    /// A fresh atom, not handed out before.
    pub fn fresh(&mut self) -> Result<Atom, RegistryError> {
        if self.highest == ATOM_MAX {
            return Err(RegistryError::AtomsExhausted);
        }
        self.highest += 1;
        Ok(self.highest)
    }

    /// The greatest atom handed out, or the starting bound if none were.
    pub fn bound(&self) -> Atom {
        self.highest
    }
}

/// Conjoins a relaxed copy of each rule's condition to `formula`, returning the (relaxation atom, weight) pair of each rule.
pub fn relax(
    rules: &[&PenaltyRule],
    supply: &mut AtomSupply,
    formula: &mut CFormula,
) -> Result<Vec<(Atom, u64)>, RegistryError> {
    let mut pairs = Vec::with_capacity(rules.len());

    for rule in rules {
        let relaxer = supply.fresh()?;

        for clause in rule.condition() {
            let mut relaxed = Vec::with_capacity(clause.len() + 1);
            relaxed.push(CLiteral::new(relaxer, true));
            relaxed.extend_from_slice(clause);
            formula.push(relaxed);
        }

        pairs.push((relaxer, rule.weight()));
    }

    Ok(pairs)
}

/// Conjoins to `formula` clauses satisfiable exactly when the weighted count of true atoms among `pairs` can be read as at most `cap`.
pub fn cap_weighted_count(
    pairs: &[(Atom, u64)],
    cap: u64,
    supply: &mut AtomSupply,
    formula: &mut CFormula,
) -> Result<(), RegistryError> {
    // Order atoms for sums reachable over the prefix so far, keyed by sum.
    let mut reached: BTreeMap<u64, Atom> = BTreeMap::new();

    for &(atom, weight) in pairs {
        let mut raised: BTreeMap<u64, Atom> = BTreeMap::new();

        for (&sum, &counter) in &reached {
            let carry = order_atom(&mut raised, sum, supply)?;
            formula.push(vec![
                CLiteral::new(counter, false),
                CLiteral::new(carry, true),
            ]);

            match sum.checked_add(weight) {
                Some(raised_sum) if raised_sum <= cap => {
                    let raise = order_atom(&mut raised, raised_sum, supply)?;
                    formula.push(vec![
                        CLiteral::new(counter, false),
                        CLiteral::new(atom, false),
                        CLiteral::new(raise, true),
                    ]);
                }

                _ => {
                    formula.push(vec![
                        CLiteral::new(counter, false),
                        CLiteral::new(atom, false),
                    ]);
                }
            }
        }

        if weight <= cap {
            let base = order_atom(&mut raised, weight, supply)?;
            formula.push(vec![CLiteral::new(atom, false), CLiteral::new(base, true)]);
        } else {
            formula.push(vec![CLiteral::new(atom, false)]);
        }

        reached = raised;
    }

    Ok(())
}

/// The order atom for `sum`, fresh if the sum was not reached before.
fn order_atom(
    reached: &mut BTreeMap<u64, Atom>,
    sum: u64,
    supply: &mut AtomSupply,
) -> Result<Atom, RegistryError> {
    if let Some(atom) = reached.get(&sum) {
        return Ok(*atom);
    }
    let atom = supply.fresh()?;
    reached.insert(sum, atom);
    Ok(atom)
}
