/*!
A database of attributes, mapping names to atoms.

An attribute is registered by name and backed by a fresh atom, with registration idempotent --- registering a name twice returns the same atom.
An attribute may also carry a pair of value labels, one for each polarity, so a world may be read as `cake` rather than `dessert = true`.
Labels share the namespace of attribute names, as each must resolve a bare token in a formula to a unique literal.

```rust
# use pref_sat::db::attribute::AttributeDB;
# use pref_sat::structures::literal::Literal;
let mut attributes = AttributeDB::default();

let dessert = attributes.register_labeled("dessert", "cake", "ice_cream").unwrap();
assert_eq!(attributes.register("dessert"), Ok(dessert));

let cake = attributes.literal_of("cake").unwrap();
assert_eq!(cake.atom(), dessert);
assert!(cake.polarity());

let ice_cream = attributes.literal_of("ice_cream").unwrap();
assert!(!ice_cream.polarity());
```
*/

use std::collections::HashMap;

use crate::{
    structures::{
        atom::{ATOM_MAX, Atom},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::RegistryError,
};

/// The attribute database.
pub struct AttributeDB {
    /// The name of each attribute, indexed by atom, with index 0 reserved.
    names: Vec<String>,

    /// The value labels of each attribute, if given, indexed by atom as with `names`.
    labels: Vec<Option<(String, String)>>,

    /// Name to atom, the inverse of `names`.
    atom_map: HashMap<String, Atom>,

    /// Value label to literal.
    literal_map: HashMap<String, CLiteral>,
}

impl Default for AttributeDB {
    fn default() -> Self {
        AttributeDB {
            names: vec![String::default()],
            labels: vec![None],
            atom_map: HashMap::default(),
            literal_map: HashMap::default(),
        }
    }
}

impl AttributeDB {
    /// The atom of the attribute called `name`, fresh on the first registration of the name.
    pub fn register(&mut self, name: &str) -> Result<Atom, RegistryError> {
        if let Some(atom) = self.atom_map.get(name) {
            return Ok(*atom);
        }

        if self.literal_map.contains_key(name) {
            return Err(RegistryError::LabelTaken(name.to_string()));
        }

        if self.names.len() > ATOM_MAX as usize {
            return Err(RegistryError::AtomsExhausted);
        }
        let atom = self.names.len() as Atom;

        self.names.push(name.to_string());
        self.labels.push(None);
        self.atom_map.insert(name.to_string(), atom);

        Ok(atom)
    }

    /// As with [register](AttributeDB::register), though with labels for the true and false values of the attribute.
    pub fn register_labeled(
        &mut self,
        name: &str,
        true_label: &str,
        false_label: &str,
    ) -> Result<Atom, RegistryError> {
        let atom = self.register(name)?;

        let pairings = [(true_label, true), (false_label, false)];

        for (label, polarity) in pairings {
            let literal = CLiteral::new(atom, polarity);
            match self.literal_map.get(label) {
                Some(known) if *known == literal => {}
                Some(_) => return Err(RegistryError::LabelTaken(label.to_string())),
                None => {
                    if self.atom_map.contains_key(label) {
                        return Err(RegistryError::LabelTaken(label.to_string()));
                    }
                }
            }
        }

        for (label, polarity) in pairings {
            self.literal_map
                .insert(label.to_string(), CLiteral::new(atom, polarity));
        }
        self.labels[atom as usize] = Some((true_label.to_string(), false_label.to_string()));

        Ok(atom)
    }

    /// The atom of the attribute called `name`, if registered.
    pub fn atom_of(&self, name: &str) -> Result<Atom, RegistryError> {
        match self.atom_map.get(name) {
            Some(atom) => Ok(*atom),
            None => Err(RegistryError::UnknownAttribute(name.to_string())),
        }
    }

    /// The literal of a bare token --- the positive literal of an attribute name, or the literal of a value label.
    pub fn literal_of(&self, token: &str) -> Result<CLiteral, RegistryError> {
        if let Some(atom) = self.atom_map.get(token) {
            return Ok(CLiteral::new(*atom, true));
        }
        match self.literal_map.get(token) {
            Some(literal) => Ok(*literal),
            None => Err(RegistryError::UnknownAttribute(token.to_string())),
        }
    }

    /// The name of an attribute, given its atom.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        match atom {
            0 => None,
            _ => self.names.get(atom as usize).map(String::as_str),
        }
    }

    /// A display token for an atom set to `value` --- the matching value label if one was given, and otherwise the attribute name, prefixed '-' for false.
    pub fn token_of(&self, atom: Atom, value: bool) -> Option<String> {
        let name = self.name_of(atom)?;
        match &self.labels[atom as usize] {
            Some((true_label, false_label)) => match value {
                true => Some(true_label.clone()),
                false => Some(false_label.clone()),
            },
            None => match value {
                true => Some(name.to_string()),
                false => Some(format!("-{name}")),
            },
        }
    }

    /// A display string for the attribute part of a valuation, with unvalued attributes skipped.
    pub fn valuation_string(&self, valuation: &impl Valuation) -> String {
        let mut tokens = Vec::with_capacity(self.count());
        for atom in self.atoms() {
            if let Some(value) = valuation.value_of(atom) {
                if let Some(token) = self.token_of(atom, value) {
                    tokens.push(token);
                }
            }
        }
        tokens.join(" ")
    }

    /// The count of registered attributes.
    pub fn count(&self) -> usize {
        self.names.len() - 1
    }

    /// An iterator over the atoms of all registered attributes, in registration order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        1..=(self.count() as Atom)
    }
}
