/*!
Tools for building a context from text.

Each input surface is line oriented, read from anything which implements [BufRead].
Blank lines are skipped, as is any line opening with '#'.

- Attributes, one per line, as a name or a name with labels for its two values:

  ```text
  starter
  dessert: cake, ice_cream
  ```

- Hard constraints, one formula per line.

- Penalty rules, one per line, as a formula and a positive weight:

  ```text
  NOT cake, 3
  ```

- Choice rules, one per line, as a chain of formulas joined by ` BT ` with an optional
  ` IF ` condition:

  ```text
  cake AND wine BT cake BT TRUE IF dessert
  ```

Formulas are written over attribute names and value labels:

```text
FORMULA := "TRUE" | CLAUSE (" AND " CLAUSE)*
CLAUSE  := LITERAL (" OR " LITERAL)*
LITERAL := ["NOT "] TOKEN
```

`TRUE` is the empty formula, satisfied by every valuation.
Any unknown token fails the read, with no change to the relevant database.

# Example

```rust
# use pref_sat::context::Context;
# use pref_sat::config::Config;
# use std::io::Write;
let mut the_context = Context::from_config(Config::default());

let mut attributes = vec![];
let _ = attributes.write(b"
starter
main
dessert: cake, ice_cream
");

let mut constraints = vec![];
let _ = constraints.write(b"
starter OR main
NOT starter OR NOT cake
");

assert_eq!(the_context.read_attributes(attributes.as_slice()), Ok(3));
assert_eq!(the_context.read_constraints(constraints.as_slice()), Ok(2));
assert_eq!(the_context.feasible(), Ok(true));
```
*/

mod formula;

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    solver::Oracle,
    structures::{clause::CFormula, literal::CLiteral},
    types::err::{ErrorKind, ParseError},
};

impl<O: Oracle> GenericContext<O> {
    /// Reads attributes into the context, one per line.
    ///
    /// A line is a name, or a name with labels for its true and false values:
    ///
    /// ```text
    /// main
    /// dessert: cake, ice_cream
    /// ```
    ///
    /// Returns a count of the attributes read.
    /// Repeated names are fine, and keep their original atoms.
    pub fn read_attributes(&mut self, mut reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut attribute_counter = 0;

        loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(ParseError::Line(line_counter))),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                buffer.clear();
                continue;
            }

            match line.split_once(':') {
                None => {
                    self.attribute_db.register(line)?;
                }

                Some((name, labels)) => {
                    let (true_label, false_label) = match labels.split_once(',') {
                        None => return Err(ErrorKind::from(ParseError::Attribute(line_counter))),
                        Some((true_label, false_label)) => {
                            (true_label.trim(), false_label.trim())
                        }
                    };
                    let name = name.trim();

                    if name.is_empty() || true_label.is_empty() || false_label.is_empty() {
                        return Err(ErrorKind::from(ParseError::Attribute(line_counter)));
                    }

                    self.attribute_db
                        .register_labeled(name, true_label, false_label)?;
                }
            }

            attribute_counter += 1;
            buffer.clear();
        }

        log::info!(target: targets::BUILDER, "Read {attribute_counter} attributes.");
        Ok(attribute_counter)
    }

    /// Reads hard constraints into the context, one formula per line.
    ///
    /// Returns a count of the clauses added, with tautologies skipped.
    /// Reading extends whatever constraints the context already holds.
    pub fn read_constraints(&mut self, mut reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut clause_counter = 0;

        loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(ParseError::Line(line_counter))),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                buffer.clear();
                continue;
            }

            let the_formula = formula::formula(line, &self.attribute_db)?;
            clause_counter += self.constraint_db.add_formula(the_formula);

            buffer.clear();
        }

        log::info!(target: targets::BUILDER, "Read {clause_counter} constraint clauses.");
        Ok(clause_counter)
    }

    /// Reads penalty rules into the context, one per line as a formula and a weight:
    ///
    /// ```text
    /// NOT cake, 3
    /// ```
    ///
    /// The formula text names the rule.
    /// Returns a count of the rules read.
    pub fn read_penalty_rules(&mut self, mut reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut rule_counter = 0;

        loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(ParseError::Line(line_counter))),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                buffer.clear();
                continue;
            }

            let (condition_text, weight_text) = match line.rsplit_once(',') {
                None => return Err(ErrorKind::from(ParseError::Penalty(line_counter))),
                Some(parts) => parts,
            };

            let weight: u64 = match weight_text.trim().parse() {
                Err(_) => return Err(ErrorKind::from(ParseError::Weight(line_counter))),
                Ok(weight) => weight,
            };

            let condition_text = condition_text.trim();
            let condition = formula::formula(condition_text, &self.attribute_db)?;
            self.penalty_db.add_rule(condition_text, condition, weight)?;

            rule_counter += 1;
            buffer.clear();
        }

        log::info!(target: targets::BUILDER, "Read {rule_counter} penalty rules.");
        Ok(rule_counter)
    }

    /// Reads choice rules into the context, one per line as a chain of formulas joined by
    /// ` BT ` with an optional ` IF ` condition:
    ///
    /// ```text
    /// cake AND wine BT cake BT TRUE IF dessert
    /// ```
    ///
    /// The line names the goal.
    /// Returns a count of the rules read.
    pub fn read_choice_rules(&mut self, mut reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut rule_counter = 0;

        loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(ParseError::Line(line_counter))),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                buffer.clear();
                continue;
            }

            let (chain_text, condition) = match line.rsplit_once(" IF ") {
                None => (line, None),

                Some((chain_text, condition_text)) => {
                    let condition = formula::formula(condition_text, &self.attribute_db)?;
                    (chain_text, Some(condition))
                }
            };

            let mut alternatives = Vec::default();
            for alternative_text in chain_text.split(" BT ") {
                alternatives.push(formula::formula(alternative_text, &self.attribute_db)?);
            }

            self.choice_db.add_rule(line, alternatives, condition)?;

            rule_counter += 1;
            buffer.clear();
        }

        log::info!(target: targets::BUILDER, "Read {rule_counter} choice rules.");
        Ok(rule_counter)
    }

    /// The formula of `text`, with tokens resolved against the registered attributes.
    ///
    /// ```rust
    /// # use pref_sat::context::Context;
    /// # use pref_sat::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    /// the_context.read_attributes("a\nb".as_bytes()).unwrap();
    ///
    /// assert!(the_context.formula_from_str("a OR b AND NOT a").is_ok());
    /// assert!(the_context.formula_from_str("a OR c").is_err());
    /// ```
    pub fn formula_from_str(&self, text: &str) -> Result<CFormula, ErrorKind> {
        formula::formula(text, &self.attribute_db)
    }

    /// The literal of `text`, an attribute name or value label, perhaps prefixed by `NOT `.
    pub fn literal_from_str(&self, text: &str) -> Result<CLiteral, ErrorKind> {
        formula::literal(text, &self.attribute_db)
    }
}
