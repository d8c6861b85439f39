//! Parsing of formulas written over attribute names.
//!
//! The grammar, fixed and small:
//!
//! ```text
//! FORMULA := "TRUE" | CLAUSE (" AND " CLAUSE)*
//! CLAUSE  := LITERAL (" OR " LITERAL)*
//! LITERAL := ["NOT "] TOKEN
//! ```
//!
//! A token is an attribute name or a value label, resolved through the attribute database --- so an unknown token fails here, before any solving.
//! `TRUE` is read as the empty formula, handy for a chain whose last alternative accepts anything.

use crate::{
    db::attribute::AttributeDB,
    structures::{
        clause::{CClause, CFormula},
        literal::{CLiteral, Literal},
    },
    types::err::{ErrorKind, ParseError},
};

/// The formula of `text`, with tokens resolved through `attributes`.
pub fn formula(text: &str, attributes: &AttributeDB) -> Result<CFormula, ErrorKind> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ErrorKind::Parse(ParseError::Formula));
    }

    if text == "TRUE" {
        return Ok(CFormula::default());
    }

    let mut the_formula = CFormula::default();
    for clause_text in text.split(" AND ") {
        the_formula.push(clause(clause_text, attributes)?);
    }
    Ok(the_formula)
}

/// The clause of `text`, with tokens resolved through `attributes`.
pub fn clause(text: &str, attributes: &AttributeDB) -> Result<CClause, ErrorKind> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ErrorKind::Parse(ParseError::Formula));
    }

    let mut the_clause = CClause::default();
    for literal_text in text.split(" OR ") {
        the_clause.push(literal(literal_text, attributes)?);
    }
    Ok(the_clause)
}

/// The literal of `text`, with the token resolved through `attributes`.
pub fn literal(text: &str, attributes: &AttributeDB) -> Result<CLiteral, ErrorKind> {
    let text = text.trim();

    match text.strip_prefix("NOT ") {
        Some(token) => {
            let token = token.trim();
            if token.is_empty() {
                return Err(ErrorKind::Parse(ParseError::Formula));
            }
            Ok(attributes.literal_of(token)?.negate())
        }

        None => {
            if text.is_empty() {
                return Err(ErrorKind::Parse(ParseError::Formula));
            }
            Ok(attributes.literal_of(text)?)
        }
    }
}
