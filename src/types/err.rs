//! Error types used in the library.
//!
//! - Errors raised while an input is loaded --- unknown attributes, invalid weights, and the like --- are surfaced before any solving begins.
//! - `HardConstraintsUnsatisfiable` is fatal for any reasoning which depends on the hard constraints: there is no base to prefer over.
//!   In contrast, a choice rule whose chain cannot be satisfied is noted in the report for that rule alone, and is not an error.
//! - Oracle errors are propagated to the caller of the procedure which issued the query, no procedure retries internally.

/// The general error, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error from the attribute database.
    Registry(RegistryError),

    /// An error from parsing an input.
    Parse(ParseError),

    /// An error from the penalty rule database.
    Penalty(PenaltyError),

    /// An error from the choice rule database.
    Choice(ChoiceError),

    /// An error from the oracle.
    Solver(SolverError),

    /// The hard constraints alone admit no model.
    ///
    /// Distinct from a preference without an optimum --- this is a modelling issue for the caller to fix.
    HardConstraintsUnsatisfiable,
}

/// Noted errors when registering attributes or resolving their names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// A formula references a name which was never registered.
    UnknownAttribute(String),

    /// A name or value label clashes with a name or label already registered.
    LabelTaken(String),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<RegistryError> for ErrorKind {
    fn from(e: RegistryError) -> Self {
        ErrorKind::Registry(e)
    }
}

/// Noted errors when parsing an input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Failure to read a line, with a note of the line number.
    Line(usize),

    /// A malformed attribute declaration, e.g. with a single value label.
    Attribute(usize),

    /// A penalty rule without a weight part.
    Penalty(usize),

    /// A weight which could not be read as an unsigned integer.
    Weight(usize),

    /// An empty formula, clause, or literal, where one was required.
    Formula,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors in the penalty rule database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PenaltyError {
    /// A rule with a weight of zero, rejected when the rule is added.
    InvalidWeight,
}

impl From<PenaltyError> for ErrorKind {
    fn from(e: PenaltyError) -> Self {
        ErrorKind::Penalty(e)
    }
}

/// Noted errors in the choice rule database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChoiceError {
    /// A rule whose chain holds no alternatives.
    EmptyChain,
}

impl From<ChoiceError> for ErrorKind {
    fn from(e: ChoiceError) -> Self {
        ErrorKind::Choice(e)
    }
}

/// Noted errors from the oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// The time limit set for a query elapsed before the query concluded.
    Timeout,

    /// The backend failed for some reason other than time.
    ///
    /// Unused by the builtin solver, though an adapter over some other backend may need it.
    Failure,
}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}
