/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to reading an input.
    pub const BUILDER: &str = "builder";

    /// Logs related to [choice rule](crate::db::choice) ranking.
    pub const CHOICE: &str = "choice";

    /// Logs related to the [constraint database](crate::db::constraint).
    pub const CONSTRAINT: &str = "constraint";

    /// Logs related to model enumeration.
    pub const MODELS: &str = "models";

    /// Logs related to queries put to an oracle.
    pub const ORACLE: &str = "oracle";

    /// Logs related to the [penalty](crate::procedures) threshold sweep.
    pub const PENALTY: &str = "penalty";

    /// Logs related to unit propagation in the builtin solver.
    pub const PROPAGATION: &str = "propagation";
}
