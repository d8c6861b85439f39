//! Default configuration values.

use crate::config::PolarityLean;

/// Decisions assign false unless the lean says otherwise, keeping solves deterministic by default.
pub const POLARITY_LEAN: PolarityLean = 0.0;

/// Enough room for the exact penalty totals of any realistic rule set.
pub const SUBSET_SUM_BOUND: usize = 1 << 12;
