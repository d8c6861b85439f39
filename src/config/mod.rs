/*!
Configuration of a context.

All configuration used during reasoning is contained in a [Config], fixed when the context is created.
Defaults are collected in the [defaults] module, and are set to give quick, deterministic results.
*/

pub mod defaults;

use std::time::Duration;

/// The probability of assigning true to an atom when a free decision is made during a solve.
pub type PolarityLean = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of assigning true to an atom when a free decision is made during a solve.
    pub polarity_lean: PolarityLean,

    /// An optional limit on the time taken by a single oracle query.
    ///
    /// When the limit elapses the query concludes with a timeout error.
    /// No limit is set by default.
    pub time_limit: Option<Duration>,

    /// The greatest number of distinct penalty totals to derive exactly when preparing a threshold sweep.
    ///
    /// Past this bound the sweep falls back to striding through multiples of the greatest common divisor of the rule weights.
    pub subset_sum_bound: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polarity_lean: defaults::POLARITY_LEAN,
            time_limit: None,
            subset_sum_bound: defaults::SUBSET_SUM_BOUND,
        }
    }
}
