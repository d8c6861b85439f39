use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every query put to the oracle.
    pub queries: usize,

    /// The time spent waiting on the oracle, over all queries.
    pub query_time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            queries: 0,
            query_time: Duration::from_secs(0),
        }
    }
}
