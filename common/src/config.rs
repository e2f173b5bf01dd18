use std::time::Duration;

/// Tuning knobs applied to every query served by the aggregation service.
#[derive(Clone, Debug)]
pub struct QueryConfig {
    /// Upper bound on concurrently in-flight repository lookups per fan-out.
    ///
    /// Every dispatched key still gets its own task; the bound only gates
    /// how many of them run at once.
    pub max_concurrency: usize,

    /// Abort outstanding sibling lookups as soon as one fails.
    ///
    /// Off by default: the best-effort behaviour collects whatever results
    /// arrived and reports the failures as degraded fields.
    pub fail_fast: bool,

    /// Per-dispatch deadline. On expiry the unfinished lookups are aborted
    /// and their keys surface as degraded fields instead of hanging the
    /// whole query.
    pub deadline: Option<Duration>,
}

pub const DEFAULT_MAX_CONCURRENCY: usize = 32;

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            fail_fast: false,
            deadline: None,
        }
    }
}

impl QueryConfig {
    /// Clamp nonsensical values rather than erroring on them.
    pub fn normalized(mut self) -> Self {
        if self.max_concurrency == 0 {
            self.max_concurrency = 1;
        }
        self
    }
}
