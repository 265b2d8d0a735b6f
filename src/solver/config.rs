use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Wall-clock budget for a single solve. Once exceeded, the search gives up and
    /// reports `SolveStatus::Unknown`.
    pub time_limit: Option<Duration>,
    /// Maximum number of branch points (non-unit decisions) per solve; `Unknown` past it.
    pub decision_limit: Option<u64>,
    /// Whether to re-evaluate the input formula under every model found, logging an error
    /// on any clause left unsatisfied.
    pub check_models: bool,
}

impl SolverConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_decision_limit(mut self, limit: u64) -> Self {
        self.decision_limit = Some(limit);
        self
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.time_limit,
            decision_limit: self.decision_limit,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            decision_limit: None,
            check_models: cfg!(debug_assertions),
        }
    }
}

// Budget checked by the search loop.
#[derive(Default, Clone, Copy, Debug)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub decision_limit: Option<u64>,
}

impl SearchLimits {
    /// Whether the search has used up its budget.
    pub fn exceeded(&self, elapsed: Duration, decisions: u64) -> bool {
        self.time_limit.is_some_and(|t| elapsed >= t)
            || self.decision_limit.is_some_and(|d| decisions > d)
    }
}
