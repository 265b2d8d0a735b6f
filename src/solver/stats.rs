use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct RuntimeStats {
    /// Record total (i.e. monotonically increasing) number of:
    /// - solves: number of solve attempts.
    /// - decisions: branch points (clauses of size > 1) the search split on.
    /// - propagations: unit clauses forced without branching.
    /// - conflicts: clause lists found to contain an empty clause.
    /// - backtracks: second branches tried after the first failed.
    /// - models_checked: models re-evaluated against their formula.
    pub solves: u64,
    pub decisions: u64,
    pub propagations: u64,
    pub conflicts: u64,
    pub backtracks: u64,
    pub models_checked: u64,

    /// Record for the last solve:
    /// - max_depth: most variables bound at once on any path.
    /// - elapsed: wall time spent in solve.
    pub max_depth: usize,
    pub elapsed: Duration,
}
