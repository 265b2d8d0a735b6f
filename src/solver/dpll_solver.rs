use std::time::Instant;

use log::{debug, error, info, trace};

use super::{
    clause::{Clause, Reduced},
    config::{SearchLimits, SolverConfig},
    environment::Environment,
    formula::Formula,
    persistent_list::PersistentList,
    stats::RuntimeStats,
    types::{Literal, SolveStatus},
};

/// Working set of clauses the search shrinks as it assigns variables.
pub type ClauseList = PersistentList<Clause>;

/// Solves `formula` with the default configuration. Returns a satisfying environment, or
/// None if the formula is unsatisfiable.
pub fn solve(formula: &Formula) -> Option<Environment> {
    let mut solver = DpllSolver::new(SolverConfig::default());
    match solver.solve(formula) {
        SolveStatus::SAT => solver.take_model(),
        _ => None,
    }
}

/// Produces the clause list that results from setting `lit` true: satisfied clauses are
/// dropped, the negation of `lit` is struck from the rest. Order is preserved, and a
/// clause reduced to nothing stays in the list as an empty clause for the next conflict
/// scan to find.
pub fn substitute(clauses: &ClauseList, lit: &Literal) -> ClauseList {
    trace!("Substituting {} into {} clauses", lit, clauses.len());
    let mut out = ClauseList::new();
    for c in clauses {
        if let Reduced::Clause(reduced) = c.reduce(lit) {
            out = out.add(reduced);
        }
    }
    out
}

// What the search does next with a clause list.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    /// No clauses left.
    Satisfied,
    /// Some clause is empty.
    Conflict,
    /// The smallest clause is a unit; its literal is forced.
    Unit(Literal),
    /// The smallest clause has several literals; branch on this one.
    Split(Literal),
}

/// Scans `clauses` once for an empty clause while tracking the smallest one. Ties go to
/// the first smallest clause seen.
fn select(clauses: &ClauseList) -> Selection {
    let mut min: Option<&Clause> = None;
    for c in clauses {
        if c.is_empty() {
            return Selection::Conflict;
        }
        if min.map_or(true, |m| c.size() < m.size()) {
            min = Some(c);
        }
    }
    let Some(min) = min else {
        return Selection::Satisfied;
    };
    match min.choose_literal() {
        Some(lit) if min.is_unit() => Selection::Unit(lit.clone()),
        Some(lit) => Selection::Split(lit.clone()),
        None => Selection::Conflict,
    }
}

// A pending node of the search tree.
struct Branch {
    clauses: ClauseList,
    env: Environment,
    // Literal to make true before looking at the clauses; None at the root.
    assume: Option<Literal>,
    // Whether this is the second value tried for a variable.
    retry: bool,
}

pub struct DpllSolver {
    conf: SolverConfig,
    limits: SearchLimits,
    /// Satisfying environment from the last solve, if it was SAT.
    model: Option<Environment>,
    stats: RuntimeStats,
}

impl DpllSolver {
    pub fn new(conf: SolverConfig) -> Self {
        Self {
            limits: conf.limits(),
            conf,
            model: None,
            stats: RuntimeStats::default(),
        }
    }

    pub fn solve(&mut self, formula: &Formula) -> SolveStatus {
        // Record stats
        self.stats.solves += 1;
        self.stats.max_depth = 0;
        self.model = None;

        let start = Instant::now();
        let res = self.search(formula.clauses().clone(), Environment::new(), start);
        self.stats.elapsed = start.elapsed();

        if let (SolveStatus::SAT, Some(model)) = (res, &self.model) {
            if self.conf.check_models {
                self.stats.models_checked += 1;
                if formula.eval(model) != Some(true) {
                    error!("Model {} does not satisfy the formula", model);
                }
            }
        }
        info!(
            "Status: {}\tdecisions: {}\tpropagations: {}\tconflicts: {}\tElapsed: {:#?}",
            res,
            self.stats.decisions,
            self.stats.propagations,
            self.stats.conflicts,
            self.stats.elapsed
        );
        res
    }

    /// Depth-first search over assignments, starting from `env`.
    ///
    /// Pending branches live on an explicit stack instead of the call stack. Each branch
    /// owns its own clause list and environment; since both are persistent, dropping a
    /// failed branch is all the backtracking there is. The visiting order is that of the
    /// plain recursive procedure: a forced literal is taken alone, otherwise the chosen
    /// literal is tried first and its negation only once everything below it failed.
    fn search(&mut self, clauses: ClauseList, env: Environment, start: Instant) -> SolveStatus {
        // Limits are per solve; the counter keeps running across solves.
        let base_decisions = self.stats.decisions;
        let mut pending = vec![Branch {
            clauses,
            env,
            assume: None,
            retry: false,
        }];

        while let Some(branch) = pending.pop() {
            let decisions = self.stats.decisions - base_decisions;
            if self.limits.exceeded(start.elapsed(), decisions) {
                debug!("Search limit reached after {} decisions", decisions);
                return SolveStatus::Unknown;
            }

            let Branch {
                mut clauses,
                mut env,
                assume,
                retry,
            } = branch;
            if retry {
                self.stats.backtracks += 1;
            }
            if let Some(lit) = assume {
                env = env.assign(&lit);
                clauses = substitute(&clauses, &lit);
            }
            self.stats.max_depth = self.stats.max_depth.max(env.len());

            match select(&clauses) {
                Selection::Satisfied => {
                    self.model = Some(env);
                    return SolveStatus::SAT;
                }
                Selection::Conflict => {
                    debug!("Conflict at depth {}", env.len());
                    self.stats.conflicts += 1;
                }
                Selection::Unit(lit) => {
                    debug!("Propagating {}", lit);
                    self.stats.propagations += 1;
                    pending.push(Branch {
                        clauses,
                        env,
                        assume: Some(lit),
                        retry: false,
                    });
                }
                Selection::Split(lit) => {
                    debug!("Deciding lit: {}", lit);
                    self.stats.decisions += 1;
                    // Alternative goes underneath, so it's only popped once the first
                    // choice is exhausted.
                    pending.push(Branch {
                        clauses: clauses.clone(),
                        env: env.clone(),
                        assume: Some(lit.negate()),
                        retry: true,
                    });
                    pending.push(Branch {
                        clauses,
                        env,
                        assume: Some(lit),
                        retry: false,
                    });
                }
            }
        }

        SolveStatus::UNSAT
    }

    /// Model found by the last solve, if it was SAT.
    pub fn model(&self) -> Option<&Environment> {
        self.model.as_ref()
    }

    pub fn take_model(&mut self) -> Option<Environment> {
        self.model.take()
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    pub fn config(&self) -> &SolverConfig {
        &self.conf
    }

    /// Replaces the configuration used by later solves. Statistics are kept.
    pub fn reconfigure(&mut self, conf: SolverConfig) {
        self.limits = conf.limits();
        self.conf = conf;
    }
}

impl Default for DpllSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
