//! A DPLL satisfiability solver over persistent (immutable, structurally shared) clauses,
//! formulas and environments.
//!
//! ```
//! use dpll_sat::{solve, Clause, Formula, Literal, Variable};
//!
//! // (a) ∧ (~a ∨ b)
//! let f = Formula::new(Clause::new(Literal::positive("a")))
//!     .add_clause(Clause::new(Literal::negative("a")).add(Literal::positive("b")));
//! let env = solve(&f).expect("satisfiable");
//! assert_eq!(env.get(&Variable::new("b")), Some(true));
//! ```

pub mod solver;

pub use solver::{
    clause::{Clause, Reduced},
    config::SolverConfig,
    dpll_solver::{solve, substitute, ClauseList, DpllSolver},
    environment::Environment,
    formula::Formula,
    persistent_list::PersistentList,
    stats::RuntimeStats,
    types::{Literal, SolveStatus, Variable},
};
