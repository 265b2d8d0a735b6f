/// DPLL search driver
pub mod dpll_solver;

/// Persistent data model
pub mod clause;
pub mod environment;
pub mod formula;
pub mod persistent_list;

/// Solver config
pub mod config;

pub mod stats;
/// General util/definitions
pub mod types;
