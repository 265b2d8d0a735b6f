use std::fmt::{self, Debug, Display};

use fxhash::FxHashSet;

use super::clause::Clause;
use super::environment::Environment;
use super::persistent_list::{Iter, PersistentList};
use super::types::Variable;

/// A conjunction of clauses.
///
/// The empty formula is trivially true. Formulas only ever grow: `add_clause`, `and` and
/// `or` each return a new formula and leave their inputs alone.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: PersistentList<Clause>,
}

impl Formula {
    /// A single-clause formula.
    pub fn new(clause: Clause) -> Self {
        Self::default().add_clause(clause)
    }

    pub fn add_clause(&self, clause: Clause) -> Self {
        Self {
            clauses: self.clauses.add(clause),
        }
    }

    /// Conjunction: this formula's clauses followed by `other`'s.
    pub fn and(&self, other: &Formula) -> Self {
        Self {
            clauses: self.clauses.concat(&other.clauses),
        }
    }

    /// Disjunction, distributed back into CNF: one clause per pair of clauses (this
    /// formula's outer, `other`'s inner), holding the literals of both.
    pub fn or(&self, other: &Formula) -> Self {
        let mut clauses = PersistentList::new();
        for left in self.iter() {
            for right in other.iter() {
                let merged = right.iter().fold(left.clone(), |c, l| c.add(l.clone()));
                clauses = clauses.add(merged);
            }
        }
        Self { clauses }
    }

    pub fn clauses(&self) -> &PersistentList<Clause> {
        &self.clauses
    }

    pub fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Every variable mentioned by some clause.
    pub fn variables(&self) -> FxHashSet<Variable> {
        self.iter()
            .flat_map(|c| c.iter())
            .map(|l| l.var().clone())
            .collect()
    }

    /// Some(false) if a clause is false, Some(true) if every clause is true, None if
    /// undecided under `env`.
    pub fn eval(&self, env: &Environment) -> Option<bool> {
        let mut undecided = false;
        for clause in self.iter() {
            match clause.eval(env) {
                Some(false) => return Some(false),
                Some(true) => (),
                None => undecided = true,
            }
        }
        if undecided {
            None
        } else {
            Some(true)
        }
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n_clauses: {}", self.len())?;
        for c in self.iter() {
            writeln!(f, "{:?}", c)?;
        }
        Ok(())
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clause_str = self
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ∧ ");
        write!(f, "{{{}}}", clause_str)
    }
}
