use std::fmt::{self, Debug, Display};

use super::environment::Environment;
use super::persistent_list::{Iter, PersistentList};
use super::types::Literal;

/// A disjunction of literals.
///
/// Clauses are immutable: `add` and `reduce` build new clauses that share structure with
/// the receiver. Literal order is insertion order, and it matters only for which literal
/// `choose_literal` hands back.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Clause {
    lits: PersistentList<Literal>,
}

/// Outcome of assuming a literal true in a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reduced {
    /// The clause contained the literal and is satisfied.
    Removed,
    /// What remains of the clause. An empty clause here is a conflict.
    Clause(Clause),
}

impl Clause {
    /// A unit clause.
    pub fn new(lit: Literal) -> Self {
        Self::default().add(lit)
    }

    /// Returns a new clause with `lit` appended. A literal already present is not added
    /// twice.
    pub fn add(&self, lit: Literal) -> Self {
        if self.lits.contains(&lit) {
            return self.clone();
        }
        Self {
            lits: self.lits.add(lit),
        }
    }

    pub fn size(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.size() == 1
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.lits.contains(lit)
    }

    /// The literal to branch on: the first one added.
    pub fn choose_literal(&self) -> Option<&Literal> {
        self.lits.first()
    }

    pub fn iter(&self) -> Iter<'_, Literal> {
        self.lits.iter()
    }

    /// State of the clause once `lit` is known to be true.
    pub fn reduce(&self, lit: &Literal) -> Reduced {
        if self.lits.contains(lit) {
            return Reduced::Removed;
        }
        let neg = lit.negate();
        if self.lits.contains(&neg) {
            Reduced::Clause(Self {
                lits: self.lits.remove(&neg),
            })
        } else {
            // Unchanged; hand back a handle on the same literals.
            Reduced::Clause(self.clone())
        }
    }

    /// Some(true) if a literal is true, Some(false) if every literal is false, None if
    /// undecided under `env`.
    pub fn eval(&self, env: &Environment) -> Option<bool> {
        let mut undecided = false;
        for lit in self.iter() {
            match lit.eval(env) {
                Some(true) => return Some(true),
                Some(false) => (),
                None => undecided = true,
            }
        }
        if undecided {
            None
        } else {
            Some(false)
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        iter.into_iter().fold(Clause::default(), |c, l| c.add(l))
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit_str = self
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "Clause {{ size: {}, lits: {} }}", self.size(), lit_str)
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit_str = self
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ∨ ");
        write!(f, "({})", lit_str)
    }
}
