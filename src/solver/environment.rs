use std::fmt::{self, Display};

use fxhash::FxHashMap;
use im::HashMap;

use super::persistent_list::{Iter, PersistentList};
use super::types::{Literal, Variable};

/// A persistent partial assignment of variables to booleans.
///
/// Extending an environment never changes it; `put_true`/`put_false` hand back a new
/// environment that shares all earlier bindings. This is what lets a failed branch of the
/// search be abandoned without any undo work.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Environment {
    values: HashMap<Variable, bool>,
    // Bindings in the order they were made.
    bindings: PersistentList<(Variable, bool)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_true(&self, var: Variable) -> Self {
        self.put(var, true)
    }

    pub fn put_false(&self, var: Variable) -> Self {
        self.put(var, false)
    }

    /// Binds the literal's variable to the value that makes the literal true.
    pub fn assign(&self, lit: &Literal) -> Self {
        self.put(lit.var().clone(), lit.is_positive())
    }

    fn put(&self, var: Variable, value: bool) -> Self {
        match self.get(&var) {
            Some(bound) => {
                // Search only ever binds unassigned variables.
                debug_assert_eq!(bound, value, "conflicting rebinding of {}", var);
                self.clone()
            }
            None => Self {
                values: self.values.update(var.clone(), value),
                bindings: self.bindings.add((var, value)),
            },
        }
    }

    pub fn get(&self, var: &Variable) -> Option<bool> {
        self.values.get(var).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in the order they were made.
    pub fn iter(&self) -> Iter<'_, (Variable, bool)> {
        self.bindings.iter()
    }

    pub fn to_map(&self) -> FxHashMap<Variable, bool> {
        self.iter().cloned().collect()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(v, b)| (v.name(), b)))
            .finish()
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self
            .iter()
            .map(|(v, b)| format!("{}->{}", v, b))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Environment:[{}]", bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Variable {
        Variable::new(name)
    }

    #[test]
    fn put_and_get() {
        let env = Environment::new().put_true(var("a")).put_false(var("b"));
        assert_eq!(env.get(&var("a")), Some(true));
        assert_eq!(env.get(&var("b")), Some(false));
        assert_eq!(env.get(&var("c")), None);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn extension_is_persistent() {
        let base = Environment::new().put_true(var("a"));
        let left = base.put_true(var("b"));
        let right = base.put_false(var("b"));
        assert_eq!(base.get(&var("b")), None);
        assert_eq!(left.get(&var("b")), Some(true));
        assert_eq!(right.get(&var("b")), Some(false));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn assign_satisfies_literal() {
        let env = Environment::new()
            .assign(&Literal::positive("a"))
            .assign(&Literal::negative("b"));
        assert_eq!(env.get(&var("a")), Some(true));
        assert_eq!(env.get(&var("b")), Some(false));
    }

    #[test]
    fn same_value_rebinding_is_a_noop() {
        let env = Environment::new().put_true(var("a"));
        let again = env.put_true(var("a"));
        assert_eq!(again.len(), 1);
        assert_eq!(again, env);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "conflicting rebinding")]
    fn conflicting_rebinding_asserts() {
        let _ = Environment::new().put_true(var("a")).put_false(var("a"));
    }

    #[test]
    fn many_bindings() {
        let n: usize = 20_000;
        let env = (0..n).fold(Environment::new(), |env, i| {
            env.put(Variable::new(&format!("x{i}")), i % 2 == 0)
        });
        assert_eq!(env.len(), n);
        assert_eq!(env.get(&var("x0")), Some(true));
        assert_eq!(env.get(&var("x19999")), Some(false));
        assert_eq!(env.get(&var("x20000")), None);
        let last = env.iter().last().map(|(v, _)| v.name().to_string());
        assert_eq!(last.as_deref(), Some("x19999"));
    }

    #[test]
    fn iter_and_display() {
        let env = Environment::new().put_true(var("a")).put_false(var("b"));
        let order = env.iter().map(|(v, _)| v.name().to_string()).collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(env.to_string(), "Environment:[a->true, b->false]");
        assert_eq!(env.to_map().get(&var("b")), Some(&false));
    }
}
