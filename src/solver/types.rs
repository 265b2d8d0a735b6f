use std::fmt::Display;
use std::ops::Not;
use std::rc::Rc;

use super::environment::Environment;

/// A named boolean variable. Cloning is cheap (the name is shared).
#[derive(Hash, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(Rc<str>);

impl Variable {
    pub fn new(name: &str) -> Variable {
        Variable(Rc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A variable together with a polarity.
#[derive(Hash, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    var: Variable,
    positive: bool,
}

impl Literal {
    pub fn new(var: Variable, positive: bool) -> Literal {
        Literal { var, positive }
    }

    pub fn positive(var: impl Into<Variable>) -> Literal {
        Literal::new(var.into(), true)
    }

    pub fn negative(var: impl Into<Variable>) -> Literal {
        Literal::new(var.into(), false)
    }

    pub fn var(&self) -> &Variable {
        &self.var
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Same variable, opposite polarity.
    pub fn negate(&self) -> Literal {
        Literal {
            var: self.var.clone(),
            positive: !self.positive,
        }
    }

    /// Value of the literal under `env`, or None if its variable is unassigned.
    pub fn eval(&self, env: &Environment) -> Option<bool> {
        env.get(&self.var).map(|v| v == self.positive)
    }
}

impl Not for Literal {
    type Output = Self;
    fn not(self) -> Literal {
        Literal {
            positive: !self.positive,
            ..self
        }
    }
}

impl Not for &Literal {
    type Output = Literal;
    fn not(self) -> Literal {
        self.negate()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", if self.positive { "" } else { "~" }, self.var)
    }
}

// Status markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Search was cut short by a configured limit.
    Unknown,
    SAT,
    UNSAT,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Unknown => "UNKNOWN",
            SolveStatus::SAT => "SAT",
            SolveStatus::UNSAT => "UNSAT",
        };
        f.write_str(s)
    }
}
