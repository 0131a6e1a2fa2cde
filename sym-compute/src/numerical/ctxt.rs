use std::collections::HashMap;
use sym_parser::tree::{Number, MAX_RECURSION_DEPTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values bound to variables.
///
/// The default context binds no variables, so evaluation only folds constants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Number>,

    /// The maximum depth the evaluator will descend into an expression tree.
    pub max_depth: usize,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            max_depth: MAX_RECURSION_DEPTH,
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: impl Into<Number>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Returns the context with the variable added, for chaining.
    pub fn with_var(mut self, name: &str, value: impl Into<Number>) -> Self {
        self.add_var(name, value);
        self
    }

    /// Returns the context with a different recursion limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<Number> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Number> {
        &self.vars
    }
}

impl<S: Into<String>, N: Into<Number>> FromIterator<(S, N)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
            ..Default::default()
        }
    }
}
