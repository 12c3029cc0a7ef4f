//! Rules, implications from a premise to a conclusion.
//!
//! A rule is read as a Horn clause, so the conclusion of a rule holds whenever the premise does.
//! Though, either the premise or conclusion may be a conjunction of atoms, e.g. `AB=>CD`.

use crate::{
    structures::expression::{Expr, IMPLIES},
    types::err::{self},
};

/// An implication from a premise to a conclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    premise: Expr,
    conclusion: Expr,
}

impl Rule {
    pub fn new(premise: Expr, conclusion: Expr) -> Self {
        Rule {
            premise,
            conclusion,
        }
    }

    pub fn premise(&self) -> &Expr {
        &self.premise
    }

    pub fn conclusion(&self) -> &Expr {
        &self.conclusion
    }

    /// Whether the rule may be used to derive the given text.
    ///
    /// This holds whenever the text is contained within the canonical text of the conclusion, and so e.g. a rule concluding `DA` matches `A`, and `D`, and `DA`.
    pub fn concludes(&self, goal: &str) -> bool {
        self.conclusion.canonical().contains(goal)
    }
}

impl TryFrom<Expr> for Rule {
    type Error = err::ParseError;

    fn try_from(expr: Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Implication(premise, conclusion) => Ok(Rule::new(*premise, *conclusion)),
            other => Err(err::ParseError::NotARule(other.canonical())),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{IMPLIES}{}", self.premise, self.conclusion)
    }
}
