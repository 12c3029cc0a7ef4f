/*!
Expressions, built from atoms by conjunction and implication.

An expression is one of:
- An [atom](crate::structures::atom).
- A conjunction of two expressions, written as adjacent letters. E.g. `AB` is the conjunction of `A` and `B`.
- An implication from one expression to another, written with `=>`. E.g. `AB=>C`.

Conjunctions are left associative, and are built by folding the atoms of some text from left to right.
So, `ABC` is the conjunction of `AB` with `C`.

The canonical text of an expression is the text the expression is parsed from, and is used both for display and when matching goals to rules.

# Example

```rust
# use std::collections::BTreeMap;
# use horn_prover::structures::{atom::Atom, expression::Expr};
let mut facts = BTreeMap::new();
facts.insert('A', Atom::from_char('A', true).unwrap());

let rule = Expr::parse("AB=>C", &facts, true).unwrap();
assert_eq!(rule.to_string(), "AB=>C");

// B is not a fact, so the premise is false and the implication holds.
assert!(rule.evaluate());

assert!(Expr::parse("AB", &facts, true).is_err());
assert!(Expr::parse("AB", &facts, false).is_ok());
```
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::PARSE,
    structures::atom::Atom,
    types::err::{self},
};

/// The token separating the premise and conclusion of an implication.
pub const IMPLIES: &str = "=>";

/// An expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Atom(Atom),
    Conjunction(Box<Expr>, Box<Expr>),
    Implication(Box<Expr>, Box<Expr>),
}

/// The binary connectives of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    Conjunction,
    Implication,
}

impl Connective {
    /// The truth function of the connective, applied to the values of two operands.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::Conjunction => lhs && rhs,
            Self::Implication => !lhs || rhs,
        }
    }
}

impl Expr {
    /// Parses an expression from some text.
    ///
    /// Atoms found in `known` are used as given, and any other atom has value false.
    ///
    /// If `declaration` is set the text is read as an entry of a knowledge base, and so must not be a conjunction.
    /// Either side of an implication is always parsed without the flag.
    pub fn parse(
        text: &str,
        known: &BTreeMap<char, Atom>,
        declaration: bool,
    ) -> Result<Self, err::ParseError> {
        if text.is_empty() {
            return Err(err::ParseError::Empty);
        }

        if text.contains(IMPLIES) {
            let parts = text.split(IMPLIES).collect::<Vec<_>>();
            let [premise, conclusion] = parts.as_slice() else {
                log::trace!(target: PARSE, "{} parts of '{text}'", parts.len());
                return Err(err::ParseError::ImplicationSplit(text.to_owned()));
            };
            if premise.is_empty() || conclusion.is_empty() {
                return Err(err::ParseError::ImplicationSplit(text.to_owned()));
            }

            let premise = Expr::parse(premise, known, false)?;
            let conclusion = Expr::parse(conclusion, known, false)?;
            return Ok(Expr::Implication(Box::new(premise), Box::new(conclusion)));
        }

        let atoms = text
            .chars()
            .map(|c| match known.get(&c) {
                Some(atom) => Ok(*atom),
                None => Atom::from_char(c, false),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if declaration && atoms.len() > 1 {
            return Err(err::ParseError::TopLevelConjunction(text.to_owned()));
        }

        let mut atoms = atoms.into_iter();
        let mut expr = match atoms.next() {
            Some(atom) => Expr::Atom(atom),
            None => return Err(err::ParseError::Empty),
        };
        for atom in atoms {
            expr = Expr::Conjunction(Box::new(expr), Box::new(Expr::Atom(atom)));
        }

        Ok(expr)
    }

    /// The value of the expression, given the values of its atoms.
    pub fn evaluate(&self) -> bool {
        match self {
            Self::Atom(atom) => atom.value(),
            Self::Conjunction(lhs, rhs) => {
                Connective::Conjunction.apply(lhs.evaluate(), rhs.evaluate())
            }
            Self::Implication(lhs, rhs) => {
                Connective::Implication.apply(lhs.evaluate(), rhs.evaluate())
            }
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    /// The connective and operands of a compound expression, or nothing for an atom.
    pub fn operands(&self) -> Option<(Connective, &Expr, &Expr)> {
        match self {
            Self::Atom(_) => None,
            Self::Conjunction(lhs, rhs) => Some((Connective::Conjunction, lhs, rhs)),
            Self::Implication(lhs, rhs) => Some((Connective::Implication, lhs, rhs)),
        }
    }

    /// The canonical text of the expression.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Conjunction(lhs, rhs) => write!(f, "{lhs}{rhs}"),
            Self::Implication(lhs, rhs) => write!(f, "{lhs}{IMPLIES}{rhs}"),
        }
    }
}
