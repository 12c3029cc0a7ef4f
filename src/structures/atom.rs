/*!
An atom, a propositional symbol paired with a (boolean) value.

The symbol of an atom is exactly one uppercase (ascii) letter, e.g. `A`, `P`, `Z`.
So, there are at most twenty six atoms in any knowledge base.

The value of an atom is:
- `true` if the atom is declared as a fact of a knowledge base.
- `false` otherwise, including for atoms which appear only within rules.

Note, the value of an atom is fixed when the atom is parsed.
Atoms proven during a query are recorded in the context of the query, and never written back to an atom.

```rust
# use horn_prover::structures::atom::Atom;
let p = Atom::from_symbol("P", true).unwrap();
assert_eq!(p.symbol(), 'P');
assert!(p.value());

assert!(Atom::from_symbol("p", false).is_err());
assert!(Atom::from_symbol("PQ", false).is_err());
```
*/

use crate::types::err::{self};

/// An atom, aka. a 'propositional variable'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Atom {
    symbol: char,
    value: bool,
}

impl Atom {
    /// An atom from some symbol, so long as the symbol is a single uppercase letter.
    pub fn from_symbol(symbol: &str, value: bool) -> Result<Self, err::ParseError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if Atom::is_symbol(c) => Ok(Atom { symbol: c, value }),
            _ => Err(err::ParseError::InvalidSymbol(symbol.to_owned())),
        }
    }

    /// An atom from a character, so long as the character is an uppercase letter.
    pub fn from_char(symbol: char, value: bool) -> Result<Self, err::ParseError> {
        match Atom::is_symbol(symbol) {
            true => Ok(Atom { symbol, value }),
            false => Err(err::ParseError::InvalidSymbol(symbol.to_string())),
        }
    }

    /// Whether a character may be used as the symbol of an atom.
    pub fn is_symbol(c: char) -> bool {
        c.is_ascii_uppercase()
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
