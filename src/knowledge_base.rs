/*!
A knowledge base, made of facts and rules.

# Format

A knowledge base is read from text made of comma separated entries, where all whitespace (including line breaks) is ignored.
- An entry of exactly one character is a fact, and must be an uppercase letter.
- Every other entry is a rule, of the form `<premise>=><conclusion>`.

Either side of a rule is a sequence of uppercase letters, read as a conjunction.
For example:

```text
A, B,
AB=>C,
C=>DE
```

Facts are gathered before any rule is parsed, so a rule may mention a fact declared later in the text.
The order of rules is kept, as the order of rules determines the order in which rules are tried during a derivation.

# Example

```rust
# use horn_prover::knowledge_base::KnowledgeBase;
# use horn_prover::structures::expression::Expr;
let kb = KnowledgeBase::parse("A, A=>B, B=>DA").unwrap();

assert!(kb.facts().contains_key(&'A'));
assert_eq!(kb.rules().len(), 2);

let goal = Expr::parse("A", kb.facts(), false).unwrap();
let matches = kb.matching_rules(&goal).map(|rule| rule.to_string()).collect::<Vec<_>>();
assert_eq!(matches, vec!["B=>DA"]);

assert!(KnowledgeBase::parse("").is_err());
assert!(KnowledgeBase::parse("A, BC").is_err());
```
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::KNOWLEDGE_BASE,
    structures::{atom::Atom, expression::Expr, rule::Rule},
    types::err::{self},
};

/// The separator of entries in a knowledge base.
pub const SEPARATOR: char = ',';

/// Facts, indexed by symbol.
pub type Facts = BTreeMap<char, Atom>;

/// A collection of facts, and an (ordered) collection of rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    facts: Facts,

    /// Symbols of facts, in order of first declaration.
    declared: Vec<char>,

    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Parses a knowledge base from some text.
    ///
    /// Nothing is returned unless every entry parses, so a failed parse never touches a knowledge base already in use.
    pub fn parse(text: &str) -> Result<Self, err::ParseError> {
        let text = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        if text.is_empty() {
            return Err(err::ParseError::EmptyKnowledgeBase);
        }

        let (raw_facts, raw_rules): (Vec<&str>, Vec<&str>) = text
            .split(SEPARATOR)
            .partition(|entry| entry.chars().count() == 1);

        let mut facts = Facts::default();
        let mut declared = Vec::default();
        for raw_fact in raw_facts {
            let atom = Atom::from_symbol(raw_fact, true)?;
            if facts.insert(atom.symbol(), atom).is_none() {
                declared.push(atom.symbol());
            }
        }

        let mut rules = Vec::with_capacity(raw_rules.len());
        for raw_rule in raw_rules {
            let expr = Expr::parse(raw_rule, &facts, true)?;
            rules.push(Rule::try_from(expr)?);
        }

        log::debug!(target: KNOWLEDGE_BASE, "Parsed {} facts and {} rules", facts.len(), rules.len());

        Ok(KnowledgeBase {
            facts,
            declared,
            rules,
        })
    }

    pub fn facts(&self) -> &Facts {
        &self.facts
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules which may lead to the goal, in the order given by the knowledge base.
    ///
    /// A rule matches when the canonical text of the goal is contained in the canonical text of the conclusion of the rule.
    /// This is a test on text, rather than of entailment, and so e.g. a rule concluding `DA` matches the goal `A`.
    pub fn matching_rules<'kb>(&'kb self, goal: &Expr) -> impl Iterator<Item = &'kb Rule> + 'kb {
        let goal = goal.canonical();
        self.rules.iter().filter(move |rule| rule.concludes(&goal))
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let facts = self
            .declared
            .iter()
            .map(|symbol| symbol.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let rules = self
            .rules
            .iter()
            .map(|rule| rule.to_string())
            .collect::<Vec<_>>()
            .join(",\n");

        match (facts.is_empty(), rules.is_empty()) {
            (false, false) => write!(f, "{facts},\n{rules}"),
            (false, true) => write!(f, "{facts}"),
            (true, _) => write!(f, "{rules}"),
        }
    }
}
