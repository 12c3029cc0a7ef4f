/*!
The prover, which answers whether a query is derivable from a knowledge base.

A prover holds (at most) one knowledge base, which may be replaced at any time.
Each query is parsed with the same grammar as the rules of the knowledge base, and is resolved by [backward chaining](backward_chain).

State from a query is kept in a [context](context::ProofContext) made for the query, and so a prover is unchanged by any query, whether or not the query succeeds.

# Example

```rust
# use horn_prover::knowledge_base::KnowledgeBase;
# use horn_prover::prover::Prover;
# use horn_prover::prover::trace::Outcome;
let mut prover = Prover::default();
assert!(prover.ask("A", false).is_err());

let kb = KnowledgeBase::parse("A, A=>B, C=>D").unwrap();
prover.set_knowledge_base(kb);

assert!(prover.ask("B", false).unwrap().result);
assert!(!prover.ask("D", false).unwrap().result);
assert!(prover.ask("AB", false).unwrap().result);

let answer = prover.ask("B", true).unwrap();
let trace = answer.trace.unwrap();
assert_eq!(trace.label, "B");
assert_eq!(trace.outcome, Some(Outcome::Proved));
assert_eq!(trace.children[0].label, "A=>B");
```
*/

pub mod backward_chain;
pub mod context;
pub mod trace;

use context::ProofContext;
use trace::{Outcome, TraceNode};

use crate::{
    config::Config,
    knowledge_base::KnowledgeBase,
    misc::log::targets::PROOF,
    structures::expression::Expr,
    types::err::{self, ErrorKind},
};

/// The answer to a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    /// Whether the query was derived.
    pub result: bool,

    /// A record of the derivation, if requested.
    pub trace: Option<TraceNode>,
}

/// A prover, holding a knowledge base to query.
#[derive(Clone, Debug, Default)]
pub struct Prover {
    kb: Option<KnowledgeBase>,
    config: Config,
}

impl Prover {
    pub fn from_config(config: Config) -> Self {
        Prover { kb: None, config }
    }

    /// Replaces the knowledge base of the prover.
    pub fn set_knowledge_base(&mut self, kb: KnowledgeBase) {
        log::info!(target: PROOF, "Knowledge base of {} rules set", kb.rules().len());
        self.kb = Some(kb);
    }

    pub fn knowledge_base(&self) -> Option<&KnowledgeBase> {
        self.kb.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Asks whether the query is derivable from the knowledge base of the prover.
    ///
    /// If `trace` is set, the answer includes a record of the derivation.
    ///
    /// Fails if:
    /// - No knowledge base has been set.
    /// - The query does not parse.
    /// - The derivation does not complete, e.g. as the knowledge base has some cycle.
    pub fn ask(&self, query: &str, trace: bool) -> Result<Answer, ErrorKind> {
        let Some(kb) = &self.kb else {
            return Err(ErrorKind::from(err::StateError::NoKnowledgeBase));
        };

        let goal = Expr::parse(query, kb.facts(), false)?;

        let mut ctx = ProofContext::new(kb, &self.config);
        let mut root = TraceNode::branch(query);

        let result = ctx.evaluate_goal(&goal, &mut root.children)?;
        log::debug!(target: PROOF, "{query}: {result} ({} atoms cached)", ctx.cache_len());

        root.outcome = Some(Outcome::fresh(result));

        Ok(Answer {
            result,
            trace: match trace {
                true => Some(root),
                false => None,
            },
        })
    }
}
