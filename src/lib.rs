//! A library for answering whether propositional goals are derivable from a knowledge base of Horn clauses.
//!
//! horn_prover pairs a knowledge base of facts and rules with a backward chaining prover.
//! Given some query the prover answers whether the query is derivable, and (on request) with a trace of the derivation.
//!
//! # Orientation
//!
//! - [Structures](crate::structures) are the atoms, expressions, and rules from which a knowledge base is built.
//! - A [knowledge base](crate::knowledge_base) holds facts and (ordered) rules, and is parsed from text.
//! - The [prover](crate::prover) answers queries against a knowledge base, by [backward chaining](crate::prover::backward_chain).
//!
//! Useful starting points, then, may be:
//! - The [format](crate::knowledge_base#format) of a knowledge base.
//! - The [procedure](crate::prover::backward_chain) used to answer a query.
//! - The [configuration](crate::config) of a prover.
//!
//! # Examples
//!
//! + Ask whether some atoms are derivable.
//!
//! ```rust
//! # use horn_prover::knowledge_base::KnowledgeBase;
//! # use horn_prover::prover::Prover;
//! let kb = KnowledgeBase::parse("
//!   A, B,
//!   AB=>C,
//!   CE=>F,
//!   C=>D
//! ").unwrap();
//!
//! let mut prover = Prover::default();
//! prover.set_knowledge_base(kb);
//!
//! assert!(prover.ask("C", false).unwrap().result);
//! assert!(prover.ask("D", false).unwrap().result);
//! assert!(!prover.ask("F", false).unwrap().result);
//! assert!(prover.ask("E=>F", false).unwrap().result);
//! ```
//!
//! + Inspect the derivation of a query.
//!
//! ```rust
//! # use horn_prover::knowledge_base::KnowledgeBase;
//! # use horn_prover::prover::{Prover, trace::Outcome};
//! let mut prover = Prover::default();
//! prover.set_knowledge_base(KnowledgeBase::parse("A, A=>B, B=>C, BC=>D").unwrap());
//!
//! let answer = prover.ask("D", true).unwrap();
//! assert!(answer.result);
//!
//! // B is derived for the premise of BC=>D, and is taken from the proof cache when deriving C.
//! let trace = answer.trace.unwrap();
//! assert!(trace.iter().any(|node| node.label == "B" && node.outcome == Some(Outcome::AlreadyProved)));
//! ```
//!
//! # Limits
//!
//! There is no cycle detection by default, and a knowledge base with a cycle (e.g. `A=>B, B=>A`) leads to a derivation which does not terminate.
//! Such derivations are stopped on reaching a [depth limit](crate::config::Config::depth_limit), with an [error](crate::types::err::ProofError).
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! For example, the values written to the proof cache during a query can be found with the `cache` target.

pub mod config;
pub mod knowledge_base;
pub mod misc;
pub mod prover;
pub mod structures;
pub mod types;
