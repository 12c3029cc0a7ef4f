//! Error types used in the library.
//!
//! - Parse errors follow from malformed knowledge base or query text, and carry the offending text where there is some.
//! - State errors follow from asking a prover something before it has anything to reason with.
//! - Proof errors follow from a derivation which could not be completed, e.g. as the knowledge base contains a cycle.
//!
//! None of these errors leave a prover in a different state than before the call which returned the error.
//!
//! The library imports this module as `err::{self}`, so error types are written with an `err::` prefix.

/// The error kind returned by public operations, wrapping a specific error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Parse(ParseError),
    Proof(ProofError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Proof(e) => write!(f, "{e}"),
            Self::State(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when revising a configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds { name: &'static str, value: String },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { name, value } => {
                write!(f, "Invalid value for '{name}': {value}")
            }
        }
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some expression was required.
    Empty,

    /// An empty string, where some knowledge base was required.
    EmptyKnowledgeBase,

    /// Splitting on `=>` did not give exactly two parts.
    ImplicationSplit(String),

    /// A symbol which is not exactly one uppercase letter.
    InvalidSymbol(String),

    /// A conjunction of atoms declared as an entry of its own.
    ///
    /// Every multi-atom entry of a knowledge base must be an implication.
    TopLevelConjunction(String),

    /// Some entry parsed to an expression which is not an implication.
    NotARule(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Invalid expression: ''"),
            Self::EmptyKnowledgeBase => write!(f, "Invalid knowledge base: ''"),
            Self::ImplicationSplit(text) => write!(f, "Invalid expression: '{text}'"),
            Self::InvalidSymbol(symbol) => write!(f, "Invalid symbol: '{symbol}'"),
            Self::TopLevelConjunction(text) => {
                write!(f, "Invalid expression: '{text}' (entries must be facts or rules)")
            }
            Self::NotARule(text) => write!(f, "Invalid rule: '{text}'"),
        }
    }
}

/// Errors from a derivation which did not run to completion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProofError {
    /// The configured recursion limit was reached.
    ///
    /// Without cycle checks, this is the (only) way a cyclic knowledge base is noticed.
    DepthExceeded(usize),

    /// A goal was requested while its own derivation was in progress.
    Cycle(char),
}

impl From<ProofError> for ErrorKind {
    fn from(e: ProofError) -> Self {
        ErrorKind::Proof(e)
    }
}

impl std::fmt::Display for ProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthExceeded(limit) => {
                write!(f, "Derivation exceeded the depth limit of {limit}")
            }
            Self::Cycle(symbol) => write!(f, "Derivation of '{symbol}' requires itself"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A query was made without a knowledge base.
    NoKnowledgeBase,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoKnowledgeBase => {
                write!(f, "Cannot evaluate your query, knowledge base is empty.")
            }
        }
    }
}
