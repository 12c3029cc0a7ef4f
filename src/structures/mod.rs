//! Key structures: atoms, expressions built from atoms, and rules.
//!
//! ## (Boolean) values
//!
//! Every expression has a (boolean) value, determined by the values of its atoms.
//! And, the value of an atom is true only if the atom is a fact of some knowledge base.
//!
//! The value of an expression is *not* whether the expression is derivable from a knowledge base.
//! For this, see the [prover](crate::prover).

pub mod atom;
pub mod expression;
pub mod rule;
