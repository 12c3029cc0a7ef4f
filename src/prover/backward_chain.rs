/*!
Backward chaining, from a goal to the facts and rules which support the goal.

# Overview

A goal is resolved by recursion on the structure of the goal.
- Atoms are [proven](ProofContext::prove_atom), by the facts of the knowledge base or by some rule.
- Compound expressions are [evaluated](ProofContext::evaluate_operator) by resolving each operand, and applying the truth function of the connective to the values found.

An atom is proven by checking, in order:
1. The proof cache, for a value derived earlier in the same query.
2. The facts of the knowledge base.
3. Each rule whose conclusion (textually) contains the atom, in the order given by the knowledge base.

For each rule:
- If the premise is true, given the facts alone, the atom is proven.
- If the premise is an atom, the result of proving the premise is the result for the goal.
  In particular, no further rule is tried when the premise fails.
- Otherwise, the premise is evaluated, and on failure the next rule is tried.

If no rule proves the atom, the atom is cached as false.

Only the values of atoms are cached.
Values of compound expressions are derived afresh each time.
*/

use crate::{
    misc::log::targets::PROOF,
    prover::{
        context::ProofContext,
        trace::{Outcome, TraceNode},
    },
    structures::{atom::Atom, expression::Expr, rule::Rule},
    types::err::{self},
};

impl ProofContext<'_> {
    /// Resolves any expression.
    pub fn evaluate_goal(
        &mut self,
        goal: &Expr,
        trace: &mut Vec<TraceNode>,
    ) -> Result<bool, err::ProofError> {
        match goal {
            Expr::Atom(atom) => self.prove_atom(atom, trace),
            _ => self.evaluate_operator(goal, trace),
        }
    }

    /// Attempts to prove an atom.
    pub fn prove_atom(
        &mut self,
        atom: &Atom,
        trace: &mut Vec<TraceNode>,
    ) -> Result<bool, err::ProofError> {
        let symbol = atom.symbol();

        if let Some(value) = self.cached(symbol) {
            log::trace!(target: PROOF, "{symbol} already proved: {value}");
            trace.push(TraceNode::leaf(symbol, Outcome::cached(value)));
            return Ok(value);
        }

        if atom.value() {
            log::trace!(target: PROOF, "{symbol} is a fact");
            trace.push(TraceNode::leaf(symbol, Outcome::Proved));
            return Ok(true);
        }

        self.descend()?;
        self.begin(symbol)?;

        let result = self.prove_by_rules(atom, trace);

        self.finish();
        self.ascend();

        result
    }

    /// Attempts to prove an atom by the rules of the knowledge base.
    fn prove_by_rules(
        &mut self,
        atom: &Atom,
        trace: &mut Vec<TraceNode>,
    ) -> Result<bool, err::ProofError> {
        let symbol = atom.symbol();
        let kb = self.kb;

        for rule in kb.matching_rules(&Expr::Atom(*atom)) {
            log::trace!(target: PROOF, "{symbol} by {rule}");

            if rule.premise().evaluate() {
                trace.push(TraceNode::leaf(rule.to_string(), Outcome::Proved));
                self.save_conclusion(rule);
                return Ok(true);
            }

            let mut node = TraceNode::branch(rule.to_string());

            if let Some(premise) = rule.premise().as_atom() {
                let value = self.prove_atom(premise, &mut node.children)?;
                node.outcome = Some(Outcome::fresh(value));
                trace.push(node);

                self.save_proof(premise.symbol(), value);
                if value {
                    self.save_conclusion(rule);
                }
                return Ok(value);
            }

            let value = self.evaluate_operator(rule.premise(), &mut node.children)?;
            node.outcome = Some(Outcome::fresh(value));
            trace.push(node);

            if value {
                self.save_conclusion(rule);
                return Ok(true);
            }
        }

        log::trace!(target: PROOF, "{symbol} not proved");
        trace.push(TraceNode::leaf(symbol, Outcome::Failed));
        self.save_proof(symbol, false);

        Ok(false)
    }

    /// Resolves each operand of a compound expression and applies the connective of the expression to the values found.
    ///
    /// An atom is resolved as a goal in its own right.
    ///
    /// Conjunctions are folded to the left, so the left spine of an expression is walked in a loop.
    /// Operands are still resolved left to right, and each connective is applied once both of its operands are resolved.
    pub fn evaluate_operator(
        &mut self,
        expr: &Expr,
        trace: &mut Vec<TraceNode>,
    ) -> Result<bool, err::ProofError> {
        let mut spine = Vec::default();
        let mut leftmost = expr;
        while let Some((connective, lhs, rhs)) = leftmost.operands() {
            spine.push((connective, rhs));
            leftmost = lhs;
        }

        let mut value = self.evaluate_goal(leftmost, trace)?;

        for (connective, rhs) in spine.into_iter().rev() {
            let rhs = self.evaluate_goal(rhs, trace)?;
            value = connective.apply(value, rhs);
        }

        Ok(value)
    }

    /// Caches the conclusion of a rule as proven, if the conclusion is an atom.
    fn save_conclusion(&mut self, rule: &Rule) {
        if let Some(conclusion) = rule.conclusion().as_atom() {
            self.save_proof(conclusion.symbol(), true);
        }
    }
}
