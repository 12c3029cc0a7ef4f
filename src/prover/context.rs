/*!
The context of a single query.

A context holds the proof cache of a query, a map from the symbol of an atom to the value most recently derived for the atom.
The cache is empty when a context is made, and is dropped with the context when the query returns.
So, nothing derived during one query is available to another.

In addition, a context tracks the depth of the derivation and the goals whose derivation is in progress, in order to stop derivations which do not terminate.
*/

use std::collections::HashMap;

use crate::{
    config::Config,
    knowledge_base::KnowledgeBase,
    misc::log::targets::{CACHE, PROOF},
    types::err::{self},
};

/// The proof cache, and other state of a single query.
pub struct ProofContext<'kb> {
    /// The knowledge base queried.
    pub(super) kb: &'kb KnowledgeBase,

    cache: HashMap<char, bool>,

    depth: usize,

    depth_limit: usize,

    /// Atoms whose derivation is in progress, if cycles are checked.
    in_progress: Option<Vec<char>>,
}

impl<'kb> ProofContext<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, config: &Config) -> Self {
        ProofContext {
            kb,
            cache: HashMap::default(),
            depth: 0,
            depth_limit: config.depth_limit.value,
            in_progress: match config.cycle_check.value {
                true => Some(Vec::default()),
                false => None,
            },
        }
    }

    /// The value cached for an atom, if any.
    pub fn cached(&self, symbol: char) -> Option<bool> {
        self.cache.get(&symbol).copied()
    }

    /// Records the value derived for an atom, replacing any earlier value.
    pub fn save_proof(&mut self, symbol: char, value: bool) {
        log::trace!(target: CACHE, "{symbol}: {value}");
        self.cache.insert(symbol, value);
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Notes a step down into the derivation.
    pub fn descend(&mut self) -> Result<(), err::ProofError> {
        if self.depth >= self.depth_limit {
            log::warn!(target: PROOF, "Depth limit of {} reached", self.depth_limit);
            return Err(err::ProofError::DepthExceeded(self.depth_limit));
        }
        self.depth += 1;
        Ok(())
    }

    /// Notes a step back up from the derivation.
    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Notes the derivation of an atom is in progress.
    ///
    /// Fails if cycles are checked and the derivation of the atom was already in progress.
    pub fn begin(&mut self, symbol: char) -> Result<(), err::ProofError> {
        if let Some(in_progress) = &mut self.in_progress {
            if in_progress.contains(&symbol) {
                log::warn!(target: PROOF, "Cycle through {symbol}");
                return Err(err::ProofError::Cycle(symbol));
            }
            in_progress.push(symbol);
        }
        Ok(())
    }

    /// Notes the derivation of the most recently begun atom has finished.
    pub fn finish(&mut self) {
        if let Some(in_progress) = &mut self.in_progress {
            in_progress.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit() {
        let kb = KnowledgeBase::default();
        let mut config = Config::default();
        assert!(config.depth_limit.set(2).is_ok());

        let mut ctx = ProofContext::new(&kb, &config);
        assert!(ctx.descend().is_ok());
        assert!(ctx.descend().is_ok());
        assert_eq!(ctx.descend(), Err(err::ProofError::DepthExceeded(2)));

        ctx.ascend();
        assert_eq!(ctx.depth(), 1);
        assert!(ctx.descend().is_ok());
    }

    #[test]
    fn cycles() {
        let kb = KnowledgeBase::default();
        let mut config = Config::default();

        let mut ctx = ProofContext::new(&kb, &config);
        assert!(ctx.begin('A').is_ok());
        assert!(ctx.begin('A').is_ok());

        config.cycle_check.value = true;
        let mut ctx = ProofContext::new(&kb, &config);
        assert!(ctx.begin('A').is_ok());
        assert!(ctx.begin('B').is_ok());
        assert_eq!(ctx.begin('A'), Err(err::ProofError::Cycle('A')));

        ctx.finish();
        ctx.finish();
        assert!(ctx.begin('A').is_ok());
    }

    #[test]
    fn cache() {
        let kb = KnowledgeBase::default();
        let mut ctx = ProofContext::new(&kb, &Config::default());
        assert_eq!(ctx.cached('A'), None);

        ctx.save_proof('A', false);
        ctx.save_proof('A', true);
        assert_eq!(ctx.cached('A'), Some(true));
        assert_eq!(ctx.cache_len(), 1);
    }
}
