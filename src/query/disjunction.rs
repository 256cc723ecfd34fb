use log::debug;

use crate::query::query_norm::compute_query_norm;
use crate::query::score_combiner::{disjunction_combiner, ScoreCombiner};
use crate::searcher::close_all;
use crate::{DocId, DocumentMatch, Searcher, SearcherOptions};

// Number of children expected to agree on a same doc, in the common case.
const MATCHING_INITIAL_CAPACITY: usize = 8;

/// `Searcher` matching the documents matched by at least
/// `min_should_match` of its children (and at least one of them).
///
/// All of the children positioned on a matching document contribute to
/// its score. Children are merged with a linear scan, which is efficient
/// for the small number of clauses a disjunction usually has.
pub struct DisjunctionSearcher {
    searchers: Vec<Box<dyn Searcher>>,
    currs: Vec<Option<DocumentMatch>>,
    // Ordinals of the children positioned on the lowest current doc,
    // in increasing order.
    matching: Vec<usize>,
    min_should_match: usize,
    score_combiner: Box<dyn ScoreCombiner>,
    initialized: bool,
    exhausted: bool,
    closed: bool,
}

impl DisjunctionSearcher {
    /// Creates a new `DisjunctionSearcher`.
    ///
    /// If `min_should_match` exceeds the number of children, no document
    /// can match and the searcher is empty.
    ///
    /// Computes the query norm of the children right away. A parent
    /// searcher may override it later through `.set_query_norm()`.
    pub fn new(
        mut searchers: Vec<Box<dyn Searcher>>,
        min_should_match: usize,
        options: &SearcherOptions,
    ) -> DisjunctionSearcher {
        let sum_of_squared_weights: f64 = searchers.iter().map(|searcher| searcher.weight()).sum();
        let query_norm = compute_query_norm(sum_of_squared_weights);
        for searcher in &mut searchers {
            searcher.set_query_norm(query_norm);
        }
        let num_clauses = searchers.len();
        if min_should_match > num_clauses {
            debug!(
                "disjunction requires {min_should_match} matching clauses out of {num_clauses}, \
                 it cannot match any document"
            );
        }
        DisjunctionSearcher {
            currs: vec![None; num_clauses],
            matching: Vec::with_capacity(MATCHING_INITIAL_CAPACITY.min(num_clauses)),
            exhausted: num_clauses == 0 || min_should_match > num_clauses,
            searchers,
            min_should_match,
            score_combiner: disjunction_combiner(num_clauses, options),
            initialized: false,
            closed: false,
        }
    }

    fn initialize(&mut self) -> crate::Result<()> {
        self.initialized = true;
        if self.exhausted {
            return Ok(());
        }
        for (searcher, curr) in self.searchers.iter_mut().zip(self.currs.iter_mut()) {
            *curr = searcher.advance()?;
        }
        self.update_matching();
        Ok(())
    }

    /// Collects the children positioned on the lowest current doc.
    /// On ties, children are kept in their ordinal order.
    fn update_matching(&mut self) {
        self.matching.clear();
        let mut lowest_doc = DocId::MAX;
        for (ord, curr) in self.currs.iter().enumerate() {
            let Some(doc_match) = curr else {
                continue;
            };
            if self.matching.is_empty() || doc_match.doc < lowest_doc {
                lowest_doc = doc_match.doc;
                self.matching.clear();
                self.matching.push(ord);
            } else if doc_match.doc == lowest_doc {
                self.matching.push(ord);
            }
        }
    }
}

impl Searcher for DisjunctionSearcher {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        if !self.initialized {
            self.initialize()?;
        }
        loop {
            if self.exhausted {
                return Ok(None);
            }
            let Some(&first_ord) = self.matching.first() else {
                self.exhausted = true;
                return Ok(None);
            };
            let Some(candidate) = self.currs[first_ord].as_ref().map(|doc_match| doc_match.doc)
            else {
                self.exhausted = true;
                return Ok(None);
            };
            let doc_match = if self.matching.len() >= self.min_should_match {
                let constituents: Vec<DocumentMatch> = self
                    .matching
                    .iter()
                    .filter_map(|&ord| self.currs[ord].take())
                    .collect();
                Some(self.score_combiner.combine(candidate, constituents))
            } else {
                None
            };
            for &ord in &self.matching {
                self.currs[ord] = self.searchers[ord].advance()?;
            }
            self.update_matching();
            if doc_match.is_some() {
                return Ok(doc_match);
            }
        }
    }

    fn seek(&mut self, target: DocId) -> crate::Result<Option<DocumentMatch>> {
        if !self.initialized {
            self.initialize()?;
        }
        if self.exhausted {
            return Ok(None);
        }
        for (searcher, curr) in self.searchers.iter_mut().zip(self.currs.iter_mut()) {
            if curr.as_ref().map_or(false, |doc_match| doc_match.doc < target) {
                *curr = searcher.seek(target)?;
            }
        }
        self.update_matching();
        self.advance()
    }

    fn weight(&self) -> f64 {
        self.searchers.iter().map(|searcher| searcher.weight()).sum()
    }

    fn set_query_norm(&mut self, query_norm: f64) {
        for searcher in &mut self.searchers {
            searcher.set_query_norm(query_norm);
        }
    }

    fn size_hint(&self) -> u32 {
        self.searchers
            .iter()
            .map(|searcher| searcher.size_hint())
            .fold(0u32, u32::saturating_add)
    }

    fn min_should_match(&self) -> usize {
        self.min_should_match
    }

    fn close(&mut self) -> crate::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.initialized = true;
        self.exhausted = true;
        self.currs.iter_mut().for_each(|curr| *curr = None);
        self.matching.clear();
        close_all(self.searchers.iter_mut())
    }
}
