use crate::query::query_norm::compute_query_norm;
use crate::query::score_combiner::{conjunction_combiner, ScoreCombiner};
use crate::query::EmptySearcher;
use crate::searcher::close_all;
use crate::{DocId, DocumentMatch, Searcher, SearcherOptions};

/// Returns the conjunction of the given searchers.
///
/// A single searcher is returned as is, and an empty list of searchers
/// yields an `EmptySearcher`.
pub fn intersect_searchers(
    mut searchers: Vec<Box<dyn Searcher>>,
    options: &SearcherOptions,
) -> Box<dyn Searcher> {
    match searchers.len() {
        0 => Box::new(EmptySearcher),
        1 => searchers.swap_remove(0),
        _ => Box::new(ConjunctionSearcher::new(searchers, options)),
    }
}

/// `Searcher` matching the documents matched by all of its children.
///
/// The score is the sum of the children scores.
pub struct ConjunctionSearcher {
    searchers: Vec<Box<dyn Searcher>>,
    currs: Vec<Option<DocumentMatch>>,
    score_combiner: Box<dyn ScoreCombiner>,
    initialized: bool,
    exhausted: bool,
    closed: bool,
}

impl ConjunctionSearcher {
    /// Creates a new `ConjunctionSearcher`.
    ///
    /// Computes the query norm of the children right away. A parent
    /// searcher may override it later through `.set_query_norm()`.
    pub fn new(
        mut searchers: Vec<Box<dyn Searcher>>,
        options: &SearcherOptions,
    ) -> ConjunctionSearcher {
        let sum_of_squared_weights: f64 = searchers.iter().map(|searcher| searcher.weight()).sum();
        let query_norm = compute_query_norm(sum_of_squared_weights);
        for searcher in &mut searchers {
            searcher.set_query_norm(query_norm);
        }
        ConjunctionSearcher {
            currs: vec![None; searchers.len()],
            exhausted: searchers.is_empty(),
            searchers,
            score_combiner: conjunction_combiner(options),
            initialized: false,
            closed: false,
        }
    }

    fn initialize(&mut self) -> crate::Result<()> {
        self.initialized = true;
        for (searcher, curr) in self.searchers.iter_mut().zip(self.currs.iter_mut()) {
            *curr = searcher.advance()?;
            if curr.is_none() {
                self.exhausted = true;
                break;
            }
        }
        Ok(())
    }

    /// Returns the highest current doc, or `None` if a child is exhausted.
    fn max_current_doc(&self) -> Option<DocId> {
        let mut max_doc = 0;
        for curr in &self.currs {
            max_doc = max_doc.max(curr.as_ref()?.doc);
        }
        Some(max_doc)
    }
}

impl Searcher for ConjunctionSearcher {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        if !self.initialized {
            self.initialize()?;
        }
        'outer: loop {
            if self.exhausted {
                return Ok(None);
            }
            let Some(candidate) = self.max_current_doc() else {
                self.exhausted = true;
                return Ok(None);
            };
            for (searcher, curr) in self.searchers.iter_mut().zip(self.currs.iter_mut()) {
                let lagging = curr.as_ref().map_or(false, |doc_match| doc_match.doc < candidate);
                if !lagging {
                    continue;
                }
                *curr = searcher.seek(candidate)?;
                match curr {
                    None => {
                        self.exhausted = true;
                        return Ok(None);
                    }
                    Some(doc_match) if doc_match.doc > candidate => continue 'outer,
                    Some(_) => {}
                }
            }
            let constituents: Vec<DocumentMatch> =
                self.currs.iter_mut().filter_map(Option::take).collect();
            let doc_match = self.score_combiner.combine(candidate, constituents);
            for (searcher, curr) in self.searchers.iter_mut().zip(self.currs.iter_mut()) {
                *curr = searcher.advance()?;
                if curr.is_none() {
                    self.exhausted = true;
                    break;
                }
            }
            return Ok(Some(doc_match));
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
                if curr.is_none() {
                    self.exhausted = true;
                    return Ok(None);
                }
            }
        }
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
            .min()
            .unwrap_or(0u32)
    }

    fn close(&mut self) -> crate::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.initialized = true;
        self.exhausted = true;
        self.currs.clear();
        close_all(self.searchers.iter_mut())
    }
}
