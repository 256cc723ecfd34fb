use log::debug;

use crate::query::query_norm::compute_query_norm;
use crate::query::score_combiner::{conjunction_combiner, ScoreCombiner};
use crate::query::{intersect_searchers, DisjunctionSearcher, Occur};
use crate::searcher::close_all;
use crate::{DocId, DocumentMatch, Searcher, SearcherOptions};

/// Returns true if `curr` is positioned strictly before `target`.
fn is_before(curr: &Option<DocumentMatch>, target: DocId) -> bool {
    curr.as_ref().map_or(false, |doc_match| doc_match.doc < target)
}

/// Returns true if `curr` is positioned exactly on `target`.
fn is_on(curr: &Option<DocumentMatch>, target: DocId) -> bool {
    curr.as_ref().map_or(false, |doc_match| doc_match.doc == target)
}

/// Combines a required, an optional and an excluded branch into
/// a single `Searcher`.
///
/// - When `must` is present, it drives the candidates: every match of
///   `must` is a candidate.
/// - Otherwise `should` drives the candidates, and any match of `should`
///   is a result.
/// - `must_not` never drives candidates. It only removes the candidates
///   it matches, and has no impact on scoring.
///
/// When `must` drives, a candidate also matched by `should` is scored
/// with both branches. A candidate not matched by `should` is kept, with
/// the `must` score only, unless `should` declares a non-zero
/// `min_should_match`.
///
/// Without `must` and `should`, the searcher matches nothing.
pub struct BooleanSearcher {
    must: Option<Box<dyn Searcher>>,
    should: Option<Box<dyn Searcher>>,
    must_not: Option<Box<dyn Searcher>>,
    curr_must: Option<DocumentMatch>,
    curr_should: Option<DocumentMatch>,
    curr_must_not: Option<DocumentMatch>,
    score_combiner: Box<dyn ScoreCombiner>,
    initialized: bool,
    exhausted: bool,
    closed: bool,
}

impl BooleanSearcher {
    /// Creates a new `BooleanSearcher`.
    ///
    /// The query norm is computed from the weights of `must` and `should`,
    /// and pushed down to them right away.
    pub fn new(
        mut must: Option<Box<dyn Searcher>>,
        mut should: Option<Box<dyn Searcher>>,
        must_not: Option<Box<dyn Searcher>>,
        options: &SearcherOptions,
    ) -> BooleanSearcher {
        let sum_of_squared_weights: f64 = must
            .iter()
            .chain(should.iter())
            .map(|searcher| searcher.weight())
            .sum();
        let query_norm = compute_query_norm(sum_of_squared_weights);
        for searcher in must.iter_mut().chain(should.iter_mut()) {
            searcher.set_query_norm(query_norm);
        }
        let has_driving_branch = must.is_some() || should.is_some();
        if !has_driving_branch {
            debug!(
                "boolean searcher without must nor should clause (must_not present: {}), it \
                 cannot match any document",
                must_not.is_some()
            );
        }
        BooleanSearcher {
            must,
            should,
            must_not,
            curr_must: None,
            curr_should: None,
            curr_must_not: None,
            score_combiner: conjunction_combiner(options),
            initialized: false,
            exhausted: !has_driving_branch,
            closed: false,
        }
    }

    /// Creates a `BooleanSearcher` from a list of clauses.
    ///
    /// `Must` clauses are intersected, `Should` clauses are merged in a
    /// disjunction requiring `min_should_match` of them, and `MustNot`
    /// clauses are merged in a disjunction used as an exclusion set.
    pub fn from_clauses(
        clauses: Vec<(Occur, Box<dyn Searcher>)>,
        min_should_match: usize,
        options: &SearcherOptions,
    ) -> BooleanSearcher {
        let mut must_searchers = Vec::new();
        let mut should_searchers = Vec::new();
        let mut must_not_searchers = Vec::new();
        for (occur, searcher) in clauses {
            match occur {
                Occur::Must => must_searchers.push(searcher),
                Occur::Should => should_searchers.push(searcher),
                Occur::MustNot => must_not_searchers.push(searcher),
            }
        }
        let must = if must_searchers.is_empty() {
            None
        } else {
            Some(intersect_searchers(must_searchers, options))
        };
        let should: Option<Box<dyn Searcher>> = if should_searchers.is_empty() {
            None
        } else {
            Some(Box::new(DisjunctionSearcher::new(
                should_searchers,
                min_should_match,
                options,
            )))
        };
        let must_not: Option<Box<dyn Searcher>> = if must_not_searchers.is_empty() {
            None
        } else {
            // Excluded clauses are never scored.
            let exclusion_options = SearcherOptions {
                explain: false,
                ..options.without_scoring()
            };
            Some(Box::new(DisjunctionSearcher::new(
                must_not_searchers,
                0,
                &exclusion_options,
            )))
        };
        BooleanSearcher::new(must, should, must_not, options)
    }

    fn initialize(&mut self) -> crate::Result<()> {
        self.initialized = true;
        if self.exhausted {
            return Ok(());
        }
        if let Some(must) = self.must.as_mut() {
            self.curr_must = must.advance()?;
        }
        if let Some(should) = self.should.as_mut() {
            self.curr_should = should.advance()?;
        }
        if let Some(must_not) = self.must_not.as_mut() {
            self.curr_must_not = must_not.advance()?;
        }
        Ok(())
    }

    /// Returns the current doc of the branch driving the candidates.
    fn candidate(&self) -> Option<DocId> {
        let driving = if self.must.is_some() {
            &self.curr_must
        } else {
            &self.curr_should
        };
        driving.as_ref().map(|doc_match| doc_match.doc)
    }

    /// Steps the branch driving the candidates.
    fn advance_driving(&mut self) -> crate::Result<()> {
        if let Some(must) = self.must.as_mut() {
            self.curr_must = must.advance()?;
        } else if let Some(should) = self.should.as_mut() {
            self.curr_should = should.advance()?;
        }
        Ok(())
    }

    /// Returns true if the candidate is matched by the `must_not` branch.
    fn is_excluded(&mut self, candidate: DocId) -> crate::Result<bool> {
        let Some(must_not) = self.must_not.as_mut() else {
            return Ok(false);
        };
        if is_before(&self.curr_must_not, candidate) {
            self.curr_must_not = must_not.seek(candidate)?;
        }
        Ok(is_on(&self.curr_must_not, candidate))
    }

    /// Resolves a candidate driven by the `must` branch.
    ///
    /// Returns `None` if the candidate is rejected because `should`
    /// required a minimum contribution it did not get. If `should` is
    /// exhausted at that point, the searcher is exhausted as well.
    fn resolve_must_candidate(
        &mut self,
        candidate: DocId,
    ) -> crate::Result<Option<DocumentMatch>> {
        let mut constituents = Vec::with_capacity(2);
        if let Some(should) = self.should.as_mut() {
            if is_before(&self.curr_should, candidate) {
                self.curr_should = should.seek(candidate)?;
            }
            if is_on(&self.curr_should, candidate) {
                constituents.extend(self.curr_must.take());
                constituents.extend(self.curr_should.take());
                self.curr_should = should.advance()?;
            } else if should.min_should_match() > 0 {
                if self.curr_should.is_none() {
                    // No later candidate can get the required contribution.
                    self.exhausted = true;
                }
                return Ok(None);
            }
        }
        if constituents.is_empty() {
            constituents.extend(self.curr_must.take());
        }
        Ok(Some(self.score_combiner.combine(candidate, constituents)))
    }
}

impl Searcher for BooleanSearcher {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        if !self.initialized {
            self.initialize()?;
        }
        loop {
            if self.exhausted {
                return Ok(None);
            }
            let Some(candidate) = self.candidate() else {
                self.exhausted = true;
                return Ok(None);
            };
            if self.is_excluded(candidate)? {
                self.advance_driving()?;
                continue;
            }
            if self.must.is_none() {
                // `should` drives: its match already is the result.
                let doc_match = self.curr_should.take();
                self.advance_driving()?;
                return Ok(doc_match);
            }
            let doc_match = self.resolve_must_candidate(candidate)?;
            if self.exhausted {
                return Ok(None);
            }
            self.advance_driving()?;
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
        if let Some(must) = self.must.as_mut() {
            if is_before(&self.curr_must, target) {
                self.curr_must = must.seek(target)?;
            }
        }
        if let Some(should) = self.should.as_mut() {
            if is_before(&self.curr_should, target) {
                self.curr_should = should.seek(target)?;
            }
        }
        if let Some(must_not) = self.must_not.as_mut() {
            if is_before(&self.curr_must_not, target) {
                self.curr_must_not = must_not.seek(target)?;
            }
        }
        self.advance()
    }

    fn weight(&self) -> f64 {
        self.must
            .iter()
            .chain(self.should.iter())
            .map(|searcher| searcher.weight())
            .sum()
    }

    fn set_query_norm(&mut self, query_norm: f64) {
        for searcher in self.must.iter_mut().chain(self.should.iter_mut()) {
            searcher.set_query_norm(query_norm);
        }
    }

    /// `must_not` is ignored: it can only reduce the number of matches.
    fn size_hint(&self) -> u32 {
        self.must
            .iter()
            .chain(self.should.iter())
            .map(|searcher| searcher.size_hint())
            .fold(0u32, u32::saturating_add)
    }

    fn close(&mut self) -> crate::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.initialized = true;
        self.exhausted = true;
        self.curr_must = None;
        self.curr_should = None;
        self.curr_must_not = None;
        close_all(
            self.must
                .iter_mut()
                .chain(self.should.iter_mut())
                .chain(self.must_not.iter_mut()),
        )
    }
}
