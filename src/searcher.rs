use std::borrow::{Borrow, BorrowMut};

use crate::{DocId, DocumentMatch};

/// Represents a lazily-evaluated, sorted stream of matching documents.
///
/// Leaf searchers read their matches from an index; composite searchers
/// (conjunction, disjunction, boolean) combine the streams of the children
/// they own. Both expose the same contract, so boolean expressions nest
/// arbitrarily.
///
/// A searcher is built uninitialized: no data is read before the first call
/// to `.advance()` or `.seek()`. Once exhausted, it stays exhausted.
///
/// A searcher tree is driven by a single thread. It must be closed exactly
/// once, by the caller, when the query is done.
pub trait Searcher: Send {
    /// Returns the next match, in increasing `DocId` order.
    ///
    /// `Ok(None)` means the searcher is exhausted. Calling `.advance()` on
    /// an exhausted searcher is legal and keeps returning `Ok(None)`.
    ///
    /// An error aborts the call. The searcher should not be used afterwards.
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>>;

    /// Returns the first match whose `DocId` is greater or equal to `target`.
    ///
    /// This is equivalent to calling `.advance()` until reaching `target`,
    /// but usually much cheaper.
    ///
    /// A searcher never moves backward: seeking to a target lower than
    /// or equal to the last returned doc is not supported by leaf searchers.
    /// Composite searchers only ever forward seeks with increasing targets
    /// to their children.
    fn seek(&mut self, target: DocId) -> crate::Result<Option<DocumentMatch>> {
        while let Some(doc_match) = self.advance()? {
            if doc_match.doc >= target {
                return Ok(Some(doc_match));
            }
        }
        Ok(None)
    }

    /// Returns the contribution of this searcher to the query norm,
    /// that is the sum of the squared weights of its scoring clauses.
    fn weight(&self) -> f64;

    /// Propagates the query norm down to the scoring clauses.
    ///
    /// It is called once, before iteration begins.
    fn set_query_norm(&mut self, query_norm: f64);

    /// Returns a cheap, possibly loose, upper bound of the number of matches.
    fn size_hint(&self) -> u32;

    /// Returns the number of optional clauses that must match
    /// for this searcher to be satisfied on its own.
    fn min_should_match(&self) -> usize {
        0
    }

    /// Releases the resources held by this searcher and its children.
    fn close(&mut self) -> crate::Result<()>;

    /// Drains the searcher, calling `callback` for every match.
    fn for_each(&mut self, callback: &mut dyn FnMut(DocumentMatch)) -> crate::Result<()> {
        while let Some(doc_match) = self.advance()? {
            callback(doc_match);
        }
        Ok(())
    }

    /// Returns the number of remaining matches.
    /// Calling this method drains the `Searcher`.
    fn count_matches(&mut self) -> crate::Result<u32> {
        let mut count = 0u32;
        while self.advance()?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}

impl<TSearcher: Searcher + ?Sized> Searcher for Box<TSearcher> {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        let unboxed: &mut TSearcher = self.borrow_mut();
        unboxed.advance()
    }

    fn seek(&mut self, target: DocId) -> crate::Result<Option<DocumentMatch>> {
        let unboxed: &mut TSearcher = self.borrow_mut();
        unboxed.seek(target)
    }

    fn weight(&self) -> f64 {
        let unboxed: &TSearcher = self.borrow();
        unboxed.weight()
    }

    fn set_query_norm(&mut self, query_norm: f64) {
        let unboxed: &mut TSearcher = self.borrow_mut();
        unboxed.set_query_norm(query_norm);
    }

    fn size_hint(&self) -> u32 {
        let unboxed: &TSearcher = self.borrow();
        unboxed.size_hint()
    }

    fn min_should_match(&self) -> usize {
        let unboxed: &TSearcher = self.borrow();
        unboxed.min_should_match()
    }

    fn close(&mut self) -> crate::Result<()> {
        let unboxed: &mut TSearcher = self.borrow_mut();
        unboxed.close()
    }

    fn for_each(&mut self, callback: &mut dyn FnMut(DocumentMatch)) -> crate::Result<()> {
        let unboxed: &mut TSearcher = self.borrow_mut();
        unboxed.for_each(callback)
    }

    fn count_matches(&mut self) -> crate::Result<u32> {
        let unboxed: &mut TSearcher = self.borrow_mut();
        unboxed.count_matches()
    }
}

/// Closes all of the given searchers.
///
/// An error does not prevent closing the remaining searchers.
/// The first error encountered is returned.
pub(crate) fn close_all<'a, I>(searchers: I) -> crate::Result<()>
where I: IntoIterator<Item = &'a mut Box<dyn Searcher>> {
    let mut first_error = None;
    for searcher in searchers {
        if let Err(err) = searcher.close() {
            first_error.get_or_insert(err);
        }
    }
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
