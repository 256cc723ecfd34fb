use crate::{DocId, DocumentMatch, Searcher};

/// `EmptySearcher` is a dummy `Searcher` in which no document matches.
///
/// It is useful for tests and for clauses that cannot match anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptySearcher;

impl Searcher for EmptySearcher {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        Ok(None)
    }

    fn seek(&mut self, _target: DocId) -> crate::Result<Option<DocumentMatch>> {
        Ok(None)
    }

    fn weight(&self) -> f64 {
        0.0
    }

    fn set_query_norm(&mut self, _query_norm: f64) {}

    fn size_hint(&self) -> u32 {
        0
    }

    fn close(&mut self) -> crate::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EmptySearcher;
    use crate::Searcher;

    #[test]
    fn test_empty_searcher() {
        let mut empty = EmptySearcher;
        assert_eq!(empty.advance().unwrap(), None);
        assert_eq!(empty.seek(10).unwrap(), None);
        assert_eq!(empty.advance().unwrap(), None);
        assert_eq!(empty.size_hint(), 0);
    }
}
