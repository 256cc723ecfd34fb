use crate::query::Explanation;
use crate::{DocId, DocumentMatch, Searcher, SearcherOptions};

/// `Searcher` matching all of the documents in `0..max_doc`.
///
/// All of the documents get the score `1.0 * query_norm`.
/// A query planner can use it as the required clause of a query
/// made only of excluded clauses.
#[derive(Clone, Debug)]
pub struct AllSearcher {
    doc: DocId,
    max_doc: DocId,
    query_norm: f64,
    explain: bool,
}

impl AllSearcher {
    /// Creates an `AllSearcher` over the documents `0..max_doc`.
    pub fn new(max_doc: DocId, options: &SearcherOptions) -> AllSearcher {
        AllSearcher {
            doc: 0,
            max_doc,
            query_norm: 1.0,
            explain: options.explain,
        }
    }

    fn emit(&mut self) -> Option<DocumentMatch> {
        if self.doc >= self.max_doc {
            return None;
        }
        let doc_match = DocumentMatch::new(self.doc, self.query_norm);
        self.doc += 1;
        if self.explain {
            let mut explanation = Explanation::new("AllQuery", self.query_norm);
            explanation.add_const("query norm", self.query_norm);
            return Some(doc_match.with_explanation(explanation));
        }
        Some(doc_match)
    }
}

impl Searcher for AllSearcher {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        Ok(self.emit())
    }

    fn seek(&mut self, target: DocId) -> crate::Result<Option<DocumentMatch>> {
        self.doc = self.doc.max(target);
        Ok(self.emit())
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn set_query_norm(&mut self, query_norm: f64) {
        self.query_norm = query_norm;
    }

    fn size_hint(&self) -> u32 {
        self.max_doc
    }

    fn close(&mut self) -> crate::Result<()> {
        self.doc = self.max_doc;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AllSearcher;
    use crate::tests::{drain_docs, test_seek_against_unoptimized};
    use crate::{Searcher, SearcherOptions};

    #[test]
    fn test_all_searcher() {
        let mut searcher = AllSearcher::new(3, &SearcherOptions::default());
        assert_eq!(drain_docs(&mut searcher), vec![0, 1, 2]);
        assert_eq!(searcher.advance().unwrap(), None);
    }

    #[test]
    fn test_all_searcher_with_norm() {
        let mut searcher = AllSearcher::new(5, &SearcherOptions::default().with_explain());
        searcher.set_query_norm(0.5);
        let doc_match = searcher.seek(3).unwrap().unwrap();
        assert_eq!(doc_match.doc, 3);
        assert_eq!(doc_match.score, 0.5);
        assert_eq!(doc_match.explanation.unwrap().description(), "AllQuery");
        assert_eq!(searcher.seek(10).unwrap(), None);
    }

    #[test]
    fn test_all_searcher_seek() {
        test_seek_against_unoptimized(
            || Box::new(AllSearcher::new(10, &SearcherOptions::default())),
            vec![0, 1, 5, 9, 10, 11],
        );
    }
}
