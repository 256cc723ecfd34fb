use crate::query::Explanation;
use crate::{DocId, DocumentMatch, Score, Searcher, SearcherOptions};

/// Leaf `Searcher` over an in-memory posting list.
///
/// Each posting carries a raw score. The emitted score is
/// `raw_score * boost * query_norm`, and the searcher weighs
/// `boost²` in the query norm.
///
/// Postings are sorted by doc id on construction. If a doc id appears
/// several times, the first posting wins.
#[derive(Clone, Debug)]
pub struct VecSearcher {
    postings: Vec<(DocId, Score)>,
    cursor: usize,
    boost: Score,
    query_norm: f64,
    explain: bool,
    closed: bool,
}

impl From<Vec<(DocId, Score)>> for VecSearcher {
    fn from(mut postings: Vec<(DocId, Score)>) -> VecSearcher {
        postings.sort_by_key(|&(doc, _)| doc);
        postings.dedup_by_key(|&mut (doc, _)| doc);
        VecSearcher {
            postings,
            cursor: 0,
            boost: 1.0,
            query_norm: 1.0,
            explain: false,
            closed: false,
        }
    }
}

impl From<Vec<DocId>> for VecSearcher {
    fn from(doc_ids: Vec<DocId>) -> VecSearcher {
        VecSearcher::from(
            doc_ids
                .into_iter()
                .map(|doc| (doc, 1.0))
                .collect::<Vec<(DocId, Score)>>(),
        )
    }
}

impl VecSearcher {
    /// Sets the boost applied to every score of this searcher.
    pub fn with_boost(mut self, boost: Score) -> VecSearcher {
        self.boost = boost;
        self
    }

    /// Applies the searcher options. Only `explain` is relevant to a leaf.
    pub fn with_options(mut self, options: &SearcherOptions) -> VecSearcher {
        self.explain = options.explain;
        self
    }

    fn posting_match(&self, ord: usize) -> DocumentMatch {
        let (doc, raw_score) = self.postings[ord];
        let score = raw_score * self.boost * self.query_norm;
        let doc_match = DocumentMatch::new(doc, score);
        if !self.explain {
            return doc_match;
        }
        let mut explanation = Explanation::new(format!("weight(doc={doc})"), score);
        explanation.add_const("raw score", raw_score);
        explanation.add_const("boost", self.boost);
        explanation.add_const("query norm", self.query_norm);
        doc_match.with_explanation(explanation)
    }
}

impl Searcher for VecSearcher {
    fn advance(&mut self) -> crate::Result<Option<DocumentMatch>> {
        if self.closed || self.cursor >= self.postings.len() {
            return Ok(None);
        }
        let doc_match = self.posting_match(self.cursor);
        self.cursor += 1;
        Ok(Some(doc_match))
    }

    fn seek(&mut self, target: DocId) -> crate::Result<Option<DocumentMatch>> {
        if self.closed {
            return Ok(None);
        }
        let remaining = &self.postings[self.cursor..];
        self.cursor += remaining.partition_point(|&(doc, _)| doc < target);
        self.advance()
    }

    fn weight(&self) -> f64 {
        self.boost * self.boost
    }

    fn set_query_norm(&mut self, query_norm: f64) {
        self.query_norm = query_norm;
    }

    fn size_hint(&self) -> u32 {
        u32::try_from(self.postings.len()).unwrap_or(u32::MAX)
    }

    fn close(&mut self) -> crate::Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {

    use super::*;
    use crate::tests::{drain_docs, test_seek_against_unoptimized};

    #[test]
    pub fn test_vec_searcher() {
        let doc_ids: Vec<DocId> = (0u32..1024u32).map(|e| e * 3).collect();
        let mut searcher = VecSearcher::from(doc_ids);
        assert_eq!(searcher.advance().unwrap().map(|m| m.doc), Some(0));
        assert_eq!(searcher.advance().unwrap().map(|m| m.doc), Some(3));
        assert_eq!(searcher.seek(14).unwrap().map(|m| m.doc), Some(15));
        assert_eq!(searcher.seek(300).unwrap().map(|m| m.doc), Some(300));
        assert_eq!(searcher.seek(6000).unwrap(), None);
        assert_eq!(searcher.advance().unwrap(), None);
        assert_eq!(searcher.advance().unwrap(), None);
    }

    #[test]
    fn test_vec_searcher_seek_does_not_move_backward() {
        let mut searcher = VecSearcher::from(vec![2, 4, 6]);
        assert_eq!(searcher.seek(4).unwrap().map(|m| m.doc), Some(4));
        assert_eq!(searcher.seek(1).unwrap().map(|m| m.doc), Some(6));
    }

    #[test]
    fn test_vec_searcher_normalizes_postings() {
        let mut searcher = VecSearcher::from(vec![(9, 1.0), (2, 3.0), (9, 5.0), (4, 1.0)]);
        assert_eq!(searcher.size_hint(), 3);
        let first = searcher.advance().unwrap().unwrap();
        assert_eq!(first.doc, 2);
        assert_nearly_equals!(first.score, 3.0);
        assert_eq!(drain_docs(&mut searcher), vec![4, 9]);
    }

    #[test]
    fn test_vec_searcher_score() {
        let mut searcher = VecSearcher::from(vec![(1, 2.0)])
            .with_boost(3.0)
            .with_options(&SearcherOptions::default().with_explain());
        assert_nearly_equals!(searcher.weight(), 9.0);
        searcher.set_query_norm(0.5);
        let doc_match = searcher.advance().unwrap().unwrap();
        assert_nearly_equals!(doc_match.score, 3.0);
        let explanation = doc_match.explanation.unwrap();
        assert_eq!(explanation.description(), "weight(doc=1)");
        assert_eq!(explanation.details().len(), 3);
    }

    #[test]
    fn test_vec_searcher_closed() {
        let mut searcher = VecSearcher::from(vec![1, 2]);
        searcher.close().unwrap();
        assert_eq!(searcher.advance().unwrap(), None);
        assert_eq!(searcher.seek(2).unwrap(), None);
    }

    #[test]
    fn test_vec_searcher_seek_against_unoptimized() {
        test_seek_against_unoptimized(
            || Box::new(VecSearcher::from(vec![1, 5, 6, 11, 12, 40])),
            vec![0, 1, 2, 6, 7, 12, 13, 40, 41],
        );
    }
}
