use crate::query::Explanation;
use crate::{DocId, Score};

/// A single matching document, as emitted by a [`Searcher`](crate::Searcher).
///
/// Each `DocumentMatch` is handed over by value: a searcher never keeps
/// nor mutates a match it has returned.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentMatch {
    /// The matching document.
    pub doc: DocId,
    /// Relevance of the document for the clause that emitted it.
    pub score: Score,
    /// How `score` was computed. Only set when explanations are enabled.
    pub explanation: Option<Explanation>,
}

impl DocumentMatch {
    /// Creates a new `DocumentMatch` without explanation.
    pub fn new(doc: DocId, score: Score) -> DocumentMatch {
        DocumentMatch {
            doc,
            score,
            explanation: None,
        }
    }

    /// Attaches an explanation to the match.
    pub fn with_explanation(mut self, explanation: Explanation) -> DocumentMatch {
        self.explanation = Some(explanation);
        self
    }

    /// Returns the explanation of the match, or a bare node holding
    /// its score when no explanation was built.
    pub(crate) fn take_explanation(&mut self) -> Explanation {
        self.explanation
            .take()
            .unwrap_or_else(|| Explanation::new("score", self.score))
    }
}
