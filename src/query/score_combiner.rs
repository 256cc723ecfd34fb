use crate::query::Explanation;
use crate::{DocId, DocumentMatch, Score, SearcherOptions};

/// The `ScoreCombiner` trait defines how to compute an overall match
/// given the matches of the clauses that agree on a document.
///
/// Implementations must be deterministic and must not depend on the order
/// in which the clauses were evaluated.
pub trait ScoreCombiner: Send + Sync {
    /// Combines the `constituents`, all matching `doc`, into a single match.
    ///
    /// `constituents` is never empty and is given in clause order.
    fn combine(&self, doc: DocId, constituents: Vec<DocumentMatch>) -> DocumentMatch;
}

/// Sums the scores of the constituents.
///
/// The sum is computed over sorted scores, so that its value does not
/// depend on the order of the constituents.
fn sum_scores(constituents: &[DocumentMatch]) -> Score {
    let mut scores: Vec<Score> = constituents.iter().map(|m| m.score).collect();
    scores.sort_unstable_by(|left, right| left.total_cmp(right));
    scores.into_iter().sum()
}

fn explain_sum(score: Score, constituents: Vec<DocumentMatch>) -> Explanation {
    let mut explanation = Explanation::new("sum of:", score);
    for mut constituent in constituents {
        explanation.add_detail(constituent.take_explanation());
    }
    explanation
}

/// Ignores scores: every match gets a score of `1.0`.
///
/// It is useful to optimize the case when scoring is disabled.
#[derive(Default, Clone, Copy, Debug)]
pub struct ConstCombiner;

impl ScoreCombiner for ConstCombiner {
    fn combine(&self, doc: DocId, _constituents: Vec<DocumentMatch>) -> DocumentMatch {
        DocumentMatch::new(doc, 1.0)
    }
}

/// Sums the score of different clauses.
#[derive(Default, Clone, Copy, Debug)]
pub struct SumCombiner {
    explain: bool,
}

impl SumCombiner {
    /// Creates a `SumCombiner`.
    pub fn new(explain: bool) -> SumCombiner {
        SumCombiner { explain }
    }
}

impl ScoreCombiner for SumCombiner {
    fn combine(&self, doc: DocId, constituents: Vec<DocumentMatch>) -> DocumentMatch {
        let score = sum_scores(&constituents);
        let doc_match = DocumentMatch::new(doc, score);
        if self.explain {
            doc_match.with_explanation(explain_sum(score, constituents))
        } else {
            doc_match
        }
    }
}

/// Sums the score of different clauses, and multiplies it by
/// the fraction of the clauses that matched.
///
/// A document matching more clauses scores higher than a document
/// matching fewer clauses with the same per-clause score.
#[derive(Clone, Copy, Debug)]
pub struct CoordCombiner {
    num_clauses: usize,
    explain: bool,
}

impl CoordCombiner {
    /// Creates a `CoordCombiner` for a disjunction of `num_clauses` clauses.
    pub fn new(num_clauses: usize, explain: bool) -> CoordCombiner {
        CoordCombiner {
            num_clauses: num_clauses.max(1),
            explain,
        }
    }
}

impl ScoreCombiner for CoordCombiner {
    fn combine(&self, doc: DocId, constituents: Vec<DocumentMatch>) -> DocumentMatch {
        let num_matched = constituents.len();
        let sum = sum_scores(&constituents);
        let coord = num_matched as Score / self.num_clauses as Score;
        let score = sum * coord;
        let doc_match = DocumentMatch::new(doc, score);
        if !self.explain {
            return doc_match;
        }
        let mut explanation = Explanation::new("product of:", score);
        explanation.add_detail(explain_sum(sum, constituents));
        explanation.add_const(format!("coord({num_matched}/{})", self.num_clauses), coord);
        doc_match.with_explanation(explanation)
    }
}

/// Returns the combiner used for conjunctions and boolean clauses.
pub(crate) fn conjunction_combiner(options: &SearcherOptions) -> Box<dyn ScoreCombiner> {
    if options.is_scoring_enabled() {
        Box::new(SumCombiner::new(options.explain))
    } else {
        Box::new(ConstCombiner)
    }
}

/// Returns the combiner used for a disjunction over `num_clauses` clauses.
pub(crate) fn disjunction_combiner(
    num_clauses: usize,
    options: &SearcherOptions,
) -> Box<dyn ScoreCombiner> {
    if !options.is_scoring_enabled() {
        Box::new(ConstCombiner)
    } else if options.coord {
        Box::new(CoordCombiner::new(num_clauses, options.explain))
    } else {
        Box::new(SumCombiner::new(options.explain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Explanation;

    fn matches(doc: DocId, scores: &[Score]) -> Vec<DocumentMatch> {
        scores
            .iter()
            .map(|&score| DocumentMatch::new(doc, score))
            .collect()
    }

    #[test]
    fn test_sum_combiner() {
        let combined = SumCombiner::new(false).combine(3, matches(3, &[1.0, 0.5, 2.0]));
        assert_eq!(combined.doc, 3);
        assert_nearly_equals!(combined.score, 3.5);
        assert!(combined.explanation.is_none());
    }

    #[test]
    fn test_sum_combiner_order_independent() {
        let scores = [0.1, 1e16, 0.7, -1e16, 0.3];
        let combiner = SumCombiner::new(false);
        let forward = combiner.combine(0, matches(0, &scores)).score;
        let mut reversed = scores;
        reversed.reverse();
        let backward = combiner.combine(0, matches(0, &reversed)).score;
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[test]
    fn test_coord_combiner_monotonic_in_matching_clauses() {
        let combiner = CoordCombiner::new(3, false);
        let one = combiner.combine(1, matches(1, &[1.0])).score;
        let two = combiner.combine(1, matches(1, &[1.0, 1.0])).score;
        let three = combiner.combine(1, matches(1, &[1.0, 1.0, 1.0])).score;
        assert_nearly_equals!(one, 1.0 / 3.0);
        assert_nearly_equals!(two, 4.0 / 3.0);
        assert_nearly_equals!(three, 3.0);
        assert!(one < two && two < three);
    }

    #[test]
    fn test_coord_combiner_explanation() {
        let mut constituents = matches(7, &[1.0, 2.0]);
        constituents[0].explanation = Some(Explanation::new("term a", 1.0));
        let combined = CoordCombiner::new(4, true).combine(7, constituents);
        let explanation = combined.explanation.unwrap();
        assert_eq!(explanation.description(), "product of:");
        assert_nearly_equals!(explanation.value(), 1.5);
        let sum = &explanation.details()[0];
        assert_eq!(sum.description(), "sum of:");
        assert_eq!(sum.details()[0].description(), "term a");
        assert_eq!(sum.details()[1].description(), "score");
        assert_eq!(explanation.details()[1].description(), "coord(2/4)");
        assert_nearly_equals!(explanation.details()[1].value(), 0.5);
    }

    #[test]
    fn test_const_combiner() {
        let combined = ConstCombiner.combine(5, matches(5, &[3.0, 4.0]));
        assert_eq!(combined, DocumentMatch::new(5, 1.0));
    }

    #[test]
    fn test_combiner_selection() {
        let options = SearcherOptions::default().with_coord(false);
        let combined = disjunction_combiner(4, &options).combine(0, matches(0, &[1.0, 1.0]));
        assert_nearly_equals!(combined.score, 2.0);
        let combined = disjunction_combiner(4, &SearcherOptions::default())
            .combine(0, matches(0, &[1.0, 1.0]));
        assert_nearly_equals!(combined.score, 1.0);
        let options = SearcherOptions::default().without_scoring();
        let combined = conjunction_combiner(&options).combine(0, matches(0, &[3.0, 1.0]));
        assert_nearly_equals!(combined.score, 1.0);
    }
}
