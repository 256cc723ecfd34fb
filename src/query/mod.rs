//! Module containing the searchers: leaf searchers over sorted matches,
//! and the composites combining them.

mod all_searcher;
mod boolean_searcher;
mod conjunction;
mod disjunction;
mod empty_searcher;
mod explanation;
mod occur;
mod query_norm;
mod score_combiner;
mod vec_searcher;

pub use self::all_searcher::AllSearcher;
pub use self::boolean_searcher::BooleanSearcher;
pub use self::conjunction::{intersect_searchers, ConjunctionSearcher};
pub use self::disjunction::DisjunctionSearcher;
pub use self::empty_searcher::EmptySearcher;
pub use self::explanation::Explanation;
pub use self::occur::Occur;
pub use self::query_norm::compute_query_norm;
pub use self::score_combiner::{ConstCombiner, CoordCombiner, ScoreCombiner, SumCombiner};
pub use self::vec_searcher::VecSearcher;
