#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![warn(missing_docs)]

//! # `boolean_searcher`
//!
//! Lazy evaluation of boolean queries over sorted match cursors.
//!
//! Every clause of a query, leaf or composite, is a [`Searcher`]: a
//! forward-only cursor producing [`DocumentMatch`]es in strictly increasing
//! [`DocId`] order. Composites combine their children with
//! AND (`Must`), OR (`Should`) and AND-NOT (`MustNot`) semantics, without
//! ever materializing their children's output.
//!
//! ```rust
//! use boolean_searcher::query::{BooleanSearcher, DisjunctionSearcher, VecSearcher};
//! use boolean_searcher::{Searcher, SearcherOptions};
//!
//! # fn main() -> boolean_searcher::Result<()> {
//! let options = SearcherOptions::default();
//! let must: Box<dyn Searcher> = Box::new(VecSearcher::from(vec![1, 3, 5, 7]));
//! let should: Box<dyn Searcher> = Box::new(DisjunctionSearcher::new(
//!     vec![Box::new(VecSearcher::from(vec![3, 4, 5, 9])) as Box<dyn Searcher>],
//!     0,
//!     &options,
//! ));
//! let must_not: Box<dyn Searcher> = Box::new(VecSearcher::from(vec![5]));
//! let mut searcher = BooleanSearcher::new(Some(must), Some(should), Some(must_not), &options);
//!
//! let mut docs = Vec::new();
//! searcher.for_each(&mut |doc_match| docs.push(doc_match.doc))?;
//! assert_eq!(docs, vec![1, 3, 7]);
//! searcher.close()?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod document_match;
mod error;
mod options;
mod searcher;

pub mod query;

pub use crate::document_match::DocumentMatch;
pub use crate::error::{DataCorruption, SearchError};
pub use crate::options::{Scoring, SearcherOptions};
pub use crate::searcher::Searcher;

/// A u32 identifying a document within an index.
///
/// Within the output of one `Searcher`, doc ids are strictly increasing.
pub type DocId = u32;

/// A f64 that represents the relevance of the document to the query.
pub type Score = f64;

/// `boolean_searcher` result type.
pub type Result<T> = std::result::Result<T, SearchError>;
