//! Definition of the searcher's error and result.

use std::fmt;
use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::DocId;

/// Represents a corruption detected while decoding the data backing a
/// leaf searcher.
#[derive(Clone)]
pub struct DataCorruption {
    doc: Option<DocId>,
    comment: String,
}

impl DataCorruption {
    /// Creates a `DataCorruption` error located at a given document.
    pub fn new(doc: DocId, comment: String) -> DataCorruption {
        DataCorruption {
            doc: Some(doc),
            comment,
        }
    }

    /// Creates a `DataCorruption` error without location.
    pub fn comment_only<TStr: ToString>(comment: TStr) -> DataCorruption {
        DataCorruption {
            doc: None,
            comment: comment.to_string(),
        }
    }
}

impl fmt::Debug for DataCorruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Data corruption")?;
        if let Some(doc) = self.doc {
            write!(f, " (at doc `{doc}`)")?;
        }
        write!(f, ": {}.", self.comment)?;
        Ok(())
    }
}

/// The library's error enum.
///
/// Errors raised by a leaf are returned verbatim by every ancestor's
/// `advance`/`seek` call. A searcher that returned an error must not be
/// driven any further.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// IO Error, raised while reading the data backing a leaf.
    #[error("An IO error occurred: '{0}'")]
    IoError(Arc<io::Error>),
    /// Data corruption.
    #[error("{0:?}")]
    DataCorruption(DataCorruption),
    /// Invalid argument was passed by the user.
    #[error("An invalid argument was passed: '{0}'")]
    InvalidArgument(String),
}

impl From<DataCorruption> for SearchError {
    fn from(data_corruption: DataCorruption) -> SearchError {
        SearchError::DataCorruption(data_corruption)
    }
}

impl From<io::Error> for SearchError {
    fn from(io_err: io::Error) -> SearchError {
        SearchError::IoError(Arc::new(io_err))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{DataCorruption, SearchError};

    #[test]
    fn test_io_error_display() {
        let err = SearchError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"));
        assert_eq!(err.to_string(), "An IO error occurred: 'truncated'");
    }

    #[test]
    fn test_data_corruption_display() {
        let err: SearchError = DataCorruption::new(12, "bad block".to_string()).into();
        assert_eq!(err.to_string(), "Data corruption (at doc `12`): bad block.");
        let err: SearchError = DataCorruption::comment_only("oops").into();
        assert_eq!(err.to_string(), "Data corruption: oops.");
    }
}
