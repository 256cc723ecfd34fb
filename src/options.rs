use serde::{Deserialize, Serialize};

/// Defines whether composite searchers compute relevance scores.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// Scores are combined from the matching clauses.
    #[default]
    Enabled,
    /// Every match gets the same constant score, `1.0`.
    ///
    /// This avoids the score computation when the caller only needs the
    /// matching doc ids.
    Disabled,
}

/// Execution options shared by the searchers of a query tree.
///
/// The options are copied into each searcher at construction and stay fixed
/// for the lifetime of the tree.
///
/// ```rust
/// use boolean_searcher::{Scoring, SearcherOptions};
///
/// let options: SearcherOptions = serde_json::from_str(r#"{"explain": true}"#).unwrap();
/// assert!(options.explain);
/// assert_eq!(options.scoring, Scoring::Enabled);
/// assert!(options.coord);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearcherOptions {
    /// Attach an `Explanation` tree to every emitted `DocumentMatch`.
    pub explain: bool,
    /// See [`Scoring`].
    pub scoring: Scoring,
    /// Scale disjunction scores by the fraction of clauses that matched.
    /// When disabled, disjunctions simply sum the scores of their matching
    /// clauses.
    pub coord: bool,
}

impl Default for SearcherOptions {
    fn default() -> Self {
        SearcherOptions {
            explain: false,
            scoring: Scoring::Enabled,
            coord: true,
        }
    }
}

impl SearcherOptions {
    /// Returns options with explanations enabled.
    pub fn with_explain(mut self) -> SearcherOptions {
        self.explain = true;
        self
    }

    /// Returns options with scoring disabled.
    pub fn without_scoring(mut self) -> SearcherOptions {
        self.scoring = Scoring::Disabled;
        self
    }

    /// Returns options with the given coordination setting.
    pub fn with_coord(mut self, coord: bool) -> SearcherOptions {
        self.coord = coord;
        self
    }

    /// Returns true if scores should be computed.
    pub fn is_scoring_enabled(&self) -> bool {
        self.scoring == Scoring::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::{Scoring, SearcherOptions};

    #[test]
    fn test_searcher_options_default_from_empty_json() {
        let options: SearcherOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SearcherOptions::default());
        assert!(options.is_scoring_enabled());
    }

    #[test]
    fn test_searcher_options_serde() {
        let options = SearcherOptions::default()
            .with_explain()
            .without_scoring()
            .with_coord(false);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"explain":true,"scoring":"disabled","coord":false}"#
        );
        let deser: SearcherOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(deser, options);
        assert_eq!(deser.scoring, Scoring::Disabled);
    }

    #[test]
    fn test_searcher_options_invalid_scoring() {
        assert!(serde_json::from_str::<SearcherOptions>(r#"{"scoring":"maybe"}"#).is_err());
    }
}
