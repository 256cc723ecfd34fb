use std::fmt;

use serde::{Deserialize, Serialize};

/// Defines whether a clause of a boolean query must be present,
/// should be present or must not be present.
#[derive(Debug, Clone, Hash, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// For a given document to be considered for scoring,
    /// at least one of the clauses with the Should or the Must
    /// Occur constraint must match the document.
    Should,
    /// Documents not matching the clause are excluded from the search.
    Must,
    /// Documents matching the clause are excluded from the search.
    MustNot,
}

impl Occur {
    /// Returns the one-char prefix symbol for this `Occur`.
    /// - `Should` => '?',
    /// - `Must` => '+'
    /// - `MustNot` => '-'
    fn to_char(self) -> char {
        match self {
            Occur::Should => '?',
            Occur::Must => '+',
            Occur::MustNot => '-',
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Occur;

    #[test]
    fn test_occur_display() {
        assert_eq!(format!("{}{}{}", Occur::Must, Occur::Should, Occur::MustNot), "+?-");
    }

    #[test]
    fn test_occur_serde() {
        let occur: Occur = serde_json::from_str(r#""must_not""#).unwrap();
        assert_eq!(occur, Occur::MustNot);
    }
}
