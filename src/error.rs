use thiserror::Error;

/// Reasons a set has no finite `u64` cardinality.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityError {
    #[error("Set contains an unbounded element")]
    Unbounded,

    #[error("Cardinality does not fit in a 64-bit unsigned integer")]
    Overflow,
}

/// Errors produced when parsing the textual set form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Cannot parse an empty string")]
    Empty,

    #[error("Set must be enclosed in braces: {0}")]
    MissingBraces(String),

    #[error("Invalid bound {bound:?} in element {element:?}")]
    InvalidBound { element: String, bound: String },

    #[error("Invalid element: {0:?}")]
    InvalidElement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_error_display() {
        assert_eq!(
            CardinalityError::Unbounded.to_string(),
            "Set contains an unbounded element"
        );
        assert_eq!(
            CardinalityError::Overflow.to_string(),
            "Cardinality does not fit in a 64-bit unsigned integer"
        );
    }

    #[test]
    fn parse_error_display() {
        let e = ParseError::InvalidBound {
            element: "1:x".to_string(),
            bound: "x".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid bound \"x\" in element \"1:x\"");
        assert_eq!(
            ParseError::MissingBraces("1:2".to_string()).to_string(),
            "Set must be enclosed in braces: 1:2"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(ParseError::Empty, ParseError::Empty);
        assert_ne!(CardinalityError::Unbounded, CardinalityError::Overflow);
    }
}
