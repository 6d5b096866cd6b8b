//! Parsing of the textual set form produced by `Display`.
//!
//! Elements are `-∞:∞`, `-∞:<hi>`, `<lo>:∞`, `<n>` or `<lo>:<hi>`; a set is
//! a brace-enclosed, comma-separated list of elements, with `{∅}` for the empty
//! set. `inf` is accepted as an ASCII spelling of `∞`.

use std::str::FromStr;

use crate::error::ParseError;
use crate::set::{Bound, IntSet, Interval};

fn parse_bound(text: &str, element: &str) -> Result<Bound, ParseError> {
    match text {
        "-∞" | "-inf" => Ok(Bound::NegInf),
        "∞" | "+∞" | "inf" | "+inf" => Ok(Bound::PosInf),
        _ => text
            .parse::<i64>()
            .map(Bound::Finite)
            .map_err(|_| ParseError::InvalidBound {
                element: element.to_string(),
                bound: text.to_string(),
            }),
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let element = s.trim();
        if element.is_empty() {
            return Err(ParseError::Empty);
        }

        let Some((lo, hi)) = element.split_once(':') else {
            return match parse_bound(element, element)? {
                Bound::Finite(n) => Ok(Interval::int(n)),
                _ => Err(ParseError::InvalidElement(element.to_string())),
            };
        };
        let lower = parse_bound(lo.trim(), element)?;
        let upper = parse_bound(hi.trim(), element)?;
        match (lower, upper) {
            (Bound::Finite(a), Bound::Finite(b)) => Ok(Interval::range(a, b)),
            (Bound::PosInf, _) | (_, Bound::NegInf) => {
                Err(ParseError::InvalidElement(element.to_string()))
            }
            _ => Interval::from_bounds(lower, upper)
                .ok_or_else(|| ParseError::InvalidElement(element.to_string())),
        }
    }
}

impl FromStr for IntSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        let inner = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| ParseError::MissingBraces(text.to_string()))?
            .trim();
        if inner.is_empty() || inner == "∅" {
            return Ok(IntSet::new());
        }

        let mut set = IntSet::new();
        for element in inner.split(',') {
            set.insert(element.parse()?);
        }
        Ok(set)
    }
}
