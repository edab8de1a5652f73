//! Bracket notation parser.
//!
//! ```text
//! graph      ::= '(' body ')' | '[' body ']'
//! body       ::= '' | element (',' element)*
//! element    ::= atomToken | graph
//! ```
//!
//! The outermost graph may use either bracket pair; nested graphs must be cuts.

use std::str::FromStr;

use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::Graph;

impl Graph {
    /// Parses the bracket notation into a canonical graph.
    #[instrument(level = "trace")]
    pub fn parse(representation: &str) -> DomainResult<Self> {
        let mut graph = parse_graph(representation.trim())?;
        graph.canonicalize();
        Ok(graph)
    }
}

impl FromStr for Graph {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graph::parse(s)
    }
}

fn parse_graph(representation: &str) -> DomainResult<Graph> {
    let mut chars = representation.chars();
    let (left, right) = match (chars.next(), chars.next_back()) {
        (None, _) => return Err(DomainError::EmptyInput),
        (Some(l), Some(r)) => (l, r),
        (Some(_), None) => {
            return Err(DomainError::MismatchedDelimiters(representation.to_string()))
        }
    };

    let mut graph = match (left, right) {
        ('(', ')') => Graph::sheet(),
        ('[', ']') => Graph::cut(),
        _ => return Err(DomainError::MismatchedDelimiters(representation.to_string())),
    };

    let body = &representation[1..representation.len() - 1];
    for element in split_level(body)? {
        if element.starts_with('[') {
            graph.cuts.push(parse_graph(element)?);
        } else if element.starts_with('(') {
            return Err(DomainError::NestedSheet(element.to_string()));
        } else if element.contains(['[', ']']) {
            return Err(DomainError::InvalidAtom(element.to_string()));
        } else {
            graph.atoms.push(element.to_string());
        }
    }
    Ok(graph)
}

/// Splits a body into its top-level elements, trimmed.
///
/// Commas inside nested brackets are not split points. A blank body has no
/// elements; a single trailing comma is ignored.
fn split_level(body: &str) -> DomainResult<Vec<&str>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut elements = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| DomainError::UnbalancedBrackets(body.to_string()))?;
            }
            ',' if depth == 0 => {
                elements.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(DomainError::UnbalancedBrackets(body.to_string()));
    }

    let last = body[start..].trim();
    if !last.is_empty() {
        elements.push(last);
    }
    if elements.iter().any(|e| e.is_empty()) {
        return Err(DomainError::EmptyElement(body.to_string()));
    }
    trace!(?elements, "split level");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("()", "()")]
    #[case("[]", "[]")]
    #[case("( )", "()")]
    #[case("(A)", "(A)")]
    #[case("(B, A)", "(A, B)")]
    #[case("(  long atom , x )", "(long atom, x)")]
    #[case("(A, [B, C], [[D]])", "([B, C], [[D]], A)")]
    #[case("([C, [B, A]], [A])", "([A], [[A, B], C])")]
    #[case("[x, [y]]", "[[y], x]")]
    #[case("(A,)", "(A)")]
    fn test_parse_canonical_form(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Graph::parse(input).unwrap().to_string(), expected);
    }

    #[test]
    fn test_top_level_kind() {
        assert!(Graph::parse("(A)").unwrap().is_sheet());
        assert!(!Graph::parse("[A]").unwrap().is_sheet());
        assert!(Graph::parse("([A])").unwrap().cuts()[0].atoms() == ["A"]);
    }

    #[test]
    fn test_commas_inside_cuts_do_not_split() {
        let graph = Graph::parse("([A, B, [C, D]], E)").unwrap();
        assert_eq!(graph.num_cuts(), 1);
        assert_eq!(graph.num_atoms(), 1);
        assert_eq!(graph.cuts()[0].size(), 3);
    }

    #[rstest]
    #[case("", DomainError::EmptyInput)]
    #[case("   ", DomainError::EmptyInput)]
    #[case("(A]", DomainError::MismatchedDelimiters("(A]".into()))]
    #[case("A, B", DomainError::MismatchedDelimiters("A, B".into()))]
    #[case("(", DomainError::MismatchedDelimiters("(".into()))]
    #[case("([A)", DomainError::UnbalancedBrackets("[A".into()))]
    #[case("(A])", DomainError::UnbalancedBrackets("A]".into()))]
    #[case("((A))", DomainError::NestedSheet("(A)".into()))]
    #[case("(A,,B)", DomainError::EmptyElement("A,,B".into()))]
    #[case("(, A)", DomainError::EmptyElement(", A".into()))]
    #[case("(A[B])", DomainError::InvalidAtom("A[B]".into()))]
    fn test_malformed_input(#[case] input: &str, #[case] expected: DomainError) {
        assert_eq!(Graph::parse(input).unwrap_err(), expected);
    }
}
