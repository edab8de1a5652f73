//! Transformation rules of alpha graph proofs.
//!
//! Each rule pairs an enumerator of candidate paths with an operation that
//! applies the rule at one of those paths and returns a new graph.

pub mod deiteration;
pub mod double_cut;
pub mod erasure;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::Graph;
use crate::domain::path::GraphPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    DoubleCut,
    Erasure,
    Deiteration,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::DoubleCut, Rule::Erasure, Rule::Deiteration];

    /// Candidate paths at which this rule may be applied to `graph`.
    pub fn possible(&self, graph: &Graph) -> Vec<GraphPath> {
        match self {
            Rule::DoubleCut => graph.possible_double_cuts(),
            Rule::Erasure => graph.possible_erasures(),
            Rule::Deiteration => graph.possible_deiterations(),
        }
    }

    /// Applies this rule to `graph` at `path`, without checking that the path
    /// is one of [`Rule::possible`].
    pub fn apply(&self, graph: &Graph, path: &GraphPath) -> DomainResult<Graph> {
        match self {
            Rule::DoubleCut => graph.double_cut(path),
            Rule::Erasure => graph.erase(path),
            Rule::Deiteration => graph.deiterate(path),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DoubleCut => write!(f, "double-cut"),
            Rule::Erasure => write!(f, "erasure"),
            Rule::Deiteration => write!(f, "deiteration"),
        }
    }
}

impl FromStr for Rule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "double-cut" | "dc" => Ok(Rule::DoubleCut),
            "erasure" | "erase" => Ok(Rule::Erasure),
            "deiteration" | "deiterate" | "deit" => Ok(Rule::Deiteration),
            _ => Err(DomainError::UnknownRule(s.to_string())),
        }
    }
}

/// One proof step: a rule and the path it is applied at, written `rule:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    pub rule: Rule,
    pub path: GraphPath,
}

impl Step {
    pub fn new(rule: Rule, path: GraphPath) -> Self {
        Self { rule, path }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.rule, self.path)
    }
}

impl FromStr for Step {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rule, path) = s
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidPathSyntax(s.to_string()))?;
        Ok(Self {
            rule: rule.parse()?,
            path: path.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("double-cut", Rule::DoubleCut)]
    #[case("DC", Rule::DoubleCut)]
    #[case("double_cut", Rule::DoubleCut)]
    #[case("erase", Rule::Erasure)]
    #[case(" erasure ", Rule::Erasure)]
    #[case("deit", Rule::Deiteration)]
    #[case("deiteration", Rule::Deiteration)]
    fn test_parse_rule(#[case] input: &str, #[case] expected: Rule) {
        assert_eq!(input.parse::<Rule>().unwrap(), expected);
    }

    #[test]
    fn test_rule_display_parses_back() {
        for rule in Rule::ALL {
            assert_eq!(rule.to_string().parse::<Rule>().unwrap(), rule);
        }
        assert!(matches!("iteration".parse::<Rule>(), Err(DomainError::UnknownRule(_))));
    }

    #[test]
    fn test_parse_step() {
        let step: Step = "erasure:0.0.1".parse().unwrap();
        assert_eq!(step, Step::new(Rule::Erasure, GraphPath::from([0, 0, 1])));
        assert_eq!(step.to_string(), "erasure:0.0.1");
        assert!("erasure".parse::<Step>().is_err());
        assert!("insertion:0".parse::<Step>().is_err());
    }

    #[test]
    fn test_rule_dispatch() {
        let graph = Graph::parse("([[A]], B)").unwrap();
        let paths = Rule::DoubleCut.possible(&graph);
        assert_eq!(paths, vec![GraphPath::from([0])]);
        let result = Rule::DoubleCut.apply(&graph, &paths[0]).unwrap();
        assert_eq!(result.to_string(), "(A, B)");
        assert_eq!(Rule::Erasure.possible(&graph), vec![GraphPath::from([0, 0, 0])]);
        assert!(Rule::Deiteration.possible(&graph).is_empty());
    }
}
