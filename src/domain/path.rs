//! Index paths addressing cuts and atoms inside a graph.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Ordered child indices from some graph down to a cut or atom.
///
/// At every level indices below the number of cuts address cuts, the
/// following ones address atoms (offset by the cut count). A path only makes
/// sense for the snapshot it was computed against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphPath(Vec<usize>);

impl GraphPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `index` prepended.
    pub fn prefixed(mut self, index: usize) -> Self {
        self.0.insert(0, index);
        self
    }

    /// Returns a new path with `index` appended.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Splits into the parent path and the last index.
    pub fn split_last(&self) -> Option<(usize, &[usize])> {
        self.0.split_last().map(|(last, parent)| (*last, parent))
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }
}

impl Deref for GraphPath {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<usize>> for GraphPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<const N: usize> From<[usize; N]> for GraphPath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for GraphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Accepts `0.1.2`, `0,1,2` and `[0, 1, 2]`.
impl FromStr for GraphPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed)
            .trim();
        if inner.is_empty() {
            return Ok(Self::root());
        }
        inner
            .split(['.', ','])
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| DomainError::InvalidPathSyntax(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
