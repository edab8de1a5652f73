//! Recursive alpha graph model: the sheet of assertion and nested cuts.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::path::GraphPath;

/// A sheet of assertion or a cut, holding atoms and nested cuts.
///
/// Every graph exclusively owns its cuts. Equality, hashing and ordering go
/// through the serialized form, so two canonical graphs are equal iff they
/// print identically.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) is_sheet: bool,
    pub(crate) atoms: Vec<String>,
    pub(crate) cuts: Vec<Graph>,
}

/// A borrowed element of a graph: either a nested cut or an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Cut(&'a Graph),
    Atom(&'a str),
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Cut(cut) => write!(f, "{}", cut),
            Element::Atom(atom) => write!(f, "{}", atom),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::sheet()
    }
}

impl Graph {
    /// Empty sheet of assertion, `()`.
    pub fn sheet() -> Self {
        Self {
            is_sheet: true,
            atoms: Vec::new(),
            cuts: Vec::new(),
        }
    }

    /// Empty cut, `[]`.
    pub fn cut() -> Self {
        Self {
            is_sheet: false,
            atoms: Vec::new(),
            cuts: Vec::new(),
        }
    }

    /// Adds an atom and restores canonical order.
    pub fn with_atom(mut self, atom: impl Into<String>) -> Self {
        self.atoms.push(atom.into());
        self.canonicalize();
        self
    }

    /// Adds a nested cut and restores canonical order.
    ///
    /// The added graph is always stored as a cut, even if it was built as a sheet.
    pub fn with_cut(mut self, mut cut: Graph) -> Self {
        cut.is_sheet = false;
        self.cuts.push(cut);
        self.canonicalize();
        self
    }

    pub fn is_sheet(&self) -> bool {
        self.is_sheet
    }

    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    pub fn cuts(&self) -> &[Graph] {
        &self.cuts
    }

    pub fn num_cuts(&self) -> usize {
        self.cuts.len()
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Number of direct elements (cuts plus atoms).
    pub fn size(&self) -> usize {
        self.num_cuts() + self.num_atoms()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Total number of cuts below this graph, at any depth.
    pub fn cut_count(&self) -> usize {
        self.cuts.iter().map(|c| 1 + c.cut_count()).sum()
    }

    /// Every atom label at any depth, sorted.
    pub fn all_atoms(&self) -> Vec<String> {
        let mut atoms = self.atoms.clone();
        for cut in &self.cuts {
            atoms.extend(cut.all_atoms());
        }
        atoms.sort();
        atoms
    }

    /// Element at `index` of the combined cuts-then-atoms sequence, as an owned graph.
    ///
    /// An atom is returned wrapped in a sheet holding only that atom; an index
    /// past the end yields an empty sheet.
    pub fn element(&self, index: usize) -> Graph {
        if index < self.num_cuts() {
            return self.cuts[index].clone();
        }
        match self.atoms.get(index - self.num_cuts()) {
            Some(atom) => Graph::sheet().with_atom(atom.clone()),
            None => Graph::sheet(),
        }
    }

    /// Borrowed element at `index` of the combined cuts-then-atoms sequence.
    pub fn get(&self, index: usize) -> Option<Element<'_>> {
        if index < self.num_cuts() {
            Some(Element::Cut(&self.cuts[index]))
        } else {
            self.atoms
                .get(index - self.num_cuts())
                .map(|a| Element::Atom(a.as_str()))
        }
    }

    /// Iterates the direct elements in addressing order (cuts first, then atoms).
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        self.cuts
            .iter()
            .map(Element::Cut)
            .chain(self.atoms.iter().map(|a| Element::Atom(a.as_str())))
    }

    /// Follows `path` and returns the addressed element, if it exists.
    pub fn resolve(&self, path: &GraphPath) -> Option<Element<'_>> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for &index in parents {
            current = current.cuts.get(index)?;
        }
        current.get(last)
    }

    /// Sorts atoms and cuts recursively so that equal graphs share one layout.
    pub fn canonicalize(&mut self) {
        for cut in &mut self.cuts {
            cut.canonicalize();
        }
        self.atoms.sort();
        self.cuts.sort_by_cached_key(|c| c.to_string());
    }

    /// Mutable access to the cut reached by following `indices` through cuts only.
    pub(crate) fn cut_at_mut(
        &mut self,
        indices: &[usize],
        path: &GraphPath,
    ) -> DomainResult<&mut Graph> {
        let mut current = self;
        for (depth, &index) in indices.iter().enumerate() {
            let available = current.cuts.len();
            current = current.cuts.get_mut(index).ok_or_else(|| DomainError::InvalidPath {
                path: path.clone(),
                reason: format!(
                    "index {} at depth {} does not address a cut ({} available)",
                    index, depth, available
                ),
            })?;
        }
        trace!(?indices, "navigated to parent");
        Ok(current)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = if self.is_sheet { ('(', ')') } else { ('[', ']') };
        let body: Vec<String> = self
            .cuts
            .iter()
            .map(|c| c.to_string())
            .chain(self.atoms.iter().cloned())
            .collect();
        write!(f, "{}{}{}", left, body.join(", "), right)
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Graph {}

impl Hash for Graph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialOrd for Graph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Graph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn g(text: &str) -> Graph {
        Graph::parse(text).unwrap()
    }

    #[test]
    fn test_empty_graphs_serialize_with_brackets_only() {
        assert_eq!(Graph::sheet().to_string(), "()");
        assert_eq!(Graph::cut().to_string(), "[]");
    }

    #[test]
    fn test_cuts_without_atoms_leave_no_trailing_separator() {
        let graph = Graph::sheet().with_cut(Graph::cut()).with_cut(Graph::cut().with_atom("A"));
        assert_eq!(graph.to_string(), "([A], [])");
    }

    #[test]
    fn test_builder_keeps_canonical_order() {
        let graph = Graph::sheet()
            .with_atom("B")
            .with_atom("A")
            .with_cut(Graph::cut().with_atom("C"));
        assert_eq!(graph.to_string(), "([C], A, B)");
        assert_eq!(graph, g("(B, [C], A)"));
    }

    #[rstest]
    #[case("()", 0, 0)]
    #[case("(A, B)", 2, 0)]
    #[case("(A, [B], [[C]])", 1, 2)]
    fn test_size_queries(#[case] text: &str, #[case] atoms: usize, #[case] cuts: usize) {
        let graph = g(text);
        assert_eq!(graph.num_atoms(), atoms);
        assert_eq!(graph.num_cuts(), cuts);
        assert_eq!(graph.size(), atoms + cuts);
    }

    #[test]
    fn test_element_indexes_cuts_then_atoms() {
        let graph = g("(A, [B])");
        assert_eq!(graph.element(0).to_string(), "[B]");
        assert_eq!(graph.element(1).to_string(), "(A)");
        assert_eq!(graph.element(2).to_string(), "()");
        assert_eq!(graph.element(99), Graph::sheet());
    }

    #[test]
    fn test_resolve_follows_path() {
        let graph = g("(A, [B, [C]])");
        assert_eq!(graph.resolve(&GraphPath::from([0, 1])), Some(Element::Atom("B")));
        assert_eq!(
            graph.resolve(&GraphPath::from([0, 0])).map(|e| e.to_string()),
            Some("[C]".to_string())
        );
        assert_eq!(graph.resolve(&GraphPath::from([0, 5])), None);
        assert_eq!(graph.resolve(&GraphPath::root()), None);
    }

    #[test]
    fn test_ordering_follows_serialized_form() {
        assert!(g("[A]") < g("[B]"));
        assert!(g("[A]") < g("[[A]]"));
        assert_eq!(g("[A, B]").cmp(&g("[B, A]")), Ordering::Equal);
    }

    #[test]
    fn test_cut_count_and_all_atoms() {
        let graph = g("(B, [[A], A], [C])");
        assert_eq!(graph.cut_count(), 3);
        assert_eq!(graph.all_atoms(), vec!["A", "A", "B", "C"]);
    }

    #[test]
    fn test_sheet_and_cut_differ() {
        assert_ne!(g("(A)"), g("[A]"));
    }
}
