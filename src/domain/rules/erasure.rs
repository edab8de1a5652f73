//! Erasure: elements in a positive context (enclosed by an even number of
//! cuts) may be deleted.

use itertools::Itertools;
use tracing::instrument;

use crate::domain::error::DomainResult;
use crate::domain::graph::Graph;
use crate::domain::path::GraphPath;

impl Graph {
    /// Paths of odd length greater than one to any element of this graph.
    ///
    /// Direct elements (length one) are never offered.
    pub fn possible_erasures(&self) -> Vec<GraphPath> {
        let mut candidates = Vec::new();
        self.collect_erasures(self, &mut candidates);
        candidates.into_iter().unique().collect()
    }

    fn collect_erasures(&self, root: &Graph, out: &mut Vec<GraphPath>) {
        for cut in &self.cuts {
            out.extend(root.paths_to_graph(cut).into_iter().filter(is_erasable));
            cut.collect_erasures(root, out);
        }
        for atom in &self.atoms {
            out.extend(root.paths_to_atom(atom).into_iter().filter(is_erasable));
        }
    }

    /// Deletes the cut or atom addressed by `path`, including everything nested in it.
    #[instrument(level = "debug", skip(self))]
    pub fn erase(&self, path: &GraphPath) -> DomainResult<Graph> {
        self.deiterate(path)
    }
}

fn is_erasable(path: &GraphPath) -> bool {
    path.len() % 2 == 1 && path.len() != 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    fn g(text: &str) -> Graph {
        Graph::parse(text).unwrap()
    }

    #[test]
    fn test_possible_erasures_empty_sheet() {
        assert!(g("()").possible_erasures().is_empty());
    }

    #[test]
    fn test_possible_erasures_excludes_length_one_and_even_lengths() {
        let erasures = g("(A, [B, C])").possible_erasures();
        assert!(erasures.iter().all(|p| p.len() % 2 == 1 && p.len() >= 3));
        assert!(erasures.is_empty());
    }

    #[test]
    fn test_possible_erasures_in_double_enclosure() {
        // canonical: ([[[D], C], B], A)
        let graph = g("(A, [B, [C, [D]]])");
        assert_eq!(
            graph.possible_erasures(),
            vec![GraphPath::from([0, 0, 0]), GraphPath::from([0, 0, 1])]
        );
    }

    #[test]
    fn test_possible_erasures_reports_each_path_once() {
        let graph = g("([[X, X]])");
        assert_eq!(
            graph.possible_erasures(),
            vec![GraphPath::from([0, 0, 0]), GraphPath::from([0, 0, 1])]
        );
    }

    #[test]
    fn test_erase_removes_subtree() {
        let graph = g("(A, [B, [C, [D]]])");
        let result = graph.erase(&GraphPath::from([0, 0, 0])).unwrap();
        assert_eq!(result, g("(A, [B, [C]])"));
        assert!(!result.contains_atom("D"));
    }

    #[test]
    fn test_erase_rejects_empty_path() {
        assert!(matches!(
            g("(A)").erase(&GraphPath::root()),
            Err(DomainError::InvalidPath { .. })
        ));
    }
}
