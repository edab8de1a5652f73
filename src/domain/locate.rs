//! Containment checks and path location for atoms and subgraphs.

use crate::domain::graph::Graph;
use crate::domain::path::GraphPath;

impl Graph {
    /// True if `atom` is a direct atom of this graph or of any nested cut.
    pub fn contains_atom(&self, atom: &str) -> bool {
        self.atoms.iter().any(|a| a == atom) || self.cuts.iter().any(|c| c.contains_atom(atom))
    }

    /// True if `target` equals a direct cut of this graph or of any nested cut.
    pub fn contains_graph(&self, target: &Graph) -> bool {
        self.cuts.iter().any(|c| c == target) || self.cuts.iter().any(|c| c.contains_graph(target))
    }

    /// Paths to every occurrence of `atom`.
    ///
    /// Direct atoms of `self` are only reported when `self` has more than one
    /// element: a lone wrapped atom has no path to itself.
    pub fn paths_to_atom(&self, atom: &str) -> Vec<GraphPath> {
        let mut paths = Vec::new();
        self.collect_atom_paths(atom, &GraphPath::root(), self.size() > 1, &mut paths);
        paths
    }

    /// Paths to every cut structurally equal to `target`.
    ///
    /// Same self-path exclusion as [`Graph::paths_to_atom`]. A match is not
    /// searched further.
    pub fn paths_to_graph(&self, target: &Graph) -> Vec<GraphPath> {
        let mut paths = Vec::new();
        self.collect_graph_paths(target, &GraphPath::root(), self.size() > 1, &mut paths);
        paths
    }

    fn collect_atom_paths(
        &self,
        atom: &str,
        prefix: &GraphPath,
        report_here: bool,
        out: &mut Vec<GraphPath>,
    ) {
        for (i, cut) in self.cuts.iter().enumerate() {
            if cut.contains_atom(atom) {
                cut.collect_atom_paths(atom, &prefix.child(i), true, out);
            }
        }
        if report_here {
            let offset = self.num_cuts();
            out.extend(
                self.atoms
                    .iter()
                    .enumerate()
                    .filter(|(_, a)| *a == atom)
                    .map(|(j, _)| prefix.child(offset + j)),
            );
        }
    }

    fn collect_graph_paths(
        &self,
        target: &Graph,
        prefix: &GraphPath,
        report_here: bool,
        out: &mut Vec<GraphPath>,
    ) {
        for (i, cut) in self.cuts.iter().enumerate() {
            if report_here && cut == target {
                out.push(prefix.child(i));
            } else {
                cut.collect_graph_paths(target, &prefix.child(i), true, out);
            }
        }
    }
}
