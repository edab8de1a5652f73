//! Deiteration: a copy of an element nested in a context that the original
//! dominates may be removed.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::Graph;
use crate::domain::path::GraphPath;
use crate::domain::rules::double_cut::empty_path;

impl Graph {
    /// Paths to duplicates of the direct elements of this graph.
    ///
    /// For every direct cut and atom, all equal occurrences are located and
    /// those inside the element itself (same first index) are dropped.
    pub fn possible_deiterations(&self) -> Vec<GraphPath> {
        let from_cuts = self.cuts.iter().enumerate().flat_map(|(i, cut)| {
            self.paths_to_graph(cut)
                .into_iter()
                .filter(move |p| p.first() != Some(i))
        });
        let offset = self.num_cuts();
        let from_atoms = self.atoms.iter().enumerate().flat_map(move |(j, atom)| {
            self.paths_to_atom(atom)
                .into_iter()
                .filter(move |p| p.first() != Some(offset + j))
        });
        from_cuts.chain(from_atoms).unique().collect()
    }

    /// Removes the cut (with everything in it) or atom addressed by `path`.
    #[instrument(level = "debug", skip(self), fields(graph = %self))]
    pub fn deiterate(&self, path: &GraphPath) -> DomainResult<Graph> {
        let mut result = self.clone();
        let (pos, parents) = path.split_last().ok_or_else(|| empty_path(path))?;
        let parent = result.cut_at_mut(parents, path)?;

        if pos < parent.num_cuts() {
            let removed = parent.cuts.remove(pos);
            debug!(%removed, "removed cut");
        } else if pos < parent.size() {
            let removed = parent.atoms.remove(pos - parent.num_cuts());
            debug!(%removed, "removed atom");
        } else {
            return Err(DomainError::InvalidPath {
                path: path.clone(),
                reason: format!("index {} out of range ({} elements)", pos, parent.size()),
            });
        }

        result.canonicalize();
        Ok(result)
    }
}
