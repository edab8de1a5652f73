//! Double-cut removal: `[[X]]` in any context becomes `X`.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::Graph;
use crate::domain::path::GraphPath;

impl Graph {
    /// Paths to every cut whose only content is a single nested cut.
    ///
    /// Qualifying cuts of one level come first, then the results of each cut
    /// in order.
    pub fn possible_double_cuts(&self) -> Vec<GraphPath> {
        let mut paths: Vec<GraphPath> = self
            .cuts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_double_cut())
            .map(|(i, _)| GraphPath::from([i]))
            .collect();

        for (i, cut) in self.cuts.iter().enumerate() {
            paths.extend(cut.possible_double_cuts().into_iter().map(|p| p.prefixed(i)));
        }
        paths
    }

    /// Removes the two cuts starting at `path`; the inner contents join the
    /// parent of the outer cut.
    #[instrument(level = "debug", skip(self), fields(graph = %self))]
    pub fn double_cut(&self, path: &GraphPath) -> DomainResult<Graph> {
        let mut result = self.clone();
        let (pos, parents) = path.split_last().ok_or_else(|| empty_path(path))?;
        let parent = result.cut_at_mut(parents, path)?;

        if !parent.cuts.get(pos).is_some_and(Graph::is_double_cut) {
            return Err(DomainError::InvalidPath {
                path: path.clone(),
                reason: "does not address a cut holding exactly one cut and no atoms".into(),
            });
        }

        let outer = parent.cuts.remove(pos);
        if let Some(inner) = outer.cuts.into_iter().next() {
            parent.atoms.extend(inner.atoms);
            parent.cuts.extend(inner.cuts);
        }

        result.canonicalize();
        debug!(%result, "double cut removed");
        Ok(result)
    }

    fn is_double_cut(&self) -> bool {
        self.num_cuts() == 1 && self.num_atoms() == 0
    }
}

pub(crate) fn empty_path(path: &GraphPath) -> DomainError {
    DomainError::InvalidPath {
        path: path.clone(),
        reason: "path is empty".into(),
    }
}
