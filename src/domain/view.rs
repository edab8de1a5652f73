/*
Tree outline of a graph for the terminal.

Every element is labelled with the path that addresses it, so paths for the
rule commands can be read off directly.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::graph::{Element, Graph};
use crate::domain::path::GraphPath;

pub trait GraphTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl GraphTreeConvert for Graph {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let label = if self.is_sheet() { "( )" } else { "[ ]" };
        build_tree(self, label.to_string(), &GraphPath::root())
    }
}

fn build_tree(graph: &Graph, label: String, path: &GraphPath) -> Tree<String> {
    let leaves: Vec<_> = graph
        .elements()
        .enumerate()
        .map(|(i, element)| {
            let child_path = path.child(i);
            match element {
                Element::Cut(cut) => build_tree(cut, format!("[ ]  @{}", child_path), &child_path),
                Element::Atom(atom) => Tree::new(format!("{}  @{}", atom, child_path)),
            }
        })
        .collect();

    Tree::new(label).with_leaves(leaves)
}
