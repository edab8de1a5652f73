//! Alpha existential graphs.
//!
//! Graphs are written in bracket notation: the sheet of assertion is `( ... )`,
//! cuts are `[ ... ]`, atoms are plain tokens, elements are comma separated:
//!
//! ```
//! use aegraph::domain::{Graph, GraphPath};
//!
//! let graph: Graph = "([[A]], B)".parse().unwrap();
//! assert_eq!(graph.possible_double_cuts(), vec![GraphPath::from([0])]);
//! let result = graph.double_cut(&GraphPath::from([0])).unwrap();
//! assert_eq!(result.to_string(), "(A, B)");
//! ```
//!
//! Layers: [`domain`] (model and rules), [`application`] (step validation and
//! replay), [`cli`] and [`config`] for the `aegraph` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
