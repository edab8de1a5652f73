//! Domain layer: the graph model and its transformation rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod graph;
mod locate;
mod parser;
pub mod path;
pub mod rules;
pub mod view;

pub use error::{DomainError, DomainResult};
pub use graph::{Element, Graph};
pub use path::GraphPath;
pub use rules::{Rule, Step};
pub use view::GraphTreeConvert;
