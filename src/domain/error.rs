//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::path::GraphPath;

/// Domain errors represent malformed graph text and unusable paths.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty graph representation")]
    EmptyInput,

    #[error("graph must be enclosed in matching '()' or '[]': {0}")]
    MismatchedDelimiters(String),

    #[error("unbalanced brackets in: {0}")]
    UnbalancedBrackets(String),

    #[error("sheet of assertion '(...)' is only allowed at the outermost level: {0}")]
    NestedSheet(String),

    #[error("empty element in: {0}")]
    EmptyElement(String),

    #[error("invalid atom: {0}")]
    InvalidAtom(String),

    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: GraphPath, reason: String },

    #[error("invalid path syntax: {0}")]
    InvalidPathSyntax(String),

    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
