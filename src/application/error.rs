//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, GraphPath, Rule};

/// Application errors wrap domain errors and add proof-checking context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{rule} is not applicable at path {path}")]
    NotApplicable { rule: Rule, path: GraphPath },

    #[error("rule disabled by configuration: {0}")]
    RuleDisabled(Rule),

    #[error("step {index} ({step}) failed: {source}")]
    StepFailed {
        index: usize,
        step: String,
        #[source]
        source: Box<ApplicationError>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
