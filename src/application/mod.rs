//! Application layer: services and use cases
//!
//! This layer validates proof steps against the rule enumerators and drives
//! the domain transformations.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
