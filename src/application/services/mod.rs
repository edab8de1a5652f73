//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod proof;

pub use proof::{ProofService, ProofTrace};
