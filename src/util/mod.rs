//! Utilities shared by tests and the binary

pub mod testing;
