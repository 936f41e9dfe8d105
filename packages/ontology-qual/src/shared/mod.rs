//! Shared utilities

pub mod macros;
