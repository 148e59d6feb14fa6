//! Command-line interface.

pub mod args;

pub use args::{parse_leaf_ref, Args};
