//! Selection module: the checkbox hierarchy and what it resolves to.
//!
//! This module provides:
//! - An arena-backed tree of groups and leaves with tri-state check flags
//! - Propagation of check state between leaves and groups
//! - Resolution of checked rows into download entries and policy verdicts
//! - A session tying one catalog to its tree

pub mod propagate;
pub mod resolve;
pub mod session;
pub mod tree;

pub use resolve::{
    resolve, resolve_selection, AutoConfirm, ConfirmPrompt, Resolution, SelectionError,
    SelectionOutcome, PRIVILEGED_PROMPT,
};
pub use session::SelectionSession;
pub use tree::{CheckState, GroupId, GroupNode, LeafId, LeafNode, SelectionTree};
