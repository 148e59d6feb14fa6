//! Check-state propagation between leaves and their groups.
//!
//! A leaf edit re-derives its group from scratch; a group click forces every
//! leaf to one state. Each entry point finishes both halves before returning.

use crate::selection::tree::{CheckState, GroupId, LeafId, SelectionTree};

impl SelectionTree {
    /// Set a leaf and recompute its group. Returns the group's new state.
    pub fn set_leaf_checked(&mut self, leaf: LeafId, checked: bool) -> Option<CheckState> {
        let node = self.leaves.get_mut(leaf.0)?;
        node.checked = checked;
        let group = node.group();

        let state = self.recompute_group(group);
        debug_assert!(self.is_consistent());
        Some(state)
    }

    /// Flip a leaf. Returns its group's new state.
    pub fn toggle_leaf(&mut self, leaf: LeafId) -> Option<CheckState> {
        let checked = self.leaf(leaf)?.is_checked();
        self.set_leaf_checked(leaf, !checked)
    }

    /// Apply a click on a group row.
    ///
    /// Checked and partial groups become unchecked, unchecked groups become
    /// checked, and every leaf follows.
    pub fn toggle_group(&mut self, group: GroupId) -> Option<CheckState> {
        let node = self.groups.get(group.0)?;
        let target = match node.state {
            CheckState::Unchecked => true,
            CheckState::Checked | CheckState::Partial => false,
        };

        for index in 0..node.leaves.len() {
            let leaf = self.groups[group.0].leaves[index];
            self.leaves[leaf.0].checked = target;
        }

        let state = self.recompute_group(group);
        debug_assert!(self.is_consistent());
        Some(state)
    }

    /// Leaf toggled by key. Unknown keys are ignored.
    pub fn on_leaf_toggled(&mut self, group_key: &str, leaf_key: &str) -> Option<CheckState> {
        let Some(leaf) = self.find_leaf(group_key, leaf_key) else {
            tracing::warn!("Ignoring toggle of unknown item {}:{}", group_key, leaf_key);
            return None;
        };

        let state = self.toggle_leaf(leaf)?;
        tracing::debug!("Toggled {}:{}, group is now {}", group_key, leaf_key, state);
        Some(state)
    }

    /// Group toggled by key. Unknown keys are ignored.
    pub fn on_group_toggled(&mut self, group_key: &str) -> Option<CheckState> {
        let Some(group) = self.find_group(group_key) else {
            tracing::warn!("Ignoring toggle of unknown group {}", group_key);
            return None;
        };

        let state = self.toggle_group(group)?;
        tracing::debug!("Toggled group {}, now {}", group_key, state);
        Some(state)
    }

    fn recompute_group(&mut self, group: GroupId) -> CheckState {
        let state = {
            let leaves = &self.leaves;
            CheckState::from_children(
                self.groups[group.0]
                    .leaves
                    .iter()
                    .map(|leaf| leaves[leaf.0].checked),
            )
        };
        self.groups[group.0].state = state;
        state
    }

    /// Every group state matches what its children imply.
    pub fn is_consistent(&self) -> bool {
        self.groups().all(|(id, group)| {
            let derived = CheckState::from_children(self.leaves_of(id).map(|(_, l)| l.is_checked()));
            group.state() == derived
        })
    }
}
