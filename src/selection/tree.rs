//! Arena-backed selection tree.
//!
//! Groups own their leaves through [`LeafId`] handles and every leaf points
//! back at its group with a [`GroupId`], so parent lookup is a plain index.

use std::fmt;

use crate::catalog::{GroupRecord, LeafRecord};

/// Handle of a group node inside one [`SelectionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) usize);

/// Handle of a leaf node inside one [`SelectionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeafId(pub(crate) usize);

/// Tri-state check flag. Only groups are ever `Partial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Partial,
}

impl CheckState {
    /// Derive a group state from its children's flags.
    ///
    /// No children yields `Unchecked`.
    pub fn from_children<I: IntoIterator<Item = bool>>(children: I) -> Self {
        let mut any_checked = false;
        let mut any_unchecked = false;

        for checked in children {
            if checked {
                any_checked = true;
            } else {
                any_unchecked = true;
            }
        }

        match (any_checked, any_unchecked) {
            (true, false) => CheckState::Checked,
            (true, true) => CheckState::Partial,
            (false, _) => CheckState::Unchecked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckState::Checked => write!(f, "checked"),
            CheckState::Unchecked => write!(f, "unchecked"),
            CheckState::Partial => write!(f, "partial"),
        }
    }
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    key: String,
    title: String,
    badge: String,
    duration: Option<u64>,
    pub(crate) checked: bool,
    group: GroupId,
}

impl LeafNode {
    /// Ordinal label, unique within the owning group.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn badge(&self) -> &str {
        &self.badge
    }

    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The owning group.
    pub fn group(&self) -> GroupId {
        self.group
    }
}

/// A named bucket of leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    key: String,
    title: Option<String>,
    pub(crate) state: CheckState,
    pub(crate) leaves: Vec<LeafId>,
}

impl GroupNode {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Title shown next to the key; set only for multi-part groups.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    /// Owned leaves in source order.
    pub fn leaves(&self) -> &[LeafId] {
        &self.leaves
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

/// The whole checkbox hierarchy for one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTree {
    pub(crate) groups: Vec<GroupNode>,
    pub(crate) leaves: Vec<LeafNode>,
}

impl SelectionTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree with every leaf checked.
    ///
    /// Multi-part groups display `shared_title`. A repeated group key replaces
    /// the earlier group's leaves and keeps its position.
    pub fn build(shared_title: &str, groups: Vec<GroupRecord>) -> Self {
        let mut unique: Vec<GroupRecord> = Vec::with_capacity(groups.len());
        for group in groups {
            match unique.iter_mut().find(|existing| existing.key == group.key) {
                Some(existing) => {
                    tracing::warn!("Duplicate group '{}' replaces the earlier one", group.key);
                    *existing = group;
                }
                None => unique.push(group),
            }
        }

        let mut tree = Self::new();
        for record in unique {
            tree.push_group(shared_title, record);
        }

        tracing::debug!(
            "Built selection tree: {} groups, {} leaves",
            tree.groups.len(),
            tree.leaves.len()
        );
        tree
    }

    /// Discard the current tree and build a fresh one.
    pub fn rebuild(&mut self, shared_title: &str, groups: Vec<GroupRecord>) {
        *self = Self::build(shared_title, groups);
    }

    fn push_group(&mut self, shared_title: &str, record: GroupRecord) {
        let group_id = GroupId(self.groups.len());
        let mut leaf_ids = Vec::with_capacity(record.leaves.len());

        for LeafRecord {
            key,
            title,
            badge,
            duration,
        } in record.leaves
        {
            leaf_ids.push(LeafId(self.leaves.len()));
            self.leaves.push(LeafNode {
                key,
                title,
                badge,
                duration,
                checked: true,
                group: group_id,
            });
        }

        let state = CheckState::from_children(leaf_ids.iter().map(|_| true));
        self.groups.push(GroupNode {
            key: record.key,
            title: record.multi_part.then(|| shared_title.to_string()),
            state,
            leaves: leaf_ids,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupNode> {
        self.groups.get(id.0)
    }

    pub fn leaf(&self, id: LeafId) -> Option<&LeafNode> {
        self.leaves.get(id.0)
    }

    /// Groups in presentation order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &GroupNode)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| (GroupId(index), group))
    }

    /// Leaves of one group in source order.
    pub fn leaves_of(&self, id: GroupId) -> impl Iterator<Item = (LeafId, &LeafNode)> {
        self.group(id)
            .map(|group| group.leaves.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&leaf| (leaf, &self.leaves[leaf.0]))
    }

    /// All leaves, group by group.
    pub fn leaves(&self) -> impl Iterator<Item = (LeafId, &LeafNode)> {
        self.groups
            .iter()
            .flat_map(|group| group.leaves.iter())
            .map(move |&leaf| (leaf, &self.leaves[leaf.0]))
    }

    pub fn checked_leaves(&self) -> impl Iterator<Item = (LeafId, &LeafNode)> {
        self.leaves().filter(|(_, leaf)| leaf.checked)
    }

    pub fn find_group(&self, key: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|group| group.key == key)
            .map(GroupId)
    }

    pub fn find_leaf(&self, group_key: &str, leaf_key: &str) -> Option<LeafId> {
        let group = self.find_group(group_key)?;
        self.leaves_of(group)
            .find(|(_, leaf)| leaf.key == leaf_key)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(count: usize) -> Vec<LeafRecord> {
        (1..=count)
            .map(|n| LeafRecord::new(n.to_string(), format!("Item {}", n)))
            .collect()
    }

    #[test]
    fn test_from_children() {
        assert_eq!(CheckState::from_children([true, true]), CheckState::Checked);
        assert_eq!(CheckState::from_children([false, false]), CheckState::Unchecked);
        assert_eq!(CheckState::from_children([true, false]), CheckState::Partial);
        assert_eq!(CheckState::from_children(std::iter::empty()), CheckState::Unchecked);
    }

    #[test]
    fn test_build_checks_everything() {
        let tree = SelectionTree::build(
            "Title",
            vec![
                GroupRecord::new("正片", leaves(3)),
                GroupRecord::new("花絮", leaves(2)),
            ],
        );

        assert_eq!(tree.group_count(), 2);
        assert_eq!(tree.leaf_count(), 5);
        assert!(tree.groups().all(|(_, g)| g.state() == CheckState::Checked));
        assert!(tree.leaves().all(|(_, l)| l.is_checked()));
    }

    #[test]
    fn test_build_preserves_order_and_parents() {
        let tree = SelectionTree::build(
            "Title",
            vec![
                GroupRecord::new("b", leaves(2)),
                GroupRecord::new("a", leaves(1)),
            ],
        );

        let keys: Vec<_> = tree.groups().map(|(_, g)| g.key()).collect();
        assert_eq!(keys, vec!["b", "a"]);

        let a = tree.find_group("a").unwrap();
        for (_, leaf) in tree.leaves_of(a) {
            assert_eq!(leaf.group(), a);
        }

        let order: Vec<_> = tree
            .leaves()
            .map(|(_, l)| (tree.group(l.group()).unwrap().key(), l.key()))
            .collect();
        assert_eq!(order, vec![("b", "1"), ("b", "2"), ("a", "1")]);
    }

    #[test]
    fn test_empty_group_is_unchecked() {
        let tree = SelectionTree::build("Title", vec![GroupRecord::new("empty", Vec::new())]);

        let id = tree.find_group("empty").unwrap();
        assert_eq!(tree.group(id).unwrap().state(), CheckState::Unchecked);
        assert!(tree.group(id).unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_builds_empty_tree() {
        let tree = SelectionTree::build("Title", Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.checked_leaves().count(), 0);
    }

    #[test]
    fn test_multi_part_title() {
        let tree = SelectionTree::build(
            "Shared",
            vec![
                GroupRecord::new("multi", leaves(2)).multi_part(true),
                GroupRecord::new("plain", leaves(2)),
            ],
        );

        let multi = tree.find_group("multi").unwrap();
        let plain = tree.find_group("plain").unwrap();
        assert_eq!(tree.group(multi).unwrap().title(), Some("Shared"));
        assert_eq!(tree.group(multi).unwrap().key(), "multi");
        assert_eq!(tree.group(plain).unwrap().title(), None);
    }

    #[test]
    fn test_duplicate_group_key_replaces_leaves() {
        let tree = SelectionTree::build(
            "Title",
            vec![
                GroupRecord::new("x", leaves(3)),
                GroupRecord::new("y", leaves(1)),
                GroupRecord::new("x", leaves(1)),
            ],
        );

        let keys: Vec<_> = tree.groups().map(|(_, g)| g.key()).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(tree.leaves_of(tree.find_group("x").unwrap()).count(), 1);
    }

    #[test]
    fn test_rebuild_is_idempotent_and_destructive() {
        let records = vec![GroupRecord::new("视频", leaves(3))];
        let mut tree = SelectionTree::build("Title", records.clone());

        let leaf = tree.find_leaf("视频", "2").unwrap();
        tree.leaves[leaf.0].checked = false;

        tree.rebuild("Title", records.clone());
        assert_eq!(tree, SelectionTree::build("Title", records));
        assert!(tree.leaves().all(|(_, l)| l.is_checked()));
    }

    #[test]
    fn test_find_leaf() {
        let tree = SelectionTree::build(
            "Title",
            vec![
                GroupRecord::new("a", leaves(2)),
                GroupRecord::new("b", leaves(2)),
            ],
        );

        let id = tree.find_leaf("b", "2").unwrap();
        let leaf = tree.leaf(id).unwrap();
        assert_eq!(leaf.title(), "Item 2");
        assert_eq!(tree.group(leaf.group()).unwrap().key(), "b");

        assert!(tree.find_leaf("b", "3").is_none());
        assert!(tree.find_leaf("c", "1").is_none());
    }
}
