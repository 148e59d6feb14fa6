//! One catalog and the tree built from it.

use crate::catalog::{Catalog, Domain};
use crate::selection::resolve::{
    self, ConfirmPrompt, Resolution, SelectionError, SelectionOutcome,
};
use crate::selection::tree::{CheckState, SelectionTree};

/// Single owner of a selection tree.
///
/// Front ends feed user clicks into [`on_leaf_toggled`](Self::on_leaf_toggled)
/// and [`on_group_toggled`](Self::on_group_toggled) and read the result with
/// [`resolve`](Self::resolve).
#[derive(Debug, Clone)]
pub struct SelectionSession {
    catalog: Catalog,
    show_sections: bool,
    tree: SelectionTree,
}

impl SelectionSession {
    pub fn new(catalog: Catalog, show_sections: bool) -> Self {
        let tree = SelectionTree::build(catalog.title(), catalog.to_groups(show_sections));
        Self {
            catalog,
            show_sections,
            tree,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    pub fn domain(&self) -> Domain {
        self.catalog.domain()
    }

    pub fn show_sections(&self) -> bool {
        self.show_sections
    }

    /// Throw the current selection away and start from everything checked.
    pub fn rebuild(&mut self) {
        let groups = self.catalog.to_groups(self.show_sections);
        self.tree.rebuild(self.catalog.title(), groups);
    }

    /// Change section visibility; rebuilds the tree.
    pub fn set_show_sections(&mut self, show_sections: bool) {
        self.show_sections = show_sections;
        self.rebuild();
    }

    pub fn on_leaf_toggled(&mut self, group_key: &str, leaf_key: &str) -> Option<CheckState> {
        self.tree.on_leaf_toggled(group_key, leaf_key)
    }

    pub fn on_group_toggled(&mut self, group_key: &str) -> Option<CheckState> {
        self.tree.on_group_toggled(group_key)
    }

    /// Resolve without prompting.
    pub fn resolve_selection(
        &self,
        authenticated: bool,
    ) -> Result<SelectionOutcome, SelectionError> {
        resolve::resolve_selection(&self.tree, &self.catalog, authenticated)
    }

    pub fn resolve(
        &self,
        authenticated: bool,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Result<Resolution, SelectionError> {
        resolve::resolve(&self.tree, &self.catalog, authenticated, prompt)
    }
}
