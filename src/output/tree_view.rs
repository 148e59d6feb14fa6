//! Text rendering of the selection tree.
//!
//! Columns follow the download list: ordinal, title, badge, duration.

use console::{pad_str, style, Alignment};

use crate::selection::{CheckState, SelectionTree};

/// Format seconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

fn marker(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Unchecked => "[ ]",
        CheckState::Partial => "[-]",
    }
}

fn leaf_marker(checked: bool) -> &'static str {
    if checked {
        marker(CheckState::Checked)
    } else {
        marker(CheckState::Unchecked)
    }
}

/// Unstyled lines, one per group and leaf, in tree order.
pub fn render_tree(tree: &SelectionTree) -> Vec<String> {
    let key_width = tree
        .leaves()
        .map(|(_, leaf)| console::measure_text_width(leaf.key()))
        .max()
        .unwrap_or(0);
    let title_width = tree
        .leaves()
        .map(|(_, leaf)| console::measure_text_width(leaf.title()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(tree.group_count() + tree.leaf_count());

    for (id, group) in tree.groups() {
        let mut line = format!("{} {}", marker(group.state()), group.key());
        if let Some(title) = group.title() {
            line.push_str("  ");
            line.push_str(title);
        }
        lines.push(line);

        for (_, leaf) in tree.leaves_of(id) {
            let duration = leaf.duration().map(format_duration).unwrap_or_default();
            let line = format!(
                "    {} {}  {}  {}  {}",
                leaf_marker(leaf.is_checked()),
                pad_str(leaf.key(), key_width, Alignment::Left, None),
                pad_str(leaf.title(), title_width, Alignment::Left, None),
                leaf.badge(),
                duration
            );
            lines.push(line.trim_end().to_string());
        }
    }

    lines
}

/// Print the tree, group rows in bold.
pub fn print_tree(tree: &SelectionTree) {
    if tree.is_empty() {
        println!("{}", style("(nothing to select)").dim());
        return;
    }

    for line in render_tree(tree) {
        if line.starts_with("    ") {
            println!("{}", line);
        } else {
            println!("{}", style(line).bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GroupRecord, LeafRecord};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(75), "01:15");
        assert_eq!(format_duration(3599), "59:59");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(7322), "2:02:02");
    }

    #[test]
    fn test_render_tree_markers() {
        let mut tree = SelectionTree::build(
            "Show",
            vec![
                GroupRecord::new(
                    "正片",
                    vec![
                        LeafRecord::new("1", "First").with_duration(90),
                        LeafRecord::new("2", "Second").with_badge("会员"),
                    ],
                )
                .multi_part(true),
                GroupRecord::new("花絮", vec![LeafRecord::new("1", "Extra")]),
            ],
        );
        tree.on_leaf_toggled("正片", "2");
        tree.on_group_toggled("花絮");

        let lines = render_tree(&tree);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[-] 正片  Show");
        assert_eq!(lines[1], "    [x] 1  First     01:30");
        assert_eq!(lines[2], "    [ ] 2  Second  会员");
        assert_eq!(lines[3], "[ ] 花絮");
        assert!(lines[4].starts_with("    [ ] 1  Extra"));
    }

    #[test]
    fn test_render_empty_tree() {
        assert!(render_tree(&SelectionTree::new()).is_empty());
    }
}
