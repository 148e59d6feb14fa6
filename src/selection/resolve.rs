//! Turning checked rows back into download entries.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, DownloadEntry, SINGLE_KEY};
use crate::selection::tree::{GroupNode, LeafNode, SelectionTree};

/// Question asked when privileged episodes are selected without a login.
pub const PRIVILEGED_PROMPT: &str = "The selection contains member-only episodes, which will be \
                                     skipped without a logged-in session.\nContinue anyway?";

/// Failures of a resolution call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing was checked.
    #[error("No items selected to download")]
    EmptySelection,

    /// A checked row has no record behind it; the tree and catalog disagree.
    #[error("Selected item {group}:{leaf} has no matching record")]
    InternalConsistency { group: String, leaf: String },
}

/// What to download, in tree order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub entries: Vec<DownloadEntry>,

    /// Privileged content is selected and no credential is available.
    pub requires_confirmation: bool,
}

impl SelectionOutcome {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a resolution that may ask the user first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Proceed(SelectionOutcome),

    /// The user declined the confirmation; nothing should be downloaded.
    Cancelled,
}

/// Synchronous yes/no question.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!("Auto-answering {:?} with {}", message, self.0);
        self.0
    }
}

/// Resolve checked rows against the catalog without asking anything.
pub fn resolve_selection(
    tree: &SelectionTree,
    catalog: &Catalog,
    authenticated: bool,
) -> Result<SelectionOutcome, SelectionError> {
    let mut entries = Vec::new();
    let mut privileged = false;

    for (_, leaf) in tree.checked_leaves() {
        let group = tree
            .group(leaf.group())
            .ok_or_else(|| inconsistent("?", leaf.key()))?;

        let entry = lookup(catalog, group, leaf)
            .ok_or_else(|| inconsistent(group.key(), leaf.key()))?;

        privileged |= entry.is_privileged();
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(SelectionError::EmptySelection);
    }

    let requires_confirmation = privileged && !authenticated;
    tracing::debug!(
        "Resolved {} {} entries (privileged: {}, confirmation: {})",
        entries.len(),
        catalog.domain(),
        privileged,
        requires_confirmation
    );

    Ok(SelectionOutcome {
        entries,
        requires_confirmation,
    })
}

/// Resolve checked rows, asking `prompt` when confirmation is required.
pub fn resolve(
    tree: &SelectionTree,
    catalog: &Catalog,
    authenticated: bool,
    prompt: &mut dyn ConfirmPrompt,
) -> Result<Resolution, SelectionError> {
    let outcome = resolve_selection(tree, catalog, authenticated)?;

    if outcome.requires_confirmation && !prompt.confirm(PRIVILEGED_PROMPT) {
        tracing::info!("Download of privileged selection declined");
        return Ok(Resolution::Cancelled);
    }

    Ok(Resolution::Proceed(outcome))
}

fn lookup(catalog: &Catalog, group: &GroupNode, leaf: &LeafNode) -> Option<DownloadEntry> {
    match catalog {
        Catalog::Video(info) => {
            let ordinal = leaf.key().parse::<usize>().ok()?;
            if info.collection {
                info.episode_at(ordinal)
                    .cloned()
                    .map(DownloadEntry::CollectionEpisode)
            } else {
                info.page_at(ordinal).map(|page| DownloadEntry::Page {
                    bvid: info.bvid.clone(),
                    title: info.title.clone(),
                    page: page.clone(),
                    qualities: info.qualities.clone(),
                })
            }
        }
        Catalog::Series(info) => info
            .find_episode(group.key(), leaf.key(), leaf.title())
            .cloned()
            .map(DownloadEntry::Episode),
        Catalog::Live(info) => {
            (leaf.key() == SINGLE_KEY).then(|| DownloadEntry::Live(info.clone()))
        }
        Catalog::Audio(info) => {
            (leaf.key() == SINGLE_KEY).then(|| DownloadEntry::Audio(info.clone()))
        }
    }
}

fn inconsistent(group: &str, leaf: &str) -> SelectionError {
    tracing::error!("Selected item {}:{} has no matching record", group, leaf);
    SelectionError::InternalConsistency {
        group: group.to_string(),
        leaf: leaf.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        AudioInfo, CollectionEpisode, GroupRecord, LeafRecord, LiveInfo, Quality, Section,
        SeriesEpisode, SeriesInfo, VideoInfo, VideoPage, MAIN_SECTION,
    };

    /// Records every question and answers with a fixed value.
    struct RecordingPrompt {
        answer: bool,
        asked: Vec<String>,
    }

    impl RecordingPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Vec::new(),
            }
        }
    }

    impl ConfirmPrompt for RecordingPrompt {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.answer
        }
    }

    fn video(parts: u32) -> Catalog {
        Catalog::Video(VideoInfo {
            bvid: "BV17x411w7KC".to_string(),
            aid: 170001,
            title: "Video".to_string(),
            pages: (1..=parts)
                .map(|page| VideoPage {
                    cid: 100 + page as u64,
                    page,
                    part: format!("Part {}", page),
                    duration: 30,
                })
                .collect(),
            episodes: Vec::new(),
            collection: false,
            qualities: vec![Quality {
                id: 80,
                description: "1080P 高清".to_string(),
            }],
        })
    }

    fn episode(ep_id: u64, label: &str, badge: &str) -> SeriesEpisode {
        SeriesEpisode {
            ep_id,
            aid: 0,
            bvid: String::new(),
            cid: ep_id,
            label: label.to_string(),
            share_copy: format!("Episode {}", ep_id),
            badge: badge.to_string(),
            duration: 1400,
        }
    }

    fn series(main_badges: [&str; 3]) -> Catalog {
        Catalog::Series(SeriesInfo {
            season_id: 1,
            title: "Show".to_string(),
            sections: vec![
                Section {
                    title: MAIN_SECTION.to_string(),
                    episodes: main_badges
                        .iter()
                        .enumerate()
                        .map(|(i, badge)| episode(i as u64 + 1, &(i + 1).to_string(), badge))
                        .collect(),
                },
                Section {
                    title: "花絮".to_string(),
                    episodes: vec![episode(11, "1", ""), episode(12, "2", "")],
                },
            ],
        })
    }

    fn tree_for(catalog: &Catalog) -> SelectionTree {
        SelectionTree::build(catalog.title(), catalog.to_groups(true))
    }

    fn ep_ids(outcome: &SelectionOutcome) -> Vec<u64> {
        outcome
            .entries
            .iter()
            .map(|entry| match entry {
                DownloadEntry::Episode(episode) => episode.ep_id,
                other => panic!("unexpected entry {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_partial_video_resolves_checked_pages() {
        let catalog = video(3);
        let mut tree = SelectionTree::build(
            catalog.title(),
            vec![GroupRecord::new(
                "video",
                (1..=3)
                    .map(|n| LeafRecord::new(n.to_string(), format!("Part {}", n)))
                    .collect(),
            )],
        );

        tree.on_leaf_toggled("video", "2");
        let outcome = resolve_selection(&tree, &catalog, false).unwrap();

        let pages: Vec<u32> = outcome
            .entries
            .iter()
            .map(|entry| match entry {
                DownloadEntry::Page {
                    page,
                    bvid,
                    qualities,
                    ..
                } => {
                    assert_eq!(bvid, "BV17x411w7KC");
                    assert_eq!(qualities[0].id, 80);
                    page.page
                }
                other => panic!("unexpected entry {:?}", other),
            })
            .collect();
        assert_eq!(pages, vec![1, 3]);
        assert!(!outcome.requires_confirmation);
    }

    #[test]
    fn test_unchecked_section_is_left_out() {
        let catalog = series(["", "", ""]);
        let mut tree = tree_for(&catalog);

        tree.on_leaf_toggled("花絮", "1");
        tree.on_leaf_toggled("花絮", "2");

        let outcome = resolve_selection(&tree, &catalog, false).unwrap();
        assert_eq!(ep_ids(&outcome), vec![1, 2, 3]);
    }

    #[test]
    fn test_privileged_without_credential_asks_and_can_be_declined() {
        let catalog = series(["", "会员", ""]);
        let tree = tree_for(&catalog);

        let outcome = resolve_selection(&tree, &catalog, false).unwrap();
        assert!(outcome.requires_confirmation);

        let mut prompt = RecordingPrompt::answering(false);
        let resolution = resolve(&tree, &catalog, false, &mut prompt).unwrap();
        assert_eq!(resolution, Resolution::Cancelled);
        assert_eq!(prompt.asked, vec![PRIVILEGED_PROMPT.to_string()]);
    }

    #[test]
    fn test_privileged_without_credential_accepted() {
        let catalog = series(["会员", "", ""]);
        let tree = tree_for(&catalog);

        let mut prompt = RecordingPrompt::answering(true);
        match resolve(&tree, &catalog, false, &mut prompt).unwrap() {
            Resolution::Proceed(outcome) => {
                assert!(outcome.requires_confirmation);
                assert_eq!(outcome.len(), 5);
            }
            Resolution::Cancelled => panic!("accepted prompt must proceed"),
        }
    }

    #[test]
    fn test_privileged_with_credential_does_not_ask() {
        let catalog = series(["", "会员", ""]);
        let tree = tree_for(&catalog);

        let mut prompt = RecordingPrompt::answering(false);
        let resolution = resolve(&tree, &catalog, true, &mut prompt).unwrap();
        assert!(prompt.asked.is_empty());
        assert!(matches!(
            resolution,
            Resolution::Proceed(SelectionOutcome {
                requires_confirmation: false,
                ..
            })
        ));
    }

    #[test]
    fn test_unchecked_privileged_episode_does_not_ask() {
        let catalog = series(["", "会员", ""]);
        let mut tree = tree_for(&catalog);
        tree.on_leaf_toggled(MAIN_SECTION, "2");

        let outcome = resolve_selection(&tree, &catalog, false).unwrap();
        assert!(!outcome.requires_confirmation);
        assert_eq!(ep_ids(&outcome), vec![1, 3, 11, 12]);
    }

    #[test]
    fn test_group_click_then_resolve_is_empty() {
        let catalog = video(3);
        let mut tree = tree_for(&catalog);

        tree.on_group_toggled(crate::catalog::VIDEO_GROUP);

        let mut prompt = AutoConfirm(true);
        assert_eq!(
            resolve(&tree, &catalog, false, &mut prompt),
            Err(SelectionError::EmptySelection)
        );
    }

    #[test]
    fn test_empty_tree_is_empty_selection() {
        let catalog = video(1);
        let tree = SelectionTree::new();

        assert_eq!(
            resolve_selection(&tree, &catalog, true),
            Err(SelectionError::EmptySelection)
        );
    }

    #[test]
    fn test_resolution_is_not_additive() {
        let catalog = video(2);
        let tree = tree_for(&catalog);

        let first = resolve_selection(&tree, &catalog, false).unwrap();
        let second = resolve_selection(&tree, &catalog, false).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_collection_resolves_episodes() {
        let catalog = Catalog::Video(VideoInfo {
            bvid: "BV1".to_string(),
            aid: 1,
            title: "Collection".to_string(),
            pages: Vec::new(),
            episodes: (1..=3)
                .map(|n| CollectionEpisode {
                    aid: n,
                    bvid: format!("BV{}", n),
                    cid: n,
                    title: format!("Episode {}", n),
                    duration: 60,
                })
                .collect(),
            collection: true,
            qualities: Vec::new(),
        });
        let mut tree = tree_for(&catalog);
        tree.on_leaf_toggled(crate::catalog::VIDEO_GROUP, "1");

        let outcome = resolve_selection(&tree, &catalog, false).unwrap();
        let titles: Vec<_> = outcome.entries.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Episode 2", "Episode 3"]);
    }

    #[test]
    fn test_single_item_catalogs() {
        let live = Catalog::Live(LiveInfo {
            room_id: 5,
            title: "Stream".to_string(),
            live_status: 1,
        });
        let outcome = resolve_selection(&tree_for(&live), &live, false).unwrap();
        assert!(matches!(outcome.entries.as_slice(), [DownloadEntry::Live(_)]));

        let audio = Catalog::Audio(AudioInfo {
            song_id: 6,
            title: "Track".to_string(),
            duration: 90,
        });
        let outcome = resolve_selection(&tree_for(&audio), &audio, false).unwrap();
        assert!(matches!(outcome.entries.as_slice(), [DownloadEntry::Audio(_)]));
    }

    #[test]
    fn test_unmatched_leaf_is_internal_error() {
        let catalog = video(2);
        let tree = SelectionTree::build(
            catalog.title(),
            vec![GroupRecord::new(
                "video",
                vec![LeafRecord::new("1", "a"), LeafRecord::new("7", "ghost")],
            )],
        );

        assert_eq!(
            resolve_selection(&tree, &catalog, false),
            Err(SelectionError::InternalConsistency {
                group: "video".to_string(),
                leaf: "7".to_string(),
            })
        );
    }

    #[test]
    fn test_series_leaf_must_match_title_in_its_section() {
        let catalog = series(["", "", ""]);
        let tree = SelectionTree::build(
            catalog.title(),
            vec![GroupRecord::new("花絮", vec![LeafRecord::new("1", "Episode 1")])],
        );

        assert!(matches!(
            resolve_selection(&tree, &catalog, false),
            Err(SelectionError::InternalConsistency { .. })
        ));
    }

    #[test]
    fn test_repeated_section_title_resolves_like_the_tree() {
        let catalog = Catalog::Series(SeriesInfo {
            season_id: 1,
            title: "Show".to_string(),
            sections: vec![
                Section {
                    title: MAIN_SECTION.to_string(),
                    episodes: vec![episode(1, "1", "")],
                },
                Section {
                    title: "PV".to_string(),
                    episodes: vec![episode(21, "1", "")],
                },
                Section {
                    title: "PV".to_string(),
                    episodes: vec![episode(22, "1", "")],
                },
            ],
        });

        let outcome = resolve_selection(&tree_for(&catalog), &catalog, false).unwrap();
        assert_eq!(ep_ids(&outcome), vec![1, 22]);
    }

    #[test]
    fn test_second_repeated_label_can_be_toggled() {
        let catalog = Catalog::Series(SeriesInfo {
            season_id: 1,
            title: "Show".to_string(),
            sections: vec![Section {
                title: "PV".to_string(),
                episodes: vec![episode(31, "PV", ""), episode(32, "PV", "")],
            }],
        });
        let mut tree = tree_for(&catalog);

        assert_eq!(
            tree.on_leaf_toggled("PV", "PV-2"),
            Some(crate::selection::CheckState::Partial)
        );

        let outcome = resolve_selection(&tree, &catalog, false).unwrap();
        assert_eq!(ep_ids(&outcome), vec![31]);
    }
}
