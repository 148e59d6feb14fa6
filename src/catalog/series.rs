//! Series (bangumi) seasons and their named sections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::record::{GroupRecord, LeafRecord};

/// Name of the main-feature section.
pub const MAIN_SECTION: &str = "正片";

/// Badges that mark an episode as needing a logged-in (premium) account.
pub const PRIVILEGED_BADGES: &[&str] = &["会员", "member-only"];

/// One episode of a series section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEpisode {
    pub ep_id: u64,

    #[serde(default)]
    pub aid: u64,

    #[serde(default)]
    pub bvid: String,

    #[serde(default)]
    pub cid: u64,

    /// Episode label ("1", "2", "PV1", or "正片" for movies).
    pub label: String,

    /// Full display title.
    pub share_copy: String,

    #[serde(default)]
    pub badge: String,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: u64,
}

impl SeriesEpisode {
    pub fn is_privileged(&self) -> bool {
        PRIVILEGED_BADGES.contains(&self.badge.as_str())
    }
}

/// A named list of episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub episodes: Vec<SeriesEpisode>,
}

/// Metadata for a series season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInfo {
    #[serde(default)]
    pub season_id: u64,

    pub title: String,

    /// Sections in presentation order, main feature first.
    pub sections: Vec<Section>,
}

impl SeriesInfo {
    /// The row an episode is displayed as.
    ///
    /// Movies label their only episode "正片"; that row is shown as "1" with
    /// the season title.
    pub fn leaf_record(&self, episode: &SeriesEpisode) -> LeafRecord {
        let (key, title) = if episode.label == MAIN_SECTION {
            ("1".to_string(), self.title.clone())
        } else {
            (episode.label.clone(), episode.share_copy.clone())
        };

        LeafRecord::new(key, title)
            .with_badge(episode.badge.clone())
            .with_duration(episode.duration)
    }

    /// Rows of one section, in episode order.
    ///
    /// A repeated key gets its 1-based position appended (`PV`, `PV-2`), so
    /// keys stay unique within the group.
    pub fn section_records(&self, section: &Section) -> Vec<LeafRecord> {
        let mut seen = HashSet::new();

        section
            .episodes
            .iter()
            .enumerate()
            .map(|(index, episode)| {
                let mut record = self.leaf_record(episode);
                if !seen.insert(record.key.clone()) {
                    let base = record.key.clone();
                    let mut position = index + 1;
                    record.key = format!("{}-{}", base, position);
                    while !seen.insert(record.key.clone()) {
                        position += 1;
                        record.key = format!("{}-{}", base, position);
                    }
                }
                record
            })
            .collect()
    }

    /// One group per section; extra sections only when `show_sections` is set.
    pub fn to_groups(&self, show_sections: bool) -> Vec<GroupRecord> {
        self.sections
            .iter()
            .filter(|section| show_sections || section.title == MAIN_SECTION)
            .map(|section| GroupRecord::new(section.title.clone(), self.section_records(section)))
            .collect()
    }

    /// The section shown under `title`. When titles repeat, the last one wins,
    /// matching the tree.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .rev()
            .find(|section| section.title == title)
    }

    /// Find the episode of `section` displayed with this key and title.
    pub fn find_episode(&self, section: &str, key: &str, title: &str) -> Option<&SeriesEpisode> {
        let section = self.section(section)?;
        self.section_records(section)
            .into_iter()
            .zip(section.episodes.iter())
            .find(|(record, _)| record.key == key && record.title == title)
            .map(|(_, episode)| episode)
    }
}
