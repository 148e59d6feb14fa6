//! Regular videos: single-part, multi-part and collection (UGC season) videos.

use serde::{Deserialize, Serialize};

use crate::catalog::record::{GroupRecord, LeafRecord};

/// Group key used for the video bucket.
pub const VIDEO_GROUP: &str = "视频";

/// Lowest quality id (1080P high bitrate) that needs a member cookie.
pub const PREMIUM_QUALITY_MIN: u32 = 112;

/// One part of a (possibly multi-part) video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPage {
    pub cid: u64,

    /// 1-based page number.
    pub page: u32,

    /// Part title.
    pub part: String,

    /// Duration in seconds.
    pub duration: u64,
}

/// One episode of a collection the video belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEpisode {
    pub aid: u64,
    pub bvid: String,
    pub cid: u64,
    pub title: String,

    /// Duration in seconds.
    pub duration: u64,
}

/// A stream quality the video is offered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    /// Quality id (`qn`), e.g. 80 for 1080P.
    pub id: u32,

    /// Display name, e.g. "1080P 高清".
    pub description: String,
}

impl Quality {
    /// Only downloadable with a member cookie.
    pub fn is_premium(&self) -> bool {
        self.id >= PREMIUM_QUALITY_MIN
    }
}

/// Metadata for a regular video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub bvid: String,

    #[serde(default)]
    pub aid: u64,

    /// Video title, or the collection title for collection videos.
    pub title: String,

    #[serde(default)]
    pub pages: Vec<VideoPage>,

    #[serde(default)]
    pub episodes: Vec<CollectionEpisode>,

    /// Whether `episodes` is the active list instead of `pages`.
    #[serde(default)]
    pub collection: bool,

    /// Offered qualities, best first.
    #[serde(default)]
    pub qualities: Vec<Quality>,
}

impl VideoInfo {
    /// More than one page.
    pub fn is_multiple(&self) -> bool {
        self.pages.len() > 1
    }

    /// More than one page or more than one collection episode.
    pub fn is_multi_part(&self) -> bool {
        self.pages.len() > 1 || self.episodes.len() > 1
    }

    /// Build the single video group.
    pub fn to_group(&self) -> GroupRecord {
        let leaves = if self.collection {
            self.episodes
                .iter()
                .enumerate()
                .map(|(index, episode)| {
                    LeafRecord::new((index + 1).to_string(), episode.title.clone())
                        .with_duration(episode.duration)
                })
                .collect()
        } else {
            self.pages
                .iter()
                .map(|page| {
                    let title = if self.is_multiple() {
                        page.part.clone()
                    } else {
                        self.title.clone()
                    };
                    LeafRecord::new(page.page.to_string(), title).with_duration(page.duration)
                })
                .collect()
        };

        GroupRecord::new(VIDEO_GROUP, leaves).multi_part(self.is_multi_part())
    }

    /// Best quality available with or without a login.
    pub fn best_quality(&self, authenticated: bool) -> Option<&Quality> {
        self.qualities
            .iter()
            .filter(|quality| authenticated || !quality.is_premium())
            .max_by_key(|quality| quality.id)
    }

    /// Qualities listed but out of reach without a login.
    pub fn locked_qualities(&self, authenticated: bool) -> Vec<&Quality> {
        if authenticated {
            return Vec::new();
        }
        self.qualities.iter().filter(|q| q.is_premium()).collect()
    }

    /// Look up the page at a 1-based ordinal.
    pub fn page_at(&self, ordinal: usize) -> Option<&VideoPage> {
        ordinal.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    /// Look up the collection episode at a 1-based ordinal.
    pub fn episode_at(&self, ordinal: usize) -> Option<&CollectionEpisode> {
        ordinal.checked_sub(1).and_then(|index| self.episodes.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, part: &str) -> VideoPage {
        VideoPage {
            cid: 1000 + page as u64,
            page,
            part: part.to_string(),
            duration: 60 * page as u64,
        }
    }

    fn video(pages: Vec<VideoPage>) -> VideoInfo {
        VideoInfo {
            bvid: "BV17x411w7KC".to_string(),
            aid: 170001,
            title: "Whole video".to_string(),
            pages,
            episodes: Vec::new(),
            collection: false,
            qualities: Vec::new(),
        }
    }

    fn quality(id: u32, description: &str) -> Quality {
        Quality {
            id,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_single_page_uses_video_title() {
        let group = video(vec![page(1, "P1")]).to_group();

        assert_eq!(group.key, VIDEO_GROUP);
        assert!(!group.multi_part);
        assert_eq!(group.leaves.len(), 1);
        assert_eq!(group.leaves[0].key, "1");
        assert_eq!(group.leaves[0].title, "Whole video");
        assert_eq!(group.leaves[0].duration, Some(60));
    }

    #[test]
    fn test_multi_page_uses_part_titles() {
        let group = video(vec![page(1, "Intro"), page(2, "Outro")]).to_group();

        assert!(group.multi_part);
        let titles: Vec<_> = group.leaves.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Outro"]);
    }

    #[test]
    fn test_collection_lists_episodes() {
        let mut info = video(vec![page(1, "P1")]);
        info.collection = true;
        info.episodes = (1..=3)
            .map(|n| CollectionEpisode {
                aid: n,
                bvid: format!("BV{}", n),
                cid: n,
                title: format!("Episode {}", n),
                duration: 10,
            })
            .collect();

        let group = info.to_group();
        assert!(group.multi_part);
        let keys: Vec<_> = group.leaves.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(group.leaves[2].title, "Episode 3");
    }

    #[test]
    fn test_ordinal_lookup() {
        let info = video(vec![page(1, "a"), page(2, "b")]);

        assert_eq!(info.page_at(2).map(|p| p.part.as_str()), Some("b"));
        assert!(info.page_at(0).is_none());
        assert!(info.page_at(3).is_none());
        assert!(info.episode_at(1).is_none());
    }

    #[test]
    fn test_premium_qualities_need_login() {
        let mut info = video(vec![page(1, "P1")]);
        info.qualities = vec![
            quality(120, "4K 超清"),
            quality(112, "1080P 高码率"),
            quality(80, "1080P 高清"),
            quality(32, "480P 清晰"),
        ];

        assert_eq!(info.best_quality(true).map(|q| q.id), Some(120));
        assert_eq!(info.best_quality(false).map(|q| q.id), Some(80));

        let locked: Vec<_> = info.locked_qualities(false).iter().map(|q| q.id).collect();
        assert_eq!(locked, vec![120, 112]);
        assert!(info.locked_qualities(true).is_empty());
    }

    #[test]
    fn test_no_qualities_listed() {
        let info = video(vec![page(1, "P1")]);
        assert!(info.best_quality(true).is_none());
        assert!(info.locked_qualities(false).is_empty());
    }
}
