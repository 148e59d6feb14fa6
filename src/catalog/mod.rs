//! Catalog module: domain records for everything that can be picked.
//!
//! This module provides:
//! - Typed metadata for videos, series, live rooms and audio tracks
//! - Conversion of a catalog into the group/leaf records the tree is built from
//! - Resolved download entries
//! - Metadata sources (remote API, saved catalog files)

pub mod file;
pub mod record;
pub mod series;
pub mod single;
pub mod source;
pub mod video;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use file::{load_catalog, save_catalog, FileSource};
pub use record::{GroupRecord, LeafRecord};
pub use series::{Section, SeriesEpisode, SeriesInfo, MAIN_SECTION, PRIVILEGED_BADGES};
pub use single::{AudioInfo, LiveInfo, AUDIO_GROUP, LIVE_GROUP, SINGLE_KEY};
pub use source::MetadataSource;
pub use video::{
    CollectionEpisode, Quality, VideoInfo, VideoPage, PREMIUM_QUALITY_MIN, VIDEO_GROUP,
};

/// Kind of catalog a selection resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Video,
    Series,
    Live,
    Audio,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Video => write!(f, "video"),
            Domain::Series => write!(f, "series"),
            Domain::Live => write!(f, "live"),
            Domain::Audio => write!(f, "audio"),
        }
    }
}

/// Everything known about one browse target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Catalog {
    Video(VideoInfo),
    Series(SeriesInfo),
    Live(LiveInfo),
    Audio(AudioInfo),
}

impl Catalog {
    pub fn domain(&self) -> Domain {
        match self {
            Catalog::Video(_) => Domain::Video,
            Catalog::Series(_) => Domain::Series,
            Catalog::Live(_) => Domain::Live,
            Catalog::Audio(_) => Domain::Audio,
        }
    }

    /// Top-level title, shown on multi-part group rows.
    pub fn title(&self) -> &str {
        match self {
            Catalog::Video(info) => &info.title,
            Catalog::Series(info) => &info.title,
            Catalog::Live(info) => &info.title,
            Catalog::Audio(info) => &info.title,
        }
    }

    /// Group records in presentation order.
    pub fn to_groups(&self, show_sections: bool) -> Vec<GroupRecord> {
        match self {
            Catalog::Video(info) => vec![info.to_group()],
            Catalog::Series(info) => info.to_groups(show_sections),
            Catalog::Live(info) => vec![info.to_group()],
            Catalog::Audio(info) => vec![info.to_group()],
        }
    }
}

/// A concrete item to download, resolved from a checked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DownloadEntry {
    Page {
        bvid: String,
        title: String,
        page: VideoPage,

        /// Qualities the video is offered in, best first.
        #[serde(default)]
        qualities: Vec<Quality>,
    },
    CollectionEpisode(CollectionEpisode),
    Episode(SeriesEpisode),
    Live(LiveInfo),
    Audio(AudioInfo),
}

impl DownloadEntry {
    pub fn title(&self) -> &str {
        match self {
            DownloadEntry::Page { title, page, .. } => {
                if page.part.is_empty() {
                    title
                } else {
                    &page.part
                }
            }
            DownloadEntry::CollectionEpisode(episode) => &episode.title,
            DownloadEntry::Episode(episode) => &episode.share_copy,
            DownloadEntry::Live(live) => &live.title,
            DownloadEntry::Audio(audio) => &audio.title,
        }
    }

    /// Duration in seconds; live rooms have none.
    pub fn duration(&self) -> Option<u64> {
        match self {
            DownloadEntry::Page { page, .. } => Some(page.duration),
            DownloadEntry::CollectionEpisode(episode) => Some(episode.duration),
            DownloadEntry::Episode(episode) => Some(episode.duration),
            DownloadEntry::Live(_) => None,
            DownloadEntry::Audio(audio) => Some(audio.duration),
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, DownloadEntry::Episode(episode) if episode.is_privileged())
    }
}
