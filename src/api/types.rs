//! API response type definitions.

use serde::Deserialize;

use crate::catalog::{
    AudioInfo, CollectionEpisode, LiveInfo, Quality, Section, SeriesEpisode, SeriesInfo,
    VideoInfo, VideoPage, MAIN_SECTION,
};

/// Generic API response wrapper.
///
/// PGC endpoints put the payload under `result` instead of `data`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,

    #[serde(default)]
    pub message: String,

    #[serde(alias = "result")]
    pub data: Option<T>,
}

/// `/x/web-interface/view` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewData {
    pub bvid: String,
    pub aid: u64,
    /// First page's cid.
    #[serde(default)]
    pub cid: u64,
    pub title: String,
    #[serde(default)]
    pub pages: Vec<ViewPage>,
    pub ugc_season: Option<UgcSeason>,
}

/// One part of a video.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewPage {
    pub cid: u64,
    pub page: u32,
    #[serde(default)]
    pub part: String,
    #[serde(default)]
    pub duration: u64,
}

/// Collection the video belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct UgcSeason {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<UgcSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UgcSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub episodes: Vec<UgcEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UgcEpisode {
    pub aid: u64,
    pub bvid: String,
    pub cid: u64,
    pub title: String,
    pub arc: Option<UgcArc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UgcArc {
    #[serde(default)]
    pub duration: u64,
}

impl ViewData {
    /// Collection videos are titled by their collection and list its first section.
    pub fn into_video_info(self) -> VideoInfo {
        let pages = self
            .pages
            .into_iter()
            .map(|page| VideoPage {
                cid: page.cid,
                page: page.page,
                part: page.part,
                duration: page.duration,
            })
            .collect();

        let (title, episodes, collection) = match self.ugc_season {
            Some(season) => {
                let episodes = season
                    .sections
                    .into_iter()
                    .next()
                    .map(|section| section.episodes)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|episode| CollectionEpisode {
                        aid: episode.aid,
                        bvid: episode.bvid,
                        cid: episode.cid,
                        title: episode.title,
                        duration: episode.arc.map(|arc| arc.duration).unwrap_or(0),
                    })
                    .collect();
                (season.title, episodes, true)
            }
            None => (self.title, Vec::new(), false),
        };

        VideoInfo {
            bvid: self.bvid,
            aid: self.aid,
            title,
            pages,
            episodes,
            collection,
            qualities: Vec::new(),
        }
    }
}

/// `/x/player/playurl` payload; only the offered qualities are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayUrlData {
    #[serde(default)]
    pub accept_quality: Vec<u32>,
    #[serde(default)]
    pub accept_description: Vec<String>,
}

impl PlayUrlData {
    /// Pair ids with names, best first as the API lists them.
    pub fn into_qualities(self) -> Vec<Quality> {
        self.accept_quality
            .into_iter()
            .zip(self.accept_description)
            .map(|(id, description)| Quality { id, description })
            .collect()
    }
}

/// `/pgc/view/web/season` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonResult {
    pub season_id: u64,
    pub title: String,
    #[serde(default)]
    pub episodes: Vec<PgcEpisode>,
    #[serde(default)]
    pub section: Vec<PgcSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PgcEpisode {
    /// Episode id (`ep…`).
    pub id: u64,
    #[serde(default)]
    pub aid: u64,
    #[serde(default)]
    pub bvid: String,
    #[serde(default)]
    pub cid: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub share_copy: String,
    #[serde(default)]
    pub badge: String,
    /// Milliseconds.
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PgcSection {
    pub title: String,
    #[serde(default)]
    pub episodes: Vec<PgcEpisode>,
}

impl PgcEpisode {
    fn into_series_episode(self, fallback_label: usize) -> SeriesEpisode {
        let label = if self.title.is_empty() {
            fallback_label.to_string()
        } else {
            self.title
        };

        SeriesEpisode {
            ep_id: self.id,
            aid: self.aid,
            bvid: self.bvid,
            cid: self.cid,
            label,
            share_copy: self.share_copy,
            badge: self.badge,
            duration: self.duration / 1000,
        }
    }
}

impl SeasonResult {
    /// Main feature first, then the extra sections in API order.
    pub fn into_series_info(self) -> SeriesInfo {
        let mut sections = Vec::with_capacity(self.section.len() + 1);

        sections.push(Section {
            title: MAIN_SECTION.to_string(),
            episodes: convert_episodes(self.episodes),
        });

        for section in self.section {
            if section.title == MAIN_SECTION {
                continue;
            }
            sections.push(Section {
                title: section.title,
                episodes: convert_episodes(section.episodes),
            });
        }

        SeriesInfo {
            season_id: self.season_id,
            title: self.title,
            sections,
        }
    }
}

fn convert_episodes(episodes: Vec<PgcEpisode>) -> Vec<SeriesEpisode> {
    episodes
        .into_iter()
        .enumerate()
        .map(|(index, episode)| episode.into_series_episode(index + 1))
        .collect()
}

/// `/room/v1/Room/get_info` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomData {
    pub room_id: u64,
    pub title: String,
    #[serde(default)]
    pub live_status: u8,
}

impl From<RoomData> for LiveInfo {
    fn from(room: RoomData) -> Self {
        LiveInfo {
            room_id: room.room_id,
            title: room.title,
            live_status: room.live_status,
        }
    }
}

/// `/audio/music-service-c/web/song/info` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SongData {
    pub id: u64,
    pub title: String,
    /// Seconds.
    #[serde(default)]
    pub duration: u64,
}

impl From<SongData> for AudioInfo {
    fn from(song: SongData) -> Self {
        AudioInfo {
            song_id: song.id,
            title: song.title,
            duration: song.duration,
        }
    }
}
