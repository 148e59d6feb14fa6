//! Single-item catalogs: live rooms and audio tracks.

use serde::{Deserialize, Serialize};

use crate::catalog::record::{GroupRecord, LeafRecord};

/// Group key used for a live room.
pub const LIVE_GROUP: &str = "直播";

/// Group key used for an audio track.
pub const AUDIO_GROUP: &str = "音乐";

/// Ordinal of the only row in a single-item group.
pub const SINGLE_KEY: &str = "1";

/// A live room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveInfo {
    pub room_id: u64,
    pub title: String,

    /// 0 offline, 1 live, 2 rotating replays.
    #[serde(default)]
    pub live_status: u8,
}

impl LiveInfo {
    pub fn is_live(&self) -> bool {
        self.live_status == 1
    }

    pub fn to_group(&self) -> GroupRecord {
        GroupRecord::new(LIVE_GROUP, vec![LeafRecord::new(SINGLE_KEY, self.title.clone())])
    }
}

/// An audio track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioInfo {
    pub song_id: u64,
    pub title: String,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: u64,
}

impl AudioInfo {
    pub fn to_group(&self) -> GroupRecord {
        GroupRecord::new(
            AUDIO_GROUP,
            vec![LeafRecord::new(SINGLE_KEY, self.title.clone()).with_duration(self.duration)],
        )
    }
}
