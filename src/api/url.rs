//! Recognising browse targets in user input.

use regex::Regex;

use crate::error::{Error, Result};

/// Reference to a PGC season, by episode or by season id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonRef {
    Episode(u64),
    Season(u64),
}

/// What the user asked to browse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Video { bvid: String },
    Series(SeasonRef),
    Live { room_id: u64 },
    Audio { song_id: u64 },
}

const XOR_CODE: u64 = 23442827791579;
const MAX_AID: u64 = 1 << 51;
const BASE: u64 = 58;
const ALPHABET: &[u8; 58] = b"FcwAPNKTMug3GV5Lj7EJnHpWsx4tb8haYeviqBz6rkCy12mUSDQX9RdoZf";

/// Convert a numeric `av` id to its `BV` form.
pub fn aid_to_bvid(aid: u64) -> String {
    let mut bytes = *b"BV1000000000";
    let mut index = bytes.len() - 1;
    let mut value = (MAX_AID | aid) ^ XOR_CODE;

    while value > 0 && index > 0 {
        bytes[index] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        index -= 1;
    }

    bytes.swap(3, 9);
    bytes.swap(4, 7);

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parse a URL or bare id (`BV…`, `av…`, `ep…`, `ss…`, `au…`, live room URL).
pub fn parse_target(input: &str) -> Result<Target> {
    let input = input.trim();

    let live_pattern = Regex::new(r"live\.bilibili\.com/(?:h5/)?(\d+)").unwrap();
    if let Some(room_id) = capture_number(&live_pattern, input) {
        return Ok(Target::Live { room_id });
    }

    let bvid_pattern = Regex::new(r"BV[0-9A-Za-z]{10}").unwrap();
    if let Some(found) = bvid_pattern.find(input) {
        return Ok(Target::Video {
            bvid: found.as_str().to_string(),
        });
    }

    let aid_pattern = Regex::new(r"(?i)\bav(\d+)").unwrap();
    if let Some(aid) = capture_number(&aid_pattern, input) {
        return Ok(Target::Video {
            bvid: aid_to_bvid(aid),
        });
    }

    let episode_pattern = Regex::new(r"\bep(\d+)").unwrap();
    if let Some(ep_id) = capture_number(&episode_pattern, input) {
        return Ok(Target::Series(SeasonRef::Episode(ep_id)));
    }

    let season_pattern = Regex::new(r"\bss(\d+)").unwrap();
    if let Some(season_id) = capture_number(&season_pattern, input) {
        return Ok(Target::Series(SeasonRef::Season(season_id)));
    }

    let audio_pattern = Regex::new(r"\bau(\d+)").unwrap();
    if let Some(song_id) = capture_number(&audio_pattern, input) {
        return Ok(Target::Audio { song_id });
    }

    Err(Error::InvalidUrl(input.to_string()))
}

fn capture_number(pattern: &Regex, input: &str) -> Option<u64> {
    pattern.captures(input)?.get(1)?.as_str().parse().ok()
}
