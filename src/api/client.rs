//! Bilibili web API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Proxy};
use serde::de::DeserializeOwned;

use crate::api::types::*;
use crate::api::url::{SeasonRef, Target};
use crate::catalog::{
    AudioInfo, Catalog, LiveInfo, MetadataSource, Quality, SeriesInfo, VideoInfo,
};
use crate::config::NetworkConfig;
use crate::error::{Error, Result};

/// Main API base URL.
const API_BASE: &str = "https://api.bilibili.com";

/// Live room API base URL.
const LIVE_API_BASE: &str = "https://api.live.bilibili.com";

/// Audio API base URL.
const AUDIO_API_BASE: &str = "https://www.bilibili.com/audio/music-service-c/web";

/// Referer the web API expects.
const REFERER: &str = "https://www.bilibili.com";

/// Metadata client for the public web API.
pub struct BiliApi {
    client: Client,
}

impl BiliApi {
    /// Create a client, sending the `SESSDATA` cookie when one is given.
    pub fn new(network: &NetworkConfig, sessdata: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::REFERER, header::HeaderValue::from_static(REFERER));

        if !sessdata.is_empty() {
            let cookie = header::HeaderValue::from_str(&format!("SESSDATA={}", sessdata))
                .map_err(|e| Error::Config(format!("Invalid SESSDATA cookie: {}", e)))?;
            headers.insert(header::COOKIE, cookie);
        }

        let mut builder = Client::builder()
            .user_agent(&network.user_agent)
            .timeout(Duration::from_secs(network.timeout_seconds))
            .default_headers(headers);

        if let Some(proxy) = &network.proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Make a GET request and unwrap the `{code, message, data}` envelope.
    async fn get<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Api(format!("Failed to get {}: HTTP {}", what, status)));
        }

        let text = response.text().await?;
        tracing::debug!("{} response length: {} bytes", what, text.len());

        parse_response(&text, what)
    }

    /// Get a regular video, multi-part video or collection, with its qualities.
    pub async fn get_video_info(&self, bvid: &str) -> Result<VideoInfo> {
        let url = format!("{}/x/web-interface/view?bvid={}", API_BASE, bvid);
        let view: ViewData = self.get(&url, "video info").await?;
        let cid = view.cid;

        let mut info = view.into_video_info();
        info.qualities = self.get_video_qualities(bvid, cid).await?;
        Ok(info)
    }

    /// Get the qualities a video is offered in, best first.
    pub async fn get_video_qualities(&self, bvid: &str, cid: u64) -> Result<Vec<Quality>> {
        let url = format!(
            "{}/x/player/playurl?bvid={}&cid={}&qn=0&fnver=0&fnval=4048&fourk=1",
            API_BASE, bvid, cid
        );
        let play: PlayUrlData = self.get(&url, "video qualities").await?;
        let qualities = play.into_qualities();
        tracing::debug!("{} offers {} qualities", bvid, qualities.len());
        Ok(qualities)
    }

    /// Get a series season by episode or season id.
    pub async fn get_season_info(&self, season: SeasonRef) -> Result<SeriesInfo> {
        let query = match season {
            SeasonRef::Episode(ep_id) => format!("ep_id={}", ep_id),
            SeasonRef::Season(season_id) => format!("season_id={}", season_id),
        };
        let url = format!("{}/pgc/view/web/season?{}", API_BASE, query);
        let result: SeasonResult = self.get(&url, "season info").await?;
        Ok(result.into_series_info())
    }

    /// Get a live room.
    pub async fn get_live_info(&self, room_id: u64) -> Result<LiveInfo> {
        let url = format!("{}/room/v1/Room/get_info?room_id={}", LIVE_API_BASE, room_id);
        let room: RoomData = self.get(&url, "live room").await?;
        Ok(room.into())
    }

    /// Get an audio track.
    pub async fn get_audio_info(&self, song_id: u64) -> Result<AudioInfo> {
        let url = format!("{}/song/info?sid={}", AUDIO_API_BASE, song_id);
        let song: SongData = self.get(&url, "audio info").await?;
        Ok(song.into())
    }

    /// Fetch whatever the target points at.
    pub async fn fetch(&self, target: &Target) -> Result<Catalog> {
        let catalog = match target {
            Target::Video { bvid } => Catalog::Video(self.get_video_info(bvid).await?),
            Target::Series(season) => Catalog::Series(self.get_season_info(*season).await?),
            Target::Live { room_id } => Catalog::Live(self.get_live_info(*room_id).await?),
            Target::Audio { song_id } => Catalog::Audio(self.get_audio_info(*song_id).await?),
        };

        tracing::info!("Fetched {} '{}'", catalog.domain(), catalog.title());
        Ok(catalog)
    }
}

/// Decode an API envelope, failing on a non-zero code or a missing payload.
pub fn parse_response<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    let api_response: ApiResponse<T> = serde_json::from_str(text).map_err(|e| {
        Error::Api(format!(
            "Failed to parse {}: {} - Response: {}",
            what,
            e,
            preview(text)
        ))
    })?;

    if api_response.code != 0 {
        return Err(Error::Api(format!(
            "Failed to get {}: code {} ({})",
            what, api_response.code, api_response.message
        )));
    }

    api_response
        .data
        .ok_or_else(|| Error::Api(format!("Failed to get {}: empty response", what)))
}

fn preview(text: &str) -> &str {
    let mut end = text.len().min(500);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// A catalog fetched from the API for one target.
pub struct RemoteSource {
    api: BiliApi,
    target: Target,
}

impl RemoteSource {
    pub fn new(api: BiliApi, target: Target) -> Self {
        Self { api, target }
    }
}

#[async_trait]
impl MetadataSource for RemoteSource {
    async fn load(&self) -> Result<Catalog> {
        self.api.fetch(&self.target).await
    }
}
