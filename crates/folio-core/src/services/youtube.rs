//! YouTube Data API: channel videos and shorts.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use super::http::{FetchError, FetchErrorKind, get_json};
use crate::config::YoutubeConfig;
use crate::content::Video;

const VIDEOS_TIMEOUT: Duration = Duration::from_secs(8);
const SHORTS_TIMEOUT: Duration = Duration::from_secs(10);
const VIDEOS_MAX_RESULTS: u32 = 20;
const SHORTS_MAX_RESULTS: u32 = 50;
/// Longest clip (seconds) listed under shorts.
pub const SHORTS_MAX_DURATION_SECS: u64 = 600;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"P(?:(\d+)D)?T?(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid regex")
});

/// Watch page of a video.
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

/// Seconds in an ISO-8601 duration such as `P1DT2H3M4S`; zero when unparsable.
///
/// Oversized fields saturate at `u64::MAX`.
pub fn parse_duration(iso: &str) -> u64 {
    let Some(caps) = ISO_DURATION.captures(iso) else {
        return 0;
    };
    let part = |i: usize, unit: u64| {
        caps.get(i).map_or(0, |m| {
            m.as_str()
                .parse::<u64>()
                .unwrap_or(u64::MAX)
                .saturating_mul(unit)
        })
    };
    part(1, 86_400)
        .saturating_add(part(2, 3600))
        .saturating_add(part(3, 60))
        .saturating_add(part(4, 1))
}

// ============================================================================
// API payloads
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    kind: String,
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    items: Vec<DetailsItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailsItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Snippet {
    title: String,
    description: String,
    published_at: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnails {
    #[serde(alias = "maxresdefault")]
    maxres: Option<Thumbnail>,
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    url: String,
}

impl Thumbnails {
    fn best(&self) -> String {
        [&self.maxres, &self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|t| t.url.clone())
            .find(|url| !url.is_empty())
            .unwrap_or_default()
    }

    fn high_or_default(&self) -> String {
        [&self.high, &self.default]
            .into_iter()
            .flatten()
            .map(|t| t.url.clone())
            .find(|url| !url.is_empty())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDetails {
    duration: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Search parameters for one listing.
#[derive(Debug, Clone, Copy)]
struct Listing {
    max_results: u32,
    timeout: Duration,
    /// Restrict the search to `type=video`.
    videos_only: bool,
}

#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    channel_id: String,
}

impl YoutubeClient {
    pub fn new(http: reqwest::Client, config: &YoutubeConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.effective_api_key(),
            channel_id: config.channel_id.trim().to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && !self.channel_id.is_empty()
    }

    async fn search(&self, listing: Listing) -> Result<Vec<String>, FetchError> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let max_results = listing.max_results.to_string();
        let mut query = vec![
            ("key", key),
            ("channelId", self.channel_id.as_str()),
            ("part", "snippet,id"),
            ("order", "date"),
            ("maxResults", max_results.as_str()),
        ];
        if listing.videos_only {
            query.push(("type", "video"));
        }
        let request = self
            .http
            .get(format!("{}/search", self.api_url))
            .query(&query)
            .timeout(listing.timeout);
        let response: SearchResponse = get_json(request).await?;
        let items = response
            .items
            .ok_or_else(|| FetchError::parse("Invalid YouTube API response"))?;
        Ok(items
            .into_iter()
            .filter(|item| item.id.kind == "youtube#video")
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    /// Search, retried once on failure.
    async fn search_with_retry(&self, listing: Listing) -> Result<Vec<String>, FetchError> {
        match self.search(listing).await {
            Ok(ids) => Ok(ids),
            Err(err) => {
                tracing::debug!(kind = %err.kind, "youtube search failed, retrying: {err}");
                self.search(listing).await
            }
        }
    }

    async fn details(
        &self,
        ids: &[String],
        timeout: Duration,
    ) -> Result<Vec<DetailsItem>, FetchError> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let ids = ids.join(",");
        let request = self
            .http
            .get(format!("{}/videos", self.api_url))
            .query(&[
                ("key", key),
                ("id", ids.as_str()),
                ("part", "contentDetails,snippet,statistics"),
            ])
            .timeout(timeout);
        let response: DetailsResponse = get_json(request).await?;
        Ok(response.items)
    }

    /// Latest channel videos, newest first.
    pub async fn try_videos(&self) -> Result<Vec<Video>, FetchError> {
        let listing = Listing {
            max_results: VIDEOS_MAX_RESULTS,
            timeout: VIDEOS_TIMEOUT,
            videos_only: true,
        };
        let ids = self.search_with_retry(listing).await?;
        if ids.is_empty() {
            tracing::info!("no youtube videos found");
            return Ok(Vec::new());
        }
        let items = self.details(&ids, listing.timeout).await?;
        Ok(items
            .into_iter()
            .map(|item| {
                let thumbnail = item.snippet.thumbnails.best();
                video_from_details(item, thumbnail)
            })
            .collect())
    }

    /// Latest videos; failures yield an empty list.
    pub async fn videos(&self) -> Vec<Video> {
        if !self.is_configured() {
            tracing::debug!("youtube api key or channel not configured, skipping videos");
            return Vec::new();
        }
        match self.try_videos().await {
            Ok(videos) => {
                tracing::info!(count = videos.len(), "loaded youtube videos");
                videos
            }
            Err(err) => {
                log_failure("YouTube", &err);
                Vec::new()
            }
        }
    }

    /// Short clips (at most ten minutes) from the channel.
    pub async fn try_shorts(&self) -> Result<Vec<Video>, FetchError> {
        let listing = Listing {
            max_results: SHORTS_MAX_RESULTS,
            timeout: SHORTS_TIMEOUT,
            videos_only: false,
        };
        let ids = self.search_with_retry(listing).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let items = self.details(&ids, listing.timeout).await?;
        Ok(items
            .into_iter()
            .filter(|item| {
                parse_duration(&item.content_details.duration) <= SHORTS_MAX_DURATION_SECS
            })
            .map(|item| {
                let thumbnail = item.snippet.thumbnails.high_or_default();
                video_from_details(item, thumbnail)
            })
            .collect())
    }

    /// Shorts; failures yield an empty list.
    pub async fn shorts(&self) -> Vec<Video> {
        if !self.is_configured() {
            tracing::debug!("youtube api key or channel not configured, skipping shorts");
            return Vec::new();
        }
        self.try_shorts().await.unwrap_or_else(|err| {
            log_failure("YouTube Shorts", &err);
            Vec::new()
        })
    }
}

fn video_from_details(item: DetailsItem, thumbnail: String) -> Video {
    Video {
        url: watch_url(&item.id),
        duration_secs: parse_duration(&item.content_details.duration),
        view_count: item.statistics.view_count.unwrap_or_else(|| "0".to_string()),
        id: item.id,
        title: item.snippet.title,
        thumbnail,
        description: item.snippet.description,
        published_at: item.snippet.published_at,
    }
}

fn log_failure(source: &str, err: &FetchError) {
    match err.kind {
        FetchErrorKind::QuotaExceeded => tracing::warn!("{source} API quota exceeded: {err}"),
        FetchErrorKind::Forbidden => tracing::warn!("{source} API access forbidden: {err}"),
        FetchErrorKind::Timeout => tracing::warn!("{source} API timeout: {err}"),
        _ => tracing::warn!(kind = %err.kind, "{source} API error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("PT1H2M3S"), 3723);
        assert_eq!(parse_duration("PT4M"), 240);
        assert_eq!(parse_duration("PT45S"), 45);
        assert_eq!(parse_duration("P1D"), 86_400);
        assert_eq!(parse_duration("P1DT2H"), 93_600);
        assert_eq!(parse_duration(""), 0);
    }

    #[test]
    fn test_parse_duration_saturates_on_huge_fields() {
        assert_eq!(parse_duration("PT9999999999999999999H"), u64::MAX);
        assert_eq!(parse_duration("PT99999999999999999999999S"), u64::MAX);
        assert_eq!(parse_duration("P213503982334602D"), u64::MAX);
    }

    #[test]
    fn test_thumbnail_preference() {
        let thumbs = Thumbnails {
            maxres: None,
            high: Some(Thumbnail { url: "high.jpg".into() }),
            medium: Some(Thumbnail { url: "medium.jpg".into() }),
            default: Some(Thumbnail { url: "default.jpg".into() }),
        };
        assert_eq!(thumbs.best(), "high.jpg");

        let thumbs: Thumbnails = serde_json::from_str(
            r#"{"maxres": {"url": "max.jpg"}, "default": {"url": "d.jpg"}}"#,
        )
        .unwrap();
        assert_eq!(thumbs.best(), "max.jpg");
        assert_eq!(thumbs.high_or_default(), "d.jpg");
    }

    #[test]
    fn test_unconfigured_client() {
        let client = YoutubeClient::new(reqwest::Client::new(), &YoutubeConfig::default());
        assert!(client.channel_id.is_empty());
        assert!(!client.is_configured());
    }
}
