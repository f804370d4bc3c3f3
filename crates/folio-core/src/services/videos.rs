//! Source selection for the Videos section.

use super::static_content::StaticContent;
use super::youtube::{YoutubeClient, watch_url};
use crate::content::Video;

/// YouTube first; the static catalogue when YouTube yields nothing.
pub async fn load_videos(youtube: &YoutubeClient, static_content: &StaticContent) -> Vec<Video> {
    let videos = youtube.videos().await;
    if !videos.is_empty() {
        return normalize_videos(videos);
    }
    tracing::info!("no youtube videos, using static videos");
    normalize_videos(static_content.static_videos().await)
}

/// Fills the fields the cards rely on.
pub fn normalize_videos(videos: Vec<Video>) -> Vec<Video> {
    videos
        .into_iter()
        .enumerate()
        .map(|(index, mut video)| {
            if video.id.trim().is_empty() {
                video.id = format!("video-{index}");
            }
            if video.title.trim().is_empty() {
                video.title = "Untitled".to_string();
            }
            if video.view_count.trim().is_empty() {
                video.view_count = "0".to_string();
            }
            if video.published_at.trim().is_empty() {
                video.published_at = chrono::Utc::now().to_rfc3339();
            }
            if video.url.trim().is_empty() {
                video.url = watch_url(&video.id);
            }
            video
        })
        .collect()
}
