//! Medium articles for the Publications section, via an RSS-to-JSON service.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::http::{FetchError, get_json};
use crate::config::MediumConfig;
use crate::content::{Publication, fallback};
use crate::format::strip_tags;

/// Articles shown in the section.
pub const ARTICLE_LIMIT: usize = 3;
const BRIEF_MAX_CHARS: usize = 150;

static IMG_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).expect("valid regex"));
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p>(.*?)</p>").expect("valid regex"));

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    items: Vec<FeedItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FeedItem {
    title: Option<String>,
    link: Option<String>,
    content: Option<String>,
    description: Option<String>,
    pub_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MediumClient {
    http: reqwest::Client,
    rss_api_url: String,
    username: String,
}

impl MediumClient {
    pub fn new(http: reqwest::Client, config: &MediumConfig) -> Self {
        Self {
            http,
            rss_api_url: config.rss_api_url.trim().to_string(),
            username: config.username.trim().trim_start_matches('@').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.username.is_empty()
    }

    fn feed_url(&self) -> String {
        format!("https://medium.com/feed/@{}", self.username)
    }

    /// Latest articles of the configured account.
    pub async fn try_latest_articles(&self) -> Result<Vec<Publication>, FetchError> {
        let feed_url = self.feed_url();
        let request = self
            .http
            .get(&self.rss_api_url)
            .query(&[("rss_url", feed_url.as_str())])
            .header(ACCEPT, "application/json");
        let response: FeedResponse = get_json(request).await?;
        Ok(response
            .items
            .into_iter()
            .take(ARTICLE_LIMIT)
            .map(article_from_item)
            .collect())
    }

    /// Latest articles; failures yield the built-in articles.
    pub async fn latest_articles(&self) -> Vec<Publication> {
        if !self.is_configured() {
            tracing::debug!("medium username not configured, using built-in articles");
            return fallback::publications();
        }
        match self.try_latest_articles().await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(kind = %err.kind, "Error fetching Medium articles: {err}");
                fallback::publications()
            }
        }
    }
}

fn article_from_item(item: FeedItem) -> Publication {
    let content = item
        .content
        .filter(|c| !c.is_empty())
        .or(item.description)
        .unwrap_or_default();
    Publication {
        title: item
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled".to_string()),
        description: extract_brief(&content),
        link: item
            .link
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "#".to_string()),
        image: extract_thumbnail(&content),
        published_at: item.pub_date.unwrap_or_default(),
    }
}

/// First `<img src>` in the article body, else the placeholder image.
pub fn extract_thumbnail(content: &str) -> String {
    IMG_SRC
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || fallback::ARTICLE_PLACEHOLDER_IMAGE.to_string(),
            |m| m.as_str().to_string(),
        )
}

/// Short plain-text summary of the article body.
///
/// Uses the first paragraph that isn't an image, else the whole text.
pub fn extract_brief(content: &str) -> String {
    let paragraph = PARAGRAPH
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|inner| !inner.is_empty() && !inner.to_ascii_lowercase().starts_with("<img"));

    if let Some(inner) = paragraph {
        return clip(&strip_tags(inner));
    }

    let plain = strip_tags(content);
    if plain.is_empty() {
        fallback::ARTICLE_DEFAULT_BRIEF.to_string()
    } else {
        clip(&plain)
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() > BRIEF_MAX_CHARS {
        let head: String = text.chars().take(BRIEF_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
