//! Content loaders.
//!
//! Every loader has a fallible `try_*` form and an infallible form that logs
//! the failure and returns the source's fallback (an empty list or built-in
//! content). The UI only ever sees the infallible forms.
//!
//! ## Module Structure
//!
//! - `http.rs`: shared client, error classification, JSON GET helper
//! - `static_content.rs`: JSON files from the data directory
//! - `github.rs`: repositories (Projects)
//! - `medium.rs`: articles through the RSS-to-JSON service (Publications)
//! - `youtube.rs`: videos and shorts
//! - `videos.rs`: YouTube-then-static selection for the Videos section

pub mod github;
pub mod http;
pub mod medium;
pub mod static_content;
pub mod videos;
pub mod youtube;

use std::fmt;

use anyhow::Result;

pub use github::GithubClient;
pub use http::{FetchError, FetchErrorKind, build_client};
pub use medium::MediumClient;
pub use static_content::StaticContent;
pub use youtube::YoutubeClient;

use crate::config::Config;
use crate::content::{
    ExpertiseArea, GithubProject, PersonalInfo, Publication, Recommendation, ResearchArea,
    SocialConfig, Video,
};
use crate::sections::Section;

/// One independently loaded piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSource {
    PersonalInfo,
    Social,
    Expertise,
    Research,
    Recommendations,
    Projects,
    Publications,
    Videos,
    Shorts,
}

impl ContentSource {
    pub const ALL: [ContentSource; 9] = [
        ContentSource::PersonalInfo,
        ContentSource::Social,
        ContentSource::Expertise,
        ContentSource::Research,
        ContentSource::Recommendations,
        ContentSource::Projects,
        ContentSource::Publications,
        ContentSource::Videos,
        ContentSource::Shorts,
    ];

    /// Source feeding a carousel section.
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Projects => ContentSource::Projects,
            Section::Publications => ContentSource::Publications,
            Section::Recommendations => ContentSource::Recommendations,
            Section::Expertise => ContentSource::Expertise,
            Section::Research => ContentSource::Research,
            Section::Videos => ContentSource::Videos,
            Section::TikTok => ContentSource::Shorts,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentSource::PersonalInfo => "personal info",
            ContentSource::Social => "social links",
            ContentSource::Expertise => "expertise",
            ContentSource::Research => "research interests",
            ContentSource::Recommendations => "recommendations",
            ContentSource::Projects => "projects",
            ContentSource::Publications => "publications",
            ContentSource::Videos => "videos",
            ContentSource::Shorts => "shorts",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of loading one [`ContentSource`].
#[derive(Debug, Clone)]
pub enum LoadedContent {
    PersonalInfo(PersonalInfo),
    Social(SocialConfig),
    Expertise(Vec<ExpertiseArea>),
    Research(Vec<ResearchArea>),
    Recommendations(Vec<Recommendation>),
    Projects(Vec<GithubProject>),
    Publications(Vec<Publication>),
    Videos(Vec<Video>),
    Shorts(Vec<Video>),
}

impl LoadedContent {
    pub fn source(&self) -> ContentSource {
        match self {
            LoadedContent::PersonalInfo(_) => ContentSource::PersonalInfo,
            LoadedContent::Social(_) => ContentSource::Social,
            LoadedContent::Expertise(_) => ContentSource::Expertise,
            LoadedContent::Research(_) => ContentSource::Research,
            LoadedContent::Recommendations(_) => ContentSource::Recommendations,
            LoadedContent::Projects(_) => ContentSource::Projects,
            LoadedContent::Publications(_) => ContentSource::Publications,
            LoadedContent::Videos(_) => ContentSource::Videos,
            LoadedContent::Shorts(_) => ContentSource::Shorts,
        }
    }
}

/// All loaders, sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct ContentServices {
    pub static_content: StaticContent,
    pub github: GithubClient,
    pub medium: MediumClient,
    pub youtube: YoutubeClient,
}

impl ContentServices {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_client(config.http_timeout())?;
        Ok(Self {
            static_content: StaticContent::new(config.data_dir()),
            github: GithubClient::new(http.clone(), &config.github),
            medium: MediumClient::new(http.clone(), &config.medium),
            youtube: YoutubeClient::new(http, &config.youtube),
        })
    }

    /// Loads one source. Never fails; see the module docs.
    pub async fn load(&self, source: ContentSource) -> LoadedContent {
        tracing::debug!(%source, "loading content");
        match source {
            ContentSource::PersonalInfo => {
                LoadedContent::PersonalInfo(self.static_content.personal_info().await)
            }
            ContentSource::Social => {
                LoadedContent::Social(self.static_content.social_config().await)
            }
            ContentSource::Expertise => {
                LoadedContent::Expertise(self.static_content.expertise().await)
            }
            ContentSource::Research => {
                LoadedContent::Research(self.static_content.research().await)
            }
            ContentSource::Recommendations => {
                LoadedContent::Recommendations(self.static_content.recommendations().await)
            }
            ContentSource::Projects => LoadedContent::Projects(self.github.repositories().await),
            ContentSource::Publications => {
                LoadedContent::Publications(self.medium.latest_articles().await)
            }
            ContentSource::Videos => {
                let videos = videos::load_videos(&self.youtube, &self.static_content).await;
                LoadedContent::Videos(videos)
            }
            ContentSource::Shorts => LoadedContent::Shorts(self.youtube.shorts().await),
        }
    }
}
