//! Static JSON content from the data directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::content::{
    ExpertiseArea, ExpertiseFile, PersonalInfo, PersonalInfoFile, Recommendation,
    RecommendationsFile, ResearchArea, ResearchFile, SocialConfig, StaticVideosFile, Video,
    fallback,
};

pub const PERSONAL_INFO_FILE: &str = "personal-info.json";
pub const SOCIAL_URLS_FILE: &str = "social-urls.json";
pub const EXPERTISE_FILE: &str = "expertise.json";
pub const RESEARCH_FILE: &str = "research-interests.json";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.json";
pub const STATIC_VIDEOS_FILE: &str = "static-videos.json";

/// Reads the portfolio's static JSON files.
///
/// The `try_*` methods surface errors; the plain methods log them and return
/// the fallback payload.
#[derive(Debug, Clone)]
pub struct StaticContent {
    dir: PathBuf,
}

impl StaticContent {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        let contents = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub async fn try_personal_info(&self) -> Result<PersonalInfo> {
        let file: PersonalInfoFile = self.read(PERSONAL_INFO_FILE).await?;
        Ok(file.into_inner())
    }

    pub async fn personal_info(&self) -> PersonalInfo {
        self.try_personal_info().await.unwrap_or_else(|err| {
            tracing::warn!("Error loading personal info: {err:#}");
            fallback::personal_info()
        })
    }

    pub async fn try_social_config(&self) -> Result<SocialConfig> {
        self.read(SOCIAL_URLS_FILE).await
    }

    pub async fn social_config(&self) -> SocialConfig {
        self.try_social_config().await.unwrap_or_else(|err| {
            tracing::warn!("Error loading social URLs config: {err:#}");
            fallback::social_config()
        })
    }

    pub async fn try_expertise(&self) -> Result<Vec<ExpertiseArea>> {
        let file: ExpertiseFile = self.read(EXPERTISE_FILE).await?;
        Ok(file.areas)
    }

    pub async fn expertise(&self) -> Vec<ExpertiseArea> {
        self.try_expertise().await.unwrap_or_else(|err| {
            tracing::warn!("Error loading expertise: {err:#}");
            fallback::expertise()
        })
    }

    pub async fn try_research(&self) -> Result<Vec<ResearchArea>> {
        let file: ResearchFile = self.read(RESEARCH_FILE).await?;
        Ok(file.areas)
    }

    pub async fn research(&self) -> Vec<ResearchArea> {
        self.try_research().await.unwrap_or_else(|err| {
            tracing::warn!("Error loading research interests: {err:#}");
            fallback::research()
        })
    }

    pub async fn try_recommendations(&self) -> Result<Vec<Recommendation>> {
        let file: RecommendationsFile = self.read(RECOMMENDATIONS_FILE).await?;
        Ok(file.recommendations)
    }

    pub async fn recommendations(&self) -> Vec<Recommendation> {
        self.try_recommendations().await.unwrap_or_else(|err| {
            tracing::warn!("Error loading recommendations: {err:#}");
            Vec::new()
        })
    }

    pub async fn try_static_videos(&self) -> Result<Vec<Video>> {
        let file: StaticVideosFile = self.read(STATIC_VIDEOS_FILE).await?;
        Ok(file.videos)
    }

    pub async fn static_videos(&self) -> Vec<Video> {
        self.try_static_videos().await.unwrap_or_else(|err| {
            tracing::warn!("Error loading static videos: {err:#}");
            Vec::new()
        })
    }
}
