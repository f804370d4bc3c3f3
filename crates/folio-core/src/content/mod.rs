//! Portfolio content model and the payloads used when a source is unavailable.

pub mod fallback;
mod model;

pub use model::{
    ContactMessages, DiscordMessages, ExpertiseArea, FocusArea, GithubProject, IconSpec,
    Messages, PersonalInfo, Publication, Recommendation, ResearchArea, SocialConfig,
    SocialGroups, Video,
};
pub(crate) use model::{
    ExpertiseFile, PersonalInfoFile, RecommendationsFile, ResearchFile, StaticVideosFile,
};
