//! Portfolio content types.
//!
//! Field names are English; the serde names match the keys of the existing
//! JSON data files and third-party payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sections::Linkable;

// ============================================================================
// Static content
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "titulo1")]
    pub title_primary: String,
    #[serde(rename = "titulo2")]
    pub title_secondary: String,
    #[serde(rename = "titulo3")]
    pub title_tertiary: String,
    /// May carry inline HTML (`<strong>`).
    pub tagline: String,
    #[serde(rename = "fotoPerfil")]
    pub photo: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "resumenProfesional")]
    pub summary: String,
}

/// `personal-info.json`: wrapped in `personalInfo` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PersonalInfoFile {
    Wrapped {
        #[serde(rename = "personalInfo")]
        personal_info: PersonalInfo,
    },
    Bare(PersonalInfo),
}

impl PersonalInfoFile {
    pub(crate) fn into_inner(self) -> PersonalInfo {
        match self {
            PersonalInfoFile::Wrapped { personal_info } => personal_info,
            PersonalInfoFile::Bare(info) => info,
        }
    }
}

/// Expertise or research area card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusArea {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Icon class name from the web build; unused by the terminal.
    #[serde(rename = "icono")]
    pub icon: String,
}

pub type ExpertiseArea = FocusArea;
pub type ResearchArea = FocusArea;

impl Linkable for FocusArea {
    fn link(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExpertiseFile {
    #[serde(rename = "areasEspecializacion", default)]
    pub areas: Vec<ExpertiseArea>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResearchFile {
    #[serde(rename = "areasInvestigacion", default)]
    pub areas: Vec<ResearchArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "acronimo")]
    pub initials: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "foto")]
    pub photo: String,
    #[serde(rename = "linkedinUrl")]
    pub linkedin_url: String,
}

impl Linkable for Recommendation {
    fn link(&self) -> Option<&str> {
        non_empty_link(&self.linkedin_url)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationsFile {
    #[serde(rename = "recomendaciones", default)]
    pub recommendations: Vec<Recommendation>,
}

// ============================================================================
// Social links
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialConfig {
    /// Network key -> URL (or address, for `email`).
    pub social_media: BTreeMap<String, String>,
    pub icon_mapping: BTreeMap<String, IconSpec>,
    pub social_groups: SocialGroups,
    pub messages: Messages,
}

impl SocialConfig {
    /// Display label for a network key.
    pub fn title_of<'a>(&'a self, key: &'a str) -> &'a str {
        self.icon_mapping
            .get(key)
            .map_or(key, |spec| spec.title.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconSpec {
    pub icon: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialGroups {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub contact: ContactMessages,
    pub discord: DiscordMessages,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessages {
    pub email_subject: String,
    pub email_body: String,
    pub contact_link_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscordMessages {
    pub popup_title: String,
    pub popup_message: String,
    pub popup_button_text: String,
}

// ============================================================================
// Dynamic content
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    /// Length in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u64,
    /// Raw count as reported by the source (may contain separators).
    pub view_count: String,
    pub published_at: String,
    pub url: String,
}

impl Linkable for Video {
    fn link(&self) -> Option<&str> {
        non_empty_link(&self.url)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StaticVideosFile {
    pub videos: Vec<Video>,
}

/// Medium article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "enlace")]
    pub link: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "fechaPublicacion", skip_serializing_if = "String::is_empty")]
    pub published_at: String,
}

impl Linkable for Publication {
    fn link(&self) -> Option<&str> {
        non_empty_link(&self.link)
    }
}

/// Public GitHub repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubProject {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub updated_at: String,
    pub pushed_at: String,
}

impl Linkable for GithubProject {
    /// Project homepage when set, else the repository page.
    fn link(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .and_then(non_empty_link)
            .or_else(|| non_empty_link(&self.html_url))
    }
}

fn non_empty_link(url: &str) -> Option<&str> {
    let url = url.trim();
    (!url.is_empty() && url != "#").then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_wrapped_or_bare() {
        let wrapped = r#"{"personalInfo": {"nombre": "Ada", "ubicacion": "London"}}"#;
        let info = serde_json::from_str::<PersonalInfoFile>(wrapped)
            .unwrap()
            .into_inner();
        assert_eq!(info.name, "Ada");
        assert_eq!(info.location, "London");

        let bare = r#"{"nombre": "Grace", "titulo1": "Admiral"}"#;
        let info = serde_json::from_str::<PersonalInfoFile>(bare)
            .unwrap()
            .into_inner();
        assert_eq!(info.name, "Grace");
        assert_eq!(info.title_primary, "Admiral");
    }

    #[test]
    fn test_project_link_prefers_homepage() {
        let mut project = GithubProject {
            html_url: "https://github.com/u/repo".into(),
            homepage: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(project.link(), Some("https://github.com/u/repo"));

        project.homepage = Some("https://repo.dev".into());
        assert_eq!(project.link(), Some("https://repo.dev"));
    }

    #[test]
    fn test_placeholder_links_are_not_navigable() {
        let article = Publication {
            link: "#".into(),
            ..Default::default()
        };
        assert_eq!(article.link(), None);
        assert_eq!(FocusArea::default().link(), None);
    }

    #[test]
    fn test_social_config_camel_case_keys() {
        let json = r#"{
            "socialMedia": {"github": "https://github.com/u"},
            "iconMapping": {"github": {"icon": "fab fa-github", "title": "GitHub"}},
            "socialGroups": {"primary": ["github"]},
            "messages": {"discord": {"popupTitle": "Discord"}}
        }"#;
        let config: SocialConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.title_of("github"), "GitHub");
        assert_eq!(config.title_of("mastodon"), "mastodon");
        assert!(config.social_groups.secondary.is_empty());
        assert_eq!(config.messages.discord.popup_title, "Discord");
    }

    #[test]
    fn test_github_payload_with_nulls() {
        let json = r#"{"name": "repo", "description": null, "html_url": "u",
                       "homepage": null, "language": null, "stargazers_count": 4}"#;
        let project: GithubProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.stargazers_count, 4);
        assert!(project.topics.is_empty());
        assert_eq!(project.description, None);
    }
}
