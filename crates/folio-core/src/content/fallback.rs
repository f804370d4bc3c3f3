//! Hard-coded content shown when a source fails.

use std::collections::BTreeMap;

use super::{
    ContactMessages, DiscordMessages, ExpertiseArea, IconSpec, Messages, PersonalInfo,
    Publication, ResearchArea, SocialConfig, SocialGroups,
};

/// Placeholder image for articles without one.
pub const ARTICLE_PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/400x250/007acc/ffffff?text=Medium+Article";

/// Brief used when an article has no readable text.
pub const ARTICLE_DEFAULT_BRIEF: &str = "Article about AI, technology and professional growth";

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Jairzinho Santos".into(),
        title_primary: "AI Solutions Architect".into(),
        title_secondary: "AI Engineer • Researcher • Speaker".into(),
        title_tertiary: "AI Master's Candidate".into(),
        tagline: "A <strong>human</strong> passionate about technology, business, science, \
                  and the future."
            .into(),
        photo: "assets/branding/profile.png".into(),
        location: "Santo Domingo, Dominican Republic".into(),
        summary: "Loading professional information...".into(),
    }
}

pub fn expertise() -> Vec<ExpertiseArea> {
    vec![ExpertiseArea {
        title: "Artificial Intelligence".into(),
        description: "AI solutions and implementations".into(),
        icon: "fas fa-brain".into(),
    }]
}

pub fn research() -> Vec<ResearchArea> {
    vec![ResearchArea {
        title: "AI Research".into(),
        description: "Research in artificial intelligence".into(),
        icon: "fas fa-search".into(),
    }]
}

pub fn social_config() -> SocialConfig {
    let social_media = [
        ("linkedin", "https://www.linkedin.com/in/jairzinhosantos/"),
        ("github", "https://github.com/jairzinhosantos"),
        ("twitter", "https://x.com/_jairzinho_"),
        ("email", "jairzinho.santos@hotmail.com"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let icon = |icon: &str, title: &str, custom: Option<&str>| IconSpec {
        icon: icon.into(),
        title: title.into(),
        custom_content: custom.map(str::to_string),
    };
    let icon_mapping = BTreeMap::from([
        ("linkedin".to_string(), icon("fab fa-linkedin", "LinkedIn", None)),
        ("github".to_string(), icon("fab fa-github", "GitHub", None)),
        ("twitter".to_string(), icon("x-icon", "X", Some("𝕏"))),
        ("email".to_string(), icon("fas fa-envelope", "Email", None)),
    ]);

    SocialConfig {
        social_media,
        icon_mapping,
        social_groups: SocialGroups {
            primary: ["linkedin", "twitter", "github", "email"]
                .map(str::to_string)
                .to_vec(),
            secondary: Vec::new(),
        },
        messages: Messages {
            contact: ContactMessages {
                email_subject: "Let's Connect - Professional Inquiry".into(),
                email_body: "Hello Jairzinho,\n\nI'm reaching out regarding your expertise in \
                             AI Solutions Architecture.\n\nBest regards"
                    .into(),
                contact_link_text: "you can write me".into(),
            },
            discord: DiscordMessages {
                popup_title: "Discord Server".into(),
                popup_message: "The Discord server will be available soon! We're currently \
                                working on setting up an amazing community space."
                    .into(),
                popup_button_text: "Got it!".into(),
            },
        },
    }
}

pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "DeepSeek: A Game-Changer in AI, but Proceed with Caution".into(),
            description: "As the AI race intensifies globally, DeepSeek emerges as a formidable \
                          contender, challenging the dominance of established players like \
                          OpenAI and Anthropic."
                .into(),
            link: "https://medium.com/@jairzinho.santos".into(),
            image: "https://via.placeholder.com/400x250/007acc/ffffff?text=DeepSeek+AI".into(),
            published_at: String::new(),
        },
        Publication {
            title: "OpenAI o1: The Next Evolution in AI Reasoning".into(),
            description: "OpenAI has unveiled its latest breakthrough: the o1 model series, \
                          designed to excel at complex reasoning tasks."
                .into(),
            link: "https://medium.com/@jairzinho.santos".into(),
            image: "https://via.placeholder.com/400x250/00a8ff/ffffff?text=OpenAI+o1".into(),
            published_at: String::new(),
        },
    ]
}
