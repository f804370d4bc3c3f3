//! Card view models: what each item type shows on its card.

use folio_core::content::{FocusArea, GithubProject, Publication, Recommendation, Video};
use folio_core::format::{
    format_duration, format_published_date, format_view_count, initials, strip_tags,
    truncate_text,
};
use folio_core::sections::Linkable;

const PUBLICATION_BRIEF_CHARS: usize = 150;
const VIDEO_BRIEF_CHARS: usize = 120;
const RECOMMENDATION_CHARS: usize = 280;

/// Text content of one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    /// Short badge shown before the title (initials, star count).
    pub badge: Option<String>,
    pub subtitle: Option<String>,
    pub body: String,
    pub meta: Vec<String>,
    /// Label of the link row; `None` when the item has nowhere to go.
    pub link_label: Option<&'static str>,
}

pub trait Card {
    fn card(&self) -> CardView;
}

fn link_label<T: Linkable>(item: &T, label: &'static str) -> Option<&'static str> {
    item.link().map(|_| label)
}

impl Card for FocusArea {
    fn card(&self) -> CardView {
        CardView {
            title: self.title.clone(),
            body: self.description.clone(),
            ..Default::default()
        }
    }
}

impl Card for GithubProject {
    fn card(&self) -> CardView {
        let mut meta = Vec::new();
        if !self.topics.is_empty() {
            meta.push(self.topics.join(" · "));
        }
        if !self.pushed_at.is_empty() {
            meta.push(format!("Updated {}", format_published_date(&self.pushed_at)));
        }
        CardView {
            title: self.name.clone(),
            badge: Some(format!("★ {}", self.stargazers_count)),
            subtitle: self.language.clone().filter(|l| !l.is_empty()),
            body: self
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description".to_string()),
            meta,
            link_label: link_label(self, "Open project"),
        }
    }
}

impl Card for Publication {
    fn card(&self) -> CardView {
        CardView {
            title: self.title.clone(),
            subtitle: (!self.published_at.is_empty())
                .then(|| format_published_date(&self.published_at)),
            body: truncate_text(&self.description, PUBLICATION_BRIEF_CHARS),
            link_label: link_label(self, "Read article"),
            ..Default::default()
        }
    }
}

impl Card for Video {
    fn card(&self) -> CardView {
        let mut meta = Vec::new();
        if !self.published_at.is_empty() {
            meta.push(format_published_date(&self.published_at));
        }
        CardView {
            title: self.title.clone(),
            badge: Some(format!("▶ {}", format_duration(self.duration_secs))),
            subtitle: Some(format!("{} views", format_view_count(&self.view_count))),
            body: truncate_text(&strip_tags(&self.description), VIDEO_BRIEF_CHARS),
            meta,
            link_label: link_label(self, "Watch"),
        }
    }
}

impl Card for Recommendation {
    fn card(&self) -> CardView {
        let badge = if self.initials.trim().is_empty() {
            initials(&self.name)
        } else {
            self.initials.clone()
        };
        let subtitle = match (self.role.is_empty(), self.company.is_empty()) {
            (false, false) => Some(format!("{} · {}", self.role, self.company)),
            (false, true) => Some(self.role.clone()),
            (true, false) => Some(self.company.clone()),
            (true, true) => None,
        };
        CardView {
            title: self.name.clone(),
            badge: (!badge.is_empty()).then_some(badge),
            subtitle,
            body: format!("“{}”", truncate_text(&self.text, RECOMMENDATION_CHARS)),
            meta: (!self.date.is_empty())
                .then(|| self.date.clone())
                .into_iter()
                .collect(),
            link_label: link_label(self, "LinkedIn"),
        }
    }
}
