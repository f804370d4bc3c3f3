//! Carousel sections.
//!
//! One strongly typed [`SectionAdapter`] per section; the rest of the UI
//! drives them through the item-agnostic [`PagedSection`] view.
//!
//! - `cards.rs`: card view models per item type
//! - `update.rs`: key and pointer handling
//! - `render.rs`: track, cards, arrows and page marks

pub mod cards;
mod render;
mod update;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub use cards::{Card, CardView};
use folio_core::carousel::PointerTarget;
use folio_core::content::{
    ExpertiseArea, GithubProject, Publication, Recommendation, ResearchArea, Video,
};
use folio_core::sections::{Linkable, PagedSection, Section, SectionAdapter};
use folio_core::services::LoadedContent;
pub use render::{CELL_WIDTH_UNITS, render_section, section_viewport};
pub use update::{handle_key, handle_scroll, units};
pub(crate) use update::{clamp_focus, click_card, open_card_link};

/// What a click on a card resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Open(String),
    ShowVideo(Video),
}

#[derive(Debug)]
pub struct Sections {
    pub expertise: SectionAdapter<ExpertiseArea>,
    pub research: SectionAdapter<ResearchArea>,
    pub projects: SectionAdapter<GithubProject>,
    pub publications: SectionAdapter<Publication>,
    pub videos: SectionAdapter<Video>,
    pub shorts: SectionAdapter<Video>,
    pub recommendations: SectionAdapter<Recommendation>,
    loaded: HashSet<Section>,
}

impl Sections {
    pub fn new(resize_quiet: Duration) -> Self {
        Self {
            expertise: SectionAdapter::with_debounce(Section::Expertise, resize_quiet),
            research: SectionAdapter::with_debounce(Section::Research, resize_quiet),
            projects: SectionAdapter::with_debounce(Section::Projects, resize_quiet),
            publications: SectionAdapter::with_debounce(Section::Publications, resize_quiet),
            videos: SectionAdapter::with_debounce(Section::Videos, resize_quiet),
            shorts: SectionAdapter::with_debounce(Section::TikTok, resize_quiet),
            recommendations: SectionAdapter::with_debounce(Section::Recommendations, resize_quiet),
            loaded: HashSet::new(),
        }
    }

    pub fn get(&self, section: Section) -> &dyn PagedSection {
        match section {
            Section::Expertise => &self.expertise,
            Section::Research => &self.research,
            Section::Projects => &self.projects,
            Section::Publications => &self.publications,
            Section::Videos => &self.videos,
            Section::TikTok => &self.shorts,
            Section::Recommendations => &self.recommendations,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut dyn PagedSection {
        match section {
            Section::Expertise => &mut self.expertise,
            Section::Research => &mut self.research,
            Section::Projects => &mut self.projects,
            Section::Publications => &mut self.publications,
            Section::Videos => &mut self.videos,
            Section::TikTok => &mut self.shorts,
            Section::Recommendations => &mut self.recommendations,
        }
    }

    fn all_mut(&mut self) -> [&mut dyn PagedSection; 7] {
        [
            &mut self.expertise,
            &mut self.research,
            &mut self.projects,
            &mut self.publications,
            &mut self.videos,
            &mut self.shorts,
            &mut self.recommendations,
        ]
    }

    /// Hands loaded items to their section. Returns `false` for non-section content.
    pub fn apply(&mut self, content: LoadedContent) -> bool {
        let section = match content {
            LoadedContent::Expertise(items) => {
                self.expertise.set_items(Arc::from(items));
                Section::Expertise
            }
            LoadedContent::Research(items) => {
                self.research.set_items(Arc::from(items));
                Section::Research
            }
            LoadedContent::Projects(items) => {
                self.projects.set_items(Arc::from(items));
                Section::Projects
            }
            LoadedContent::Publications(items) => {
                self.publications.set_items(Arc::from(items));
                Section::Publications
            }
            LoadedContent::Videos(items) => {
                self.videos.set_items(Arc::from(items));
                Section::Videos
            }
            LoadedContent::Shorts(items) => {
                self.shorts.set_items(Arc::from(items));
                Section::TikTok
            }
            LoadedContent::Recommendations(items) => {
                self.recommendations.set_items(Arc::from(items));
                Section::Recommendations
            }
            LoadedContent::PersonalInfo(_) | LoadedContent::Social(_) => return false,
        };
        tracing::debug!(%section, count = self.get(section).item_count(), "section loaded");
        self.loaded.insert(section);
        true
    }

    /// Whether the section has received content at least once.
    pub fn is_loaded(&self, section: Section) -> bool {
        self.loaded.contains(&section)
    }

    /// Cards of the current page.
    pub fn cards(&self, section: Section) -> Vec<CardView> {
        fn page<T: Card>(adapter: &SectionAdapter<T>) -> Vec<CardView> {
            adapter
                .carousel()
                .current_items()
                .iter()
                .map(Card::card)
                .collect()
        }
        match section {
            Section::Expertise => page(&self.expertise),
            Section::Research => page(&self.research),
            Section::Projects => page(&self.projects),
            Section::Publications => page(&self.publications),
            Section::Videos => page(&self.videos),
            Section::TikTok => page(&self.shorts),
            Section::Recommendations => page(&self.recommendations),
        }
    }

    /// Resolves a click on the `slot`-th card of the current page.
    ///
    /// Videos open the detail modal; every other section navigates to the
    /// item's link, if it has one. Interactive targets resolve to nothing.
    pub fn activate(
        &self,
        section: Section,
        target: &PointerTarget,
        slot: usize,
    ) -> Option<Activation> {
        match section {
            Section::Videos => self.videos.click(target, slot).map(Activation::ShowVideo),
            Section::TikTok => self.shorts.click(target, slot).map(Activation::ShowVideo),
            Section::Expertise => self.expertise.link_for(target, slot).map(Activation::Open),
            Section::Research => self.research.link_for(target, slot).map(Activation::Open),
            Section::Projects => self.projects.link_for(target, slot).map(Activation::Open),
            Section::Publications => {
                self.publications.link_for(target, slot).map(Activation::Open)
            }
            Section::Recommendations => {
                self.recommendations.link_for(target, slot).map(Activation::Open)
            }
        }
    }

    /// URL behind the link row of the `slot`-th card.
    pub fn link(&self, section: Section, slot: usize) -> Option<String> {
        fn link_at<T: Linkable>(adapter: &SectionAdapter<T>, slot: usize) -> Option<String> {
            adapter
                .carousel()
                .current_items()
                .get(slot)
                .and_then(Linkable::link)
                .map(str::to_string)
        }
        match section {
            Section::Expertise => link_at(&self.expertise, slot),
            Section::Research => link_at(&self.research, slot),
            Section::Projects => link_at(&self.projects, slot),
            Section::Publications => link_at(&self.publications, slot),
            Section::Videos => link_at(&self.videos, slot),
            Section::TikTok => link_at(&self.shorts, slot),
            Section::Recommendations => link_at(&self.recommendations, slot),
        }
    }

    /// Viewport width (display units) reached every section.
    pub fn on_resize(&mut self, width: u32, now: Instant) {
        for section in self.all_mut() {
            section.on_resize(width, now);
        }
    }

    /// Applies due resizes. Returns `true` when any section re-chunked.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for section in self.all_mut() {
            changed |= section.tick(now);
        }
        changed
    }

    /// Advances per-frame drag redraws.
    pub fn on_frame(&mut self) {
        for section in self.all_mut() {
            section.on_frame();
        }
    }

    /// Whether any section waits on a timer or a live drag.
    pub fn needs_frames(&self) -> bool {
        Section::ALL.iter().any(|&section| {
            let paged = self.get(section);
            paged.frame_request().is_some() || paged.resize_pending()
        })
    }

    pub fn teardown(&mut self) {
        for section in self.all_mut() {
            section.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::carousel::TargetKind;

    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.into(),
            url: format!("https://www.youtube.com/watch?v={id}"),
            ..Default::default()
        }
    }

    fn body() -> PointerTarget {
        PointerTarget::new(TargetKind::Card).nested(TargetKind::Text)
    }

    #[test]
    fn test_apply_routes_content_to_sections() {
        let mut sections = Sections::new(Duration::from_millis(250));
        assert!(!sections.is_loaded(Section::TikTok));

        assert!(sections.apply(LoadedContent::Shorts(vec![video("a"), video("b")])));
        assert!(!sections.apply(LoadedContent::Social(Default::default())));

        assert!(sections.is_loaded(Section::TikTok));
        assert_eq!(sections.get(Section::TikTok).item_count(), 2);
        assert_eq!(sections.get(Section::Videos).item_count(), 0);
    }

    #[test]
    fn test_video_click_opens_modal_and_project_click_navigates() {
        let mut sections = Sections::new(Duration::from_millis(250));
        sections.apply(LoadedContent::Videos(vec![video("a")]));
        sections.apply(LoadedContent::Projects(vec![GithubProject {
            name: "demo".into(),
            html_url: "https://github.com/me/demo".into(),
            homepage: Some("https://demo.dev".into()),
            ..Default::default()
        }]));

        assert_eq!(
            sections.activate(Section::Videos, &body(), 0),
            Some(Activation::ShowVideo(video("a")))
        );
        assert_eq!(
            sections.activate(Section::Projects, &body(), 0),
            Some(Activation::Open("https://demo.dev".into()))
        );
        assert_eq!(sections.link(Section::Projects, 0).as_deref(), Some("https://demo.dev"));
    }

    #[test]
    fn test_focus_areas_have_no_destination() {
        let mut sections = Sections::new(Duration::from_millis(250));
        sections.apply(LoadedContent::Expertise(vec![ExpertiseArea {
            title: "AI".into(),
            ..Default::default()
        }]));
        assert_eq!(sections.activate(Section::Expertise, &body(), 0), None);
        assert_eq!(sections.link(Section::Expertise, 0), None);
    }

    #[test]
    fn test_interactive_targets_do_not_activate() {
        let mut sections = Sections::new(Duration::from_millis(250));
        sections.apply(LoadedContent::Videos(vec![video("a")]));
        let link = PointerTarget::new(TargetKind::Card).nested(TargetKind::Link);
        assert_eq!(sections.activate(Section::Videos, &link, 0), None);
    }

    #[test]
    fn test_resize_reaches_every_section() {
        let mut sections = Sections::new(Duration::from_millis(250));
        let now = Instant::now();
        sections.on_resize(1400, now);

        assert_eq!(sections.get(Section::Expertise).items_per_page(), 4);
        assert_eq!(sections.get(Section::Publications).items_per_page(), 2);
        assert_eq!(sections.get(Section::Videos).items_per_page(), 2);

        sections.on_resize(500, now);
        assert!(sections.needs_frames());
        assert!(!sections.tick(now + Duration::from_millis(100)));
        assert!(sections.tick(now + Duration::from_millis(300)));
        assert_eq!(sections.get(Section::Expertise).items_per_page(), 1);
        assert!(!sections.needs_frames());
    }
}
