//! Portfolio sections and their carousel adapters.
//!
//! ## Module Structure
//!
//! - `responsive.rs`: breakpoint tables mapping viewport width to page layout
//! - `debounce.rs`: quiet-period debouncer for resize bursts
//! - `adapter.rs`: `SectionAdapter<T>` wiring a carousel to a section

mod adapter;
mod debounce;
mod responsive;

use std::fmt;
use std::str::FromStr;

pub use adapter::{Linkable, PagedSection, SectionAdapter};
pub use debounce::Debouncer;
pub use responsive::{Breakpoint, Layout, ResponsivePolicy};

use crate::carousel::CarouselConfig;

/// Carousel-backed portfolio sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    Publications,
    Recommendations,
    Expertise,
    Research,
    Videos,
    TikTok,
}

impl Section {
    /// Sections in display order.
    pub const ALL: [Section; 7] = [
        Section::Expertise,
        Section::Research,
        Section::Projects,
        Section::Publications,
        Section::Videos,
        Section::TikTok,
        Section::Recommendations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Publications => "Publications",
            Section::Recommendations => "Recommendations",
            Section::Expertise => "Expertise",
            Section::Research => "Research",
            Section::Videos => "Videos",
            Section::TikTok => "Shorts",
        }
    }

    /// Identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Publications => "publications",
            Section::Recommendations => "recommendations",
            Section::Expertise => "expertise",
            Section::Research => "research",
            Section::Videos => "videos",
            Section::TikTok => "tiktok",
        }
    }

    /// Configuration before the first viewport measurement.
    pub fn default_config(self) -> CarouselConfig {
        let (items_per_page, gap) = match self {
            Section::Projects => (3, 15),
            Section::Publications | Section::Videos => (2, 20),
            Section::Recommendations => (2, 30),
            Section::Expertise | Section::Research => (4, 15),
            Section::TikTok => (3, 20),
        };
        CarouselConfig::default().with_layout(items_per_page, gap)
    }

    /// Canonical breakpoint table for this section.
    pub fn policy(self) -> ResponsivePolicy {
        ResponsivePolicy::for_section(self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let wanted = if lowered == "shorts" {
            "tiktok"
        } else {
            lowered.as_str()
        };
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Section::ALL.iter().map(|s| s.slug()).collect();
                anyhow::anyhow!("Unknown section '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets() {
        assert_eq!(Section::Projects.default_config().items_per_page, 3);
        assert_eq!(Section::Projects.default_config().gap, 15);
        assert_eq!(Section::Recommendations.default_config().gap, 30);
        assert_eq!(Section::Expertise.default_config().items_per_page, 4);
        assert!(Section::TikTok.default_config().drag_enabled);
    }

    #[test]
    fn test_parse_section() {
        assert_eq!("Projects".parse::<Section>().unwrap(), Section::Projects);
        assert_eq!("shorts".parse::<Section>().unwrap(), Section::TikTok);
        let err = "blog".parse::<Section>().unwrap_err().to_string();
        assert!(err.contains("Unknown section 'blog'"));
        assert!(err.contains("recommendations"));
    }

    #[test]
    fn test_slug_roundtrip() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }
}
