//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── tab: Tab                 (active page)
//! │   ├── about: AboutState        (personal info, social links)
//! │   ├── sections: Sections       (one carousel adapter per section)
//! │   ├── task_seq / tasks         (content loader lifecycle)
//! │   └── hits: HitMap             (clickable areas of the last frame)
//! └── overlay: Option<Overlay>     (modals)
//! ```
//!
//! Overlays live beside `TuiState` so overlay handlers can borrow both.

use std::cell::RefCell;
use std::time::Duration;

use folio_core::sections::Section;
use folio_core::theme::{Appearance, ThemeMode};

use crate::common::{TaskSeq, Tasks};
use crate::features::about::AboutState;
use crate::features::sections::Sections;
use crate::hit::{HitMap, HitTarget};
use crate::overlays::Overlay;
use crate::palette::Palette;

/// Header tabs: About, then every carousel section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    About,
    Section(Section),
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::About,
        Tab::Section(Section::ALL[0]),
        Tab::Section(Section::ALL[1]),
        Tab::Section(Section::ALL[2]),
        Tab::Section(Section::ALL[3]),
        Tab::Section(Section::ALL[4]),
        Tab::Section(Section::ALL[5]),
        Tab::Section(Section::ALL[6]),
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Section(section) => section.title(),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn section(self) -> Option<Section> {
        match self {
            Tab::About => None,
            Tab::Section(section) => Some(section),
        }
    }
}

/// Left-button press waiting for its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub target: Option<HitTarget>,
    pub column: u16,
}

// ============================================================================
// AppState
// ============================================================================

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(resize_quiet: Duration, theme: ThemeMode, appearance: Appearance) -> Self {
        Self {
            tui: TuiState::new(resize_quiet, theme, appearance),
            overlay: None,
        }
    }
}

// ============================================================================
// TuiState
// ============================================================================

pub struct TuiState {
    pub should_quit: bool,
    pub tab: Tab,
    pub about: AboutState,
    pub sections: Sections,
    /// Focused card slot on the current page.
    pub focus: Option<usize>,
    pub press: Option<Press>,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub theme: ThemeMode,
    pub appearance: Appearance,
    /// Spinner animation frame counter (for running loaders).
    pub spinner_frame: usize,
    /// One-line feedback shown in the footer.
    pub status: Option<String>,
    /// Clickable areas registered by the last render.
    pub hits: RefCell<HitMap>,
}

impl TuiState {
    pub fn new(resize_quiet: Duration, theme: ThemeMode, appearance: Appearance) -> Self {
        Self {
            should_quit: false,
            tab: Tab::About,
            about: AboutState::default(),
            sections: Sections::new(resize_quiet),
            focus: None,
            press: None,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            theme,
            appearance,
            spinner_frame: 0,
            status: None,
            hits: RefCell::new(HitMap::default()),
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_appearance(self.appearance)
    }

    pub fn active_section(&self) -> Option<Section> {
        self.tab.section()
    }
}
