//! Colors for the light and dark appearances.

use folio_core::theme::Appearance;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub link: Color,
    pub border: Color,
    /// Foreground on an `accent` background.
    pub on_accent: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 249, 250),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(33, 37, 41),
        muted: Color::Rgb(108, 117, 125),
        accent: Color::Rgb(0, 102, 204),
        link: Color::Rgb(0, 86, 179),
        border: Color::Rgb(206, 212, 218),
        on_accent: Color::Rgb(255, 255, 255),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(18, 18, 18),
        surface: Color::Rgb(30, 30, 30),
        text: Color::Rgb(224, 224, 224),
        muted: Color::Rgb(150, 150, 150),
        accent: Color::Rgb(100, 181, 246),
        link: Color::Rgb(129, 199, 255),
        border: Color::Rgb(66, 66, 66),
        on_accent: Color::Rgb(18, 18, 18),
    };

    pub fn for_appearance(appearance: Appearance) -> Self {
        if appearance.is_dark() {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}
